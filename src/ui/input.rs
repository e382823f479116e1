//! Key handling for the terminal front-end
//!
//! Keys map onto model mutators; rejected mutations are reported through
//! the status log and leave the selection as it was.

use crate::core::error::Result;
use crate::model::SkillComparisonModel;
use crate::ui::state::{Focus, StatusKind, UiState, GRID_COLUMNS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

pub fn handle_key(model: &mut SkillComparisonModel, ui: &mut UiState, key: KeyEvent) -> InputOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputOutcome::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputOutcome::Quit,
        KeyCode::Tab => ui.focus = ui.focus.next(),
        KeyCode::BackTab => ui.focus = ui.focus.prev(),
        KeyCode::Char('a') => {
            model.select_all();
            ui.push_status("Selected all skills".into(), StatusKind::Info);
        }
        KeyCode::Char('c') => {
            model.clear_all();
            ui.push_status("Cleared skill selection".into(), StatusKind::Info);
        }
        KeyCode::Left => step(model, ui, -1),
        KeyCode::Right => step(model, ui, 1),
        KeyCode::Up if ui.focus == Focus::Skills => {
            ui.move_cursor(-1, 0, model.skill_universe().len())
        }
        KeyCode::Down if ui.focus == Focus::Skills => {
            ui.move_cursor(1, 0, model.skill_universe().len())
        }
        KeyCode::Char(' ') | KeyCode::Enter if ui.focus == Focus::Skills => toggle_at_cursor(model, ui),
        _ => {}
    }

    InputOutcome::Continue
}

/// Left/Right: cycle the focused picker, or move along a grid row
fn step(model: &mut SkillComparisonModel, ui: &mut UiState, delta: isize) {
    let result = match ui.focus {
        Focus::RoleA => {
            let roles = owned(model.role_names());
            let next = cycle(&roles, Some(&model.selection().role_a), delta);
            model.set_role_a(&next)
        }
        Focus::LevelA => {
            let levels = model.level_names().to_vec();
            let next = cycle(&levels, Some(&model.selection().level_a), delta);
            model.set_level_a(&next)
        }
        Focus::RoleB => {
            // slot 0 is "None"
            let mut options: Vec<Option<String>> = vec![None];
            options.extend(model.role_names().into_iter().map(|r| Some(r.to_string())));
            let current = options
                .iter()
                .position(|o| *o == model.selection().role_b)
                .unwrap_or(0);
            let next = wrap(current, options.len(), delta);
            model.set_role_b(options[next].as_deref())
        }
        Focus::LevelB => {
            let levels = model.level_names().to_vec();
            let next = cycle(&levels, Some(&model.selection().level_b), delta);
            model.set_level_b(&next)
        }
        Focus::Skills => {
            ui.move_cursor(0, delta, model.skill_universe().len());
            Ok(())
        }
    };
    report(ui, result);
    ui.clamp_cursor(model.skill_universe().len());
}

fn toggle_at_cursor(model: &mut SkillComparisonModel, ui: &mut UiState) {
    let skills = model.skill_universe();
    if let Some(skill) = skills.get(ui.skill_cursor) {
        let selected = model.toggle_skill(skill);
        let verb = if selected { "Selected" } else { "Deselected" };
        ui.push_status(format!("{} {}", verb, skill), StatusKind::Info);
    }
}

fn report(ui: &mut UiState, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!("Selection rejected: {}", e);
        ui.push_status(e.to_string(), StatusKind::Error);
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Neighbour of `current` in `options`, wrapping at both ends
fn cycle(options: &[String], current: Option<&String>, delta: isize) -> String {
    let idx = current
        .and_then(|c| options.iter().position(|o| o == c))
        .unwrap_or(0);
    options
        .get(wrap(idx, options.len(), delta))
        .cloned()
        .unwrap_or_default()
}

fn wrap(idx: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (idx as isize + delta).rem_euclid(len as isize) as usize
}

/// Row and column of a skill index in the checkbox grid
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SimilarityScore;
    use crate::table::{RatingTable, EMBEDDED_TABLE};

    fn model() -> SkillComparisonModel {
        SkillComparisonModel::new(RatingTable::from_json_str(EMBEDDED_TABLE, None, true).unwrap())
    }

    fn press(model: &mut SkillComparisonModel, ui: &mut UiState, code: KeyCode) -> InputOutcome {
        handle_key(model, ui, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let mut m = model();
        let mut ui = UiState::new();
        assert_eq!(press(&mut m, &mut ui, KeyCode::Char('q')), InputOutcome::Quit);
        assert_eq!(press(&mut m, &mut ui, KeyCode::Esc), InputOutcome::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut m, &mut ui, ctrl_c), InputOutcome::Quit);
    }

    #[test]
    fn test_role_a_cycles() {
        let mut m = model();
        let mut ui = UiState::new();
        let roles = owned(m.role_names());

        press(&mut m, &mut ui, KeyCode::Right);
        assert_eq!(m.selection().role_a, roles[1]);
        press(&mut m, &mut ui, KeyCode::Left);
        press(&mut m, &mut ui, KeyCode::Left);
        assert_eq!(&m.selection().role_a, roles.last().unwrap());
    }

    #[test]
    fn test_role_b_includes_none() {
        let mut m = model();
        let mut ui = UiState::new();
        ui.focus = Focus::RoleB;

        press(&mut m, &mut ui, KeyCode::Right);
        assert_eq!(m.selection().role_b.as_deref(), Some(m.role_names()[0]));
        assert!(matches!(m.compute_similarity().unwrap(), SimilarityScore::Score(_)));

        press(&mut m, &mut ui, KeyCode::Left);
        assert_eq!(m.selection().role_b, None);
        assert_eq!(m.compute_similarity().unwrap(), SimilarityScore::NotApplicable);
    }

    #[test]
    fn test_levels_cycle() {
        let mut m = model();
        let mut ui = UiState::new();
        ui.focus = Focus::LevelA;
        press(&mut m, &mut ui, KeyCode::Left);
        assert_eq!(m.selection().level_a, "level_4");

        ui.focus = Focus::LevelB;
        press(&mut m, &mut ui, KeyCode::Right);
        assert_eq!(m.selection().level_b, "level_2");
    }

    #[test]
    fn test_toggle_and_bulk_keys() {
        let mut m = model();
        let mut ui = UiState::new();
        ui.focus = Focus::Skills;
        let first = m.skill_universe()[0].clone();

        press(&mut m, &mut ui, KeyCode::Char(' '));
        assert!(!m.is_selected(&first));
        press(&mut m, &mut ui, KeyCode::Enter);
        assert!(m.is_selected(&first));

        press(&mut m, &mut ui, KeyCode::Char('c'));
        assert!(m.selection().selected_skills.is_empty());
        press(&mut m, &mut ui, KeyCode::Char('a'));
        assert_eq!(m.selection().selected_skills.len(), m.skill_universe().len());
    }

    #[test]
    fn test_grid_navigation() {
        let mut m = model();
        let mut ui = UiState::new();
        ui.focus = Focus::Skills;
        press(&mut m, &mut ui, KeyCode::Right);
        press(&mut m, &mut ui, KeyCode::Down);
        assert_eq!(ui.skill_cursor, GRID_COLUMNS + 1);
        assert_eq!(grid_position(ui.skill_cursor), (1, 1));

        // toggle targets the skill under the cursor
        let target = m.skill_universe()[GRID_COLUMNS + 1].clone();
        press(&mut m, &mut ui, KeyCode::Char(' '));
        assert!(!m.is_selected(&target));
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut m = model();
        let mut ui = UiState::new();
        press(&mut m, &mut ui, KeyCode::Tab);
        assert_eq!(ui.focus, Focus::LevelA);
        press(&mut m, &mut ui, KeyCode::BackTab);
        assert_eq!(ui.focus, Focus::RoleA);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 4, -1), 3);
        assert_eq!(wrap(3, 4, 1), 0);
        assert_eq!(wrap(0, 0, 1), 0);
    }
}
