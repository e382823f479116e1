//! Frame drawing for the terminal front-end

use crate::display::RatingBands;
use crate::model::{DerivedView, SimilarityScore, SkillComparisonModel};
use crate::ui::input::grid_position;
use crate::ui::state::{Focus, StatusKind, UiState, GRID_COLUMNS};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph,
};
use ratatui::Frame;

const ROLE_A_COLOR: Color = Color::Green;
const ROLE_B_RADAR_COLOR: Color = Color::Cyan;
const ROLE_B_TREND_COLOR: Color = Color::Red;
const FOCUS_COLOR: Color = Color::Yellow;

pub fn draw(f: &mut Frame<'_>, model: &SkillComparisonModel, ui: &UiState, bands: &RatingBands) {
    let skill_rows = model.skill_universe().len().div_ceil(GRID_COLUMNS).max(1) as u16;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(skill_rows + 2),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.size());

    render_header(f, layout[0]);
    render_pickers(f, model, ui, layout[1]);
    render_skill_grid(f, model, ui, layout[2]);

    match model.derived_view() {
        Ok(view) => {
            let charts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(layout[3]);
            render_skill_chart(f, &view, bands, charts[0]);
            render_trend_chart(f, model, &view, charts[1]);
            render_similarity(f, view.similarity, layout[4]);
        }
        Err(e) => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            )))
            .block(Block::default().title("Error").borders(Borders::ALL));
            f.render_widget(paragraph, layout[3]);
        }
    }

    render_footer(f, ui, layout[5]);
}

fn render_header(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "The Guild Build",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn picker<'a>(label: &'a str, value: String, focused: bool, enabled: bool) -> Vec<Span<'a>> {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    vec![
        Span::raw(label),
        Span::styled(format!("< {} >", value), style),
        Span::raw("   "),
    ]
}

fn render_pickers(f: &mut Frame<'_>, model: &SkillComparisonModel, ui: &UiState, area: Rect) {
    let s = model.selection();
    let role_b = s.role_b.clone().unwrap_or_else(|| "-- None --".to_string());

    let mut spans = Vec::new();
    spans.extend(picker("Role 1: ", s.role_a.clone(), ui.focus == Focus::RoleA, true));
    spans.extend(picker("Level: ", s.level_a.clone(), ui.focus == Focus::LevelA, true));
    spans.extend(picker("Role 2: ", role_b, ui.focus == Focus::RoleB, true));
    // level B does nothing without role B
    spans.extend(picker(
        "Level: ",
        s.level_b.clone(),
        ui.focus == Focus::LevelB,
        s.is_comparing(),
    ));

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_skill_grid(f: &mut Frame<'_>, model: &SkillComparisonModel, ui: &UiState, area: Rect) {
    let skills = model.skill_universe();
    let cell_width = (area.width.saturating_sub(2) as usize / GRID_COLUMNS).max(8);

    let mut lines: Vec<Line> = Vec::new();
    for (i, skill) in skills.iter().enumerate() {
        let (row, _) = grid_position(i);
        if row == lines.len() {
            lines.push(Line::default());
        }
        let mark = if model.is_selected(skill) { "[x]" } else { "[ ]" };
        let text = format!("{} {:<width$}", mark, skill, width = cell_width.saturating_sub(4));
        let style = if ui.focus == Focus::Skills && ui.skill_cursor == i {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines[row].spans.push(Span::styled(text, style));
    }

    let block = Block::default()
        .title("Skills  [a] select all  [c] clear all")
        .borders(Borders::ALL)
        .border_style(if ui.focus == Focus::Skills {
            Style::default().fg(FOCUS_COLOR)
        } else {
            Style::default()
        });
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_skill_chart(f: &mut Frame<'_>, view: &DerivedView, bands: &RatingBands, area: Rect) {
    let title = view
        .radar
        .iter()
        .map(|s| s.label.as_str())
        .collect::<Vec<_>>()
        .join(" vs ");

    let mut chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(100);

    let skill_count = view.radar.first().map_or(0, |s| s.points.len());
    for i in 0..skill_count {
        let skill = view.radar[0].points[i].skill.clone();
        let bars: Vec<Bar> = view
            .radar
            .iter()
            .enumerate()
            .filter_map(|(series_idx, series)| series.points.get(i).map(|p| (series_idx, p)))
            .map(|(series_idx, point)| {
                let color = if series_idx == 0 {
                    ROLE_A_COLOR
                } else {
                    ROLE_B_RADAR_COLOR
                };
                Bar::default()
                    .value(point.rating.max(0.0).round() as u64)
                    .text_value(format!("{:.0}", point.rating))
                    .style(Style::default().fg(color))
                    .label(Line::from(bands.classify(point.rating).name().replace("Level ", "L")))
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(abbreviate(&skill))).bars(&bars));
    }

    f.render_widget(chart, area);
}

fn render_trend_chart(f: &mut Frame<'_>, model: &SkillComparisonModel, view: &DerivedView, area: Rect) {
    let points: Vec<Vec<(f64, f64)>> = view
        .trend
        .iter()
        .map(|series| {
            series
                .points
                .iter()
                .enumerate()
                .filter_map(|(x, p)| p.average.map(|avg| (x as f64, avg)))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = view
        .trend
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (series, data))| {
            let color = if i == 0 { ROLE_A_COLOR } else { ROLE_B_TREND_COLOR };
            Dataset::default()
                .name(series.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let levels = model.level_names();
    let x_labels: Vec<Span> = levels.iter().map(|l| Span::raw(l.clone())).collect();
    let y_labels: Vec<Span> = ["0", "50", "100"].into_iter().map(Span::raw).collect();

    let chart = Chart::new(datasets)
        .block(Block::default().title("Trend Chart").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, levels.len().saturating_sub(1) as f64])
                .labels(x_labels),
        )
        .y_axis(Axis::default().bounds([0.0, 100.0]).labels(y_labels));
    f.render_widget(chart, area);
}

fn render_similarity(f: &mut Frame<'_>, score: SimilarityScore, area: Rect) {
    let ratio = score.value().map_or(0.0, |v| (v / 100.0).clamp(0.0, 1.0));
    let gauge = Gauge::default()
        .block(Block::default().title("Job Similarity Score").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(score.to_string());
    f.render_widget(gauge, area);
}

fn render_footer(f: &mut Frame<'_>, ui: &UiState, area: Rect) {
    let line = match ui.latest_status() {
        Some(entry) => {
            let color = match entry.kind {
                StatusKind::Info => Color::Gray,
                StatusKind::Error => Color::Red,
            };
            Line::from(Span::styled(entry.message.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            "Tab: next control  \u{2190}/\u{2192}: change  Space: toggle skill  q: quit",
            Style::default().fg(Color::Gray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Short group label so bar groups stay narrow
fn abbreviate(skill: &str) -> String {
    let initials: String = skill
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    if initials.chars().count() > 1 {
        initials
    } else {
        skill.chars().take(6).collect()
    }
}
