//! Current role, level and skill selection

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the user has picked. Validation happens in the model, which only
/// writes values the rating table knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub role_a: String,
    /// `None` means no comparison
    pub role_b: Option<String>,
    pub level_a: String,
    /// Ignored while `role_b` is `None`
    pub level_b: String,
    /// Sorted by skill name
    pub selected_skills: BTreeSet<String>,
}

impl SelectionState {
    pub fn new(
        role_a: impl Into<String>,
        level: impl Into<String>,
        selected_skills: impl IntoIterator<Item = String>,
    ) -> Self {
        let level = level.into();
        Self {
            role_a: role_a.into(),
            role_b: None,
            level_a: level.clone(),
            level_b: level,
            selected_skills: selected_skills.into_iter().collect(),
        }
    }

    pub fn is_comparing(&self) -> bool {
        self.role_b.is_some()
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selected_skills.contains(skill)
    }

    /// Flip membership of `skill`; returns whether it is now selected
    pub fn toggle(&mut self, skill: &str) -> bool {
        if self.selected_skills.remove(skill) {
            false
        } else {
            self.selected_skills.insert(skill.to_string());
            true
        }
    }

    /// (role, level) pairs that feed the charts: A always, B when set
    pub fn active_roles(&self) -> Vec<(&str, &str)> {
        let mut active = vec![(self.role_a.as_str(), self.level_a.as_str())];
        if let Some(role_b) = &self.role_b {
            active.push((role_b.as_str(), self.level_b.as_str()));
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SelectionState {
        SelectionState::new("Wizard", "level_1", ["arcana".to_string(), "combat".to_string()])
    }

    #[test]
    fn test_defaults() {
        let s = state();
        assert_eq!(s.level_b, "level_1");
        assert!(!s.is_comparing());
        assert_eq!(s.active_roles(), vec![("Wizard", "level_1")]);
    }

    #[test]
    fn test_toggle() {
        let mut s = state();
        assert!(!s.toggle("arcana"));
        assert!(!s.is_selected("arcana"));
        assert!(s.toggle("arcana"));
        assert!(s.is_selected("arcana"));
    }

    #[test]
    fn test_active_roles_with_comparison() {
        let mut s = state();
        s.role_b = Some("Knight".to_string());
        s.level_b = "level_3".to_string();
        assert_eq!(
            s.active_roles(),
            vec![("Wizard", "level_1"), ("Knight", "level_3")]
        );
    }
}
