//! Skill comparison model
//!
//! Owns the rating table and the selection. Mutators validate before
//! writing, so a rejected call leaves the selection untouched. Every
//! computation is a pure read of the current state.
//!
//! Selected skills that appear nowhere in the table are skipped by the
//! computations. A skill the table knows but that is absent at a particular
//! (role, level) is a data fault and surfaces as `MissingRatingData`.

use crate::core::error::{GuildError, Result};
use crate::model::metrics;
use crate::model::selection::SelectionState;
use crate::model::view::{
    DerivedView, RadarPoint, RadarSeries, SimilarityScore, TrendPoint, TrendSeries,
};
use crate::table::RatingTable;

#[derive(Debug, Clone)]
pub struct SkillComparisonModel {
    table: RatingTable,
    selection: SelectionState,
}

impl SkillComparisonModel {
    /// Start with role A = first role, both levels = most junior, no role B,
    /// and every skill of (role A, level A) selected.
    pub fn new(table: RatingTable) -> Self {
        let role_a = table.first_role().to_string();
        let level = table.levels().first().to_string();
        let skills = table.skills_at(&role_a, &level).unwrap_or_default();
        let selection = SelectionState::new(role_a, level, skills);
        Self { table, selection }
    }

    pub fn table(&self) -> &RatingTable {
        &self.table
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.table.role_names().collect()
    }

    pub fn level_names(&self) -> &[String] {
        self.table.levels().names()
    }

    /// Sorted skill names of (role A, level A), the set `select_all` restores
    pub fn skill_universe(&self) -> Vec<String> {
        // role_a and level_a are validated on every write
        self.table
            .skills_at(&self.selection.role_a, &self.selection.level_a)
            .unwrap_or_default()
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selection.is_selected(skill)
    }

    pub fn set_role_a(&mut self, role: &str) -> Result<()> {
        self.check_role(role)?;
        tracing::debug!("role A: {} -> {}", self.selection.role_a, role);
        self.selection.role_a = role.to_string();
        Ok(())
    }

    /// `None` turns the comparison off
    pub fn set_role_b(&mut self, role: Option<&str>) -> Result<()> {
        if let Some(role) = role {
            self.check_role(role)?;
        }
        tracing::debug!("role B: {:?} -> {:?}", self.selection.role_b, role);
        self.selection.role_b = role.map(str::to_string);
        Ok(())
    }

    pub fn set_level_a(&mut self, level: &str) -> Result<()> {
        self.check_level(level)?;
        tracing::debug!("level A: {} -> {}", self.selection.level_a, level);
        self.selection.level_a = level.to_string();
        Ok(())
    }

    pub fn set_level_b(&mut self, level: &str) -> Result<()> {
        self.check_level(level)?;
        tracing::debug!("level B: {} -> {}", self.selection.level_b, level);
        self.selection.level_b = level.to_string();
        Ok(())
    }

    /// Returns whether `skill` is selected afterwards
    pub fn toggle_skill(&mut self, skill: &str) -> bool {
        let selected = self.selection.toggle(skill);
        if !self.table.knows_skill(skill) {
            tracing::debug!("toggled unknown skill {:?}; it will be ignored", skill);
        }
        selected
    }

    pub fn select_all(&mut self) {
        self.selection.selected_skills = self.skill_universe().into_iter().collect();
    }

    pub fn clear_all(&mut self) {
        self.selection.selected_skills.clear();
    }

    pub fn compute_similarity(&self) -> Result<SimilarityScore> {
        let Some(role_b) = self.selection.role_b.as_deref() else {
            return Ok(SimilarityScore::NotApplicable);
        };
        let (role_a, level_a) = (self.selection.role_a.as_str(), self.selection.level_a.as_str());
        let level_b = self.selection.level_b.as_str();

        let pairs = self
            .known_selection()
            .map(|skill| -> Result<(f64, f64)> {
                Ok((
                    self.table.rating(role_a, level_a, skill)?,
                    self.table.rating(role_b, level_b, skill)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        match metrics::similarity(&pairs) {
            Ok(score) => Ok(SimilarityScore::Score(score)),
            Err(GuildError::UndefinedAggregate) => Ok(SimilarityScore::NoSkillsSelected),
            Err(e) => Err(e),
        }
    }

    pub fn compute_radar_series(&self) -> Result<Vec<RadarSeries>> {
        self.selection
            .active_roles()
            .into_iter()
            .map(|(role, level)| -> Result<RadarSeries> {
                let points = self
                    .known_selection()
                    .map(|skill| -> Result<RadarPoint> {
                        Ok(RadarPoint {
                            skill: skill.to_string(),
                            rating: self.table.rating(role, level, skill)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RadarSeries {
                    label: RadarSeries::label_for(role, level),
                    role: role.to_string(),
                    level: level.to_string(),
                    points,
                })
            })
            .collect()
    }

    pub fn compute_trend_series(&self) -> Result<Vec<TrendSeries>> {
        self.selection
            .active_roles()
            .into_iter()
            .map(|(role, _)| self.trend_for(role))
            .collect()
    }

    /// Similarity, radar and trend in one pass over the current selection
    pub fn derived_view(&self) -> Result<DerivedView> {
        Ok(DerivedView {
            similarity: self.compute_similarity()?,
            radar: self.compute_radar_series()?,
            trend: self.compute_trend_series()?,
        })
    }

    fn trend_for(&self, role: &str) -> Result<TrendSeries> {
        let mut points = Vec::with_capacity(self.table.levels().len());
        for level in self.table.levels().iter() {
            let ratings = self
                .known_selection()
                .map(|skill| self.table.rating(role, level, skill))
                .collect::<Result<Vec<_>>>()?;
            let average = match metrics::mean(&ratings) {
                Ok(avg) => Some(avg),
                Err(GuildError::UndefinedAggregate) => None,
                Err(e) => return Err(e),
            };
            points.push(TrendPoint {
                level: level.to_string(),
                average,
            });
        }
        Ok(TrendSeries {
            label: role.to_string(),
            role: role.to_string(),
            points,
        })
    }

    /// Selected skills the table knows about, in name order
    fn known_selection(&self) -> impl Iterator<Item = &str> {
        self.selection
            .selected_skills
            .iter()
            .map(String::as_str)
            .filter(move |skill| self.table.knows_skill(skill))
    }

    fn check_role(&self, role: &str) -> Result<()> {
        if self.table.has_role(role) {
            Ok(())
        } else {
            Err(GuildError::invalid_role(role))
        }
    }

    fn check_level(&self, level: &str) -> Result<()> {
        if self.table.has_level(level) {
            Ok(())
        } else {
            Err(GuildError::invalid_level(level))
        }
    }
}
