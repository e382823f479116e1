//! Derived, chart-ready values
//!
//! Nothing here is stored between calls: the model recomputes a view from
//! the rating table and the current selection whenever asked.

use serde::Serialize;
use std::fmt;

/// Outcome of comparing role A against role B
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityScore {
    /// 0..=100, two decimals
    Score(f64),
    /// Role B is unset
    NotApplicable,
    /// No known skill is selected, so there is nothing to average
    NoSkillsSelected,
}

impl SimilarityScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            SimilarityScore::Score(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityScore::Score(v) => write!(f, "{:.2}%", v),
            SimilarityScore::NotApplicable | SimilarityScore::NoSkillsSelected => write!(f, "N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub skill: String,
    pub rating: f64,
}

/// One role's ratings over the selected skills, in skill-name order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    /// `"<role> (<level>)"`
    pub label: String,
    pub role: String,
    pub level: String,
    pub points: Vec<RadarPoint>,
}

impl RadarSeries {
    pub fn label_for(role: &str, level: &str) -> String {
        format!("{} ({})", role, level)
    }

    pub fn ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub level: String,
    /// `None` when no known skill is selected
    pub average: Option<f64>,
}

/// One role's mean selected-skill rating at every level, most junior first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// The bare role name
    pub label: String,
    pub role: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub similarity: SimilarityScore,
    pub radar: Vec<RadarSeries>,
    pub trend: Vec<TrendSeries>,
}
