//! Display stat computation for UI rendering
//!
//! Converts raw ratings into banded, bar-ready values for the text report
//! and the terminal charts.

use crate::core::config::DEFAULT_BAND_MARKS;
use crate::model::RadarSeries;
use crate::table::{LEVEL_COUNT, RATING_MAX, RATING_MIN};
use serde::{Deserialize, Serialize};

/// Band a rating falls into on the 0..100 axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingBand {
    Unbanded,
    Level1,
    Level2,
    Level3,
    Level4,
}

impl RatingBand {
    const BANDED: [RatingBand; LEVEL_COUNT] = [
        RatingBand::Level1,
        RatingBand::Level2,
        RatingBand::Level3,
        RatingBand::Level4,
    ];

    /// Human-readable name for this band
    pub fn name(&self) -> &'static str {
        match self {
            RatingBand::Unbanded => "",
            RatingBand::Level1 => "Level 1",
            RatingBand::Level2 => "Level 2",
            RatingBand::Level3 => "Level 3",
            RatingBand::Level4 => "Level 4",
        }
    }
}

/// Rating marks at which each band begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBands {
    marks: [f64; LEVEL_COUNT],
}

impl Default for RatingBands {
    fn default() -> Self {
        Self {
            marks: DEFAULT_BAND_MARKS,
        }
    }
}

impl RatingBands {
    /// Marks must be strictly increasing; `ComparisonConfig::validate` checks this
    pub fn new(marks: [f64; LEVEL_COUNT]) -> Self {
        Self { marks }
    }

    pub fn marks(&self) -> &[f64; LEVEL_COUNT] {
        &self.marks
    }

    /// Highest band whose mark the rating reaches
    pub fn classify(&self, rating: f64) -> RatingBand {
        self.marks
            .iter()
            .zip(RatingBand::BANDED)
            .rev()
            .find(|(mark, _)| rating >= **mark)
            .map(|(_, band)| band)
            .unwrap_or(RatingBand::Unbanded)
    }

    /// Band label for an exact axis mark, empty for every other value
    pub fn axis_label(&self, value: f64) -> &'static str {
        self.marks
            .iter()
            .zip(RatingBand::BANDED)
            .find(|(mark, _)| **mark == value)
            .map(|(_, band)| band.name())
            .unwrap_or("")
    }
}

/// A display-ready rating
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStat {
    pub name: String,
    pub rating: f64,
    pub band: RatingBand,
    /// Bar fill for visual rendering (0.0 to 1.0)
    pub bar_fill: f32,
}

impl DisplayStat {
    /// Create a new display stat, clamping bar_fill to valid range
    pub fn new(name: impl Into<String>, rating: f64, band: RatingBand, bar_fill: f32) -> Self {
        Self {
            name: name.into(),
            rating,
            band,
            bar_fill: bar_fill.clamp(0.0, 1.0),
        }
    }
}

/// Fraction of the nominal rating range covered by `rating`
pub fn compute_bar(rating: f64) -> f32 {
    (((rating - RATING_MIN) / (RATING_MAX - RATING_MIN)) as f32).clamp(0.0, 1.0)
}

/// One stat per point of a radar series
pub fn series_stats(series: &RadarSeries, bands: &RatingBands) -> Vec<DisplayStat> {
    series
        .points
        .iter()
        .map(|p| {
            DisplayStat::new(
                p.skill.clone(),
                p.rating,
                bands.classify(p.rating),
                compute_bar(p.rating),
            )
        })
        .collect()
}

/// Fixed-width text bar, e.g. `[#####     ]`
pub fn text_bar(fill: f32, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled))
}
