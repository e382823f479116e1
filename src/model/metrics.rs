//! Numeric helpers behind the similarity score and trend series

use crate::core::error::{GuildError, Result};

/// Similarity of identical profiles
pub const MAX_SIMILARITY: f64 = 100.0;

/// Arithmetic mean; empty input has no mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(GuildError::UndefinedAggregate);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of `|a - b|` over paired ratings
pub fn mean_abs_difference(pairs: &[(f64, f64)]) -> Result<f64> {
    let diffs: Vec<f64> = pairs.iter().map(|(a, b)| (a - b).abs()).collect();
    mean(&diffs)
}

/// `max(0, 100 - mean |a - b|)`, rounded to two decimals
pub fn similarity(pairs: &[(f64, f64)]) -> Result<f64> {
    let avg_diff = mean_abs_difference(pairs)?;
    Ok(round2((MAX_SIMILARITY - avg_diff).max(0.0)))
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
