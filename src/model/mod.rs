//! Role comparison model
//!
//! The selection is the only mutable state. Similarity, radar and trend
//! values are derived from it on demand and never cached.

pub mod comparison;
pub mod metrics;
pub mod selection;
pub mod view;

pub use comparison::SkillComparisonModel;
pub use selection::SelectionState;
pub use view::{DerivedView, RadarPoint, RadarSeries, SimilarityScore, TrendPoint, TrendSeries};
