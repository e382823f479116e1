//! Static skill-rating table
//!
//! Roles map to a fixed set of four seniority levels, each level mapping
//! skill names to numeric ratings on a nominal 0..100 scale.

pub mod levels;
pub mod loader;
pub mod ratings;

pub use levels::{LevelScheme, LEVEL_COUNT, NAMED_LEVELS, NUMBERED_LEVELS};
pub use loader::{load_from_file, load_table, EMBEDDED_NAMED_TABLE, EMBEDDED_TABLE};
pub use ratings::{RatingTable, SkillRatings, RATING_MAX, RATING_MIN};
