//! Interactive terminal front-end
//!
//! Role and level pickers, the skill checkbox grid, a per-skill bar chart,
//! the level trend chart and the similarity gauge.

pub mod input;
pub mod render;
pub mod state;
pub mod terminal;

pub use input::{handle_key, InputOutcome};
pub use state::{Focus, StatusEntry, StatusKind, UiState};
pub use terminal::run;
