pub mod config;
pub mod error;

pub use config::ComparisonConfig;
pub use error::{GuildError, Result, SelectionKind};
