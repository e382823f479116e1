//! Comparison configuration
//!
//! Loaded from TOML. Every field has a default so an empty file (or no file
//! at all) yields a working configuration backed by the embedded data set.

use crate::core::error::{GuildError, Result};
use crate::table::LEVEL_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Rating values at which the chart axis marks "Level 1" through "Level 4"
pub const DEFAULT_BAND_MARKS: [f64; LEVEL_COUNT] = [15.0, 30.0, 60.0, 95.0];

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "guild_build=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Rating table JSON file. The bundled table is used when unset.
    pub data_path: Option<PathBuf>,

    /// Ordered level enumeration, lowest seniority first.
    ///
    /// When unset the scheme is detected from the table's level keys.
    pub levels: Option<Vec<String>>,

    /// Reject tables whose roles or levels disagree on the skill set.
    ///
    /// With `strict = false` such tables still load; the gaps show up as
    /// missing-data errors when a computation touches them.
    pub strict: bool,

    /// Rating marks for the four display bands, strictly increasing
    pub band_marks: [f64; LEVEL_COUNT],

    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            levels: None,
            strict: true,
            band_marks: DEFAULT_BAND_MARKS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ComparisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ComparisonConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GuildError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(levels) = &self.levels {
            if levels.len() != LEVEL_COUNT {
                return Err(GuildError::Config(format!(
                    "levels must name exactly {} levels, got {}",
                    LEVEL_COUNT,
                    levels.len()
                )));
            }
            for (i, level) in levels.iter().enumerate() {
                if level.trim().is_empty() {
                    return Err(GuildError::Config("level names must not be empty".into()));
                }
                if levels[..i].contains(level) {
                    return Err(GuildError::Config(format!("duplicate level {:?}", level)));
                }
            }
        }

        if self.band_marks.iter().any(|m| !m.is_finite()) {
            return Err(GuildError::Config("band_marks must be finite".into()));
        }
        if self.band_marks.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GuildError::Config(format!(
                "band_marks must be strictly increasing, got {:?}",
                self.band_marks
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(GuildError::Config("log_filter must not be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ComparisonConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.strict);
        assert_eq!(config.band_marks, DEFAULT_BAND_MARKS);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ComparisonConfig::from_toml_str("").unwrap();
        assert_eq!(config, ComparisonConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ComparisonConfig::from_toml_str(
            r#"
            data_path = "data/job_roles_named.json"
            levels = ["entry", "mid", "senior", "principal"]
            strict = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config.data_path.as_deref(),
            Some(Path::new("data/job_roles_named.json"))
        );
        assert_eq!(config.levels.as_ref().map(|l| l.len()), Some(4));
        assert!(!config.strict);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_rejects_wrong_level_count() {
        let result = ComparisonConfig::from_toml_str(r#"levels = ["a", "b", "c"]"#);
        assert!(matches!(result, Err(GuildError::Config(_))));
    }

    #[test]
    fn test_rejects_duplicate_levels() {
        let result = ComparisonConfig::from_toml_str(r#"levels = ["a", "b", "b", "c"]"#);
        assert!(matches!(result, Err(GuildError::Config(_))));
    }

    #[test]
    fn test_rejects_unordered_band_marks() {
        let result = ComparisonConfig::from_toml_str("band_marks = [15.0, 60.0, 30.0, 95.0]");
        assert!(matches!(result, Err(GuildError::Config(_))));
    }

    #[test]
    fn test_bundled_sample_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/guild-build.toml");
        let config = ComparisonConfig::load(&path).unwrap();
        assert!(config.strict);
        assert_eq!(config.band_marks, DEFAULT_BAND_MARKS);
    }

    #[test]
    fn test_missing_config_file() {
        let result = ComparisonConfig::load(Path::new("no/such/guild-build.toml"));
        assert!(matches!(result, Err(GuildError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = ComparisonConfig::from_toml_str("strict = maybe");
        assert!(matches!(result, Err(GuildError::TomlError(_))));
    }
}
