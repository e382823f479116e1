//! Load the rating table from the bundled data set or a JSON file

use crate::core::config::ComparisonConfig;
use crate::core::error::Result;
use crate::table::levels::LevelScheme;
use crate::table::ratings::RatingTable;
use std::fs;
use std::path::Path;

/// Default data set, `level_1`..`level_4`
pub const EMBEDDED_TABLE: &str = include_str!("../../data/job_roles.json");

/// Same roles and skills with `entry`..`principal` level names
pub const EMBEDDED_NAMED_TABLE: &str = include_str!("../../data/job_roles_named.json");

/// Load the table a configuration points at
pub fn load_table(config: &ComparisonConfig) -> Result<RatingTable> {
    let scheme = match &config.levels {
        Some(levels) => Some(LevelScheme::new(levels.iter().cloned())?),
        None => None,
    };

    let table = match &config.data_path {
        Some(path) => load_from_file(path, scheme, config.strict)?,
        None => RatingTable::from_json_str(EMBEDDED_TABLE, scheme, config.strict)?,
    };

    tracing::info!(
        "Loaded rating table: {} roles, {} skills, levels {:?}",
        table.role_count(),
        table.skill_universe().len(),
        table.levels().names()
    );
    Ok(table)
}

/// Load a table from a JSON file on disk
pub fn load_from_file(path: &Path, scheme: Option<LevelScheme>, strict: bool) -> Result<RatingTable> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    RatingTable::from_json_str(&content, scheme, strict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GuildError;
    use crate::table::levels::NAMED_LEVELS;
    use std::path::PathBuf;

    fn data_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn test_embedded_tables_load_strictly() {
        let numbered = RatingTable::from_json_str(EMBEDDED_TABLE, None, true).unwrap();
        let named = RatingTable::from_json_str(EMBEDDED_NAMED_TABLE, None, true).unwrap();

        assert_eq!(numbered.levels(), &LevelScheme::numbered());
        assert_eq!(named.levels(), &LevelScheme::named());
        assert_eq!(numbered.skill_universe(), named.skill_universe());
        assert_eq!(numbered.skill_universe().len(), 8);
    }

    #[test]
    fn test_default_config_uses_embedded_table() {
        let table = load_table(&ComparisonConfig::default()).unwrap();
        assert_eq!(table.levels().first(), "level_1");
        assert!(table.role_count() >= 2);
    }

    #[test]
    fn test_config_with_data_path() {
        let config = ComparisonConfig {
            data_path: Some(data_file("job_roles_named.json")),
            ..ComparisonConfig::default()
        };
        let table = load_table(&config).unwrap();
        assert_eq!(table.levels().first(), "entry");
    }

    #[test]
    fn test_config_levels_must_match_data() {
        let config = ComparisonConfig {
            levels: Some(NAMED_LEVELS.iter().map(|s| s.to_string()).collect()),
            ..ComparisonConfig::default()
        };
        // embedded data uses level_N keys
        assert!(matches!(load_table(&config), Err(GuildError::InvalidData(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_file(&data_file("does_not_exist.json"), None, true);
        assert!(matches!(result, Err(GuildError::IoError(_))));
    }
}
