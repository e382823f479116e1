use std::fmt;
use thiserror::Error;

/// Which selection field a rejected value was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Role,
    Level,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::Role => write!(f, "role"),
            SelectionKind::Level => write!(f, "level"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GuildError {
    #[error("Invalid {kind} selection: {name:?}")]
    InvalidSelection { kind: SelectionKind, name: String },

    #[error("No rating for skill {skill:?} at {role:?} / {level:?}")]
    MissingRatingData {
        role: String,
        level: String,
        skill: String,
    },

    #[error("Aggregate over an empty skill selection is undefined")]
    UndefinedAggregate,

    #[error("Invalid rating data: {0}")]
    InvalidData(String),

    #[error("Inconsistent rating table: {0}")]
    InconsistentTable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GuildError {
    pub fn invalid_role(name: impl Into<String>) -> Self {
        GuildError::InvalidSelection {
            kind: SelectionKind::Role,
            name: name.into(),
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        GuildError::InvalidSelection {
            kind: SelectionKind::Level,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuildError>;
