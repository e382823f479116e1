//! Ordered seniority levels
//!
//! Level names differ between data sets (`level_1`..`level_4` in one,
//! `entry`..`principal` in another), so the enumeration is a value rather
//! than an enum. Order is canonical: index 0 is the most junior level.

use crate::core::error::{GuildError, Result};

/// Number of seniority levels every role defines
pub const LEVEL_COUNT: usize = 4;

pub const NUMBERED_LEVELS: [&str; LEVEL_COUNT] = ["level_1", "level_2", "level_3", "level_4"];
pub const NAMED_LEVELS: [&str; LEVEL_COUNT] = ["entry", "mid", "senior", "principal"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelScheme {
    names: Vec<String>,
}

impl LevelScheme {
    /// Build a scheme from names in canonical order
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != LEVEL_COUNT {
            return Err(GuildError::Config(format!(
                "a level scheme needs exactly {} levels, got {}",
                LEVEL_COUNT,
                names.len()
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(GuildError::Config("level names must not be empty".into()));
            }
            if names[..i].contains(name) {
                return Err(GuildError::Config(format!("duplicate level {:?}", name)));
            }
        }
        Ok(Self { names })
    }

    /// `level_1` through `level_4`
    pub fn numbered() -> Self {
        Self {
            names: NUMBERED_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `entry`, `mid`, `senior`, `principal`
    pub fn named() -> Self {
        Self {
            names: NAMED_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Match a set of level keys against the known schemes.
    ///
    /// Key order is irrelevant; the returned scheme carries the canonical order.
    pub fn detect<'a, I>(keys: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys: Vec<&str> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        [Self::numbered(), Self::named()].into_iter().find(|scheme| {
            let mut known: Vec<&str> = scheme.names.iter().map(String::as_str).collect();
            known.sort_unstable();
            known == keys
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, level: &str) -> bool {
        self.position(level).is_some()
    }

    pub fn position(&self, level: &str) -> Option<usize> {
        self.names.iter().position(|n| n == level)
    }

    /// The most junior level, used as the default selection
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LevelScheme {
    fn default() -> Self {
        Self::numbered()
    }
}
