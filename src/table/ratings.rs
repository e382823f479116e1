//! Role → level → skill → rating table
//!
//! Parsed once from JSON and immutable afterwards. Role order follows the
//! source document; levels are stored in canonical scheme order; skills
//! within a level are kept sorted by name.

use crate::core::error::{GuildError, Result};
use crate::table::levels::LevelScheme;
use ahash::AHashMap;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Skill name → rating for one (role, level)
pub type SkillRatings = BTreeMap<String, f64>;

/// Nominal rating range. Ratings outside it are accepted but logged.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 100.0;

#[derive(Debug, Clone)]
struct RoleEntry {
    name: String,
    /// One entry per level, indexed by scheme position
    levels: Vec<SkillRatings>,
}

#[derive(Debug, Clone)]
pub struct RatingTable {
    scheme: LevelScheme,
    roles: Vec<RoleEntry>,
    role_index: AHashMap<String, usize>,
    /// Union of every skill name in the table
    skill_universe: BTreeSet<String>,
}

impl RatingTable {
    /// Build a table from a parsed JSON document.
    ///
    /// `scheme` fixes the level enumeration; when `None` it is detected from
    /// the first role's level keys. With `strict` set, any role or level whose
    /// skill set differs from the first role's first level is rejected.
    pub fn from_value(value: &Value, scheme: Option<LevelScheme>, strict: bool) -> Result<Self> {
        let roles_obj = value
            .as_object()
            .ok_or_else(|| GuildError::InvalidData("top level must be an object of roles".into()))?;

        let (first_role, first_levels) = roles_obj
            .iter()
            .next()
            .ok_or_else(|| GuildError::InvalidData("table contains no roles".into()))?;

        let scheme = match scheme {
            Some(scheme) => scheme,
            None => {
                let levels = as_object(first_levels, || format!("role {:?}", first_role))?;
                LevelScheme::detect(levels.keys().map(String::as_str)).ok_or_else(|| {
                    GuildError::InvalidData(format!(
                        "unrecognised level names {:?} in role {:?}; configure `levels` explicitly",
                        levels.keys().collect::<Vec<_>>(),
                        first_role
                    ))
                })?
            }
        };

        let mut roles = Vec::with_capacity(roles_obj.len());
        for (role_name, levels_value) in roles_obj {
            roles.push(parse_role(role_name, levels_value, &scheme, strict)?);
        }

        Self::from_parts(scheme, roles, strict)
    }

    /// Parse a JSON document (see [`RatingTable::from_value`])
    pub fn from_json_str(json: &str, scheme: Option<LevelScheme>, strict: bool) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, scheme, strict)
    }

    fn from_parts(scheme: LevelScheme, roles: Vec<RoleEntry>, strict: bool) -> Result<Self> {
        let mut role_index = AHashMap::with_capacity(roles.len());
        let mut skill_universe = BTreeSet::new();
        for (i, role) in roles.iter().enumerate() {
            role_index.insert(role.name.clone(), i);
            for ratings in &role.levels {
                skill_universe.extend(ratings.keys().cloned());
            }
        }

        let table = Self {
            scheme,
            roles,
            role_index,
            skill_universe,
        };

        let issues = table.uniformity_issues();
        if !issues.is_empty() {
            if strict {
                return Err(GuildError::InconsistentTable(issues.join("; ")));
            }
            for issue in &issues {
                tracing::warn!("Rating table inconsistency: {}", issue);
            }
        }

        Ok(table)
    }

    /// Describe every (role, level) whose skill set differs from the reference
    /// set at the first role's first level.
    pub fn uniformity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let Some(reference_role) = self.roles.first() else {
            return issues;
        };
        let reference: BTreeSet<&String> = reference_role.levels[0].keys().collect();

        for role in &self.roles {
            for (level, ratings) in self.scheme.iter().zip(&role.levels) {
                let skills: BTreeSet<&String> = ratings.keys().collect();
                if skills == reference {
                    continue;
                }
                let missing: Vec<&&String> = reference.difference(&skills).collect();
                let extra: Vec<&&String> = skills.difference(&reference).collect();
                issues.push(format!(
                    "{}/{}: missing {:?}, extra {:?}",
                    role.name, level, missing, extra
                ));
            }
        }
        issues
    }

    pub fn levels(&self) -> &LevelScheme {
        &self.scheme
    }

    /// Role names in source order
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.name.as_str())
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// First role in source order, the default for role A
    pub fn first_role(&self) -> &str {
        // from_value rejects empty tables
        &self.roles[0].name
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role_index.contains_key(role)
    }

    pub fn has_level(&self, level: &str) -> bool {
        self.scheme.contains(level)
    }

    /// Every skill name appearing anywhere in the table, sorted
    pub fn skill_universe(&self) -> &BTreeSet<String> {
        &self.skill_universe
    }

    pub fn knows_skill(&self, skill: &str) -> bool {
        self.skill_universe.contains(skill)
    }

    /// All ratings for one (role, level)
    pub fn ratings(&self, role: &str, level: &str) -> Result<&SkillRatings> {
        let role_idx = *self
            .role_index
            .get(role)
            .ok_or_else(|| GuildError::invalid_role(role))?;
        let level_idx = self
            .scheme
            .position(level)
            .ok_or_else(|| GuildError::invalid_level(level))?;
        Ok(&self.roles[role_idx].levels[level_idx])
    }

    /// Sorted skill names defined at one (role, level)
    pub fn skills_at(&self, role: &str, level: &str) -> Result<Vec<String>> {
        Ok(self.ratings(role, level)?.keys().cloned().collect())
    }

    /// A single rating; a valid selection with no entry is a data fault
    pub fn rating(&self, role: &str, level: &str, skill: &str) -> Result<f64> {
        self.ratings(role, level)?
            .get(skill)
            .copied()
            .ok_or_else(|| GuildError::MissingRatingData {
                role: role.to_string(),
                level: level.to_string(),
                skill: skill.to_string(),
            })
    }
}

fn as_object<'a>(value: &'a Value, what: impl FnOnce() -> String) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| GuildError::InvalidData(format!("{} must be an object", what())))
}

fn parse_role(name: &str, value: &Value, scheme: &LevelScheme, strict: bool) -> Result<RoleEntry> {
    let levels_obj = as_object(value, || format!("role {:?}", name))?;

    if let Some(unknown) = levels_obj.keys().find(|k| !scheme.contains(k)) {
        return Err(GuildError::InvalidData(format!(
            "role {:?} has unknown level {:?}; expected one of {:?}",
            name,
            unknown,
            scheme.names()
        )));
    }

    let mut levels = Vec::with_capacity(scheme.len());
    for level in scheme.iter() {
        let ratings = match levels_obj.get(level) {
            Some(skills_value) => parse_skills(name, level, skills_value)?,
            None if strict => {
                return Err(GuildError::InconsistentTable(format!(
                    "role {:?} does not define level {:?}",
                    name, level
                )));
            }
            None => {
                tracing::warn!("Role {:?} does not define level {:?}", name, level);
                SkillRatings::new()
            }
        };
        levels.push(ratings);
    }

    Ok(RoleEntry {
        name: name.to_string(),
        levels,
    })
}

fn parse_skills(role: &str, level: &str, value: &Value) -> Result<SkillRatings> {
    let skills_obj = as_object(value, || format!("{}/{}", role, level))?;
    let mut ratings = SkillRatings::new();
    for (skill, rating) in skills_obj {
        let rating = rating.as_f64().ok_or_else(|| {
            GuildError::InvalidData(format!(
                "{}/{}/{}: rating must be a number, got {}",
                role, level, skill, rating
            ))
        })?;
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            tracing::warn!(
                "{}/{}/{}: rating {} outside {}..={}",
                role,
                level,
                skill,
                rating,
                RATING_MIN,
                RATING_MAX
            );
        }
        ratings.insert(skill.clone(), rating);
    }
    Ok(ratings)
}
