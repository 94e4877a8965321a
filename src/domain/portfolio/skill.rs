//! Skills of a profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{non_null, DomainError, ProfileId, SkillId, ValidationError};

use super::validate::FieldChecks;

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }
}

/// A stored skill. `(profile, name)` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: SkillId,
    pub profile: ProfileId,
    pub name: String,
    pub level: SkillLevel,
    pub years_experience: u32,
}

impl Skill {
    pub fn draft(&self) -> SkillDraft {
        SkillDraft {
            profile: self.profile,
            name: self.name.clone(),
            level: self.level,
            years_experience: self.years_experience,
        }
    }
}

/// Full write payload for a skill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillDraft {
    pub profile: ProfileId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub years_experience: u32,
}

impl SkillDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .required("name", &self.name, Some(50))
            .finish()
    }
}

/// Partial write payload for a skill.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub profile: Option<ProfileId>,
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub level: Option<SkillLevel>,
    #[serde(default, deserialize_with = "non_null")]
    pub years_experience: Option<u32>,
}

impl SkillPatch {
    pub fn apply(self, mut draft: SkillDraft) -> SkillDraft {
        if let Some(profile) = self.profile {
            draft.profile = profile;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(level) = self.level {
            draft.level = level;
        }
        if let Some(years) = self.years_experience {
            draft.years_experience = years;
        }
        draft
    }
}

/// A skill together with how many projects reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillUsage {
    pub skill: Skill,
    pub projects_count: usize,
}
