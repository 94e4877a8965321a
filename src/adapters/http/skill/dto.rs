//! Data Transfer Objects for skill endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, SkillId};
use crate::domain::portfolio::{Skill, SkillLevel, SkillUsage};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /skills/top/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopSkillsParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: SkillId,
    pub profile: ProfileId,
    pub name: String,
    pub level: SkillLevel,
    pub years_experience: u32,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            profile: skill.profile,
            name: skill.name,
            level: skill.level,
            years_experience: skill.years_experience,
        }
    }
}

/// Skill with the number of projects using it.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSummaryResponse {
    pub id: SkillId,
    pub name: String,
    pub level: SkillLevel,
    pub years_experience: u32,
    pub projects_count: usize,
}

impl From<SkillUsage> for SkillSummaryResponse {
    fn from(usage: SkillUsage) -> Self {
        Self {
            id: usage.skill.id,
            name: usage.skill.name,
            level: usage.skill.level,
            years_experience: usage.skill.years_experience,
            projects_count: usage.projects_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopSkillsResponse {
    pub count: usize,
    pub skills: Vec<SkillSummaryResponse>,
}

impl From<Vec<SkillUsage>> for TopSkillsResponse {
    fn from(usages: Vec<SkillUsage>) -> Self {
        let skills: Vec<SkillSummaryResponse> = usages.into_iter().map(Into::into).collect();
        Self {
            count: skills.len(),
            skills,
        }
    }
}
