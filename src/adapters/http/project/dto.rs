//! Data Transfer Objects for project endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::ProjectsBySkill;
use crate::domain::foundation::{ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId};
use crate::domain::portfolio::{
    LinkType, ProjectDetail, ProjectLink, ProjectLinkDraft, ProjectSkill, ProjectSummary,
    SkillLevel,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /projects/:id/links/`; the project comes from
/// the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectLinkRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_link_type")]
    pub link_type: LinkType,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_link_type() -> LinkType {
    LinkType::Other
}

impl CreateProjectLinkRequest {
    pub fn into_draft(self, project: ProjectId) -> ProjectLinkDraft {
        ProjectLinkDraft {
            project,
            url: self.url,
            link_type: self.link_type,
            description: self.description,
        }
    }
}

/// Request body for `POST /projects/:id/skills/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachSkillRequest {
    pub skill: SkillId,
}

/// Query parameters for `GET /projects/by-skill/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BySkillParams {
    pub skill: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLinkResponse {
    pub id: ProjectLinkId,
    pub project: ProjectId,
    pub url: String,
    pub link_type: LinkType,
    pub description: Option<String>,
}

impl From<ProjectLink> for ProjectLinkResponse {
    fn from(link: ProjectLink) -> Self {
        Self {
            id: link.id,
            project: link.project,
            url: link.url,
            link_type: link.link_type,
            description: link.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSkillResponse {
    pub id: ProjectSkillId,
    pub skill: SkillId,
    pub skill_name: String,
    pub skill_level: SkillLevel,
}

impl From<ProjectSkill> for ProjectSkillResponse {
    fn from(project_skill: ProjectSkill) -> Self {
        Self {
            id: project_skill.id,
            skill: project_skill.skill,
            skill_name: project_skill.skill_name,
            skill_level: project_skill.skill_level,
        }
    }
}

/// Full project payload.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub profile: ProfileId,
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub created_at: DateTime<Utc>,
    pub links: Vec<ProjectLinkResponse>,
    pub project_skills: Vec<ProjectSkillResponse>,
    /// Linked skill names, in association order
    pub skills: Vec<String>,
}

impl From<ProjectDetail> for ProjectResponse {
    fn from(detail: ProjectDetail) -> Self {
        let skills = detail.skill_names();
        let project = detail.project;
        Self {
            id: project.id,
            profile: project.profile,
            title: project.title,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
            is_ongoing: project.is_ongoing,
            created_at: *project.created_at.as_datetime(),
            links: detail.links.into_iter().map(Into::into).collect(),
            project_skills: detail.project_skills.into_iter().map(Into::into).collect(),
            skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummaryResponse {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub skills: Vec<String>,
    pub links_count: usize,
}

impl From<ProjectSummary> for ProjectSummaryResponse {
    fn from(summary: ProjectSummary) -> Self {
        let project = summary.project;
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
            is_ongoing: project.is_ongoing,
            skills: summary.skills,
            links_count: summary.links_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsBySkillResponse {
    pub skill: String,
    pub count: usize,
    pub projects: Vec<ProjectSummaryResponse>,
}

impl From<ProjectsBySkill> for ProjectsBySkillResponse {
    fn from(result: ProjectsBySkill) -> Self {
        let projects: Vec<ProjectSummaryResponse> =
            result.projects.into_iter().map(Into::into).collect();
        Self {
            skill: result.skill,
            count: projects.len(),
            projects,
        }
    }
}
