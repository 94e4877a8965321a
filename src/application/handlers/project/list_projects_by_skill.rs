//! ListProjectsBySkillHandler - Projects that use a skill, matched by name.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::portfolio::ProjectSummary;
use crate::ports::ProjectRepository;

use super::load_project_details;

/// Query for projects linked to a skill whose name contains `skill`
/// (case-insensitive).
#[derive(Debug, Clone)]
pub struct ListProjectsBySkillQuery {
    pub skill: String,
}

/// Matching projects in summary form, ordered by id.
#[derive(Debug, Clone)]
pub struct ProjectsBySkill {
    pub skill: String,
    pub projects: Vec<ProjectSummary>,
}

pub struct ListProjectsBySkillHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl ListProjectsBySkillHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(
        &self,
        query: ListProjectsBySkillQuery,
    ) -> Result<ProjectsBySkill, DomainError> {
        let matches = self.projects.find_by_skill_name(&query.skill).await?;
        let details = load_project_details(self.projects.as_ref(), matches).await?;

        Ok(ProjectsBySkill {
            skill: query.skill,
            projects: details.into_iter().map(ProjectSummary::from).collect(),
        })
    }
}
