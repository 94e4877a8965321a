//! SearchPortfolioHandler - Case-insensitive search across projects, skills
//! and work experience.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::portfolio::{ProjectSummary, SearchResults};
use crate::ports::{ProjectRepository, SkillRepository, WorkExperienceRepository};

use super::super::project::load_project_details;

/// Query for everything containing `term`.
#[derive(Debug, Clone)]
pub struct SearchPortfolioQuery {
    pub term: String,
}

pub struct SearchPortfolioHandler {
    projects: Arc<dyn ProjectRepository>,
    skills: Arc<dyn SkillRepository>,
    work_experience: Arc<dyn WorkExperienceRepository>,
}

impl SearchPortfolioHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        skills: Arc<dyn SkillRepository>,
        work_experience: Arc<dyn WorkExperienceRepository>,
    ) -> Self {
        Self {
            projects,
            skills,
            work_experience,
        }
    }

    pub async fn handle(&self, query: SearchPortfolioQuery) -> Result<SearchResults, DomainError> {
        let projects = self.projects.search(&query.term).await?;
        let projects = load_project_details(self.projects.as_ref(), projects)
            .await?
            .into_iter()
            .map(ProjectSummary::from)
            .collect();
        let skills = self.skills.search(&query.term).await?;
        let work_experience = self.work_experience.search(&query.term).await?;

        tracing::debug!(
            term = %query.term,
            "Portfolio search completed"
        );

        Ok(SearchResults {
            query: query.term,
            projects,
            skills,
            work_experience,
        })
    }
}
