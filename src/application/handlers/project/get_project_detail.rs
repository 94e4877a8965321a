//! GetProjectDetailHandler - Query handler for one project with its links
//! and skills.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::portfolio::{Project, ProjectDetail};
use crate::ports::ProjectRepository;

use super::load_project_details;

/// Query to get a project by ID.
#[derive(Debug, Clone)]
pub struct GetProjectDetailQuery {
    pub project_id: ProjectId,
}

/// Handler for retrieving project details.
pub struct GetProjectDetailHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectDetailHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, query: GetProjectDetailQuery) -> Result<ProjectDetail, DomainError> {
        let project = self
            .projects
            .find_by_id(query.project_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Project", query.project_id))?;
        self.assemble(project).await
    }

    /// Full payload for every stored project, in id order.
    pub async fn list(&self) -> Result<Vec<ProjectDetail>, DomainError> {
        let projects = self.projects.list().await?;
        load_project_details(self.projects.as_ref(), projects).await
    }

    pub async fn assemble(&self, project: Project) -> Result<ProjectDetail, DomainError> {
        let id = project.id;
        load_project_details(self.projects.as_ref(), vec![project])
            .await?
            .pop()
            .ok_or_else(|| DomainError::not_found("Project", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioStore;
    use crate::seed::seed_sample_portfolio;

    #[tokio::test]
    async fn detail_includes_links_and_skills_in_order() {
        let store = InMemoryPortfolioStore::new();
        let repos = store.repositories();
        seed_sample_portfolio(&repos).await.unwrap();
        let project = repos.projects.list().await.unwrap().remove(0);

        let handler = GetProjectDetailHandler::new(repos.projects.clone());
        let detail = handler
            .handle(GetProjectDetailQuery {
                project_id: project.id,
            })
            .await
            .unwrap();

        assert_eq!(detail.project.title, "E-commerce Platform");
        assert_eq!(detail.links.len(), 2);
        assert_eq!(
            detail.skill_names(),
            vec!["Python", "Django", "React", "PostgreSQL"]
        );
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let store = InMemoryPortfolioStore::new();
        let handler = GetProjectDetailHandler::new(store.repositories().projects);

        let err = handler
            .handle(GetProjectDetailQuery {
                project_id: ProjectId::new(404),
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_returns_every_project_with_its_links() {
        let repos = InMemoryPortfolioStore::new().repositories();
        seed_sample_portfolio(&repos).await.unwrap();

        let details = GetProjectDetailHandler::new(repos.projects.clone())
            .list()
            .await
            .unwrap();

        let links: Vec<usize> = details.iter().map(|d| d.links.len()).collect();
        assert_eq!(links, vec![2, 1, 1]);
    }
}
