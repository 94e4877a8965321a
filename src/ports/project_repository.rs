//! ProjectRepository port for projects, their links and skill associations

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId,
};
use crate::domain::portfolio::{Project, ProjectDraft, ProjectLink, ProjectLinkDraft, ProjectSkill};

/// Repository for projects.
///
/// Links and skill associations belong to a project and are removed with it.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Project>, DomainError>;

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError>;

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, DomainError>;

    async fn update(&self, id: ProjectId, draft: &ProjectDraft) -> Result<Project, DomainError>;

    async fn delete(&self, id: ProjectId) -> Result<(), DomainError>;

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError>;

    /// Projects whose title or description contains `term` (case-insensitive)
    async fn search(&self, term: &str) -> Result<Vec<Project>, DomainError>;

    /// Distinct projects linked to a skill whose name contains `term`
    /// (case-insensitive), in id order
    async fn find_by_skill_name(&self, term: &str) -> Result<Vec<Project>, DomainError>;

    /// Links of the given projects, in id order
    async fn links_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectLink>, DomainError>;

    async fn add_link(&self, draft: &ProjectLinkDraft) -> Result<ProjectLink, DomainError>;

    async fn delete_link(&self, id: ProjectLinkId) -> Result<(), DomainError>;

    /// Skill associations of the given projects, in id order
    async fn skills_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectSkill>, DomainError>;

    /// Associate a skill with a project; `(project, skill)` is unique
    async fn attach_skill(
        &self,
        project: ProjectId,
        skill: SkillId,
    ) -> Result<ProjectSkill, DomainError>;

    async fn detach_skill(&self, id: ProjectSkillId) -> Result<(), DomainError>;
}
