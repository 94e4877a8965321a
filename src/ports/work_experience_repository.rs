//! WorkExperienceRepository port

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, WorkExperienceId};
use crate::domain::portfolio::{WorkExperience, WorkExperienceDraft};

/// Repository for work experience entries.
#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<WorkExperience>, DomainError>;

    async fn list_by_profile(
        &self,
        profile: ProfileId,
    ) -> Result<Vec<WorkExperience>, DomainError>;

    async fn find_by_id(&self, id: WorkExperienceId)
        -> Result<Option<WorkExperience>, DomainError>;

    async fn create(&self, draft: &WorkExperienceDraft) -> Result<WorkExperience, DomainError>;

    async fn update(
        &self,
        id: WorkExperienceId,
        draft: &WorkExperienceDraft,
    ) -> Result<WorkExperience, DomainError>;

    async fn delete(&self, id: WorkExperienceId) -> Result<(), DomainError>;

    /// Entries whose company, position, or description contains `term`
    /// (case-insensitive)
    async fn search(&self, term: &str) -> Result<Vec<WorkExperience>, DomainError>;
}
