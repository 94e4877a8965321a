//! EducationRepository port

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EducationId, ProfileId};
use crate::domain::portfolio::{Education, EducationDraft};

/// Repository for education entries.
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Education>, DomainError>;

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Education>, DomainError>;

    async fn find_by_id(&self, id: EducationId) -> Result<Option<Education>, DomainError>;

    /// Fails validation if the referenced profile does not exist
    async fn create(&self, draft: &EducationDraft) -> Result<Education, DomainError>;

    async fn update(
        &self,
        id: EducationId,
        draft: &EducationDraft,
    ) -> Result<Education, DomainError>;

    async fn delete(&self, id: EducationId) -> Result<(), DomainError>;
}
