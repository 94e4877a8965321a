//! SocialLinkRepository port

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, SocialLinkId};
use crate::domain::portfolio::{SocialLink, SocialLinkDraft};

/// Repository for social links. `(profile, platform)` is unique.
#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SocialLink>, DomainError>;

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<SocialLink>, DomainError>;

    async fn find_by_id(&self, id: SocialLinkId) -> Result<Option<SocialLink>, DomainError>;

    async fn create(&self, draft: &SocialLinkDraft) -> Result<SocialLink, DomainError>;

    async fn update(
        &self,
        id: SocialLinkId,
        draft: &SocialLinkDraft,
    ) -> Result<SocialLink, DomainError>;

    async fn delete(&self, id: SocialLinkId) -> Result<(), DomainError>;
}
