//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::portfolio::{Profile, ProfileDraft};

/// Repository for managing profiles.
///
/// Deleting a profile removes everything it owns.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles in storage order
    async fn list(&self) -> Result<Vec<Profile>, DomainError>;

    /// Find profile by ID
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError>;

    /// The first profile in storage order
    async fn first(&self) -> Result<Option<Profile>, DomainError>;

    /// Insert a new profile
    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, DomainError>;

    /// Replace the writable fields of an existing profile
    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<Profile, DomainError>;

    /// Delete a profile and, by cascade, everything it owns
    async fn delete(&self, id: ProfileId) -> Result<(), DomainError>;

    /// Delete every profile, returning how many were removed
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
