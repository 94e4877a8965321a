//! SkillRepository port

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, SkillId};
use crate::domain::portfolio::{Skill, SkillDraft, SkillUsage};

/// Repository for skills.
///
/// `(profile, name)` is unique; a conflicting write fails validation.
/// Deleting a skill removes its project associations.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, DomainError>;

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Skill>, DomainError>;

    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, DomainError>;

    async fn create(&self, draft: &SkillDraft) -> Result<Skill, DomainError>;

    async fn update(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill, DomainError>;

    async fn delete(&self, id: SkillId) -> Result<(), DomainError>;

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError>;

    /// Every skill with the number of projects referencing it, in id order
    async fn usage(&self) -> Result<Vec<SkillUsage>, DomainError>;

    /// Skills whose name contains `term` (case-insensitive), with usage counts
    async fn search(&self, term: &str) -> Result<Vec<SkillUsage>, DomainError>;
}
