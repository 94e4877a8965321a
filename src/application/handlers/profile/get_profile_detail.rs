//! GetProfileDetailHandler - A profile with everything it owns.

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::portfolio::{Profile, ProfileDetail};
use crate::ports::Repositories;

use super::super::project::load_project_details;

/// Query to get a profile by ID.
#[derive(Debug, Clone)]
pub struct GetProfileDetailQuery {
    pub profile_id: ProfileId,
}

/// Handler assembling the full profile payload. Every owned collection is
/// read in id order.
pub struct GetProfileDetailHandler {
    repositories: Repositories,
}

impl GetProfileDetailHandler {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    pub async fn handle(&self, query: GetProfileDetailQuery) -> Result<ProfileDetail, DomainError> {
        let profile = self
            .repositories
            .profiles
            .find_by_id(query.profile_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", query.profile_id))?;
        self.assemble(profile).await
    }

    /// Full payload for every stored profile, in id order.
    pub async fn list(&self) -> Result<Vec<ProfileDetail>, DomainError> {
        let profiles = self.repositories.profiles.list().await?;
        let mut details = Vec::with_capacity(profiles.len());
        for profile in profiles {
            details.push(self.assemble(profile).await?);
        }
        Ok(details)
    }

    /// Loads the records owned by an already fetched profile.
    pub async fn assemble(&self, profile: Profile) -> Result<ProfileDetail, DomainError> {
        let repos = &self.repositories;
        let projects = repos.projects.list_by_profile(profile.id).await?;
        let projects = load_project_details(repos.projects.as_ref(), projects).await?;

        Ok(ProfileDetail {
            education: repos.education.list_by_profile(profile.id).await?,
            skills: repos.skills.list_by_profile(profile.id).await?,
            projects,
            work_experience: repos.work_experience.list_by_profile(profile.id).await?,
            social_links: repos.social_links.list_by_profile(profile.id).await?,
            profile,
        })
    }
}
