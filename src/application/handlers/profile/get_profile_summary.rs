//! GetProfileSummaryHandler - A profile reduced to counts.
//!
//! The profile is resolved from the query, then the configured default,
//! then the first stored profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::portfolio::{Profile, ProfileSummary};
use crate::ports::{ProfileRepository, ProjectRepository, SkillRepository};

/// Query for a profile summary. `profile_id` overrides the default.
#[derive(Debug, Clone, Default)]
pub struct GetProfileSummaryQuery {
    pub profile_id: Option<ProfileId>,
}

pub struct GetProfileSummaryHandler {
    profiles: Arc<dyn ProfileRepository>,
    skills: Arc<dyn SkillRepository>,
    projects: Arc<dyn ProjectRepository>,
    default_profile: Option<ProfileId>,
}

impl GetProfileSummaryHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        skills: Arc<dyn SkillRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            profiles,
            skills,
            projects,
            default_profile: None,
        }
    }

    /// Profile used when the query names none.
    pub fn with_default_profile(mut self, profile: Option<ProfileId>) -> Self {
        self.default_profile = profile;
        self
    }

    pub async fn handle(&self, query: GetProfileSummaryQuery) -> Result<ProfileSummary, DomainError> {
        let profile = self.resolve(query.profile_id).await?;

        Ok(ProfileSummary {
            skills_count: self.skills.count_by_profile(profile.id).await?,
            projects_count: self.projects.count_by_profile(profile.id).await?,
            profile,
        })
    }

    async fn resolve(&self, requested: Option<ProfileId>) -> Result<Profile, DomainError> {
        if let Some(id) = requested {
            return self
                .profiles
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Profile", id));
        }

        if let Some(id) = self.default_profile {
            match self.profiles.find_by_id(id).await? {
                Some(profile) => return Ok(profile),
                None => tracing::warn!(
                    profile_id = %id,
                    "Configured default profile does not exist, using first profile"
                ),
            }
        }

        self.profiles
            .first()
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "No profile found"))
    }
}
