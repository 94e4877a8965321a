//! Data Transfer Objects for profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::http::education::dto::EducationResponse;
use crate::adapters::http::project::dto::ProjectResponse;
use crate::adapters::http::skill::dto::SkillResponse;
use crate::adapters::http::social_link::dto::SocialLinkResponse;
use crate::adapters::http::work_experience::dto::WorkExperienceResponse;
use crate::domain::foundation::ProfileId;
use crate::domain::portfolio::{ProfileDetail, ProfileSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /profile/summary/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryParams {
    pub profile: Option<ProfileId>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full profile payload with every owned collection.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub education: Vec<EducationResponse>,
    pub skills: Vec<SkillResponse>,
    pub projects: Vec<ProjectResponse>,
    pub work_experience: Vec<WorkExperienceResponse>,
    pub social_links: Vec<SocialLinkResponse>,
}

impl From<ProfileDetail> for ProfileResponse {
    fn from(detail: ProfileDetail) -> Self {
        let profile = detail.profile;
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            bio: profile.bio,
            created_at: *profile.created_at.as_datetime(),
            updated_at: *profile.updated_at.as_datetime(),
            education: detail.education.into_iter().map(Into::into).collect(),
            skills: detail.skills.into_iter().map(Into::into).collect(),
            projects: detail.projects.into_iter().map(Into::into).collect(),
            work_experience: detail.work_experience.into_iter().map(Into::into).collect(),
            social_links: detail.social_links.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryResponse {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_count: usize,
    pub projects_count: usize,
}

impl From<ProfileSummary> for ProfileSummaryResponse {
    fn from(summary: ProfileSummary) -> Self {
        Self {
            id: summary.profile.id,
            name: summary.profile.name,
            email: summary.profile.email,
            bio: summary.profile.bio,
            skills_count: summary.skills_count,
            projects_count: summary.projects_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::portfolio::Profile;

    fn profile() -> Profile {
        Profile {
            id: ProfileId::new(1),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: None,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn empty_profile_serializes_empty_collections() {
        let response = ProfileResponse::from(ProfileDetail {
            profile: profile(),
            education: vec![],
            skills: vec![],
            projects: vec![],
            work_experience: vec![],
            social_links: vec![],
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert!(json["bio"].is_null());
        assert_eq!(json["social_links"], serde_json::json!([]));
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn summary_flattens_profile_fields() {
        let json = serde_json::to_value(ProfileSummaryResponse::from(ProfileSummary {
            profile: profile(),
            skills_count: 10,
            projects_count: 3,
        }))
        .unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["skills_count"], 10);
        assert_eq!(json["projects_count"], 3);
        assert!(json.get("created_at").is_none());
    }
}
