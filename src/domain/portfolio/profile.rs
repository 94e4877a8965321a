//! Profile - the root of a portfolio.

use serde::Deserialize;

use crate::domain::foundation::{non_null, nullable, DomainError, ProfileId, Timestamp};

use super::education::Education;
use super::project::ProjectDetail;
use super::skill::Skill;
use super::social_link::SocialLink;
use super::validate::FieldChecks;
use super::work_experience::WorkExperience;

/// A stored profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// The writable fields of this profile.
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Full write payload for a profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .required("name", &self.name, Some(100))
            .email("email", &self.email)
            .finish()
    }
}

/// Partial write payload for a profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
}

impl ProfilePatch {
    pub fn apply(self, mut draft: ProfileDraft) -> ProfileDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(bio) = self.bio {
            draft.bio = bio;
        }
        draft
    }
}

/// A profile with every record it owns.
#[derive(Debug, Clone)]
pub struct ProfileDetail {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<ProjectDetail>,
    pub work_experience: Vec<WorkExperience>,
    pub social_links: Vec<SocialLink>,
}

/// A profile reduced to counts of what it owns.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub profile: Profile,
    pub skills_count: usize,
    pub projects_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: Some("Developer".to_string()),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn missing_name_is_reported() {
        let draft: ProfileDraft =
            serde_json::from_str(r#"{"email": "john.doe@example.com"}"#).unwrap();
        let err = draft.validate().unwrap_err();
        assert!(err.details.contains_key("name"));
    }

    #[test]
    fn invalid_email_is_reported() {
        let draft = ProfileDraft {
            email: "john".to_string(),
            ..draft()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.details.contains_key("email"));
    }

    #[test]
    fn patch_keeps_omitted_fields() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        let patched = patch.apply(draft());
        assert_eq!(patched.name, "Jane");
        assert_eq!(patched.email, "john.doe@example.com");
        assert_eq!(patched.bio.as_deref(), Some("Developer"));
    }

    #[test]
    fn patch_null_clears_bio() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(patch.apply(draft()).bio, None);
    }
}
