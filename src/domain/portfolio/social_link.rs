//! Social links of a profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{non_null, nullable, DomainError, ProfileId, SocialLinkId, ValidationError};

use super::validate::FieldChecks;

/// Platform a social link points at. At most one link per platform per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Linkedin,
    Portfolio,
    Twitter,
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Portfolio => "portfolio",
            Platform::Twitter => "twitter",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Platform::Github),
            "linkedin" => Ok(Platform::Linkedin),
            "portfolio" => Ok(Platform::Portfolio),
            "twitter" => Ok(Platform::Twitter),
            "other" => Ok(Platform::Other),
            other => Err(ValidationError::invalid_format(
                "platform",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }
}

/// A stored social link. `(profile, platform)` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub id: SocialLinkId,
    pub profile: ProfileId,
    pub platform: Platform,
    pub url: String,
    pub description: Option<String>,
}

impl SocialLink {
    pub fn draft(&self) -> SocialLinkDraft {
        SocialLinkDraft {
            profile: self.profile,
            platform: self.platform,
            url: self.url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Full write payload for a social link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLinkDraft {
    pub profile: ProfileId,
    pub platform: Platform,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SocialLinkDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .url("url", &self.url)
            .optional("description", self.description.as_deref(), 100)
            .finish()
    }
}

/// Partial write payload for a social link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinkPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub profile: Option<ProfileId>,
    #[serde(default, deserialize_with = "non_null")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "non_null")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl SocialLinkPatch {
    pub fn apply(self, mut draft: SocialLinkDraft) -> SocialLinkDraft {
        if let Some(profile) = self.profile {
            draft.profile = profile;
        }
        if let Some(platform) = self.platform {
            draft.platform = platform;
        }
        if let Some(url) = self.url {
            draft.url = url;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_deserializes_lowercase() {
        let draft: SocialLinkDraft = serde_json::from_str(
            r#"{"profile": 1, "platform": "linkedin", "url": "https://linkedin.com/in/johndoe"}"#,
        )
        .unwrap();
        assert_eq!(draft.platform, Platform::Linkedin);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let result = serde_json::from_str::<SocialLinkDraft>(
            r#"{"profile": 1, "platform": "myspace", "url": "https://myspace.com/j"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn platform_parses_from_storage_string() {
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert!("myspace".parse::<Platform>().is_err());
    }
}
