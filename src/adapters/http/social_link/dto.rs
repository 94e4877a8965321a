//! Data Transfer Objects for social link endpoints.

use serde::Serialize;

use crate::domain::foundation::{ProfileId, SocialLinkId};
use crate::domain::portfolio::{Platform, SocialLink};

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkResponse {
    pub id: SocialLinkId,
    pub profile: ProfileId,
    pub platform: Platform,
    pub url: String,
    pub description: Option<String>,
}

impl From<SocialLink> for SocialLinkResponse {
    fn from(link: SocialLink) -> Self {
        Self {
            id: link.id,
            profile: link.profile,
            platform: link.platform,
            url: link.url,
            description: link.description,
        }
    }
}
