//! Portfolio behavior configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::ProfileId;

/// Settings for the read-side portfolio queries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioConfig {
    /// Profile shown by the summary endpoint when the request names none.
    /// Falls back to the first stored profile when unset.
    pub default_profile_id: Option<i64>,
}

impl PortfolioConfig {
    pub fn default_profile(&self) -> Option<ProfileId> {
        self.default_profile_id.map(ProfileId::new)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.default_profile_id {
            Some(id) if id <= 0 => Err(ValidationError::InvalidDefaultProfile),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_optional() {
        let config = PortfolioConfig::default();
        assert!(config.default_profile().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_default_profile_is_rejected() {
        let config = PortfolioConfig {
            default_profile_id: Some(0),
        };
        assert!(config.validate().is_err());
    }
}
