//! Strongly-typed identifier value objects.
//!
//! Every record is identified by a storage-assigned 64-bit integer. The
//! newtypes keep a `SkillId` from being passed where a `ProjectId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw storage identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw storage identifier.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a profile, the root of every portfolio.
    ProfileId
);
integer_id!(
    /// Identifier of an education entry.
    EducationId
);
integer_id!(
    /// Identifier of a skill.
    SkillId
);
integer_id!(
    /// Identifier of a project.
    ProjectId
);
integer_id!(
    /// Identifier of a link attached to a project.
    ProjectLinkId
);
integer_id!(
    /// Identifier of a project/skill association.
    ProjectSkillId
);
integer_id!(
    /// Identifier of a work experience entry.
    WorkExperienceId
);
integer_id!(
    /// Identifier of a social link.
    SocialLinkId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_displays_raw_value() {
        assert_eq!(ProfileId::new(42).to_string(), "42");
    }

    #[test]
    fn id_parses_from_string() {
        let id: SkillId = "17".parse().unwrap();
        assert_eq!(id, SkillId::new(17));
    }

    #[test]
    fn id_rejects_non_numeric_string() {
        assert!("abc".parse::<ProjectId>().is_err());
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&WorkExperienceId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: SocialLinkId = serde_json::from_str("9").unwrap();
        assert_eq!(id.as_i64(), 9);
    }

    #[test]
    fn ids_order_by_value() {
        assert!(EducationId::new(1) < EducationId::new(2));
    }
}
