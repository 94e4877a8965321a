//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the portfolio domain.

mod errors;
mod ids;
mod patch;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError, NON_FIELD_ERRORS};
pub use ids::{
    EducationId, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId, SocialLinkId,
    WorkExperienceId,
};
pub use patch::{non_null, nullable, NULL_NOT_ALLOWED};
pub use timestamp::Timestamp;
