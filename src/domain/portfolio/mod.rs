//! Portfolio module - the profile aggregate and everything it owns.
//!
//! Each entity comes with a stored record type, a full write payload
//! (`*Draft`, used by create and replace) and a partial one (`*Patch`).
//! Drafts validate their own fields; referential integrity and uniqueness
//! are enforced by the repositories.

mod education;
mod profile;
mod project;
mod ranking;
mod search;
mod skill;
mod social_link;
mod validate;
mod work_experience;

pub use education::{Education, EducationDraft, EducationPatch};
pub use profile::{Profile, ProfileDetail, ProfileDraft, ProfilePatch, ProfileSummary};
pub use project::{
    LinkType, Project, ProjectDetail, ProjectDraft, ProjectLink, ProjectLinkDraft, ProjectPatch,
    ProjectSkill, ProjectSummary,
};
pub use ranking::{rank_top_skills, DEFAULT_TOP_SKILLS_LIMIT};
pub use search::{
    contains_ignore_case, project_matches, skill_matches, work_experience_matches, SearchResults,
};
pub use skill::{Skill, SkillDraft, SkillLevel, SkillPatch, SkillUsage};
pub use social_link::{Platform, SocialLink, SocialLinkDraft, SocialLinkPatch};
pub use work_experience::{WorkExperience, WorkExperienceDraft, WorkExperiencePatch};
