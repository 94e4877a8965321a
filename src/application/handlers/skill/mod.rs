//! Skill query handlers.

mod get_top_skills;

pub use get_top_skills::{GetTopSkillsHandler, GetTopSkillsQuery};
