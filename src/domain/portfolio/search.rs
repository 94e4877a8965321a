//! Case-insensitive substring matching used by search and skill filters.

use super::project::{Project, ProjectSummary};
use super::skill::{Skill, SkillUsage};
use super::work_experience::WorkExperience;

/// True if `needle` occurs in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if the project's title or description matches.
pub fn project_matches(project: &Project, term: &str) -> bool {
    contains_ignore_case(&project.title, term) || contains_ignore_case(&project.description, term)
}

/// True if the skill's name matches.
pub fn skill_matches(skill: &Skill, term: &str) -> bool {
    contains_ignore_case(&skill.name, term)
}

/// True if the company, position, or description matches.
pub fn work_experience_matches(entry: &WorkExperience, term: &str) -> bool {
    contains_ignore_case(&entry.company, term)
        || contains_ignore_case(&entry.position, term)
        || entry
            .description
            .as_deref()
            .is_some_and(|d| contains_ignore_case(d, term))
}

/// Matches of one search term, grouped by entity type.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: String,
    pub projects: Vec<ProjectSummary>,
    pub skills: Vec<SkillUsage>,
    pub work_experience: Vec<WorkExperience>,
}
