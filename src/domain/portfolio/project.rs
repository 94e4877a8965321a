//! Projects, their links, and the skills they use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    non_null, nullable, DomainError, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId,
    Timestamp, ValidationError,
};

use super::skill::SkillLevel;
use super::validate::FieldChecks;

/// A stored project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub profile: ProfileId,
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub created_at: Timestamp,
}

impl Project {
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            profile: self.profile,
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_ongoing: self.is_ongoing,
        }
    }
}

/// Full write payload for a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectDraft {
    pub profile: ProfileId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_ongoing: bool,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .required("title", &self.title, Some(200))
            .required("description", &self.description, None)
            .finish()
    }
}

/// Partial write payload for a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub profile: Option<ProfileId>,
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_ongoing: Option<bool>,
}

impl ProjectPatch {
    pub fn apply(self, mut draft: ProjectDraft) -> ProjectDraft {
        if let Some(profile) = self.profile {
            draft.profile = profile;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = end_date;
        }
        if let Some(is_ongoing) = self.is_ongoing {
            draft.is_ongoing = is_ongoing;
        }
        draft
    }
}

/// Kind of resource a project link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Github,
    Demo,
    Documentation,
    Other,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Github => "github",
            LinkType::Demo => "demo",
            LinkType::Documentation => "documentation",
            LinkType::Other => "other",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(LinkType::Github),
            "demo" => Ok(LinkType::Demo),
            "documentation" => Ok(LinkType::Documentation),
            "other" => Ok(LinkType::Other),
            other => Err(ValidationError::invalid_format(
                "link_type",
                format!("\"{}\" is not a valid choice.", other),
            )),
        }
    }
}

/// A stored project link.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLink {
    pub id: ProjectLinkId,
    pub project: ProjectId,
    pub url: String,
    pub link_type: LinkType,
    pub description: Option<String>,
}

/// Write payload for a project link.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLinkDraft {
    pub project: ProjectId,
    pub url: String,
    pub link_type: LinkType,
    pub description: Option<String>,
}

impl ProjectLinkDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .url("url", &self.url)
            .optional("description", self.description.as_deref(), 100)
            .finish()
    }
}

/// A project/skill association, carrying the skill's name and level.
/// `(project, skill)` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSkill {
    pub id: ProjectSkillId,
    pub project: ProjectId,
    pub skill: SkillId,
    pub skill_name: String,
    pub skill_level: SkillLevel,
}

/// A project with its links and skill associations, both in id order.
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub project: Project,
    pub links: Vec<ProjectLink>,
    pub project_skills: Vec<ProjectSkill>,
}

impl ProjectDetail {
    /// Names of the linked skills in association order.
    pub fn skill_names(&self) -> Vec<String> {
        self.project_skills
            .iter()
            .map(|ps| ps.skill_name.clone())
            .collect()
    }
}

/// A project reduced to its skill names and link count.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub project: Project,
    pub skills: Vec<String>,
    pub links_count: usize,
}

impl From<ProjectDetail> for ProjectSummary {
    fn from(detail: ProjectDetail) -> Self {
        let skills = detail.skill_names();
        Self {
            links_count: detail.links.len(),
            skills,
            project: detail.project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: ProjectId::new(1),
            profile: ProfileId::new(1),
            title: "E-commerce Platform".to_string(),
            description: "Built with Django and React".to_string(),
            start_date: None,
            end_date: None,
            is_ongoing: false,
            created_at: Timestamp::now(),
        }
    }

    fn association(id: i64, skill: i64, name: &str) -> ProjectSkill {
        ProjectSkill {
            id: ProjectSkillId::new(id),
            project: ProjectId::new(1),
            skill: SkillId::new(skill),
            skill_name: name.to_string(),
            skill_level: SkillLevel::Expert,
        }
    }

    #[test]
    fn summary_lists_skill_names_in_association_order() {
        let detail = ProjectDetail {
            project: project(),
            links: vec![ProjectLink {
                id: ProjectLinkId::new(1),
                project: ProjectId::new(1),
                url: "https://github.com/johndoe/ecommerce-platform".to_string(),
                link_type: LinkType::Github,
                description: None,
            }],
            project_skills: vec![association(1, 2, "Django"), association(2, 1, "Python")],
        };

        let summary = ProjectSummary::from(detail);
        assert_eq!(summary.skills, vec!["Django", "Python"]);
        assert_eq!(summary.links_count, 1);
    }

    #[test]
    fn draft_requires_description() {
        let draft: ProjectDraft =
            serde_json::from_str(r#"{"profile": 1, "title": "Weather Dashboard"}"#).unwrap();
        let err = draft.validate().unwrap_err();
        assert!(err.details.contains_key("description"));
        assert!(!draft.is_ongoing);
    }

    #[test]
    fn patch_can_clear_end_date() {
        let mut draft = project().draft();
        draft.end_date = NaiveDate::from_ymd_opt(2023, 6, 30);
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"end_date": null, "is_ongoing": true}"#).unwrap();
        let patched = patch.apply(draft);
        assert_eq!(patched.end_date, None);
        assert!(patched.is_ongoing);
    }

    #[test]
    fn link_draft_requires_valid_url() {
        let draft = ProjectLinkDraft {
            project: ProjectId::new(1),
            url: "not a url".to_string(),
            link_type: LinkType::Demo,
            description: None,
        };
        assert!(draft.validate().unwrap_err().details.contains_key("url"));
    }

    #[test]
    fn link_type_round_trips_through_storage_string() {
        for kind in [
            LinkType::Github,
            LinkType::Demo,
            LinkType::Documentation,
            LinkType::Other,
        ] {
            assert_eq!(kind.as_str().parse::<LinkType>().unwrap(), kind);
        }
    }
}
