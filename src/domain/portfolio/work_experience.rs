//! Work experience entries of a profile.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{non_null, nullable, DomainError, ProfileId, WorkExperienceId};

use super::validate::FieldChecks;

/// A stored work experience entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub id: WorkExperienceId,
    pub profile: ProfileId,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

impl WorkExperience {
    pub fn draft(&self) -> WorkExperienceDraft {
        WorkExperienceDraft {
            profile: self.profile,
            company: self.company.clone(),
            position: self.position.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            description: self.description.clone(),
        }
    }
}

/// Full write payload for a work experience entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkExperienceDraft {
    pub profile: ProfileId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl WorkExperienceDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .required("company", &self.company, Some(200))
            .required("position", &self.position, Some(100))
            .optional("location", self.location.as_deref(), 100)
            .finish()
    }
}

/// Partial write payload for a work experience entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkExperiencePatch {
    #[serde(default, deserialize_with = "non_null")]
    pub profile: Option<ProfileId>,
    #[serde(default, deserialize_with = "non_null")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_current: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl WorkExperiencePatch {
    pub fn apply(self, mut draft: WorkExperienceDraft) -> WorkExperienceDraft {
        if let Some(profile) = self.profile {
            draft.profile = profile;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(position) = self.position {
            draft.position = position;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = end_date;
        }
        if let Some(is_current) = self.is_current {
            draft.is_current = is_current;
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
    fn current_role_without_end_date_is_valid() {
        let draft: WorkExperienceDraft = serde_json::from_str(
            r#"{
                "profile": 1,
                "company": "Tech Solutions Inc.",
                "position": "Senior Full Stack Developer",
                "start_date": "2022-07-01",
                "is_current": true
            }"#,
        )
        .unwrap();
        assert!(draft.is_current);
        assert!(draft.end_date.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn long_location_is_rejected() {
        let draft: WorkExperienceDraft = serde_json::from_str(&format!(
            r#"{{"profile": 1, "company": "A", "position": "B", "start_date": "2022-07-01", "location": "{}"}}"#,
            "x".repeat(101)
        ))
        .unwrap();
        assert!(draft.validate().unwrap_err().details.contains_key("location"));
    }

    #[test]
    fn patch_marks_role_finished() {
        let draft = WorkExperienceDraft {
            profile: ProfileId::new(1),
            company: "StartupXYZ".to_string(),
            position: "Developer".to_string(),
            location: Some("Remote".to_string()),
            start_date: NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(),
            end_date: None,
            is_current: true,
            description: None,
        };
        let patch: WorkExperiencePatch =
            serde_json::from_str(r#"{"is_current": false, "end_date": "2022-06-30"}"#).unwrap();
        let patched = patch.apply(draft);
        assert!(!patched.is_current);
        assert_eq!(patched.end_date, NaiveDate::from_ymd_opt(2022, 6, 30));
        assert_eq!(patched.location.as_deref(), Some("Remote"));
    }
}
