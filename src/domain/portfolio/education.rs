//! Education entries of a profile.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{non_null, nullable, DomainError, EducationId, ProfileId};

use super::validate::FieldChecks;

/// A stored education entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub id: EducationId,
    pub profile: ProfileId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Education {
    pub fn draft(&self) -> EducationDraft {
        EducationDraft {
            profile: self.profile,
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
        }
    }
}

/// Full write payload for an education entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationDraft {
    pub profile: ProfileId,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EducationDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        FieldChecks::new()
            .required("institution", &self.institution, Some(200))
            .required("degree", &self.degree, Some(100))
            .optional("field_of_study", self.field_of_study.as_deref(), 100)
            .finish()
    }
}

/// Partial write payload for an education entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub profile: Option<ProfileId>,
    #[serde(default, deserialize_with = "non_null")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub field_of_study: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl EducationPatch {
    pub fn apply(self, mut draft: EducationDraft) -> EducationDraft {
        if let Some(profile) = self.profile {
            draft.profile = profile;
        }
        if let Some(institution) = self.institution {
            draft.institution = institution;
        }
        if let Some(degree) = self.degree {
            draft.degree = degree;
        }
        if let Some(field_of_study) = self.field_of_study {
            draft.field_of_study = field_of_study;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = end_date;
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
    fn draft_deserializes_iso_dates() {
        let draft: EducationDraft = serde_json::from_str(
            r#"{
                "profile": 1,
                "institution": "University of Technology",
                "degree": "Bachelor of Science",
                "start_date": "2018-09-01",
                "end_date": "2022-06-30"
            }"#,
        )
        .unwrap();

        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2018, 9, 1).unwrap());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn end_date_before_start_is_allowed() {
        let draft = EducationDraft {
            profile: ProfileId::new(1),
            institution: "U".to_string(),
            degree: "BSc".to_string(),
            field_of_study: None,
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            description: None,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_degree_is_reported() {
        let draft: EducationDraft = serde_json::from_str(
            r#"{"profile": 1, "institution": "U", "degree": " ", "start_date": "2018-09-01"}"#,
        )
        .unwrap();
        assert!(draft.validate().unwrap_err().details.contains_key("degree"));
    }
}
