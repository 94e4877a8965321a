//! Data Transfer Objects for education endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{EducationId, ProfileId};
use crate::domain::portfolio::Education;

#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    pub id: EducationId,
    pub profile: ProfileId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id,
            profile: entry.profile,
            institution: entry.institution,
            degree: entry.degree,
            field_of_study: entry.field_of_study,
            start_date: entry.start_date,
            end_date: entry.end_date,
            description: entry.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_entry_serializes_null_end_date() {
        let response = EducationResponse::from(Education {
            id: EducationId::new(1),
            profile: ProfileId::new(1),
            institution: "University of Technology".to_string(),
            degree: "MSc".to_string(),
            field_of_study: None,
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            end_date: None,
            description: None,
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["start_date"], "2024-09-01");
        assert!(json["end_date"].is_null());
        assert_eq!(json["profile"], 1);
    }
}
