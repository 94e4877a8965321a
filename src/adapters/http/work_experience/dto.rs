//! Data Transfer Objects for work experience endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{ProfileId, WorkExperienceId};
use crate::domain::portfolio::WorkExperience;

#[derive(Debug, Clone, Serialize)]
pub struct WorkExperienceResponse {
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

impl From<WorkExperience> for WorkExperienceResponse {
    fn from(entry: WorkExperience) -> Self {
        Self {
            id: entry.id,
            profile: entry.profile,
            company: entry.company,
            position: entry.position,
            location: entry.location,
            start_date: entry.start_date,
            end_date: entry.end_date,
            is_current: entry.is_current,
            description: entry.description,
        }
    }
}
