//! Data Transfer Objects for the search endpoint.

use serde::{Deserialize, Serialize};

use crate::adapters::http::project::dto::ProjectSummaryResponse;
use crate::adapters::http::skill::dto::SkillSummaryResponse;
use crate::adapters::http::work_experience::dto::WorkExperienceResponse;
use crate::domain::portfolio::SearchResults;

/// Query parameters for `GET /search/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Matches of one entity type.
#[derive(Debug, Clone, Serialize)]
pub struct SearchGroup<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchGroup<T> {
    fn collect<S: Into<T>>(items: Vec<S>) -> Self {
        let data: Vec<T> = items.into_iter().map(Into::into).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchGroups {
    pub projects: SearchGroup<ProjectSummaryResponse>,
    pub skills: SearchGroup<SkillSummaryResponse>,
    pub work_experience: SearchGroup<WorkExperienceResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: SearchGroups,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            query: results.query,
            results: SearchGroups {
                projects: SearchGroup::collect(results.projects),
                skills: SearchGroup::collect(results.skills),
                work_experience: SearchGroup::collect(results.work_experience),
            },
        }
    }
}
