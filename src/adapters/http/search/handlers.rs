//! HTTP handler for cross-entity search.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiQuery;
use crate::adapters::http::state::AppState;
use crate::application::handlers::SearchPortfolioQuery;

use super::dto::{SearchParams, SearchResponse};

/// GET /search/?q=TERM - Projects, skills and work experience matching `q`
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let term = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("q parameter is required".to_string()))?;

    let results = state
        .search_handler()
        .handle(SearchPortfolioQuery { term })
        .await?;
    Ok(Json(SearchResponse::from(results)))
}
