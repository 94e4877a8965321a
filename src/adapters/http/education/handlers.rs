//! HTTP handlers for education endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath};
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{DomainError, EducationId};
use crate::domain::portfolio::{Education, EducationDraft, EducationPatch};

use super::dto::EducationResponse;

async fn existing_education(state: &AppState, id: EducationId) -> Result<Education, ApiError> {
    state
        .repositories
        .education
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Education", id).into())
}

/// GET /education/
pub async fn list_education(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.repositories.education.list().await?;
    Ok(Json(
        entries
            .into_iter()
            .map(EducationResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /education/
pub async fn create_education(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<EducationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let entry = state.repositories.education.create(&draft).await?;
    tracing::info!(education_id = %entry.id, profile_id = %entry.profile, "Education created");
    Ok((StatusCode::CREATED, Json(EducationResponse::from(entry))))
}

/// GET /education/:id/
pub async fn get_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EducationId>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = existing_education(&state, id).await?;
    Ok(Json(EducationResponse::from(entry)))
}

/// PUT /education/:id/
pub async fn replace_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EducationId>,
    ApiJson(draft): ApiJson<EducationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_education(&state, id).await?;
    draft.validate()?;
    let entry = state.repositories.education.update(id, &draft).await?;
    tracing::debug!(education_id = %id, "Education replaced");
    Ok(Json(EducationResponse::from(entry)))
}

/// PATCH /education/:id/
pub async fn update_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EducationId>,
    ApiJson(patch): ApiJson<EducationPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_education(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let entry = state.repositories.education.update(id, &draft).await?;
    tracing::debug!(education_id = %id, "Education updated");
    Ok(Json(EducationResponse::from(entry)))
}

/// DELETE /education/:id/
pub async fn delete_education(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EducationId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.education.delete(id).await?;
    tracing::info!(education_id = %id, "Education deleted");
    Ok(StatusCode::NO_CONTENT)
}
