//! HTTP handlers for work experience endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath};
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{DomainError, WorkExperienceId};
use crate::domain::portfolio::{WorkExperience, WorkExperienceDraft, WorkExperiencePatch};

use super::dto::WorkExperienceResponse;

async fn existing_entry(
    state: &AppState,
    id: WorkExperienceId,
) -> Result<WorkExperience, ApiError> {
    state
        .repositories
        .work_experience
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("WorkExperience", id).into())
}

/// GET /work-experience/
pub async fn list_work_experience(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state.repositories.work_experience.list().await?;
    Ok(Json(
        entries
            .into_iter()
            .map(WorkExperienceResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /work-experience/
pub async fn create_work_experience(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<WorkExperienceDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let entry = state.repositories.work_experience.create(&draft).await?;
    tracing::info!(
        work_experience_id = %entry.id,
        profile_id = %entry.profile,
        "Work experience created"
    );
    Ok((StatusCode::CREATED, Json(WorkExperienceResponse::from(entry))))
}

/// GET /work-experience/:id/
pub async fn get_work_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WorkExperienceId>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = existing_entry(&state, id).await?;
    Ok(Json(WorkExperienceResponse::from(entry)))
}

/// PUT /work-experience/:id/
pub async fn replace_work_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WorkExperienceId>,
    ApiJson(draft): ApiJson<WorkExperienceDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_entry(&state, id).await?;
    draft.validate()?;
    let entry = state.repositories.work_experience.update(id, &draft).await?;
    Ok(Json(WorkExperienceResponse::from(entry)))
}

/// PATCH /work-experience/:id/
pub async fn update_work_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WorkExperienceId>,
    ApiJson(patch): ApiJson<WorkExperiencePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_entry(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let entry = state.repositories.work_experience.update(id, &draft).await?;
    tracing::debug!(work_experience_id = %id, "Work experience updated");
    Ok(Json(WorkExperienceResponse::from(entry)))
}

/// DELETE /work-experience/:id/
pub async fn delete_work_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WorkExperienceId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.work_experience.delete(id).await?;
    tracing::info!(work_experience_id = %id, "Work experience deleted");
    Ok(StatusCode::NO_CONTENT)
}
