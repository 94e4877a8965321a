//! HTTP handlers for profile endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetProfileDetailQuery, GetProfileSummaryQuery};
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::portfolio::{Profile, ProfileDraft, ProfilePatch};

use super::dto::{ProfileResponse, ProfileSummaryResponse, SummaryParams};

async fn existing_profile(state: &AppState, id: ProfileId) -> Result<Profile, ApiError> {
    state
        .repositories
        .profiles
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Profile", id).into())
}

async fn profile_payload(state: &AppState, profile: Profile) -> Result<ProfileResponse, ApiError> {
    let detail = state.profile_detail_handler().assemble(profile).await?;
    Ok(ProfileResponse::from(detail))
}

/// GET /profiles/
pub async fn list_profiles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let details = state.profile_detail_handler().list().await?;
    Ok(Json(
        details
            .into_iter()
            .map(ProfileResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /profiles/
pub async fn create_profile(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ProfileDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let profile = state.repositories.profiles.create(&draft).await?;
    tracing::info!(profile_id = %profile.id, "Profile created");
    let payload = profile_payload(&state, profile).await?;
    Ok((StatusCode::CREATED, Json(payload)))
}

/// GET /profiles/:id/
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProfileId>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .profile_detail_handler()
        .handle(GetProfileDetailQuery { profile_id: id })
        .await?;
    Ok(Json(ProfileResponse::from(detail)))
}

/// PUT /profiles/:id/
pub async fn replace_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProfileId>,
    ApiJson(draft): ApiJson<ProfileDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_profile(&state, id).await?;
    draft.validate()?;
    let profile = state.repositories.profiles.update(id, &draft).await?;
    tracing::debug!(profile_id = %id, "Profile replaced");
    Ok(Json(profile_payload(&state, profile).await?))
}

/// PATCH /profiles/:id/
pub async fn update_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProfileId>,
    ApiJson(patch): ApiJson<ProfilePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_profile(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let profile = state.repositories.profiles.update(id, &draft).await?;
    tracing::debug!(profile_id = %id, "Profile updated");
    Ok(Json(profile_payload(&state, profile).await?))
}

/// DELETE /profiles/:id/ - Cascades to every owned record
pub async fn delete_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProfileId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.profiles.delete(id).await?;
    tracing::info!(profile_id = %id, "Profile deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /profile/summary/[?profile=ID]
pub async fn profile_summary(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SummaryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .profile_summary_handler()
        .handle(GetProfileSummaryQuery {
            profile_id: params.profile,
        })
        .await?;
    Ok(Json(ProfileSummaryResponse::from(summary)))
}
