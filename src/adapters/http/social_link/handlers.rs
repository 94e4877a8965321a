//! HTTP handlers for social link endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath};
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{DomainError, SocialLinkId};
use crate::domain::portfolio::{SocialLink, SocialLinkDraft, SocialLinkPatch};

use super::dto::SocialLinkResponse;

async fn existing_link(state: &AppState, id: SocialLinkId) -> Result<SocialLink, ApiError> {
    state
        .repositories
        .social_links
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("SocialLink", id).into())
}

/// GET /social-links/
pub async fn list_social_links(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let links = state.repositories.social_links.list().await?;
    Ok(Json(
        links
            .into_iter()
            .map(SocialLinkResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /social-links/
pub async fn create_social_link(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<SocialLinkDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let link = state.repositories.social_links.create(&draft).await?;
    tracing::info!(
        social_link_id = %link.id,
        platform = %link.platform,
        "Social link created"
    );
    Ok((StatusCode::CREATED, Json(SocialLinkResponse::from(link))))
}

/// GET /social-links/:id/
pub async fn get_social_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SocialLinkId>,
) -> Result<impl IntoResponse, ApiError> {
    let link = existing_link(&state, id).await?;
    Ok(Json(SocialLinkResponse::from(link)))
}

/// PUT /social-links/:id/
pub async fn replace_social_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SocialLinkId>,
    ApiJson(draft): ApiJson<SocialLinkDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_link(&state, id).await?;
    draft.validate()?;
    let link = state.repositories.social_links.update(id, &draft).await?;
    Ok(Json(SocialLinkResponse::from(link)))
}

/// PATCH /social-links/:id/
pub async fn update_social_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SocialLinkId>,
    ApiJson(patch): ApiJson<SocialLinkPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_link(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let link = state.repositories.social_links.update(id, &draft).await?;
    tracing::debug!(social_link_id = %id, "Social link updated");
    Ok(Json(SocialLinkResponse::from(link)))
}

/// DELETE /social-links/:id/
pub async fn delete_social_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SocialLinkId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.social_links.delete(id).await?;
    tracing::info!(social_link_id = %id, "Social link deleted");
    Ok(StatusCode::NO_CONTENT)
}
