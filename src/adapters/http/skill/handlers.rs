//! HTTP handlers for skill endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::adapters::http::state::AppState;
use crate::application::handlers::GetTopSkillsQuery;
use crate::domain::foundation::{DomainError, SkillId};
use crate::domain::portfolio::{Skill, SkillDraft, SkillPatch, DEFAULT_TOP_SKILLS_LIMIT};

use super::dto::{SkillResponse, TopSkillsParams, TopSkillsResponse};

async fn existing_skill(state: &AppState, id: SkillId) -> Result<Skill, ApiError> {
    state
        .repositories
        .skills
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Skill", id).into())
}

/// GET /skills/
pub async fn list_skills(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let skills = state.repositories.skills.list().await?;
    Ok(Json(
        skills.into_iter().map(SkillResponse::from).collect::<Vec<_>>(),
    ))
}

/// POST /skills/
pub async fn create_skill(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<SkillDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let skill = state.repositories.skills.create(&draft).await?;
    tracing::info!(skill_id = %skill.id, profile_id = %skill.profile, "Skill created");
    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

/// GET /skills/:id/
pub async fn get_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SkillId>,
) -> Result<impl IntoResponse, ApiError> {
    let skill = existing_skill(&state, id).await?;
    Ok(Json(SkillResponse::from(skill)))
}

/// PUT /skills/:id/ - Replace every field
pub async fn replace_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SkillId>,
    ApiJson(draft): ApiJson<SkillDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_skill(&state, id).await?;
    draft.validate()?;
    let skill = state.repositories.skills.update(id, &draft).await?;
    tracing::debug!(skill_id = %id, "Skill replaced");
    Ok(Json(SkillResponse::from(skill)))
}

/// PATCH /skills/:id/ - Update only the supplied fields
pub async fn update_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SkillId>,
    ApiJson(patch): ApiJson<SkillPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_skill(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let skill = state.repositories.skills.update(id, &draft).await?;
    tracing::debug!(skill_id = %id, "Skill updated");
    Ok(Json(SkillResponse::from(skill)))
}

/// DELETE /skills/:id/ - Also removes the skill's project associations
pub async fn delete_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SkillId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.skills.delete(id).await?;
    tracing::info!(skill_id = %id, "Skill deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /skills/top/?limit=N - Skills ranked by project usage
pub async fn top_skills(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TopSkillsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetTopSkillsQuery {
        limit: params.limit.unwrap_or(DEFAULT_TOP_SKILLS_LIMIT),
    };
    let skills = state.top_skills_handler().handle(query).await?;
    Ok(Json(TopSkillsResponse::from(skills)))
}
