//! HTTP handlers for project endpoints.
//!
//! Project payloads always carry their links and skill associations, so
//! every write re-reads the project through the detail handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetProjectDetailQuery, ListProjectsBySkillQuery};
use crate::domain::foundation::{DomainError, ProjectId, ProjectLinkId, ProjectSkillId};
use crate::domain::portfolio::{Project, ProjectDraft, ProjectPatch};

use super::dto::{
    AttachSkillRequest, BySkillParams, CreateProjectLinkRequest, ProjectLinkResponse,
    ProjectResponse, ProjectSkillResponse, ProjectsBySkillResponse,
};

async fn existing_project(state: &AppState, id: ProjectId) -> Result<Project, ApiError> {
    state
        .repositories
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Project", id).into())
}

async fn project_payload(state: &AppState, project: Project) -> Result<ProjectResponse, ApiError> {
    let detail = state.project_detail_handler().assemble(project).await?;
    Ok(ProjectResponse::from(detail))
}

// ════════════════════════════════════════════════════════════════════════════
// CRUD
// ════════════════════════════════════════════════════════════════════════════

/// GET /projects/
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let details = state.project_detail_handler().list().await?;
    Ok(Json(
        details
            .into_iter()
            .map(ProjectResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /projects/
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ProjectDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let project = state.repositories.projects.create(&draft).await?;
    tracing::info!(project_id = %project.id, profile_id = %project.profile, "Project created");
    let payload = project_payload(&state, project).await?;
    Ok((StatusCode::CREATED, Json(payload)))
}

/// GET /projects/:id/
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .project_detail_handler()
        .handle(GetProjectDetailQuery { project_id: id })
        .await?;
    Ok(Json(ProjectResponse::from(detail)))
}

/// PUT /projects/:id/
pub async fn replace_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
    ApiJson(draft): ApiJson<ProjectDraft>,
) -> Result<impl IntoResponse, ApiError> {
    existing_project(&state, id).await?;
    draft.validate()?;
    let project = state.repositories.projects.update(id, &draft).await?;
    tracing::debug!(project_id = %id, "Project replaced");
    Ok(Json(project_payload(&state, project).await?))
}

/// PATCH /projects/:id/
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = existing_project(&state, id).await?;
    let draft = patch.apply(existing.draft());
    draft.validate()?;
    let project = state.repositories.projects.update(id, &draft).await?;
    tracing::debug!(project_id = %id, "Project updated");
    Ok(Json(project_payload(&state, project).await?))
}

/// DELETE /projects/:id/ - Also removes its links and skill associations
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.projects.delete(id).await?;
    tracing::info!(project_id = %id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// Links and skill associations
// ════════════════════════════════════════════════════════════════════════════

/// POST /projects/:id/links/
pub async fn add_project_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
    ApiJson(request): ApiJson<CreateProjectLinkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    existing_project(&state, id).await?;
    let draft = request.into_draft(id);
    draft.validate()?;
    let link = state.repositories.projects.add_link(&draft).await?;
    tracing::info!(project_id = %id, link_id = %link.id, "Project link added");
    Ok((StatusCode::CREATED, Json(ProjectLinkResponse::from(link))))
}

/// DELETE /project-links/:id/
pub async fn delete_project_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectLinkId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.projects.delete_link(id).await?;
    tracing::info!(link_id = %id, "Project link deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /projects/:id/skills/ - Associate an existing skill
pub async fn attach_project_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
    ApiJson(request): ApiJson<AttachSkillRequest>,
) -> Result<impl IntoResponse, ApiError> {
    existing_project(&state, id).await?;
    let project_skill = state
        .repositories
        .projects
        .attach_skill(id, request.skill)
        .await?;
    tracing::info!(project_id = %id, skill_id = %request.skill, "Skill attached to project");
    Ok((
        StatusCode::CREATED,
        Json(ProjectSkillResponse::from(project_skill)),
    ))
}

/// DELETE /project-skills/:id/
pub async fn detach_project_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectSkillId>,
) -> Result<impl IntoResponse, ApiError> {
    state.repositories.projects.detach_skill(id).await?;
    tracing::info!(project_skill_id = %id, "Skill detached from project");
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// Queries
// ════════════════════════════════════════════════════════════════════════════

/// GET /projects/by-skill/?skill=NAME
pub async fn projects_by_skill(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BySkillParams>,
) -> Result<impl IntoResponse, ApiError> {
    let skill = params
        .skill
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("skill parameter is required".to_string()))?;

    let result = state
        .projects_by_skill_handler()
        .handle(ListProjectsBySkillQuery { skill })
        .await?;
    Ok(Json(ProjectsBySkillResponse::from(result)))
}
