//! Route configuration for project endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_project_link, attach_project_skill, create_project, delete_project, delete_project_link,
    detach_project_skill, get_project, list_projects, projects_by_skill, replace_project,
    update_project,
};

/// Creates the project router.
///
/// `/projects/by-skill/` is a static segment and wins over `/projects/:id/`.
pub fn project_router() -> Router<AppState> {
    Router::new()
        .route("/projects/", get(list_projects).post(create_project))
        .route("/projects/by-skill/", get(projects_by_skill))
        .route(
            "/projects/:id/",
            get(get_project)
                .put(replace_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .route("/projects/:id/links/", post(add_project_link))
        .route("/projects/:id/skills/", post(attach_project_skill))
        .route("/project-links/:id/", delete(delete_project_link))
        .route("/project-skills/:id/", delete(detach_project_skill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{get, seeded_state, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn retrieve_nests_links_and_skills() {
        let app = project_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/projects/1/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "E-commerce Platform");
        assert_eq!(body["links"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["skills"],
            json!(["Python", "Django", "React", "PostgreSQL"])
        );
        assert_eq!(body["project_skills"][0]["skill_level"], "expert");
    }

    #[tokio::test]
    async fn create_starts_without_links_or_skills() {
        let app = project_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::POST,
            "/projects/",
            Some(json!({"profile": 1, "title": "CLI", "description": "A command line tool"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["links"], json!([]));
        assert_eq!(body["skills"], json!([]));
        assert_eq!(body["is_ongoing"], false);
    }

    #[tokio::test]
    async fn patch_keeps_associations() {
        let app = project_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::PATCH,
            "/projects/3/",
            Some(json!({"is_ongoing": false, "end_date": "2024-01-31"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["end_date"], "2024-01-31");
        assert_eq!(body["title"], "Weather Dashboard");
        assert_eq!(body["skills"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn by_skill_matches_substring_case_insensitively() {
        let app = project_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/projects/by-skill/?skill=react").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"], "react");
        assert_eq!(body["count"], 2);
        assert_eq!(body["projects"][0]["title"], "E-commerce Platform");
        assert_eq!(body["projects"][1]["title"], "Weather Dashboard");
        assert_eq!(body["projects"][0]["links_count"], 2);
    }

    #[tokio::test]
    async fn by_skill_lists_each_project_once() {
        let app = project_router().with_state(seeded_state().await);

        // "s" matches several skills of the same project
        let (_, body) = get(app, "/projects/by-skill/?skill=s").await;

        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn by_skill_requires_parameter() {
        let app = project_router().with_state(seeded_state().await);

        let (status, body) = get(app.clone(), "/projects/by-skill/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "skill parameter is required");

        let (status, _) = get(app, "/projects/by-skill/?skill=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn link_can_be_added_and_removed() {
        let app = project_router().with_state(seeded_state().await);

        let (status, link) = send(
            app.clone(),
            Method::POST,
            "/projects/2/links/",
            Some(json!({"url": "https://docs.example.com/task-api", "link_type": "documentation"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(link["project"], 2);
        assert_eq!(link["link_type"], "documentation");

        let uri = format!("/project-links/{}/", link["id"]);
        let (status, _) = send(app.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, project) = get(app, "/projects/2/").await;
        assert_eq!(project["links"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn link_on_missing_project_is_not_found() {
        let app = project_router().with_state(seeded_state().await);

        let (status, _) = send(
            app,
            Method::POST,
            "/projects/42/links/",
            Some(json!({"url": "https://example.com"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn skill_can_be_attached_once() {
        let app = project_router().with_state(seeded_state().await);

        // Docker (id 6) is not used by any sample project
        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/projects/2/skills/",
            Some(json!({"skill": 6})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["skill_name"], "Docker");

        let (status, body) = send(
            app,
            Method::POST,
            "/projects/2/skills/",
            Some(json!({"skill": 6})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"]["non_field_errors"][0],
            "The fields project, skill must make a unique set."
        );
    }

    #[tokio::test]
    async fn detached_skill_leaves_the_project_payload() {
        let app = project_router().with_state(seeded_state().await);

        let (status, _) = send(app.clone(), Method::DELETE, "/project-skills/1/", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = get(app, "/projects/1/").await;
        assert_eq!(body["skills"], json!(["Django", "React", "PostgreSQL"]));
    }

    #[tokio::test]
    async fn delete_project_removes_it() {
        let app = project_router().with_state(seeded_state().await);

        let (status, _) = send(app.clone(), Method::DELETE, "/projects/1/", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = get(app, "/projects/").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
