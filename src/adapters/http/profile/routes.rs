//! Route configuration for profile endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_profile, delete_profile, get_profile, list_profiles, profile_summary, replace_profile,
    update_profile,
};

pub fn profile_router() -> Router<AppState> {
    Router::new()
        .route("/profiles/", get(list_profiles).post(create_profile))
        .route(
            "/profiles/:id/",
            get(get_profile)
                .put(replace_profile)
                .patch(update_profile)
                .delete(delete_profile),
        )
        .route("/profile/summary/", get(profile_summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{empty_state, get, seeded_state, send};
    use crate::domain::foundation::ProfileId;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn retrieve_includes_every_owned_collection() {
        let app = profile_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/profiles/1/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "John Doe");
        assert_eq!(body["education"].as_array().unwrap().len(), 1);
        assert_eq!(body["skills"].as_array().unwrap().len(), 10);
        assert_eq!(body["projects"].as_array().unwrap().len(), 3);
        assert_eq!(body["work_experience"].as_array().unwrap().len(), 2);
        assert_eq!(body["social_links"].as_array().unwrap().len(), 3);
        assert_eq!(body["projects"][0]["links"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_validates_email() {
        let app = profile_router().with_state(empty_state());

        let (status, body) = send(
            app,
            Method::POST,
            "/profiles/",
            Some(json!({"name": "Jane", "email": "not-an-email"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["email"].is_array());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = profile_router().with_state(empty_state());

        let (status, body) = send(app, Method::POST, "/profiles/", Some(json!(42))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn patch_null_clears_bio_and_keeps_name() {
        let app = profile_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::PATCH,
            "/profiles/1/",
            Some(json!({"bio": null})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["bio"].is_null());
        assert_eq!(body["name"], "John Doe");
        assert_eq!(body["skills"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_records() {
        let state = seeded_state().await;
        let repos = state.repositories.clone();
        let app = profile_router().with_state(state);

        let (status, _) = send(app, Method::DELETE, "/profiles/1/", None).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(repos.skills.list().await.unwrap().is_empty());
        assert!(repos.projects.list().await.unwrap().is_empty());
        assert!(repos.social_links.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_counts_skills_and_projects() {
        let app = profile_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/profile/summary/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "John Doe");
        assert_eq!(body["skills_count"], 10);
        assert_eq!(body["projects_count"], 3);
    }

    #[tokio::test]
    async fn summary_without_profiles_is_not_found() {
        let app = profile_router().with_state(empty_state());

        let (status, body) = get(app, "/profile/summary/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No profile found");
    }

    #[tokio::test]
    async fn summary_honours_explicit_and_default_profile() {
        let state = seeded_state().await;
        send(
            profile_router().with_state(state.clone()),
            Method::POST,
            "/profiles/",
            Some(json!({"name": "Jane Roe", "email": "jane@example.com"})),
        )
        .await;

        let (_, body) = get(
            profile_router().with_state(state.clone()),
            "/profile/summary/?profile=2",
        )
        .await;
        assert_eq!(body["name"], "Jane Roe");
        assert_eq!(body["skills_count"], 0);

        let configured = state.with_default_profile(Some(ProfileId::new(2)));
        let (_, body) = get(profile_router().with_state(configured), "/profile/summary/").await;
        assert_eq!(body["name"], "Jane Roe");
    }

    #[tokio::test]
    async fn summary_for_unknown_profile_is_not_found() {
        let app = profile_router().with_state(seeded_state().await);

        let (status, _) = get(app, "/profile/summary/?profile=9").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
