//! Route configuration for skill endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_skill, delete_skill, get_skill, list_skills, replace_skill, top_skills, update_skill,
};

/// Creates the skill router.
///
/// `/skills/top/` is a static segment and wins over `/skills/:id/`.
pub fn skill_router() -> Router<AppState> {
    Router::new()
        .route("/skills/", get(list_skills).post(create_skill))
        .route("/skills/top/", get(top_skills))
        .route(
            "/skills/:id/",
            get(get_skill)
                .put(replace_skill)
                .patch(update_skill)
                .delete(delete_skill),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{empty_state, get, seeded_state, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn list_returns_skills_in_id_order() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/skills/").await;

        assert_eq!(status, StatusCode::OK);
        let skills = body.as_array().unwrap();
        assert_eq!(skills.len(), 10);
        assert_eq!(skills[0]["name"], "Python");
        assert_eq!(skills[0]["profile"], 1);
    }

    #[tokio::test]
    async fn create_returns_201_with_payload() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::POST,
            "/skills/",
            Some(json!({"profile": 1, "name": "Rust", "level": "beginner", "years_experience": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Rust");
        assert_eq!(body["level"], "beginner");
    }

    #[tokio::test]
    async fn create_for_missing_profile_is_field_error() {
        let app = skill_router().with_state(empty_state());

        let (status, body) = send(
            app,
            Method::POST,
            "/skills/",
            Some(json!({"profile": 7, "name": "Rust"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(
            body["details"]["profile"][0],
            "Invalid pk \"7\" - object does not exist."
        );
    }

    #[tokio::test]
    async fn duplicate_name_fails_uniqueness() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::POST,
            "/skills/",
            Some(json!({"profile": 1, "name": "Python"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"]["non_field_errors"][0],
            "The fields profile, name must make a unique set."
        );
    }

    #[tokio::test]
    async fn patch_leaves_omitted_fields_untouched() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::PATCH,
            "/skills/1/",
            Some(json!({"years_experience": 6})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years_experience"], 6);
        assert_eq!(body["name"], "Python");
        assert_eq!(body["level"], "expert");
    }

    #[tokio::test]
    async fn put_without_required_fields_is_rejected() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) =
            send(app, Method::PUT, "/skills/1/", Some(json!({"name": "Go"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["profile"], json!(["This field is required."]));
    }

    #[tokio::test]
    async fn schema_failures_are_field_errors() {
        let app = skill_router().with_state(seeded_state().await);

        let cases = [
            (json!({"name": "Rust"}), "profile", "This field is required."),
            (
                json!({"profile": 1, "name": "Rust", "level": "guru"}),
                "level",
                "\"guru\" is not a valid choice.",
            ),
            (
                json!({"profile": 1, "name": "Rust", "years_experience": -1}),
                "years_experience",
                "Ensure this value is greater than or equal to 0.",
            ),
        ];
        for (payload, field, message) in cases {
            let (status, body) = send(app.clone(), Method::POST, "/skills/", Some(payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], "VALIDATION_FAILED");
            assert_eq!(body["details"][field], json!([message]));
        }
    }

    #[tokio::test]
    async fn patch_null_on_name_is_rejected() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = send(
            app.clone(),
            Method::PATCH,
            "/skills/1/",
            Some(json!({"name": null})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["name"], json!(["This field may not be null."]));

        let (_, body) = get(app, "/skills/1/").await;
        assert_eq!(body["name"], "Python");
    }

    #[tokio::test]
    async fn delete_returns_204_then_404() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, _) = send(app.clone(), Method::DELETE, "/skills/1/", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = get(app, "/skills/1/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn top_skills_ranks_by_project_usage() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/skills/top/?limit=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        let names: Vec<&str> = body["skills"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Python", "Django", "React"]);
        assert_eq!(body["skills"][0]["projects_count"], 2);
    }

    #[tokio::test]
    async fn top_skills_defaults_to_ten() {
        let app = skill_router().with_state(seeded_state().await);

        let (_, body) = get(app, "/skills/top/").await;

        assert_eq!(body["count"], 10);
    }

    #[tokio::test]
    async fn top_skills_rejects_non_numeric_limit() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/skills/top/?limit=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let app = skill_router().with_state(seeded_state().await);

        let (status, _) = get(app, "/skills/abc/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
