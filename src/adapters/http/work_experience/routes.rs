//! Route configuration for work experience endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_work_experience, delete_work_experience, get_work_experience, list_work_experience,
    replace_work_experience, update_work_experience,
};

pub fn work_experience_router() -> Router<AppState> {
    Router::new()
        .route(
            "/work-experience/",
            get(list_work_experience).post(create_work_experience),
        )
        .route(
            "/work-experience/:id/",
            get(get_work_experience)
                .put(replace_work_experience)
                .patch(update_work_experience)
                .delete(delete_work_experience),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{get, seeded_state, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn list_returns_entries_in_id_order() {
        let app = work_experience_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/work-experience/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["company"], "Tech Solutions Inc.");
        assert_eq!(body[0]["is_current"], true);
        assert_eq!(body[1]["company"], "StartupXYZ");
    }

    #[tokio::test]
    async fn put_replaces_every_field() {
        let app = work_experience_router().with_state(seeded_state().await);

        let (status, body) = send(
            app,
            Method::PUT,
            "/work-experience/2/",
            Some(json!({
                "profile": 1,
                "company": "StartupXYZ",
                "position": "Lead Developer",
                "start_date": "2021-01-15"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["position"], "Lead Developer");
        assert!(body["location"].is_null());
        assert!(body["end_date"].is_null());
        assert_eq!(body["is_current"], false);
    }

    #[tokio::test]
    async fn put_on_missing_entry_is_not_found() {
        let app = work_experience_router().with_state(seeded_state().await);

        let (status, _) = send(
            app,
            Method::PUT,
            "/work-experience/50/",
            Some(json!({
                "profile": 1,
                "company": "Acme",
                "position": "Engineer",
                "start_date": "2020-01-01"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
