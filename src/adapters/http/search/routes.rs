//! Route configuration for search.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::search;

pub fn search_router() -> Router<AppState> {
    Router::new().route("/search/", get(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{get, seeded_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn search_groups_matches_by_entity() {
        let app = search_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/search/?q=django").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "django");
        let results = &body["results"];
        assert_eq!(results["projects"]["count"], 1);
        assert_eq!(
            results["projects"]["data"][0]["title"],
            "E-commerce Platform"
        );
        assert_eq!(results["skills"]["count"], 1);
        assert_eq!(results["skills"]["data"][0]["projects_count"], 2);
        assert_eq!(results["work_experience"]["count"], 1);
        assert_eq!(
            results["work_experience"]["data"][0]["company"],
            "Tech Solutions Inc."
        );
    }

    #[tokio::test]
    async fn search_without_matches_returns_empty_groups() {
        let app = search_router().with_state(seeded_state().await);

        let (status, body) = get(app, "/search/?q=fortran").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"]["projects"]["count"], 0);
        assert_eq!(body["results"]["skills"]["count"], 0);
        assert_eq!(body["results"]["work_experience"]["count"], 0);
    }

    #[tokio::test]
    async fn search_requires_query() {
        let app = search_router().with_state(seeded_state().await);

        let (status, body) = get(app.clone(), "/search/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "q parameter is required");

        let (status, _) = get(app, "/search/?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
