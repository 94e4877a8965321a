//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter (DTOs, handlers, routes). All
//! routers share [`AppState`] and are mounted together by [`api_router`].

pub mod education;
pub mod error;
pub mod extract;
pub mod health;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod social_link;
pub mod state;
pub mod work_experience;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::Router;

/// Every portfolio endpoint mounted under `prefix` (e.g. `/api`). An empty
/// prefix mounts them at the root.
pub fn api_router(state: AppState, prefix: &str) -> Router {
    let routes = Router::new()
        .merge(health::health_router())
        .merge(profile::profile_router())
        .merge(education::education_router())
        .merge(skill::skill_router())
        .merge(project::project_router())
        .merge(work_experience::work_experience_router())
        .merge(social_link::social_link_router())
        .merge(search::search_router())
        .with_state(state);

    if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::AppState;
    use crate::adapters::memory::InMemoryPortfolioStore;
    use crate::seed::seed_sample_portfolio;

    pub fn empty_state() -> AppState {
        AppState::new(InMemoryPortfolioStore::new().repositories())
    }

    /// State holding the sample portfolio (profile 1).
    pub async fn seeded_state() -> AppState {
        let state = empty_state();
        seed_sample_portfolio(&state.repositories).await.unwrap();
        state
    }

    /// Sends one request and decodes the JSON body (`Null` when empty).
    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{get, seeded_state};
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn routes_are_mounted_under_the_prefix() {
        let app = api_router(seeded_state().await, "/api");

        let (status, _) = get(app.clone(), "/api/skills/").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app, "/skills/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_prefix_mounts_at_root() {
        let app = api_router(seeded_state().await, "");

        let (status, body) = get(app, "/health/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
