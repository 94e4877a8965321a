//! Axum server setup.
//!
//! Wraps the API router with CORS, request tracing and a request timeout,
//! then serves it until Ctrl+C or SIGTERM.

use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::{api_router, ApiError, AppState};
use crate::config::{ServerConfig, ValidationError};

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid server configuration: {0}")]
    Config(#[from] ValidationError),
}

/// The complete application: every route plus middleware.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    with_middleware(api_router(state, config.normalized_api_prefix()), config)
}

fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(middleware::map_response(timeout_body))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// `TimeoutLayer` answers with a bare 408; give it the JSON error body.
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        tracing::warn!("Request timed out");
        return ApiError::Timeout.into_response();
    }
    response
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        CorsLayer::new().allow_origin(origins)
    };
    cors.allow_methods(Any).allow_headers(Any)
}

/// Run the HTTP server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = build_app(state, config);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        prefix = %config.normalized_api_prefix(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPortfolioStore;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::get;
    use std::time::Duration;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(InMemoryPortfolioStore::new().repositories())
    }

    #[tokio::test]
    async fn app_serves_under_configured_prefix() {
        let config = ServerConfig {
            api_prefix: "/v1/".to_string(),
            ..Default::default()
        };
        let app = build_app(state(), &config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let config = ServerConfig {
            cors_origins: Some("https://portfolio.example.com".to_string()),
            ..Default::default()
        };
        let app = build_app(state(), &config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health/")
                    .header(header::ORIGIN, "https://portfolio.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://portfolio.example.com"
        );
    }

    #[tokio::test]
    async fn timed_out_request_gets_json_error_body() {
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..Default::default()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let app = with_middleware(slow, &config);

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "REQUEST_TIMEOUT");
    }
}
