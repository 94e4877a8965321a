//! Route configuration for education endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_education, delete_education, get_education, list_education, replace_education,
    update_education,
};

pub fn education_router() -> Router<AppState> {
    Router::new()
        .route("/education/", get(list_education).post(create_education))
        .route(
            "/education/:id/",
            get(get_education)
                .put(replace_education)
                .patch(update_education)
                .delete(delete_education),
        )
}
