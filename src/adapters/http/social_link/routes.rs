//! Route configuration for social link endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_social_link, delete_social_link, get_social_link, list_social_links,
    replace_social_link, update_social_link,
};

pub fn social_link_router() -> Router<AppState> {
    Router::new()
        .route(
            "/social-links/",
            get(list_social_links).post(create_social_link),
        )
        .route(
            "/social-links/:id/",
            get(get_social_link)
                .put(replace_social_link)
                .patch(update_social_link)
                .delete(delete_social_link),
        )
}
