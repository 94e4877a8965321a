//! HTTP adapter for social links.
//!
//! - `GET|POST /social-links/`, `GET|PUT|PATCH|DELETE /social-links/:id/`
//!
//! A profile has at most one link per platform.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::social_link_router;
