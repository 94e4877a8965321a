//! HTTP adapter for cross-entity search.
//!
//! - `GET /search/?q=TERM`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::search_router;
