//! HTTP adapter for education entries.
//!
//! - `GET|POST /education/`, `GET|PUT|PATCH|DELETE /education/:id/`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::education_router;
