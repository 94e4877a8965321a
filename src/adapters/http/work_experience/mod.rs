//! HTTP adapter for work experience entries.
//!
//! - `GET|POST /work-experience/`, `GET|PUT|PATCH|DELETE /work-experience/:id/`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::work_experience_router;
