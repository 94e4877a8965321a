//! HTTP adapter for skills.
//!
//! - `GET|POST /skills/`, `GET|PUT|PATCH|DELETE /skills/:id/`
//! - `GET /skills/top/?limit=N` - Skills ranked by project usage

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::skill_router;
