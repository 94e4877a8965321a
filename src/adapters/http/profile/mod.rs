//! HTTP adapter for profile endpoints.
//!
//! - `GET|POST /profiles/`, `GET|PUT|PATCH|DELETE /profiles/:id/`
//! - `GET /profile/summary/[?profile=ID]` - One profile with record counts
//!
//! Deleting a profile removes everything it owns.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::profile_router;
