//! HTTP adapter for projects, their links and skill associations.
//!
//! - `GET|POST /projects/`, `GET|PUT|PATCH|DELETE /projects/:id/`
//! - `GET /projects/by-skill/?skill=NAME` - Projects using a matching skill
//! - `POST /projects/:id/links/`, `DELETE /project-links/:id/`
//! - `POST /projects/:id/skills/`, `DELETE /project-skills/:id/`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::project_router;
