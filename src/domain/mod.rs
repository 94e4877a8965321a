//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `portfolio` - Profile aggregate: education, skills, projects, work
//!   experience, social links, plus ranking and search rules

pub mod foundation;
pub mod portfolio;
