//! Portfolio API - Personal profile and portfolio REST service
//!
//! One person's professional portfolio (education, skills, projects, work
//! history, social links) exposed as a JSON API, with aggregate queries for
//! skill ranking, skill-filtered projects and free-text search.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod seed;
pub mod server;
