//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API over the repository ports
//! - `memory` - Process-local repositories
//! - `postgres` - PostgreSQL repositories and schema migrations

pub mod http;
pub mod memory;
pub mod postgres;
