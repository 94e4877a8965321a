//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresProfileRepository` - Profiles; deletes cascade through the schema
//! - `PostgresEducationRepository`, `PostgresSkillRepository`,
//!   `PostgresWorkExperienceRepository`, `PostgresSocialLinkRepository`
//! - `PostgresProjectRepository` - Projects, their links and skill associations
//!
//! The schema lives in `migrations/` and is applied by [`MIGRATOR`].

mod education_repository;
mod profile_repository;
mod project_repository;
mod rows;
mod skill_repository;
mod social_link_repository;
mod work_experience_repository;

pub use education_repository::PostgresEducationRepository;
pub use profile_repository::PostgresProfileRepository;
pub use project_repository::PostgresProjectRepository;
pub use skill_repository::PostgresSkillRepository;
pub use social_link_repository::PostgresSocialLinkRepository;
pub use work_experience_repository::PostgresWorkExperienceRepository;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::ports::Repositories;

/// Bundled schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Every repository port, sharing one pool.
pub fn repositories(pool: PgPool) -> Repositories {
    Repositories {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        education: Arc::new(PostgresEducationRepository::new(pool.clone())),
        skills: Arc::new(PostgresSkillRepository::new(pool.clone())),
        projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
        work_experience: Arc::new(PostgresWorkExperienceRepository::new(pool.clone())),
        social_links: Arc::new(PostgresSocialLinkRepository::new(pool)),
    }
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Connects to `DATABASE_URL` and applies the schema. Tests using this are
/// `#[ignore]`d and run against a disposable database.
#[cfg(test)]
pub(crate) async fn connect_for_tests() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        ..Default::default()
    };
    let pool = create_pool(&config).await.expect("pool creation failed");
    run_migrations(&pool).await.expect("migrations failed");
    pool
}

/// Inserts a fresh profile so each test owns its rows.
#[cfg(test)]
pub(crate) async fn create_test_profile(pool: &PgPool) -> crate::domain::foundation::ProfileId {
    use crate::domain::portfolio::ProfileDraft;
    use crate::ports::ProfileRepository;

    PostgresProfileRepository::new(pool.clone())
        .create(&ProfileDraft {
            name: "Test Profile".to_string(),
            email: "test@example.com".to_string(),
            bio: None,
        })
        .await
        .expect("profile insert failed")
        .id
}
