//! PostgreSQL implementation of ProfileRepository.
//!
//! Dependent rows are removed by `ON DELETE CASCADE`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::ProfileRow;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::portfolio::{Profile, ProfileDraft};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of the ProfileRepository port.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        let rows: Vec<ProfileRow> = sqlx::query_as(
            "SELECT id, name, email, bio, created_at, updated_at FROM profiles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list profiles", e))?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT id, name, email, bio, created_at, updated_at FROM profiles WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch profile", e))?;

        Ok(row.map(Profile::from))
    }

    async fn first(&self) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT id, name, email, bio, created_at, updated_at FROM profiles ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch first profile", e))?;

        Ok(row.map(Profile::from))
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, DomainError> {
        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO profiles (name, email, bio)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, bio, created_at, updated_at
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert profile", e))?;

        Ok(row.into())
    }

    async fn update(&self, id: ProfileId, draft: &ProfileDraft) -> Result<Profile, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            UPDATE profiles SET
                name = $2,
                email = $3,
                bio = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, bio, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update profile", e))?;

        row.map(Profile::from)
            .ok_or_else(|| DomainError::not_found("Profile", id))
    }

    async fn delete(&self, id: ProfileId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete profile", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Profile", id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM profiles")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete profiles", e))?;

        Ok(result.rows_affected())
    }
}
