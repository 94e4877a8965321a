//! PostgreSQL implementation of SocialLinkRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{convert_all, write_error, SocialLinkRow};
use crate::domain::foundation::{DomainError, ProfileId, SocialLinkId};
use crate::domain::portfolio::{SocialLink, SocialLinkDraft};
use crate::ports::SocialLinkRepository;

const COLUMNS: &str = "id, profile_id, platform, url, description";
const UNIQUE: &[&str] = &["profile", "platform"];

/// PostgreSQL implementation of the SocialLinkRepository port.
#[derive(Clone)]
pub struct PostgresSocialLinkRepository {
    pool: PgPool,
}

impl PostgresSocialLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialLinkRepository for PostgresSocialLinkRepository {
    async fn list(&self) -> Result<Vec<SocialLink>, DomainError> {
        let rows: Vec<SocialLinkRow> =
            sqlx::query_as(&format!("SELECT {} FROM social_links ORDER BY id", COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list social links", e))?;

        convert_all(rows)
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<SocialLink>, DomainError> {
        let rows: Vec<SocialLinkRow> = sqlx::query_as(&format!(
            "SELECT {} FROM social_links WHERE profile_id = $1 ORDER BY id",
            COLUMNS
        ))
        .bind(profile.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list social links by profile", e))?;

        convert_all(rows)
    }

    async fn find_by_id(&self, id: SocialLinkId) -> Result<Option<SocialLink>, DomainError> {
        let row: Option<SocialLinkRow> =
            sqlx::query_as(&format!("SELECT {} FROM social_links WHERE id = $1", COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch social link", e))?;

        row.map(SocialLink::try_from).transpose()
    }

    async fn create(&self, draft: &SocialLinkDraft) -> Result<SocialLink, DomainError> {
        let row: SocialLinkRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO social_links (profile_id, platform, url, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(draft.profile.as_i64())
        .bind(draft.platform.as_str())
        .bind(&draft.url)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert social link",
                e,
                &[("profile", draft.profile.as_i64())],
                UNIQUE,
            )
        })?;

        row.try_into()
    }

    async fn update(
        &self,
        id: SocialLinkId,
        draft: &SocialLinkDraft,
    ) -> Result<SocialLink, DomainError> {
        let row: Option<SocialLinkRow> = sqlx::query_as(&format!(
            r#"
            UPDATE social_links SET
                profile_id = $2,
                platform = $3,
                url = $4,
                description = $5
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id.as_i64())
        .bind(draft.profile.as_i64())
        .bind(draft.platform.as_str())
        .bind(&draft.url)
        .bind(&draft.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to update social link",
                e,
                &[("profile", draft.profile.as_i64())],
                UNIQUE,
            )
        })?;

        row.ok_or_else(|| DomainError::not_found("Social link", id))?
            .try_into()
    }

    async fn delete(&self, id: SocialLinkId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete social link", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Social link", id));
        }
        Ok(())
    }
}
