//! PostgreSQL implementation of SkillRepository.
//!
//! `(profile_id, name)` is backed by a unique constraint; usage counts come
//! from a left join on `project_skills`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{
    contains_pattern, convert_all, write_error, years_to_db, SkillRow, SkillUsageRow,
    SKILL_COLUMNS,
};
use crate::domain::foundation::{DomainError, ProfileId, SkillId};
use crate::domain::portfolio::{Skill, SkillDraft, SkillUsage};
use crate::ports::SkillRepository;

/// PostgreSQL implementation of the SkillRepository port.
#[derive(Clone)]
pub struct PostgresSkillRepository {
    pool: PgPool,
}

impl PostgresSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn usage_where(
        &self,
        filter: &str,
        pattern: Option<String>,
    ) -> Result<Vec<SkillUsage>, DomainError> {
        let sql = format!(
            r#"
            SELECT {}, COUNT(DISTINCT ps.project_id) AS projects_count
            FROM skills s
            LEFT JOIN project_skills ps ON ps.skill_id = s.id
            {}
            GROUP BY s.id
            ORDER BY s.id
            "#,
            SKILL_COLUMNS, filter
        );
        let mut query = sqlx::query_as::<_, SkillUsageRow>(&sql);
        if let Some(pattern) = pattern {
            query = query.bind(pattern);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to load skill usage", e))?;

        convert_all(rows)
    }
}

const UNIQUE: &[&str] = &["profile", "name"];

#[async_trait]
impl SkillRepository for PostgresSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        let rows: Vec<SkillRow> =
            sqlx::query_as(&format!("SELECT {} FROM skills s ORDER BY s.id", SKILL_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list skills", e))?;

        convert_all(rows)
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Skill>, DomainError> {
        let rows: Vec<SkillRow> = sqlx::query_as(&format!(
            "SELECT {} FROM skills s WHERE s.profile_id = $1 ORDER BY s.id",
            SKILL_COLUMNS
        ))
        .bind(profile.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list skills by profile", e))?;

        convert_all(rows)
    }

    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, DomainError> {
        let row: Option<SkillRow> = sqlx::query_as(&format!(
            "SELECT {} FROM skills s WHERE s.id = $1",
            SKILL_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch skill", e))?;

        row.map(Skill::try_from).transpose()
    }

    async fn create(&self, draft: &SkillDraft) -> Result<Skill, DomainError> {
        let row: SkillRow = sqlx::query_as(
            r#"
            INSERT INTO skills AS s (profile_id, name, level, years_experience)
            VALUES ($1, $2, $3, $4)
            RETURNING s.id, s.profile_id, s.name, s.level, s.years_experience
            "#,
        )
        .bind(draft.profile.as_i64())
        .bind(&draft.name)
        .bind(draft.level.as_str())
        .bind(years_to_db(draft.years_experience)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert skill",
                e,
                &[("profile", draft.profile.as_i64())],
                UNIQUE,
            )
        })?;

        row.try_into()
    }

    async fn update(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill, DomainError> {
        let row: Option<SkillRow> = sqlx::query_as(
            r#"
            UPDATE skills AS s SET
                profile_id = $2,
                name = $3,
                level = $4,
                years_experience = $5
            WHERE s.id = $1
            RETURNING s.id, s.profile_id, s.name, s.level, s.years_experience
            "#,
        )
        .bind(id.as_i64())
        .bind(draft.profile.as_i64())
        .bind(&draft.name)
        .bind(draft.level.as_str())
        .bind(years_to_db(draft.years_experience)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to update skill",
                e,
                &[("profile", draft.profile.as_i64())],
                UNIQUE,
            )
        })?;

        row.ok_or_else(|| DomainError::not_found("Skill", id))?
            .try_into()
    }

    async fn delete(&self, id: SkillId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete skill", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Skill", id));
        }
        Ok(())
    }

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills WHERE profile_id = $1")
            .bind(profile.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count skills", e))?;

        usize::try_from(count).map_err(|e| DomainError::database("Invalid skill count", e))
    }

    async fn usage(&self) -> Result<Vec<SkillUsage>, DomainError> {
        self.usage_where("", None).await
    }

    async fn search(&self, term: &str) -> Result<Vec<SkillUsage>, DomainError> {
        self.usage_where("WHERE s.name ILIKE $1", Some(contains_pattern(term)))
            .await
    }
}
