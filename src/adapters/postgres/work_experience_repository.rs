//! PostgreSQL implementation of WorkExperienceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{contains_pattern, write_error, WorkExperienceRow};
use crate::domain::foundation::{DomainError, ProfileId, WorkExperienceId};
use crate::domain::portfolio::{WorkExperience, WorkExperienceDraft};
use crate::ports::WorkExperienceRepository;

const COLUMNS: &str =
    "id, profile_id, company, position, location, start_date, end_date, is_current, description";

/// PostgreSQL implementation of the WorkExperienceRepository port.
#[derive(Clone)]
pub struct PostgresWorkExperienceRepository {
    pool: PgPool,
}

impl PostgresWorkExperienceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkExperienceRepository for PostgresWorkExperienceRepository {
    async fn list(&self) -> Result<Vec<WorkExperience>, DomainError> {
        let rows: Vec<WorkExperienceRow> =
            sqlx::query_as(&format!("SELECT {} FROM work_experience ORDER BY id", COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list work experience", e))?;

        Ok(rows.into_iter().map(WorkExperience::from).collect())
    }

    async fn list_by_profile(
        &self,
        profile: ProfileId,
    ) -> Result<Vec<WorkExperience>, DomainError> {
        let rows: Vec<WorkExperienceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM work_experience WHERE profile_id = $1 ORDER BY id",
            COLUMNS
        ))
        .bind(profile.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list work experience by profile", e))?;

        Ok(rows.into_iter().map(WorkExperience::from).collect())
    }

    async fn find_by_id(
        &self,
        id: WorkExperienceId,
    ) -> Result<Option<WorkExperience>, DomainError> {
        let row: Option<WorkExperienceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM work_experience WHERE id = $1",
            COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch work experience", e))?;

        Ok(row.map(WorkExperience::from))
    }

    async fn create(&self, draft: &WorkExperienceDraft) -> Result<WorkExperience, DomainError> {
        let row: WorkExperienceRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO work_experience (
                profile_id, company, position, location,
                start_date, end_date, is_current, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(draft.profile.as_i64())
        .bind(&draft.company)
        .bind(&draft.position)
        .bind(&draft.location)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.is_current)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert work experience",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: WorkExperienceId,
        draft: &WorkExperienceDraft,
    ) -> Result<WorkExperience, DomainError> {
        let row: Option<WorkExperienceRow> = sqlx::query_as(&format!(
            r#"
            UPDATE work_experience SET
                profile_id = $2,
                company = $3,
                position = $4,
                location = $5,
                start_date = $6,
                end_date = $7,
                is_current = $8,
                description = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id.as_i64())
        .bind(draft.profile.as_i64())
        .bind(&draft.company)
        .bind(&draft.position)
        .bind(&draft.location)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.is_current)
        .bind(&draft.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to update work experience",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        row.map(WorkExperience::from)
            .ok_or_else(|| DomainError::not_found("Work experience", id))
    }

    async fn delete(&self, id: WorkExperienceId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM work_experience WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete work experience", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Work experience", id));
        }
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<WorkExperience>, DomainError> {
        let rows: Vec<WorkExperienceRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM work_experience
            WHERE company ILIKE $1 OR position ILIKE $1 OR description ILIKE $1
            ORDER BY id
            "#,
            COLUMNS
        ))
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to search work experience", e))?;

        Ok(rows.into_iter().map(WorkExperience::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::postgres::{connect_for_tests, create_test_profile};
    use chrono::NaiveDate;

    fn draft(profile: ProfileId, description: &str) -> WorkExperienceDraft {
        WorkExperienceDraft {
            profile,
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            description: Some(description.to_string()),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_profile_is_field_error() {
        let repo = PostgresWorkExperienceRepository::new(connect_for_tests().await);

        let err = repo
            .create(&draft(ProfileId::new(i64::MAX), "none"))
            .await
            .unwrap_err();

        assert!(err.details.contains_key("profile"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_matches_description_case_insensitively() {
        let pool = connect_for_tests().await;
        let profile = create_test_profile(&pool).await;
        let repo = PostgresWorkExperienceRepository::new(pool);
        let marker = format!("Zyxwv{}", profile);
        let created = repo.create(&draft(profile, &marker)).await.unwrap();

        let found = repo.search(&marker.to_lowercase()).await.unwrap();

        assert!(found.iter().any(|w| w.id == created.id));
    }
}
