//! PostgreSQL implementation of EducationRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{write_error, EducationRow};
use crate::domain::foundation::{DomainError, EducationId, ProfileId};
use crate::domain::portfolio::{Education, EducationDraft};
use crate::ports::EducationRepository;

const COLUMNS: &str =
    "id, profile_id, institution, degree, field_of_study, start_date, end_date, description";

/// PostgreSQL implementation of the EducationRepository port.
#[derive(Clone)]
pub struct PostgresEducationRepository {
    pool: PgPool,
}

impl PostgresEducationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EducationRepository for PostgresEducationRepository {
    async fn list(&self) -> Result<Vec<Education>, DomainError> {
        let rows: Vec<EducationRow> =
            sqlx::query_as(&format!("SELECT {} FROM education ORDER BY id", COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list education", e))?;

        Ok(rows.into_iter().map(Education::from).collect())
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Education>, DomainError> {
        let rows: Vec<EducationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM education WHERE profile_id = $1 ORDER BY id",
            COLUMNS
        ))
        .bind(profile.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list education by profile", e))?;

        Ok(rows.into_iter().map(Education::from).collect())
    }

    async fn find_by_id(&self, id: EducationId) -> Result<Option<Education>, DomainError> {
        let row: Option<EducationRow> =
            sqlx::query_as(&format!("SELECT {} FROM education WHERE id = $1", COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch education", e))?;

        Ok(row.map(Education::from))
    }

    async fn create(&self, draft: &EducationDraft) -> Result<Education, DomainError> {
        let row: EducationRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO education (
                profile_id, institution, degree, field_of_study, start_date, end_date, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(draft.profile.as_i64())
        .bind(&draft.institution)
        .bind(&draft.degree)
        .bind(&draft.field_of_study)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert education",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: EducationId,
        draft: &EducationDraft,
    ) -> Result<Education, DomainError> {
        let row: Option<EducationRow> = sqlx::query_as(&format!(
            r#"
            UPDATE education SET
                profile_id = $2,
                institution = $3,
                degree = $4,
                field_of_study = $5,
                start_date = $6,
                end_date = $7,
                description = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id.as_i64())
        .bind(draft.profile.as_i64())
        .bind(&draft.institution)
        .bind(&draft.degree)
        .bind(&draft.field_of_study)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to update education",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        row.map(Education::from)
            .ok_or_else(|| DomainError::not_found("Education", id))
    }

    async fn delete(&self, id: EducationId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete education", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Education", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::postgres::{connect_for_tests, create_test_profile};
    use chrono::NaiveDate;

    fn draft(profile: ProfileId) -> EducationDraft {
        EducationDraft {
            profile,
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: None,
            start_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
            end_date: None,
            description: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_profile_is_field_error() {
        let repo = PostgresEducationRepository::new(connect_for_tests().await);

        let err = repo
            .create(&draft(ProfileId::new(i64::MAX)))
            .await
            .unwrap_err();

        assert!(err.details.contains_key("profile"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_id_and_replaces_fields() {
        let pool = connect_for_tests().await;
        let profile = create_test_profile(&pool).await;
        let repo = PostgresEducationRepository::new(pool);
        let created = repo.create(&draft(profile)).await.unwrap();

        let mut changed = draft(profile);
        changed.degree = "MSc".to_string();
        let updated = repo.update(created.id, &changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.degree, "MSc");
    }
}
