//! PostgreSQL implementation of ProjectRepository.
//!
//! Covers projects and the two tables hanging off them: `project_links` and
//! the `project_skills` association.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{
    contains_pattern, convert_all, project_ids, write_error, ProjectLinkRow, ProjectRow,
    ProjectSkillRow, PROJECT_COLUMNS,
};
use crate::domain::foundation::{
    DomainError, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId,
};
use crate::domain::portfolio::{Project, ProjectDraft, ProjectLink, ProjectLinkDraft, ProjectSkill};
use crate::ports::ProjectRepository;

/// PostgreSQL implementation of the ProjectRepository port.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_projects(
        &self,
        sql: &str,
        bind: Option<BindValue>,
        context: &str,
    ) -> Result<Vec<Project>, DomainError> {
        let mut query = sqlx::query_as::<_, ProjectRow>(sql);
        match bind {
            Some(BindValue::Id(id)) => query = query.bind(id),
            Some(BindValue::Text(text)) => query = query.bind(text),
            None => {}
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(context, e))?;

        Ok(rows.into_iter().map(Project::from).collect())
    }
}

enum BindValue {
    Id(i64),
    Text(String),
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        self.fetch_projects(
            &format!("SELECT {} FROM projects p ORDER BY p.id", PROJECT_COLUMNS),
            None,
            "Failed to list projects",
        )
        .await
    }

    async fn list_by_profile(&self, profile: ProfileId) -> Result<Vec<Project>, DomainError> {
        self.fetch_projects(
            &format!(
                "SELECT {} FROM projects p WHERE p.profile_id = $1 ORDER BY p.id",
                PROJECT_COLUMNS
            ),
            Some(BindValue::Id(profile.as_i64())),
            "Failed to list projects by profile",
        )
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects p WHERE p.id = $1",
            PROJECT_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch project", e))?;

        Ok(row.map(Project::from))
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, DomainError> {
        let row: ProjectRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO projects AS p (
                profile_id, title, description, start_date, end_date, is_ongoing
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(draft.profile.as_i64())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.is_ongoing)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert project",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        Ok(row.into())
    }

    async fn update(&self, id: ProjectId, draft: &ProjectDraft) -> Result<Project, DomainError> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            r#"
            UPDATE projects AS p SET
                profile_id = $2,
                title = $3,
                description = $4,
                start_date = $5,
                end_date = $6,
                is_ongoing = $7
            WHERE p.id = $1
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(id.as_i64())
        .bind(draft.profile.as_i64())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.is_ongoing)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to update project",
                e,
                &[("profile", draft.profile.as_i64())],
                &[],
            )
        })?;

        row.map(Project::from)
            .ok_or_else(|| DomainError::not_found("Project", id))
    }

    async fn delete(&self, id: ProjectId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete project", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Project", id));
        }
        Ok(())
    }

    async fn count_by_profile(&self, profile: ProfileId) -> Result<usize, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM projects WHERE profile_id = $1")
                .bind(profile.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count projects", e))?;

        usize::try_from(count).map_err(|e| DomainError::database("Invalid project count", e))
    }

    async fn search(&self, term: &str) -> Result<Vec<Project>, DomainError> {
        self.fetch_projects(
            &format!(
                r#"
                SELECT {} FROM projects p
                WHERE p.title ILIKE $1 OR p.description ILIKE $1
                ORDER BY p.id
                "#,
                PROJECT_COLUMNS
            ),
            Some(BindValue::Text(contains_pattern(term))),
            "Failed to search projects",
        )
        .await
    }

    async fn find_by_skill_name(&self, term: &str) -> Result<Vec<Project>, DomainError> {
        self.fetch_projects(
            &format!(
                r#"
                SELECT {} FROM projects p
                WHERE EXISTS (
                    SELECT 1 FROM project_skills ps
                    JOIN skills s ON s.id = ps.skill_id
                    WHERE ps.project_id = p.id AND s.name ILIKE $1
                )
                ORDER BY p.id
                "#,
                PROJECT_COLUMNS
            ),
            Some(BindValue::Text(contains_pattern(term))),
            "Failed to find projects by skill",
        )
        .await
    }

    async fn links_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectLink>, DomainError> {
        let rows: Vec<ProjectLinkRow> = sqlx::query_as(
            r#"
            SELECT id, project_id, url, link_type, description
            FROM project_links
            WHERE project_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(project_ids(projects))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch project links", e))?;

        convert_all(rows)
    }

    async fn add_link(&self, draft: &ProjectLinkDraft) -> Result<ProjectLink, DomainError> {
        let row: ProjectLinkRow = sqlx::query_as(
            r#"
            INSERT INTO project_links (project_id, url, link_type, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, project_id, url, link_type, description
            "#,
        )
        .bind(draft.project.as_i64())
        .bind(&draft.url)
        .bind(draft.link_type.as_str())
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to insert project link",
                e,
                &[("project", draft.project.as_i64())],
                &[],
            )
        })?;

        row.try_into()
    }

    async fn delete_link(&self, id: ProjectLinkId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM project_links WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete project link", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Project link", id));
        }
        Ok(())
    }

    async fn skills_for(&self, projects: &[ProjectId]) -> Result<Vec<ProjectSkill>, DomainError> {
        let rows: Vec<ProjectSkillRow> = sqlx::query_as(
            r#"
            SELECT ps.id, ps.project_id, ps.skill_id,
                   s.name AS skill_name, s.level AS skill_level
            FROM project_skills ps
            JOIN skills s ON s.id = ps.skill_id
            WHERE ps.project_id = ANY($1)
            ORDER BY ps.id
            "#,
        )
        .bind(project_ids(projects))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch project skills", e))?;

        convert_all(rows)
    }

    async fn attach_skill(
        &self,
        project: ProjectId,
        skill: SkillId,
    ) -> Result<ProjectSkill, DomainError> {
        let row: ProjectSkillRow = sqlx::query_as(
            r#"
            WITH inserted AS (
                INSERT INTO project_skills (project_id, skill_id)
                VALUES ($1, $2)
                RETURNING id, project_id, skill_id
            )
            SELECT i.id, i.project_id, i.skill_id,
                   s.name AS skill_name, s.level AS skill_level
            FROM inserted i
            JOIN skills s ON s.id = i.skill_id
            "#,
        )
        .bind(project.as_i64())
        .bind(skill.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(
                "Failed to attach skill",
                e,
                &[("project", project.as_i64()), ("skill", skill.as_i64())],
                &["project", "skill"],
            )
        })?;

        row.try_into()
    }

    async fn detach_skill(&self, id: ProjectSkillId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM project_skills WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to detach skill", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Project skill", id));
        }
        Ok(())
    }
}
