//! Row types and error mapping shared by the PostgreSQL repositories.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::foundation::{
    DomainError, EducationId, ProfileId, ProjectId, ProjectLinkId, ProjectSkillId, SkillId,
    SocialLinkId, Timestamp, ValidationError, WorkExperienceId,
};
use crate::domain::portfolio::{
    Education, Profile, Project, ProjectLink, ProjectSkill, Skill, SkillUsage, SocialLink,
    WorkExperience,
};

/// Column list for `skills`, aliased for [`SkillRow`].
pub(super) const SKILL_COLUMNS: &str = "s.id, s.profile_id, s.name, s.level, s.years_experience";

/// Column list for `projects`, aliased for [`ProjectRow`].
pub(super) const PROJECT_COLUMNS: &str =
    "p.id, p.profile_id, p.title, p.description, p.start_date, p.end_date, p.is_ongoing, p.created_at";

/// Maps a failed write to a domain error.
///
/// Foreign key violations are reported against the referencing field whose
/// column appears in the violated constraint; `refs` pairs each field with the
/// id that was written. Unique violations are reported as a non-field error
/// over `unique`.
pub(super) fn write_error(
    context: &str,
    err: sqlx::Error,
    refs: &[(&str, i64)],
    unique: &[&str],
) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            let violated = refs
                .iter()
                .find(|(field, _)| constraint.contains(&format!("{}_id", field)))
                .or_else(|| refs.first());
            if let Some((field, id)) = violated {
                return ValidationError::missing_reference(*field, *id).into();
            }
        }
        if db_err.is_unique_violation() && !unique.is_empty() {
            return ValidationError::not_unique(unique).into();
        }
    }
    DomainError::database(context, err)
}

/// Builds an `ILIKE` pattern matching `term` anywhere, with wildcards escaped.
pub(super) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub(super) fn years_to_db(years: u32) -> Result<i32, DomainError> {
    i32::try_from(years).map_err(|_| {
        ValidationError::invalid_format(
            "years_experience",
            "Ensure this value is less than or equal to 2147483647.",
        )
        .into()
    })
}

pub(super) fn project_ids(projects: &[ProjectId]) -> Vec<i64> {
    projects.iter().map(ProjectId::as_i64).collect()
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProfileRow {
    id: i64,
    name: String,
    email: String,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: ProfileId::new(row.id),
            name: row.name,
            email: row.email,
            bio: row.bio,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct EducationRow {
    id: i64,
    profile_id: i64,
    institution: String,
    degree: String,
    field_of_study: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    description: Option<String>,
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Education {
            id: EducationId::new(row.id),
            profile: ProfileId::new(row.profile_id),
            institution: row.institution,
            degree: row.degree,
            field_of_study: row.field_of_study,
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct SkillRow {
    id: i64,
    profile_id: i64,
    name: String,
    level: String,
    years_experience: i32,
}

impl TryFrom<SkillRow> for Skill {
    type Error = DomainError;

    fn try_from(row: SkillRow) -> Result<Self, Self::Error> {
        Ok(Skill {
            id: SkillId::new(row.id),
            profile: ProfileId::new(row.profile_id),
            name: row.name,
            level: row
                .level
                .parse()
                .map_err(|e| DomainError::database("Invalid skill level", e))?,
            years_experience: u32::try_from(row.years_experience)
                .map_err(|e| DomainError::database("Invalid years_experience", e))?,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct SkillUsageRow {
    #[sqlx(flatten)]
    skill: SkillRow,
    projects_count: i64,
}

impl TryFrom<SkillUsageRow> for SkillUsage {
    type Error = DomainError;

    fn try_from(row: SkillUsageRow) -> Result<Self, Self::Error> {
        Ok(SkillUsage {
            skill: row.skill.try_into()?,
            projects_count: usize::try_from(row.projects_count)
                .map_err(|e| DomainError::database("Invalid project count", e))?,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProjectRow {
    id: i64,
    profile_id: i64,
    title: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    is_ongoing: bool,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: ProjectId::new(row.id),
            profile: ProfileId::new(row.profile_id),
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            is_ongoing: row.is_ongoing,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProjectLinkRow {
    id: i64,
    project_id: i64,
    url: String,
    link_type: String,
    description: Option<String>,
}

impl TryFrom<ProjectLinkRow> for ProjectLink {
    type Error = DomainError;

    fn try_from(row: ProjectLinkRow) -> Result<Self, Self::Error> {
        Ok(ProjectLink {
            id: ProjectLinkId::new(row.id),
            project: ProjectId::new(row.project_id),
            url: row.url,
            link_type: row
                .link_type
                .parse()
                .map_err(|e| DomainError::database("Invalid link type", e))?,
            description: row.description,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProjectSkillRow {
    id: i64,
    project_id: i64,
    skill_id: i64,
    skill_name: String,
    skill_level: String,
}

impl TryFrom<ProjectSkillRow> for ProjectSkill {
    type Error = DomainError;

    fn try_from(row: ProjectSkillRow) -> Result<Self, Self::Error> {
        Ok(ProjectSkill {
            id: ProjectSkillId::new(row.id),
            project: ProjectId::new(row.project_id),
            skill: SkillId::new(row.skill_id),
            skill_name: row.skill_name,
            skill_level: row
                .skill_level
                .parse()
                .map_err(|e| DomainError::database("Invalid skill level", e))?,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct WorkExperienceRow {
    id: i64,
    profile_id: i64,
    company: String,
    position: String,
    location: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_current: bool,
    description: Option<String>,
}

impl From<WorkExperienceRow> for WorkExperience {
    fn from(row: WorkExperienceRow) -> Self {
        WorkExperience {
            id: WorkExperienceId::new(row.id),
            profile: ProfileId::new(row.profile_id),
            company: row.company,
            position: row.position,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
            is_current: row.is_current,
            description: row.description,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct SocialLinkRow {
    id: i64,
    profile_id: i64,
    platform: String,
    url: String,
    description: Option<String>,
}

impl TryFrom<SocialLinkRow> for SocialLink {
    type Error = DomainError;

    fn try_from(row: SocialLinkRow) -> Result<Self, Self::Error> {
        Ok(SocialLink {
            id: SocialLinkId::new(row.id),
            profile: ProfileId::new(row.profile_id),
            platform: row
                .platform
                .parse()
                .map_err(|e| DomainError::database("Invalid platform", e))?,
            url: row.url,
            description: row.description,
        })
    }
}

/// Converts every row, failing on the first bad one.
pub(super) fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, DomainError>
where
    T: TryFrom<R, Error = DomainError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("python"), "%python%");
        assert_eq!(contains_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn years_outside_integer_range_fail_validation() {
        assert_eq!(years_to_db(5).unwrap(), 5);
        let err = years_to_db(u32::MAX).unwrap_err();
        assert!(err.details.contains_key("years_experience"));
    }

    #[test]
    fn non_database_errors_keep_context() {
        let err = write_error("Failed to insert skill", sqlx::Error::RowNotFound, &[], &[]);
        assert!(err.message.starts_with("Failed to insert skill"));
    }

    #[test]
    fn skill_row_with_unknown_level_is_rejected() {
        let row = SkillRow {
            id: 1,
            profile_id: 1,
            name: "Python".to_string(),
            level: "guru".to_string(),
            years_experience: 3,
        };
        assert!(Skill::try_from(row).is_err());
    }
}
