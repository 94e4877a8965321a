//! Extractors that reject with [`ApiError`] instead of axum's plain-text
//! rejections, so every failure carries the JSON error body.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use super::error::ApiError;
use crate::domain::foundation::{DomainError, NON_FIELD_ERRORS};

/// Messages chrono reports for an unparseable date string.
const DATE_PARSE_ERRORS: &[&str] = &[
    "input is out of range",
    "no possible date and time matching input",
    "input is not enough for unique date and time",
    "input contains invalid characters",
    "premature end of input",
    "trailing input",
];

/// JSON request body.
///
/// Syntax errors and non-object bodies are `BAD_REQUEST`. A well-formed
/// object that does not fit `T` is a field-level validation failure keyed
/// by the offending field.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        if !value.is_object() {
            return Err(ApiError::BadRequest(
                "Invalid data. Expected a JSON object.".to_string(),
            ));
        }
        serde_path_to_error::deserialize(value)
            .map(Self)
            .map_err(field_error)
    }
}

fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> ApiError {
    let mut path: Vec<String> = err
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(key.clone()),
            _ => None,
        })
        .collect();
    let raw = err.inner().to_string();

    let message = match quoted(&raw, "missing field `") {
        Some(name) => {
            path.push(name.to_string());
            "This field is required.".to_string()
        }
        None => field_message(&raw),
    };
    let field = if path.is_empty() {
        NON_FIELD_ERRORS.to_string()
    } else {
        path.join(".")
    };
    DomainError::validation(field, message).into()
}

/// Rewrites a serde message in the wording clients see for field errors.
fn field_message(raw: &str) -> String {
    if raw.starts_with("invalid type: null") {
        return "This field may not be null.".to_string();
    }
    if let Some(choice) = quoted(raw, "unknown variant `") {
        return format!("\"{}\" is not a valid choice.", choice);
    }
    if raw.ends_with("expected u32") || raw.ends_with("expected i64") {
        if raw.starts_with("invalid value: integer `-") {
            return "Ensure this value is greater than or equal to 0.".to_string();
        }
        return "A valid integer is required.".to_string();
    }
    if raw.ends_with("expected a boolean") {
        return "Must be a valid boolean.".to_string();
    }
    if raw.ends_with("expected a string") {
        return "Not a valid string.".to_string();
    }
    if raw.ends_with("expected a formatted date string") || DATE_PARSE_ERRORS.contains(&raw) {
        return "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.".to_string();
    }
    raw.to_string()
}

/// The backtick-quoted text following `prefix`.
fn quoted<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = raw.strip_prefix(prefix)?;
    rest.split('`').next()
}

/// Query string parameters.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters; an id that does not parse matches no record.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::{EducationDraft, SkillDraft, SkillPatch};
    use serde_json::json;

    fn details<T: DeserializeOwned>(body: Value) -> Vec<(String, Vec<String>)> {
        let result: Result<T, _> = serde_path_to_error::deserialize(body);
        let err = result.err().expect("body should not deserialize");
        match field_error(err) {
            ApiError::Validation { details, .. } => details.into_iter().collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn single(field: &str, message: &str) -> Vec<(String, Vec<String>)> {
        vec![(field.to_string(), vec![message.to_string()])]
    }

    #[test]
    fn missing_field_is_required() {
        assert_eq!(
            details::<SkillDraft>(json!({"name": "Rust"})),
            single("profile", "This field is required.")
        );
    }

    #[test]
    fn unknown_choice_names_the_value() {
        assert_eq!(
            details::<SkillDraft>(json!({"profile": 1, "name": "Rust", "level": "guru"})),
            single("level", "\"guru\" is not a valid choice.")
        );
    }

    #[test]
    fn negative_count_is_out_of_range() {
        assert_eq!(
            details::<SkillDraft>(json!({"profile": 1, "name": "Rust", "years_experience": -1})),
            single(
                "years_experience",
                "Ensure this value is greater than or equal to 0."
            )
        );
    }

    #[test]
    fn bad_date_reports_expected_format() {
        let body = json!({
            "profile": 1,
            "institution": "MIT",
            "degree": "BSc",
            "start_date": "last spring"
        });
        assert_eq!(
            details::<EducationDraft>(body),
            single(
                "start_date",
                "Date has wrong format. Use one of these formats instead: YYYY-MM-DD."
            )
        );
    }

    #[test]
    fn null_on_required_field_is_rejected() {
        assert_eq!(
            details::<SkillPatch>(json!({"name": null})),
            single("name", "This field may not be null.")
        );
    }

    #[test]
    fn wrong_type_is_reported_on_field() {
        assert_eq!(
            details::<SkillDraft>(json!({"profile": "one", "name": "Rust"})),
            single("profile", "A valid integer is required.")
        );
    }
}
