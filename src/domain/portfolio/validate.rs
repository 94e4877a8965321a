//! Field-level checks shared by every write payload.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{DomainError, ValidationError};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

/// Longest email accepted.
pub const EMAIL_MAX_LEN: usize = 254;

/// Longest URL accepted.
pub const URL_MAX_LEN: usize = 200;

/// Accumulates field failures so a payload reports all of them at once.
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<ValidationError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required text: non-blank and at most `max` characters.
    pub fn required(mut self, field: &str, value: &str, max: Option<usize>) -> Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::empty_field(field));
            return self;
        }
        self.length(field, value, max)
    }

    /// Optional text: when present, at most `max` characters.
    pub fn optional(self, field: &str, value: Option<&str>, max: usize) -> Self {
        match value {
            Some(value) => self.length(field, value, Some(max)),
            None => self,
        }
    }

    pub fn email(self, field: &str, value: &str) -> Self {
        let mut checks = self.required(field, value, Some(EMAIL_MAX_LEN));
        if !value.trim().is_empty() && !EMAIL_RE.is_match(value) {
            checks.errors.push(ValidationError::invalid_format(
                field,
                "Enter a valid email address.",
            ));
        }
        checks
    }

    pub fn url(self, field: &str, value: &str) -> Self {
        let mut checks = self.required(field, value, Some(URL_MAX_LEN));
        if value.trim().is_empty() {
            return checks;
        }
        let valid = url::Url::parse(value)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
            .unwrap_or(false);
        if !valid {
            checks
                .errors
                .push(ValidationError::invalid_format(field, "Enter a valid URL."));
        }
        checks
    }

    fn length(mut self, field: &str, value: &str, max: Option<usize>) -> Self {
        if let Some(max) = max {
            if value.chars().count() > max {
                self.errors.push(ValidationError::too_long(field, max));
            }
        }
        self
    }

    /// Finishes the checks, failing with every collected error.
    pub fn finish(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::from_validation(self.errors))
        }
    }
}
