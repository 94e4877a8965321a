//! Helpers for partial-update payloads.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Message for an explicit `null` on a field that cannot be empty.
pub const NULL_NOT_ALLOWED: &str = "This field may not be null.";

/// Deserializes a nullable field of a partial update.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`:
/// an absent key stays `None`, an explicit `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializes a non-nullable field of a partial update.
///
/// Use with `#[serde(default, deserialize_with = "non_null")]`:
/// an absent key stays `None`, an explicit `null` is an error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| D::Error::custom(NULL_NOT_ALLOWED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        bio: Option<Option<String>>,
        #[serde(default, deserialize_with = "non_null")]
        name: Option<String>,
    }

    #[test]
    fn absent_key_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.bio, None);
    }

    #[test]
    fn explicit_null_clears() {
        let patch: Patch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(patch.bio, Some(None));
    }

    #[test]
    fn value_sets() {
        let patch: Patch = serde_json::from_str(r#"{"bio": "hi"}"#).unwrap();
        assert_eq!(patch.bio, Some(Some("hi".to_string())));
    }

    #[test]
    fn absent_required_key_is_none() {
        let patch: Patch = serde_json::from_str(r#"{"bio": "hi"}"#).unwrap();
        assert_eq!(patch.name, None);
    }

    #[test]
    fn explicit_null_on_required_key_fails() {
        let err = serde_json::from_str::<Patch>(r#"{"name": null}"#).unwrap_err();
        assert!(err.to_string().starts_with(NULL_NOT_ALLOWED));
    }
}
