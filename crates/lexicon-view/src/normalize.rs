//! Field helpers that fold "absent", `null` and "empty" into one value.
//!
//! Servers omit optional fields, send them as `null`, or send them empty, and
//! the three mean the same thing. These helpers run inside the structural
//! decoder (via `#[serde(default, deserialize_with = ...)]`) so callers can
//! iterate `labels` or test a boolean without first checking for absence.
//!
//! Tri-state values where absence carries meaning (for example whether the
//! viewer relationship was computed at all) stay as `Option` and are not
//! normalised here.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so an absent field also yields the
/// default. Used for collections (empty) and flags (`false`).
///
/// # Errors
///
/// Propagates the inner decoder's error when a non-null value does not fit
/// `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes `null` and blank strings as `None`.
///
/// Applied to free-text scalars (display names, descriptions, avatar URLs)
/// where an empty string has no meaning distinct from absence.
///
/// # Errors
///
/// Propagates the inner decoder's error when the value is not a string.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        labels: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        muted: bool,
        #[serde(default, deserialize_with = "blank_as_none")]
        description: Option<String>,
    }

    #[rstest]
    #[case::absent(json!({}))]
    #[case::null(json!({"labels": null, "muted": null, "description": null}))]
    #[case::empty(json!({"labels": [], "muted": false, "description": ""}))]
    #[case::whitespace(json!({"description": "  \n"}))]
    fn absent_null_and_empty_agree(#[case] value: serde_json::Value) {
        let sample: Sample = serde_json::from_value(value).expect("normalisable");

        assert!(sample.labels.is_empty());
        assert!(!sample.muted);
        assert_eq!(sample.description, None);
    }

    #[test]
    fn present_values_pass_through() {
        let sample: Sample = serde_json::from_value(json!({
            "labels": ["spam"],
            "muted": true,
            "description": " keep surrounding space "
        }))
        .expect("valid sample");

        assert_eq!(sample.labels, ["spam"]);
        assert!(sample.muted);
        assert_eq!(sample.description.as_deref(), Some(" keep surrounding space "));
    }

    #[rstest]
    #[case::labels_not_array(json!({"labels": "spam"}))]
    #[case::flag_not_bool(json!({"muted": "yes"}))]
    #[case::description_not_string(json!({"description": 3}))]
    fn wrong_types_are_still_rejected(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<Sample>(value).is_err());
    }
}
