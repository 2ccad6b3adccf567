use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single rejected field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "name")]
    pub field: String,
    #[schema(example = "Employee name is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Checks a required text field and returns the value as submitted.
///
/// Whitespace-only input counts as missing. Length is measured in
/// characters, not bytes, over the untrimmed value.
pub fn required_text(
    field: &str,
    label: &str,
    value: &str,
    max_chars: usize,
    errors: &mut Vec<FieldError>,
) -> String {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    } else if value.chars().count() > max_chars {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at most {max_chars} characters"),
        ));
    }

    value.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
}

/// Decodes an optional scalar that may arrive typed (JSON) or as text
/// (urlencoded forms). Blank text is treated as absent so that it reaches
/// validation instead of failing the whole body.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Value(value)) => Ok(Some(value)),
        Some(Lenient::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Lenient::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}
