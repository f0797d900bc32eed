//! Write-body cleanup applied before typed deserialisation.
//!
//! Admin forms submit `""` for every optional input the owner left blank.
//! Those must land in the database as `NULL`, not as empty strings, so the
//! API runs request bodies through [`clean_json`] before handing them to the
//! DTO types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Replace every empty-string field of a JSON object with `null`.
///
/// Nested objects are cleaned recursively. Arrays are left alone: an empty
/// entry in `tech_stack` is a client bug, not a cleared field.
pub fn clean_json(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, field)| (key, clean_field(field)))
                .collect(),
        ),
        other => other,
    }
}

fn clean_field(field: Value) -> Value {
    match field {
        Value::String(s) if s.is_empty() => Value::Null,
        nested @ Value::Object(_) => clean_json(nested),
        other => other,
    }
}

/// Deserialize a nullable column in an update DTO as a three-state value.
///
/// Pair with `#[serde(default)]`:
///
/// - field absent      -> `None` (leave the column unchanged)
/// - field is `null`   -> `Some(None)` (clear the column)
/// - field has a value -> `Some(Some(v))`
///
/// ```ignore
/// #[serde(default, deserialize_with = "folio_core::normalize::nullable")]
/// pub end_date: Option<Option<Date>>,
/// ```
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
