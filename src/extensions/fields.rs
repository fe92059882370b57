//! Typed lookups on raw YAML mappings shared by the mappers

use crate::error::FieldError;
use crate::extensions::path::FieldPath;
use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Human-readable name of a node kind, used in type errors
#[must_use]
#[inline]
pub const fn node_kind(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Look up `key`, treating an explicit YAML `null` as absent
#[must_use]
#[inline]
pub fn get<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Entries of a list field; absent and `null` both yield an empty slice
///
/// # Errors
///
/// Returns [`FieldError::InvalidType`] if the node is not a sequence
#[inline]
pub fn sequence<'a>(node: Option<&'a Value>, path: &FieldPath) -> Result<&'a [Value], FieldError> {
    match node {
        None | Some(&Value::Null) => Ok(&[]),
        Some(&Value::Sequence(ref entries)) => Ok(entries.as_slice()),
        Some(other) => Err(FieldError::InvalidType {
            path: path.clone(),
            expected: "a sequence",
            found: node_kind(other),
        }),
    }
}

/// View a list entry as a mapping
///
/// # Errors
///
/// Returns [`FieldError::InvalidType`] if the entry is not a mapping
#[inline]
pub fn mapping<'a>(entry: &'a Value, path: &FieldPath) -> Result<&'a Mapping, FieldError> {
    entry.as_mapping().ok_or_else(|| FieldError::InvalidType {
        path: path.clone(),
        expected: "a mapping",
        found: node_kind(entry),
    })
}

/// Text of an optional scalar field, empty when absent
///
/// Booleans and numbers are rendered the way they were written.
///
/// # Errors
///
/// Returns [`FieldError::InvalidType`] if the node is a sequence or mapping
#[inline]
pub fn optional_string(map: &Mapping, key: &str, path: &FieldPath) -> Result<String, FieldError> {
    match get(map, key) {
        None => Ok(String::new()),
        Some(&Value::String(ref text)) => Ok(text.clone()),
        Some(&Value::Number(ref number)) => Ok(number.to_string()),
        Some(&Value::Bool(flag)) => Ok(flag.to_string()),
        Some(other) => Err(FieldError::InvalidType {
            path: path.key(key),
            expected: "a string",
            found: node_kind(other),
        }),
    }
}

/// Text of a required scalar field
///
/// # Errors
///
/// Returns [`FieldError::MissingRequiredField`] if the field is absent or
/// blank, or [`FieldError::InvalidType`] if it is not a scalar
#[inline]
pub fn required_string(map: &Mapping, key: &str, path: &FieldPath) -> Result<String, FieldError> {
    let text = optional_string(map, key, path)?;
    if text.trim().is_empty() {
        return Err(FieldError::MissingRequiredField {
            path: path.key(key),
        });
    }
    Ok(text)
}

/// Log keys the mapper does not understand; they are otherwise ignored
#[inline]
pub fn warn_unknown_keys(map: &Mapping, known: &[&str], path: &FieldPath) {
    for key in map.keys() {
        let is_known = key.as_str().is_some_and(|name| known.contains(&name));
        if !is_known {
            warn!(
                "{path}: ignoring unknown key {}",
                serde_yaml::to_string(key).unwrap_or_default().trim_end()
            );
        }
    }
}
