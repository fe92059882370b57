//! Normalization of ambiguous YAML scalars
//!
//! Identity and permission fields may arrive as strings, plain integers or
//! prefixed integers depending on how the author spelled them. Every spelling
//! is reduced here to one canonical form before the mappers use it.

use crate::error::FieldError;
use crate::extensions::fields::node_kind;
use crate::extensions::path::FieldPath;
use crate::model::FileMode;
use serde_yaml::Value;

/// A scalar as delivered by the YAML decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawScalar<'a> {
    Absent,
    Unsigned(u64),
    Signed(i64),
    Text(&'a str),
    /// Any other node; carries its kind for error messages
    Other(&'static str),
}

impl<'a> RawScalar<'a> {
    /// Classify a node; `null` counts as absent
    #[must_use]
    #[inline]
    pub fn from_node(node: Option<&'a Value>) -> Self {
        match node {
            None | Some(&Value::Null) => Self::Absent,
            Some(&Value::String(ref text)) => Self::Text(text),
            Some(&Value::Number(ref number)) => number
                .as_u64()
                .map(Self::Unsigned)
                .or_else(|| number.as_i64().map(Self::Signed))
                .unwrap_or(Self::Other("a floating point number")),
            Some(other) => Self::Other(node_kind(other)),
        }
    }
}

/// Canonical form of a `uid` or `gid` field, empty when unset
///
/// `1000` and `"1000"` both normalize to `"1000"`. Integers are rendered in
/// decimal, so `0o1750` becomes `"1000"`. Strings are kept verbatim: a bare
/// `01000` is a string to the YAML 1.2 decoder and stays `"01000"`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidType`] if the node is a negative integer or
/// not a string or integer
#[inline]
pub fn normalize_identity(node: Option<&Value>, path: &FieldPath) -> Result<String, FieldError> {
    match RawScalar::from_node(node) {
        RawScalar::Absent => Ok(String::new()),
        RawScalar::Unsigned(id) => Ok(id.to_string()),
        RawScalar::Signed(_) => Err(FieldError::InvalidType {
            path: path.clone(),
            expected: "a non-negative integer or string",
            found: "a negative integer",
        }),
        RawScalar::Text(text) => Ok(text.to_owned()),
        RawScalar::Other(found) => Err(FieldError::InvalidType {
            path: path.clone(),
            expected: "a string or integer",
            found,
        }),
    }
}

/// Canonical permission bits of a `mode` field
///
/// Integers are taken at face value (`0o440` is already resolved by the
/// decoder). Strings are always read as octal, so `"0440"`, `"440"` and
/// `"0o440"` all yield `0o440`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidMode`] if the value is negative, not a valid
/// octal literal, or above `0o7777`
#[inline]
pub fn normalize_mode(node: Option<&Value>, path: &FieldPath) -> Result<FileMode, FieldError> {
    let invalid = |value: String| FieldError::InvalidMode {
        path: path.clone(),
        value,
    };

    match RawScalar::from_node(node) {
        RawScalar::Absent => Ok(FileMode::UNSET),
        RawScalar::Unsigned(bits) => u32::try_from(bits)
            .ok()
            .and_then(FileMode::new)
            .ok_or_else(|| invalid(bits.to_string())),
        RawScalar::Signed(bits) => Err(invalid(bits.to_string())),
        RawScalar::Text(text) => parse_octal(text).ok_or_else(|| invalid(text.to_owned())),
        RawScalar::Other(_) => Err(invalid(node.map(render_node).unwrap_or_default())),
    }
}

/// The node as the author wrote it, on one line
fn render_node(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|text| text.trim_end().replace('\n', " "))
        .unwrap_or_default()
}

fn parse_octal(text: &str) -> Option<FileMode> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(FileMode::UNSET);
    }

    let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return None;
    }

    u32::from_str_radix(digits, 8).ok().and_then(FileMode::new)
}
