//! Field-level validation errors and their aggregation

use crate::extensions::path::FieldPath;
use std::fmt;
use thiserror::Error;

/// A single defect found while mapping an extension field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error("{path}: missing required field")]
    MissingRequiredField { path: FieldPath },

    #[error("{path}: invalid value '{value}', expected one of: {}", .allowed.join(", "))]
    InvalidEnumValue {
        path: FieldPath,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{path}: invalid file mode '{value}', expected an octal permission between 0 and 7777")]
    InvalidMode { path: FieldPath, value: String },

    #[error("{path}: prebuild job '{job}' must declare at least one command")]
    EmptyCommandList { path: FieldPath, job: String },

    #[error("{path}: at least one secret is required")]
    EmptySecretList { path: FieldPath },

    #[error("{path}: expected {expected}, found {found}")]
    InvalidType {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: raw format delivers exactly one secret, found {count}")]
    AmbiguousRawSecrets { path: FieldPath, count: usize },
}

/// Discriminant of [`FieldError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    MissingRequiredField,
    InvalidEnumValue,
    InvalidMode,
    EmptyCommandList,
    EmptySecretList,
    InvalidType,
    AmbiguousRawSecrets,
}

impl FieldError {
    /// Location of the offending node
    #[must_use]
    #[inline]
    pub const fn path(&self) -> &FieldPath {
        match *self {
            Self::MissingRequiredField { ref path }
            | Self::InvalidEnumValue { ref path, .. }
            | Self::InvalidMode { ref path, .. }
            | Self::EmptyCommandList { ref path, .. }
            | Self::EmptySecretList { ref path }
            | Self::InvalidType { ref path, .. }
            | Self::AmbiguousRawSecrets { ref path, .. } => path,
        }
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match *self {
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
            Self::InvalidMode { .. } => ErrorKind::InvalidMode,
            Self::EmptyCommandList { .. } => ErrorKind::EmptyCommandList,
            Self::EmptySecretList { .. } => ErrorKind::EmptySecretList,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::AmbiguousRawSecrets { .. } => ErrorKind::AmbiguousRawSecrets,
        }
    }
}

/// Ordered collection of every [`FieldError`] found during a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    #[inline]
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Keep the value of a successful lookup, or record its error
    #[inline]
    pub fn capture<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    /// Like [`Self::capture`] for results that already aggregate errors
    #[inline]
    pub fn absorb<T>(&mut self, result: Result<T, Self>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.extend(errors);
                None
            }
        }
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Kinds of all collected errors, in report order
    #[must_use]
    #[inline]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(FieldError::kind).collect()
    }

    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok(value)` when nothing was collected, otherwise the collected errors
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one error was collected
    #[inline]
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("  - {error}"))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    #[inline]
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
