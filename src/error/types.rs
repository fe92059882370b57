//! Document load errors with exit codes

use crate::error::ValidationErrors;
use thiserror::Error;

/// Main error type for loading a compose document
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComposeError {
    /// Configuration Error - compose file missing or unreadable
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Parse Error - the document is not valid YAML
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Schema Error - the document shell does not match the compose layout
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// Validation Error - one or more extension fields are invalid
    #[error("Validation failed with {count} error(s):\n{errors}", count = .0.len(), errors = .0)]
    Validation(ValidationErrors),
}

impl ComposeError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Parse { .. } => 2,
            Self::Schema { .. } => 3,
            Self::Validation(_) => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a parse error
    #[inline]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a schema error
    #[inline]
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Field errors carried by a validation failure
    #[must_use]
    #[inline]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match *self {
            Self::Validation(ref errors) => Some(errors),
            Self::Configuration { .. } | Self::Parse { .. } | Self::Schema { .. } => None,
        }
    }
}

impl From<ValidationErrors> for ComposeError {
    #[inline]
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
