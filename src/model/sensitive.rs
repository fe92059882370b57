//! Secret delivery targets

use crate::model::FileMode;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How secrets are rendered into the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitiveFormat {
    /// `KEY=VALUE` lines, one per secret
    Env,
    /// Secret bytes written verbatim
    Raw,
}

impl SensitiveFormat {
    /// Accepted spellings, matched case-sensitively
    pub const ALLOWED: &'static [&'static str] = &["env", "raw"];

    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Raw => "raw",
        }
    }
}

impl FromStr for SensitiveFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "env" => Ok(Self::Env),
            "raw" => Ok(Self::Raw),
            _ => Err(format!("Invalid format: {s}. Use 'env' or 'raw'")),
        }
    }
}

impl fmt::Display for SensitiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One secret delivery target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct SensitiveConfig {
    /// Destination path inside the service
    pub target: String,

    pub format: SensitiveFormat,

    /// Secrets in application order, never empty
    pub secrets: Vec<SecretRef>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub gid: String,

    #[serde(skip_serializing_if = "FileMode::is_unset")]
    pub mode: FileMode,
}

impl SensitiveConfig {
    #[must_use]
    #[inline]
    pub const fn new(
        target: String,
        format: SensitiveFormat,
        secrets: Vec<SecretRef>,
        uid: String,
        gid: String,
        mode: FileMode,
    ) -> Self {
        Self {
            target,
            format,
            secrets,
            uid,
            gid,
            mode,
        }
    }
}

/// Reference to a secret held by an external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct SecretRef {
    /// Identifier of the secret in the store
    pub source: String,

    /// Environment variable key under `env` format, empty when absent
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl SecretRef {
    #[must_use]
    #[inline]
    pub const fn new(source: String, name: String) -> Self {
        Self { source, name }
    }
}
