//! Files injected into a service filesystem

use serde::Serialize;
use std::fmt;

/// Permission bits of a materialized file
///
/// Zero is the unset value: the downstream executor applies its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    /// Highest accepted permission value (`0o7777`)
    pub const MAX: u32 = 0o7777;

    /// Unset mode
    pub const UNSET: Self = Self(0);

    /// Wrap raw permission bits, rejecting values above [`Self::MAX`]
    #[must_use]
    #[inline]
    pub const fn new(bits: u32) -> Option<Self> {
        if bits > Self::MAX { None } else { Some(Self(bits)) }
    }

    #[must_use]
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// One file to materialize inside a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct LocalConfig {
    /// Path of the file on the host side
    pub source: String,

    /// Destination path inside the service
    pub target: String,

    /// Owner user id, empty when unset
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,

    /// Owner group id, empty when unset
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gid: String,

    #[serde(skip_serializing_if = "FileMode::is_unset")]
    pub mode: FileMode,
}

impl LocalConfig {
    #[must_use]
    #[inline]
    pub const fn new(source: String, target: String, uid: String, gid: String, mode: FileMode) -> Self {
        Self {
            source,
            target,
            uid,
            gid,
            mode,
        }
    }
}
