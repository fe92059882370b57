//! Mock system implementation for testing

use super::System;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// # Example
/// ```
/// use cicdez::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/project/compose.yaml", "services: {}").unwrap();
///
/// assert!(system.is_file(Path::new("/project/compose.yaml")));
/// ```
#[derive(Clone, Default)]
pub struct MockSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MockSystem {
    /// Create a new empty `MockSystem`
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The in-memory filesystem lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &str) -> io::Result<Self> {
        let mut files = self
            .files
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        files.insert(path.as_ref().to_path_buf(), contents.to_owned());
        drop(files);
        Ok(self)
    }
}

impl System for MockSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self
            .files
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}
