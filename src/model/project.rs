//! Project and service records

use crate::error::{ComposeError, ValidationErrors};
use crate::loader;
use crate::model::{LocalConfig, PrebuildJob, SensitiveConfig};
use crate::system::System;
use serde::ser::{SerializeMap as _, Serializer};
use serde::Serialize;
use serde_yaml::Mapping;

/// A loaded compose document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Project {
    /// Project name, when the document declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Services in declaration order
    #[serde(serialize_with = "serialize_services")]
    pub services: Vec<Service>,
}

impl Project {
    #[must_use]
    #[inline]
    pub const fn new(name: Option<String>, services: Vec<Service>) -> Self {
        Self { name, services }
    }

    /// Load a compose file, failing on any invalid extension field
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The document is not valid YAML or does not have the compose layout
    /// - Any service carries an invalid extension field
    #[inline]
    pub fn load_from_file(system: &dyn System, path: &str) -> Result<Self, ComposeError> {
        loader::yaml::load_project(system, path)
    }

    /// Load a compose document from text, failing on any invalid extension field
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_from_file`], minus the file access failures
    #[inline]
    pub fn load_from_str(content: &str) -> Result<Self, ComposeError> {
        let (project, errors) = Self::load_lenient_from_str(content)?;
        errors.into_result(project).map_err(ComposeError::from)
    }

    /// Load a compose document, returning field errors next to the project
    ///
    /// Services whose extensions failed keep their base fields and have
    /// empty extension lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or does not have
    /// the compose layout
    #[inline]
    pub fn load_lenient_from_str(content: &str) -> Result<(Self, ValidationErrors), ComposeError> {
        loader::yaml::parse_project(content)
    }

    /// Look up a service by name
    #[must_use]
    #[inline]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.name == name)
    }
}

fn serialize_services<S: Serializer>(services: &[Service], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(services.len()))?;
    for service in services {
        map.serialize_entry(&service.name, service)?;
    }
    map.end()
}

/// One service of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Service {
    /// Mapping key of the service
    #[serde(skip)]
    pub name: String,

    /// Base compose fields, passed through uninterpreted
    #[serde(flatten)]
    pub base: Mapping,

    pub local_configs: Vec<LocalConfig>,

    pub prebuild: Vec<PrebuildJob>,

    pub sensitive: Vec<SensitiveConfig>,
}

impl Service {
    /// Service without any extension entries
    #[must_use]
    #[inline]
    pub fn new(name: &str, base: Mapping) -> Self {
        Self {
            name: name.to_owned(),
            base,
            local_configs: Vec::new(),
            prebuild: Vec::new(),
            sensitive: Vec::new(),
        }
    }

    /// Whether the service declares any extension entry
    #[must_use]
    #[inline]
    pub fn has_extensions(&self) -> bool {
        !(self.local_configs.is_empty() && self.prebuild.is_empty() && self.sensitive.is_empty())
    }
}
