//! Extension Assembler: runs every mapper for one service

use crate::error::ValidationErrors;
use crate::extensions::local_configs::map_local_configs;
use crate::extensions::path::FieldPath;
use crate::extensions::prebuild::map_prebuild;
use crate::extensions::sensitive::map_sensitive;
use crate::model::{LocalConfig, PrebuildJob, SensitiveConfig, Service};
use serde_yaml::{Mapping, Value};
use tracing::debug;

pub const LOCAL_CONFIGS_KEY: &str = "local_configs";
pub const PREBUILD_KEY: &str = "prebuild";
pub const SENSITIVE_KEY: &str = "sensitive";

/// Keys handled by this crate; everything else on a service is a base field
pub const EXTENSION_KEYS: [&str; 3] = [LOCAL_CONFIGS_KEY, PREBUILD_KEY, SENSITIVE_KEY];

/// Typed extension lists of one service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Extensions {
    pub local_configs: Vec<LocalConfig>,
    pub prebuild: Vec<PrebuildJob>,
    pub sensitive: Vec<SensitiveConfig>,
}

/// Run the three mappers on a service fragment
///
/// The mappers are independent: a failure in one does not stop the others,
/// and all of their errors are reported together.
///
/// # Errors
///
/// Returns every field error found in any extension of the service
#[inline]
pub fn map_extensions(name: &str, fragment: &Mapping) -> Result<Extensions, ValidationErrors> {
    let path = FieldPath::service(name);
    let mut errors = ValidationErrors::new();

    let local_configs = errors.absorb(map_local_configs(
        fragment.get(LOCAL_CONFIGS_KEY),
        &path.key(LOCAL_CONFIGS_KEY),
    ));
    let prebuild = errors.absorb(map_prebuild(
        fragment.get(PREBUILD_KEY),
        &path.key(PREBUILD_KEY),
    ));
    let sensitive = errors.absorb(map_sensitive(
        fragment.get(SENSITIVE_KEY),
        &path.key(SENSITIVE_KEY),
    ));

    match (local_configs, prebuild, sensitive) {
        (Some(local_configs), Some(prebuild), Some(sensitive)) => Ok(Extensions {
            local_configs,
            prebuild,
            sensitive,
        }),
        _ => Err(errors),
    }
}

/// Build the service record for a fragment
///
/// Base fields are copied verbatim. Extension lists are attached only when
/// every mapper succeeded; otherwise they stay empty and the errors are
/// returned alongside.
#[must_use]
#[inline]
pub fn assemble_service(name: &str, fragment: &Mapping) -> (Service, ValidationErrors) {
    let base: Mapping = fragment
        .iter()
        .filter(|&(key, _)| !is_extension_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let mut service = Service::new(name, base);

    match map_extensions(name, fragment) {
        Ok(extensions) => {
            debug!(
                "Service '{name}': {} local config(s), {} prebuild job(s), {} sensitive target(s)",
                extensions.local_configs.len(),
                extensions.prebuild.len(),
                extensions.sensitive.len()
            );
            service.local_configs = extensions.local_configs;
            service.prebuild = extensions.prebuild;
            service.sensitive = extensions.sensitive;
            (service, ValidationErrors::new())
        }
        Err(errors) => {
            debug!("Service '{name}': {} extension error(s)", errors.len());
            (service, errors)
        }
    }
}

fn is_extension_key(key: &Value) -> bool {
    key.as_str().is_some_and(|key| EXTENSION_KEYS.contains(&key))
}
