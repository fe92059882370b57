//! YAML compose document loading and parsing

use crate::error::{ComposeError, ValidationErrors};
use crate::extensions::assemble_service;
use crate::model::Project;
use crate::system::System;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Read a compose file through the system abstraction
///
/// # Errors
///
/// Returns [`ComposeError::Configuration`] if the file does not exist or
/// cannot be read
#[inline]
pub fn read_document(system: &dyn System, path: &str) -> Result<String, ComposeError> {
    let path_obj = Path::new(path);

    if !system.is_file(path_obj) {
        return Err(ComposeError::configuration(format!(
            "Compose file not found: {path}\n\
            Create a compose.yaml file or specify a different path with --file"
        )));
    }

    system.read_to_string(path_obj).map_err(|e| {
        ComposeError::configuration(format!("Failed to read compose file {path}: {e}"))
    })
}

/// Load and validate a compose file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or if any service
/// has invalid extension fields
#[inline]
pub fn load_project(system: &dyn System, path: &str) -> Result<Project, ComposeError> {
    let content = read_document(system, path)?;
    debug!("Loading compose file {path}");
    Project::load_from_str(&content)
}

/// Parse a compose document, collecting field errors instead of failing
///
/// # Errors
///
/// Returns an error if the text is not YAML or does not have the compose
/// document layout
#[inline]
pub fn parse_project(content: &str) -> Result<(Project, ValidationErrors), ComposeError> {
    let mut document: Value = serde_yaml::from_str(content).map_err(|e| {
        // Extract line and column information from serde_yaml error
        if let Some(location) = e.location() {
            ComposeError::parse(format!(
                "Failed to parse compose file at line {}, column {}: {}",
                location.line(),
                location.column(),
                e
            ))
        } else {
            ComposeError::parse(format!("Failed to parse compose file: {e}"))
        }
    })?;

    // Resolve `<<: *anchor` so shared blocks reach the mappers
    document
        .apply_merge()
        .map_err(|e| ComposeError::parse(format!("Failed to resolve merge keys: {e}")))?;

    let json = serde_json::to_value(&document).map_err(|e| {
        ComposeError::schema(format!("Compose document cannot be represented as JSON: {e}"))
    })?;
    crate::loader::schema::validate_against_schema(&json)?;

    let Value::Mapping(root) = document else {
        return Err(ComposeError::schema("Compose document must be a mapping"));
    };

    let name = root.get("name").and_then(Value::as_str).map(ToOwned::to_owned);

    let empty = Mapping::new();
    let mut errors = ValidationErrors::new();
    let mut services = Vec::new();
    for (key, fragment) in service_fragments(&root, &empty)? {
        let (service, service_errors) = assemble_service(&key, fragment);
        errors.extend(service_errors);
        services.push(service);
    }

    debug!(
        "Loaded {} service(s) with {} field error(s)",
        services.len(),
        errors.len()
    );

    Ok((Project::new(name, services), errors))
}

/// Service fragments in declaration order; a `null` service is an empty one
fn service_fragments<'a>(
    root: &'a Mapping,
    empty: &'a Mapping,
) -> Result<Vec<(String, &'a Mapping)>, ComposeError> {
    let services = match root.get("services") {
        None | Some(&Value::Null) => return Ok(Vec::new()),
        Some(&Value::Mapping(ref services)) => services,
        Some(_) => return Err(ComposeError::schema("'services' must be a mapping")),
    };

    services
        .iter()
        .map(|(key, fragment)| {
            let name = service_name(key)?;
            match *fragment {
                Value::Mapping(ref fragment) => Ok((name, fragment)),
                Value::Null => Ok((name, empty)),
                _ => Err(ComposeError::schema(format!(
                    "Service '{name}' must be a mapping"
                ))),
            }
        })
        .collect()
}

fn service_name(key: &Value) -> Result<String, ComposeError> {
    match *key {
        Value::String(ref name) => Ok(name.clone()),
        Value::Number(ref number) => Ok(number.to_string()),
        _ => Err(ComposeError::schema("Service names must be strings")),
    }
}
