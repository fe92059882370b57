//! Mapper for `services.<name>.sensitive`

use crate::error::{FieldError, ValidationErrors};
use crate::extensions::fields;
use crate::extensions::path::FieldPath;
use crate::extensions::scalar::{normalize_identity, normalize_mode};
use crate::model::{SecretRef, SensitiveConfig, SensitiveFormat};
use serde_yaml::{Mapping, Value};
use tracing::debug;

const TARGET_KEYS: &[&str] = &["target", "format", "secrets", "uid", "gid", "mode"];
const SECRET_KEYS: &[&str] = &["source", "name"];

/// Map the raw `sensitive` target list
///
/// # Errors
///
/// Returns every field error found across all targets and their secrets
#[inline]
pub fn map_sensitive(
    node: Option<&Value>,
    path: &FieldPath,
) -> Result<Vec<SensitiveConfig>, ValidationErrors> {
    let entries = fields::sequence(node, path)?;

    let mut errors = ValidationErrors::new();
    let mut configs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(config) = errors.absorb(map_target(entry, &path.index(index))) {
            configs.push(config);
        }
    }

    errors.into_result(configs)
}

fn map_target(entry: &Value, path: &FieldPath) -> Result<SensitiveConfig, ValidationErrors> {
    let map = fields::mapping(entry, path)?;
    fields::warn_unknown_keys(map, TARGET_KEYS, path);

    let mut errors = ValidationErrors::new();
    let target = errors.capture(fields::required_string(map, "target", path));
    let format = errors.capture(map_format(map, path));
    let secrets = errors.absorb(map_secrets(fields::get(map, "secrets"), &path.key("secrets")));
    let uid = errors.capture(normalize_identity(fields::get(map, "uid"), &path.key("uid")));
    let gid = errors.capture(normalize_identity(fields::get(map, "gid"), &path.key("gid")));
    let mode = errors.capture(normalize_mode(fields::get(map, "mode"), &path.key("mode")));

    if let (Some(SensitiveFormat::Raw), Some(secrets)) = (format, secrets.as_ref()) {
        if secrets.len() > 1 {
            errors.push(FieldError::AmbiguousRawSecrets {
                path: path.key("secrets"),
                count: secrets.len(),
            });
        }
    }

    match (target, format, secrets, uid, gid, mode) {
        (Some(target), Some(format), Some(secrets), Some(uid), Some(gid), Some(mode))
            if errors.is_empty() =>
        {
            if format == SensitiveFormat::Env && secrets.iter().any(|secret| secret.name.is_empty()) {
                debug!("{path}: env target has secrets without a variable name");
            }
            Ok(SensitiveConfig::new(target, format, secrets, uid, gid, mode))
        }
        _ => Err(errors),
    }
}

fn map_format(map: &Mapping, path: &FieldPath) -> Result<SensitiveFormat, FieldError> {
    if fields::get(map, "format").is_none() {
        return Err(FieldError::MissingRequiredField {
            path: path.key("format"),
        });
    }

    let format = fields::optional_string(map, "format", path)?;
    format
        .parse::<SensitiveFormat>()
        .map_err(|_| FieldError::InvalidEnumValue {
            path: path.key("format"),
            value: format.clone(),
            allowed: SensitiveFormat::ALLOWED,
        })
}

fn map_secrets(node: Option<&Value>, path: &FieldPath) -> Result<Vec<SecretRef>, ValidationErrors> {
    let entries = fields::sequence(node, path)?;
    if entries.is_empty() {
        return Err(FieldError::EmptySecretList { path: path.clone() }.into());
    }

    let mut errors = ValidationErrors::new();
    let mut secrets = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(secret) = errors.absorb(map_secret(entry, &path.index(index))) {
            secrets.push(secret);
        }
    }

    errors.into_result(secrets)
}

fn map_secret(entry: &Value, path: &FieldPath) -> Result<SecretRef, ValidationErrors> {
    let map = fields::mapping(entry, path)?;
    fields::warn_unknown_keys(map, SECRET_KEYS, path);

    let mut errors = ValidationErrors::new();
    let source = errors.capture(fields::required_string(map, "source", path));
    let name = errors.capture(fields::optional_string(map, "name", path));

    match (source, name) {
        (Some(source), Some(name)) => Ok(SecretRef::new(source, name)),
        _ => Err(errors),
    }
}
