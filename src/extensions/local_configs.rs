//! Mapper for `services.<name>.local_configs`

use crate::error::ValidationErrors;
use crate::extensions::fields;
use crate::extensions::path::FieldPath;
use crate::extensions::scalar::{normalize_identity, normalize_mode};
use crate::model::LocalConfig;
use serde_yaml::Value;

const KNOWN_KEYS: &[&str] = &["source", "target", "uid", "gid", "mode"];

/// Map the raw `local_configs` list
///
/// Entries are neither merged nor deduplicated, even when targets collide.
///
/// # Errors
///
/// Returns every field error found across all entries
#[inline]
pub fn map_local_configs(
    node: Option<&Value>,
    path: &FieldPath,
) -> Result<Vec<LocalConfig>, ValidationErrors> {
    let entries = fields::sequence(node, path)?;

    let mut errors = ValidationErrors::new();
    let mut configs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(config) = errors.absorb(map_entry(entry, &path.index(index))) {
            configs.push(config);
        }
    }

    errors.into_result(configs)
}

fn map_entry(entry: &Value, path: &FieldPath) -> Result<LocalConfig, ValidationErrors> {
    let map = fields::mapping(entry, path)?;
    fields::warn_unknown_keys(map, KNOWN_KEYS, path);

    let mut errors = ValidationErrors::new();
    let source = errors.capture(fields::required_string(map, "source", path));
    let target = errors.capture(fields::required_string(map, "target", path));
    let uid = errors.capture(normalize_identity(fields::get(map, "uid"), &path.key("uid")));
    let gid = errors.capture(normalize_identity(fields::get(map, "gid"), &path.key("gid")));
    let mode = errors.capture(normalize_mode(fields::get(map, "mode"), &path.key("mode")));

    match (source, target, uid, gid, mode) {
        (Some(source), Some(target), Some(uid), Some(gid), Some(mode)) => {
            Ok(LocalConfig::new(source, target, uid, gid, mode))
        }
        _ => Err(errors),
    }
}
