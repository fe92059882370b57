//! JSON Schema check of the compose document layout

use crate::error::ComposeError;
use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::sync::LazyLock;

static VALIDATOR: LazyLock<Result<Validator, String>> = LazyLock::new(compile_schema);

/// Compile the embedded JSON schema for the compose document layout
fn compile_schema() -> Result<Validator, String> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| format!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::options()
        .with_draft(Draft::Draft7)
        .build(&schema)
        .map_err(|e| format!("Failed to compile JSON schema: {e}"))
}

/// Validate a decoded document against the schema
///
/// # Errors
///
/// Returns [`ComposeError::Schema`] listing every violation
#[inline]
pub fn validate_against_schema(document: &Value) -> Result<(), ComposeError> {
    let validator = VALIDATOR
        .as_ref()
        .map_err(|message| ComposeError::schema(message.clone()))?;

    let error_messages: Vec<String> = validator
        .iter_errors(document)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(ComposeError::schema(format!(
            "Compose document does not have the expected layout:\n{}",
            error_messages.join("\n")
        )));
    }

    Ok(())
}
