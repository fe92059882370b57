//! Output of the canonical model

use crate::model::Project;
use anyhow::{Context as _, Result};
use std::str::FromStr;

/// Output format for the rendered model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Invalid format: {s}. Use 'json' or 'yaml'")),
        }
    }
}

/// Render a project in the requested format
///
/// # Errors
///
/// Returns an error if the model cannot be serialized, e.g. when a base
/// service field uses a non-string key and JSON output is requested
#[inline]
pub fn render_project(project: &Project, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(project).context("Failed to serialize project as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(project).context("Failed to serialize project as YAML")
        }
    }
}
