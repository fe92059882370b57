//! `cicdez` - compose file loader with CI/CD extensions
//!
//! This library maps the `local_configs`, `prebuild` and `sensitive`
//! extension fields of a compose file into a strongly-typed model, applying
//! defaults, normalizing ambiguous YAML scalars, and reporting every invalid
//! field with its path in a single pass.

pub mod cli;
pub mod error;
pub mod extensions;
pub mod loader;
pub mod model;
pub mod render;
pub mod system;

use anyhow::Result;
use cli::Args;
use error::ComposeError;
use model::Project;
use render::{OutputFormat, render_project};
use system::System;
use tracing::warn;

/// Main entry point for the cicdez library
///
/// # Errors
///
/// Returns a [`ComposeError`] (wrapped in `anyhow`) if the document cannot be
/// loaded or any extension field is invalid
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(ComposeError::configuration)?;

    if !args.lenient {
        let project = Project::load_from_file(system, &args.file)?;
        println!("{}", render_project(&project, format)?);
        return Ok(());
    }

    let content = loader::yaml::read_document(system, &args.file)?;
    let (project, errors) = Project::load_lenient_from_str(&content)?;
    println!("{}", render_project(&project, format)?);

    for error in &errors {
        warn!("{error}");
    }
    errors.into_result(()).map_err(|errors| ComposeError::from(errors).into())
}
