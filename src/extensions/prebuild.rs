//! Mapper for `services.<name>.prebuild`

use crate::error::{FieldError, ValidationErrors};
use crate::extensions::fields;
use crate::extensions::path::FieldPath;
use crate::model::{Command, PrebuildJob};
use serde_yaml::Value;

const JOB_KEYS: &[&str] = &["name", "runs-on", "commands"];
const COMMAND_KEYS: &[&str] = &["name", "command"];

/// Map the raw `prebuild` job list
///
/// Jobs and the commands inside them keep their declared order. Duplicate
/// job names are legal.
///
/// # Errors
///
/// Returns every field error found across all jobs and commands
#[inline]
pub fn map_prebuild(
    node: Option<&Value>,
    path: &FieldPath,
) -> Result<Vec<PrebuildJob>, ValidationErrors> {
    let entries = fields::sequence(node, path)?;

    let mut errors = ValidationErrors::new();
    let mut jobs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(job) = errors.absorb(map_job(entry, &path.index(index))) {
            jobs.push(job);
        }
    }

    errors.into_result(jobs)
}

fn map_job(entry: &Value, path: &FieldPath) -> Result<PrebuildJob, ValidationErrors> {
    let map = fields::mapping(entry, path)?;
    fields::warn_unknown_keys(map, JOB_KEYS, path);

    let mut errors = ValidationErrors::new();
    let name = errors.capture(fields::required_string(map, "name", path));
    let runs_on = errors.capture(fields::optional_string(map, "runs-on", path));
    let job_name = name.as_deref().unwrap_or_default();
    let commands = errors.absorb(map_commands(
        fields::get(map, "commands"),
        &path.key("commands"),
        job_name,
    ));

    match (name, runs_on, commands) {
        (Some(name), Some(runs_on), Some(commands)) => {
            Ok(PrebuildJob::new(name, runs_on, commands))
        }
        _ => Err(errors),
    }
}

fn map_commands(
    node: Option<&Value>,
    path: &FieldPath,
    job: &str,
) -> Result<Vec<Command>, ValidationErrors> {
    let entries = fields::sequence(node, path)?;
    if entries.is_empty() {
        return Err(FieldError::EmptyCommandList {
            path: path.clone(),
            job: job.to_owned(),
        }
        .into());
    }

    let mut errors = ValidationErrors::new();
    let mut commands = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(command) = errors.absorb(map_command(entry, &path.index(index))) {
            commands.push(command);
        }
    }

    errors.into_result(commands)
}

fn map_command(entry: &Value, path: &FieldPath) -> Result<Command, ValidationErrors> {
    let map = fields::mapping(entry, path)?;
    fields::warn_unknown_keys(map, COMMAND_KEYS, path);

    let mut errors = ValidationErrors::new();
    let name = errors.capture(fields::optional_string(map, "name", path));
    let command = errors.capture(fields::required_string(map, "command", path));

    match (name, command) {
        (Some(name), Some(command)) => Ok(Command::new(name, command)),
        _ => Err(errors),
    }
}
