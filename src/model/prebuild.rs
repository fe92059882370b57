//! Pipeline stages run before a service image is built

use serde::Serialize;

/// One named pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct PrebuildJob {
    /// Display name, not required to be unique
    pub name: String,

    /// Image the job runs in, empty when unset
    #[serde(rename = "runs-on", skip_serializing_if = "String::is_empty")]
    pub runs_on: String,

    /// Steps in execution order, never empty
    pub commands: Vec<Command>,
}

impl PrebuildJob {
    #[must_use]
    #[inline]
    pub const fn new(name: String, runs_on: String, commands: Vec<Command>) -> Self {
        Self {
            name,
            runs_on,
            commands,
        }
    }
}

/// One pipeline step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Command {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Instruction text, opaque to the loader
    pub command: String,
}

impl Command {
    #[must_use]
    #[inline]
    pub const fn new(name: String, command: String) -> Self {
        Self { name, command }
    }
}
