//! Canonical typed model produced by the loader
//!
//! Every list keeps the order in which the author declared its entries.
//! Records are built once at load time and never mutated afterwards.

pub mod local_config;
pub mod prebuild;
pub mod project;
pub mod sensitive;

pub use local_config::{FileMode, LocalConfig};
pub use prebuild::{Command, PrebuildJob};
pub use project::{Project, Service};
pub use sensitive::{SecretRef, SensitiveConfig, SensitiveFormat};
