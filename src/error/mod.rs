//! Error handling module
//!
//! Defines field-level validation errors, their aggregation, and the
//! top-level load error with exit codes

pub mod field;
pub mod types;

pub use field::*;
pub use types::*;
