//! Mapping and validation of the CI/CD extension fields
//!
//! Each mapper is a pure function from a raw YAML node to a typed list,
//! collecting every field error it finds instead of stopping at the first.

pub mod assembler;
pub mod fields;
pub mod local_configs;
pub mod path;
pub mod prebuild;
pub mod scalar;
pub mod sensitive;

pub use assembler::{Extensions, assemble_service, map_extensions};
pub use path::FieldPath;
