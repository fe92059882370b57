//! Compose document loading
//!
//! Reads the document, checks its overall layout against the embedded JSON
//! schema, then hands every service fragment to the extension assembler.

pub mod schema;
pub mod yaml;
