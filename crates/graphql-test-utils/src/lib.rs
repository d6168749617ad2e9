//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the workbench crates: cursor-marker
//! extraction for offset-based completion tests and common introspection
//! fixtures.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]

pub mod cursor;
pub mod fixtures;

pub use cursor::extract_cursor;
pub use fixtures::{
    blog_introspection, blog_schema, country_introspection, country_schema, response_envelope,
};
