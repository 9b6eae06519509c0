//! Output formatting module for re-fluent
//!
//! Provides JSON (default) and text output formats.

pub mod json;
pub mod text;
pub mod types;

pub use types::*;
