//! Schema parsing module
//!
//! Inputs are JSON text documents; each must parse to a JSON object to be
//! usable as a schema. A parse failure is fatal for the processing run that
//! submitted the document.
//!
//! The processing pipeline hands the parser text it already read through
//! the async loader; `parse_file` is the direct path-based entry point for
//! callers working outside that pipeline.

use schematable_core::{
    error::Result,
    types::SchemaNode,
};
use std::path::Path;

pub mod json_parser;

pub use json_parser::JsonParser;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse a schema from string content
    ///
    /// # Errors
    ///
    /// Returns a `SchemaTableError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<SchemaNode>;

    /// Parse a schema from a file
    ///
    /// # Errors
    ///
    /// Returns a `SchemaTableError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaNode>;
}
