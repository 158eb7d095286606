//! JSON parser for schema documents

use schematable_core::{
    error::{Result, SchemaTableError},
    types::SchemaNode,
};
use std::fs;
use std::path::Path;

use super::SchemaParser;

/// `JSON` parser implementation
#[derive(Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new `JSON` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse string content, attributing failures to a named document
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` carrying `name` if the content is not a JSON
    /// object.
    pub fn parse_named(&self, name: &str, content: &str) -> Result<SchemaNode> {
        self.parse_str(content).map_err(|e| match e {
            SchemaTableError::ParseError { message, .. } => {
                SchemaTableError::parse_in(message, name)
            }
            other => other,
        })
    }
}

impl SchemaParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<SchemaNode> {
        serde_json::from_str(content)
            .map_err(|e| SchemaTableError::parse(format!("JSON parsing error: {e}")))
    }

    fn parse_file(&self, path: &Path) -> Result<SchemaNode> {
        let content = fs::read_to_string(path).map_err(SchemaTableError::IoError)?;

        self.parse_str(&content).map_err(|e| match e {
            SchemaTableError::ParseError { message, document } => SchemaTableError::ParseError {
                message: format!("{message} in file {}", path.display()),
                document,
            },
            other => other,
        })
    }
}
