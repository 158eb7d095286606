//! Error types for schema table operations

use thiserror::Error;

/// Main error type for schema table operations
#[derive(Error, Debug)]
pub enum SchemaTableError {
    /// Document parsing errors
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Name of the input document if available
        document: Option<String>,
    },

    /// A `$ref` chain in an `allOf` composition loops back on itself
    #[error("Cyclic schema composition through '{reference}'")]
    CompositionCycle {
        /// Reference that closed the cycle
        reference: String,
    },

    /// Composition nesting exceeded the configured bound
    #[error("Schema composition exceeded maximum depth ({limit})")]
    CompositionDepthExceeded {
        /// Configured depth limit
        limit: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for schema table operations
pub type Result<T> = std::result::Result<T, SchemaTableError>;

impl SchemaTableError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            document: None,
        }
    }

    /// Create a new parse error naming the offending document
    #[must_use]
    pub fn parse_in(message: impl Into<String>, document: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            document: Some(document.into()),
        }
    }

    /// Create a new composition cycle error
    #[must_use]
    pub fn cycle(reference: impl Into<String>) -> Self {
        Self::CompositionCycle {
            reference: reference.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }

    /// Create a generic error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for SchemaTableError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
