//! # Schematable Core
//!
//! Core types and errors for turning JSON Schema documents that describe a
//! tabular dataset (an array-typed schema whose `items` describe one row)
//! into a flat, renderable property table.
//!
//! This crate holds the data model shared by the processing service:
//! schema nodes, extracted properties, table data, keyword statistics and
//! configuration. The resolution and extraction logic lives in
//! `schematable-service`.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for schema table operations
pub mod error;

/// Type definitions for schema documents and table data
pub mod types;

/// Configuration types for the processor
pub mod config;

pub use config::ProcessorConfig;
pub use error::{Result, SchemaTableError};
pub use serde_json::Value;
pub use types::{
    ExtractedProperty, KeywordCount, RawDocument, SchemaNode, TableData, is_falsy,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ProcessorConfig;
    pub use crate::error::{Result, SchemaTableError};
    pub use crate::types::*;
}
