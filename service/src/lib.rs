//! # Schematable Service
//!
//! Turns a set of JSON Schema documents describing a tabular dataset into a
//! flat property table and keyword statistics, and renders both as CSV or
//! HTML.
//!
//! Processing pipeline: raw documents are parsed and loaded into a
//! [`store::SchemaStore`], the array-typed main schema is selected, its row
//! schema is flattened by the [`extractor::PropertyExtractor`] (resolving
//! `$ref` and `allOf` composition through the [`resolver::ReferenceResolver`]),
//! and the [`keywords`] aggregator counts keyword usage across the extracted
//! fragments to rank candidate table columns.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Table column model and selection state
pub mod column;

/// Recursive property extraction over `allOf` composition
pub mod extractor;

/// Keyword-frequency aggregation over extracted fragments
pub mod keywords;

/// Async loading of schema documents from disk
pub mod loader;

/// Schema document parsing
pub mod parser;

/// End-to-end schema processing
pub mod processor;

/// Table rendering (CSV, HTML)
pub mod render;

/// Reference resolution against a document and the store
pub mod resolver;

/// Loaded schema document container
pub mod store;

pub use column::{ColumnKind, ColumnSelection};
pub use extractor::PropertyExtractor;
pub use keywords::aggregate;
pub use loader::DocumentLoader;
pub use parser::{JsonParser, SchemaParser};
pub use processor::{ProcessedSchemas, SchemaProcessor};
pub use render::{CsvRenderer, HtmlRenderer, TableRenderer};
pub use resolver::ReferenceResolver;
pub use store::SchemaStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::column::{ColumnKind, ColumnSelection};
    pub use crate::processor::{ProcessedSchemas, SchemaProcessor};
    pub use crate::render::{CsvRenderer, HtmlRenderer, TableRenderer};
    pub use crate::store::SchemaStore;
    pub use schematable_core::prelude::*;
}
