//! Async loading of schema documents from disk
//!
//! Reading file contents is the only asynchronous boundary of the engine:
//! documents are read sequentially, in input order, before any resolution
//! or extraction begins.

use schematable_core::{
    error::{Result, SchemaTableError},
    types::RawDocument,
};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Loads raw schema documents for processing
#[derive(Debug, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Create a new loader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read the given files into raw documents, in input order.
    ///
    /// The document name is the file name; it becomes the store key when
    /// the document carries no `$id`.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if any file cannot be read.
    pub async fn load_files(
        &self,
        paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Vec<RawDocument>> {
        let mut documents = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let content = fs::read_to_string(path).await.map_err(|e| {
                SchemaTableError::other_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                )
            })?;

            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

            debug!(name, bytes = content.len(), "loaded schema document");
            documents.push(RawDocument::new(name, content));
        }

        Ok(documents)
    }
}
