//! Loaded schema document container
//!
//! Pure data container: documents keyed by identifier (`$id` when present,
//! source file name otherwise), in load order. Load order matters — external
//! reference lookups and main-schema selection both break ties by it.

use indexmap::IndexMap;
use schematable_core::types::SchemaNode;

/// The set of loaded schema documents for one processing run
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    documents: IndexMap<String, SchemaNode>,
}

impl SchemaStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }

    /// Insert a document under `id`. A later insert under the same
    /// identifier overwrites the earlier one.
    pub fn insert(&mut self, id: impl Into<String>, document: SchemaNode) {
        self.documents.insert(id.into(), document);
    }

    /// Look up a document by exact identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SchemaNode> {
        self.documents.get(id)
    }

    /// Iterate documents in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.documents.iter().map(|(id, doc)| (id.as_str(), doc))
    }

    /// Number of stored documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
