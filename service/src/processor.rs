//! End-to-end schema processing
//!
//! One `process` call takes the raw documents and returns everything derived
//! from them; there is no session state to reset between runs, so two runs
//! over the same inputs always agree.

use schematable_core::{
    config::ProcessorConfig,
    error::Result,
    types::{KeywordCount, RawDocument, SchemaNode, TableData},
};
use tracing::{debug, warn};

use crate::extractor::PropertyExtractor;
use crate::keywords::aggregate;
use crate::parser::JsonParser;
use crate::resolver::ReferenceResolver;
use crate::store::SchemaStore;

/// Everything derived from one set of input documents
#[derive(Debug, Clone)]
pub struct ProcessedSchemas {
    /// All loaded documents, in load order
    pub store: SchemaStore,
    /// Identifier the main schema was loaded under. A later document
    /// colliding on this identifier owns the store entry; the table is
    /// still derived from the document selected during the load loop.
    pub main_id: String,
    /// Derived table view; `None` when the main schema's `items` does not
    /// resolve to an object schema
    pub table: Option<TableData>,
    /// Keyword usage over the extracted properties, ranked for column
    /// selection; empty when there is no table
    pub keyword_usage: Vec<KeywordCount>,
}

/// Drives parsing, main-schema selection, extraction and aggregation
#[derive(Debug, Clone, Default)]
pub struct SchemaProcessor {
    config: ProcessorConfig,
}

impl SchemaProcessor {
    /// Create a processor with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with the given configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn with_config(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Process a set of raw documents.
    ///
    /// The main schema is the *last* loaded document with `type: "array"`
    /// and an `items` entry; when no document qualifies but exactly one was
    /// submitted, that single document is used regardless of its shape.
    /// Returns `Ok(None)` when no main schema could be identified.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if any input is not a JSON object, or a
    /// composition error if the main schema's `allOf` graph cycles or nests
    /// past the configured depth.
    pub fn process(&self, documents: &[RawDocument]) -> Result<Option<ProcessedSchemas>> {
        let parser = JsonParser::new();
        let mut store = SchemaStore::new();
        let mut main: Option<(String, SchemaNode)> = None;

        for document in documents {
            let node = parser.parse_named(&document.name, &document.content)?;
            let id = node.id().unwrap_or(&document.name).to_string();
            if node.is_row_array() {
                // capture the document itself: a later identifier collision
                // replaces the store entry but not the selection
                main = Some((id.clone(), node.clone()));
            }
            store.insert(id, node);
        }

        // single-file uploads often omit `type: array` on the wrapper
        if main.is_none() && documents.len() == 1 {
            main = store
                .iter()
                .next()
                .map(|(id, node)| (id.to_string(), node.clone()));
        }

        let Some((main_id, main)) = main else {
            debug!(
                documents = documents.len(),
                "no document satisfies the main-schema predicate"
            );
            return Ok(None);
        };

        let table = self.table_data(&store, &main_id, &main)?;
        let keyword_usage = table
            .as_ref()
            .map(|t| aggregate(&t.properties))
            .unwrap_or_default();

        Ok(Some(ProcessedSchemas {
            store,
            main_id,
            table,
            keyword_usage,
        }))
    }

    /// Derive the table view for the main schema.
    ///
    /// `items` is followed through at most one `$ref` hop; when that fails
    /// the table degrades to `None` rather than failing the run.
    fn table_data(
        &self,
        store: &SchemaStore,
        main_id: &str,
        main: &SchemaNode,
    ) -> Result<Option<TableData>> {
        let Some(items) = main.items() else {
            warn!(main_id, "main schema has no items, no table produced");
            return Ok(None);
        };
        let Some(items_node) = SchemaNode::from_value(items) else {
            warn!(main_id, "main schema items is not an object, no table produced");
            return Ok(None);
        };

        let row_schema = if let Some(reference) = items_node.reference() {
            let resolver = ReferenceResolver::new(store);
            match resolver
                .resolve(reference, main)
                .as_ref()
                .and_then(SchemaNode::from_value)
            {
                Some(resolved) => resolved,
                None => {
                    warn!(main_id, reference, "items reference did not resolve");
                    return Ok(None);
                }
            }
        } else {
            items_node
        };

        let extractor = PropertyExtractor::new(store, self.config.max_composition_depth);
        let properties = extractor.extract(&row_schema, None)?;

        Ok(Some(TableData {
            title: main
                .title()
                .unwrap_or(self.config.default_title.as_str())
                .to_string(),
            description: main.description().unwrap_or_default().to_string(),
            properties,
        }))
    }
}
