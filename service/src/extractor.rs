//! Recursive property extraction over `allOf` composition
//!
//! Flattens an object schema into an ordered list of
//! [`ExtractedProperty`] rows: direct `properties` first (in document key
//! order), then each `allOf` branch in branch order. A branch that resolves
//! to a document with its own `title` starts a new category; untitled and
//! inline branches inherit the caller's. Dangling references are skipped,
//! properties defined by several branches are all kept.
//!
//! Composition cycles are detected with a visited set over the `$ref`
//! strings of the active resolution path and reported as
//! `CompositionCycle`; a depth bound catches degenerate nesting that never
//! revisits the same reference.

use schematable_core::{
    error::{Result, SchemaTableError},
    types::{ExtractedProperty, SchemaNode},
};
use tracing::debug;

use crate::resolver::ReferenceResolver;
use crate::store::SchemaStore;

/// Flattens object schemas into ordered property lists
#[derive(Debug, Clone, Copy)]
pub struct PropertyExtractor<'a> {
    resolver: ReferenceResolver<'a>,
    max_depth: usize,
}

impl<'a> PropertyExtractor<'a> {
    /// Create an extractor resolving references against `store`
    #[must_use]
    pub fn new(store: &'a SchemaStore, max_depth: usize) -> Self {
        Self {
            resolver: ReferenceResolver::new(store),
            max_depth,
        }
    }

    /// Extract all properties reachable from `node`, in extraction order.
    ///
    /// # Errors
    ///
    /// Returns `CompositionCycle` if an `allOf`/`$ref` chain loops back on
    /// itself, or `CompositionDepthExceeded` when nesting outgrows the
    /// configured bound.
    pub fn extract(
        &self,
        node: &SchemaNode,
        category: Option<&str>,
    ) -> Result<Vec<ExtractedProperty>> {
        let mut properties = Vec::new();
        let mut visiting = Vec::new();
        self.walk(node, category, 0, &mut visiting, &mut properties)?;
        Ok(properties)
    }

    fn walk(
        &self,
        node: &SchemaNode,
        category: Option<&str>,
        depth: usize,
        visiting: &mut Vec<String>,
        out: &mut Vec<ExtractedProperty>,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(SchemaTableError::CompositionDepthExceeded {
                limit: self.max_depth,
            });
        }

        if let Some(properties) = node.properties() {
            for (name, fragment) in properties {
                out.push(ExtractedProperty {
                    category: category.map(str::to_string),
                    name: name.clone(),
                    schema: fragment.clone(),
                    required: node.requires(name),
                });
            }
        }

        if let Some(branches) = node.all_of() {
            for branch in branches {
                let Some(branch_node) = SchemaNode::from_value(branch) else {
                    debug!("skipping non-object allOf branch");
                    continue;
                };

                if let Some(reference) = branch_node.reference() {
                    self.walk_reference(reference, node, category, depth, visiting, out)?;
                } else {
                    self.walk(&branch_node, category, depth + 1, visiting, out)?;
                }
            }
        }

        Ok(())
    }

    fn walk_reference(
        &self,
        reference: &str,
        base: &SchemaNode,
        category: Option<&str>,
        depth: usize,
        visiting: &mut Vec<String>,
        out: &mut Vec<ExtractedProperty>,
    ) -> Result<()> {
        if visiting.iter().any(|seen| seen == reference) {
            return Err(SchemaTableError::cycle(reference));
        }

        let Some(resolved) = self.resolver.resolve(reference, base) else {
            debug!(reference, "skipping unresolved allOf branch");
            return Ok(());
        };
        let Some(resolved_node) = SchemaNode::from_value(&resolved) else {
            debug!(reference, "skipping allOf branch resolved to a non-object");
            return Ok(());
        };

        // a titled branch starts its own category, otherwise inherit
        let branch_category = resolved_node.title().map(str::to_string);
        let category = branch_category.as_deref().or(category);

        visiting.push(reference.to_string());
        let walked = self.walk(&resolved_node, category, depth + 1, visiting, out);
        visiting.pop();
        walked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn node(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value).expect("object")
    }

    fn names(properties: &[ExtractedProperty]) -> Vec<&str> {
        properties.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_direct_properties_in_key_order() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "properties": {
                "id": {"type": "integer"},
                "name": {"type": "string"},
                "age": {"type": "integer"}
            },
            "required": ["id"]
        }));

        let properties = extractor.extract(&schema, None)?;
        assert_eq!(names(&properties), vec!["id", "name", "age"]);
        assert!(properties[0].required);
        assert!(!properties[1].required);
        assert_eq!(properties[0].schema, json!({"type": "integer"}));
        assert_eq!(properties[0].category, None);
        Ok(())
    }

    #[test]
    fn test_direct_properties_precede_branches() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "properties": {"own": {}},
            "allOf": [
                {"properties": {"first": {}}},
                {"properties": {"second": {}}}
            ]
        }));

        let properties = extractor.extract(&schema, None)?;
        assert_eq!(names(&properties), vec!["own", "first", "second"]);
        Ok(())
    }

    #[test]
    fn test_titled_branch_starts_category() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "$defs": {
                "Audit": {
                    "title": "Audit fields",
                    "properties": {"created_at": {"type": "string"}}
                },
                "Untitled": {
                    "properties": {"misc": {}}
                }
            },
            "allOf": [
                {"$ref": "#/$defs/Audit"},
                {"$ref": "#/$defs/Untitled"},
                {"properties": {"inline": {}}}
            ]
        }));

        let properties = extractor.extract(&schema, Some("Row"))?;
        assert_eq!(names(&properties), vec!["created_at", "misc", "inline"]);
        assert_eq!(properties[0].category.as_deref(), Some("Audit fields"));
        // untitled and inline branches inherit the caller's category
        assert_eq!(properties[1].category.as_deref(), Some("Row"));
        assert_eq!(properties[2].category.as_deref(), Some("Row"));
        Ok(())
    }

    #[test]
    fn test_dangling_reference_skipped() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "allOf": [
                {"$ref": "other.json#/definitions/Gone"},
                {"properties": {"kept": {}}}
            ]
        }));

        let properties = extractor.extract(&schema, None)?;
        assert_eq!(names(&properties), vec!["kept"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_names_not_deduplicated() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "allOf": [
                {"properties": {"x": {"type": "string"}}},
                {"properties": {"x": {"type": "integer"}}}
            ]
        }));

        let properties = extractor.extract(&schema, None)?;
        assert_eq!(names(&properties), vec!["x", "x"]);
        Ok(())
    }

    #[test]
    fn test_external_branch_via_store() -> std::result::Result<(), anyhow::Error> {
        let mut store = SchemaStore::new();
        store.insert(
            "https://example.org/base.json",
            node(json!({
                "title": "Base",
                "properties": {"id": {"type": "integer"}},
                "required": ["id"]
            })),
        );
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({"allOf": [{"$ref": "base.json"}]}));

        let properties = extractor.extract(&schema, None)?;
        assert_eq!(names(&properties), vec!["id"]);
        assert_eq!(properties[0].category.as_deref(), Some("Base"));
        assert!(properties[0].required);
        Ok(())
    }

    #[test]
    fn test_cycle_detected() {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);
        let schema = node(json!({
            "$defs": {
                "Loop": {"allOf": [{"$ref": "#/$defs/Loop"}]}
            },
            "allOf": [{"$ref": "#/$defs/Loop"}]
        }));

        let result = extractor.extract(&schema, None);
        assert!(matches!(
            result,
            Err(SchemaTableError::CompositionCycle { .. })
        ));
    }

    #[test]
    fn test_depth_bound() {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 2);
        let schema = node(json!({
            "allOf": [{"allOf": [{"allOf": [{"properties": {"deep": {}}}]}]}]
        }));

        let result = extractor.extract(&schema, None);
        assert!(matches!(
            result,
            Err(SchemaTableError::CompositionDepthExceeded { .. })
        ));
    }

    #[test]
    fn test_bare_schema_yields_nothing() -> std::result::Result<(), anyhow::Error> {
        let store = SchemaStore::new();
        let extractor = PropertyExtractor::new(&store, 32);

        let properties = extractor.extract(&node(json!({"type": "object"})), None)?;
        assert!(properties.is_empty());
        Ok(())
    }
}
