//! End-to-end processing tests: document loading, main-schema selection,
//! reference resolution and property extraction over realistic schema sets.

use pretty_assertions::assert_eq;
use schematable_core::types::{RawDocument, SchemaNode};
use schematable_service::processor::SchemaProcessor;
use serde_json::json;

fn doc(name: &str, content: serde_json::Value) -> RawDocument {
    RawDocument::new(name, content.to_string())
}

#[test]
fn single_inline_items_schema() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![doc(
        "rows.json",
        json!({
            "type": "array",
            "items": {
                "properties": {"id": {"type": "integer"}},
                "required": ["id"]
            }
        }),
    )];

    let table = processor
        .process(&documents)?
        .expect("main schema")
        .table
        .expect("table");

    assert_eq!(table.properties.len(), 1);
    assert_eq!(table.properties[0].name, "id");
    assert!(table.properties[0].required);
    assert_eq!(table.properties[0].schema, json!({"type": "integer"}));
    Ok(())
}

#[test]
fn items_through_internal_pointer() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![doc(
        "rows.json",
        json!({
            "type": "array",
            "items": {"$ref": "#/$defs/Row"},
            "$defs": {
                "Row": {"properties": {"x": {"type": "string"}}}
            }
        }),
    )];

    let table = processor
        .process(&documents)?
        .expect("main schema")
        .table
        .expect("table");
    assert_eq!(table.properties[0].name, "x");
    Ok(())
}

#[test]
fn unmatched_external_branch_contributes_nothing() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![doc(
        "rows.json",
        json!({
            "type": "array",
            "items": {
                "allOf": [
                    {"$ref": "other.json#/definitions/Gone"},
                    {"properties": {"kept": {"type": "string"}}}
                ]
            }
        }),
    )];

    let table = processor
        .process(&documents)?
        .expect("main schema")
        .table
        .expect("table");
    assert_eq!(table.properties.len(), 1);
    assert_eq!(table.properties[0].name, "kept");
    Ok(())
}

#[test]
fn no_qualifying_document_among_several() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc("a.json", json!({"type": "object", "properties": {}})),
        doc("b.json", json!({"title": "also not a table"})),
    ];

    assert!(processor.process(&documents)?.is_none());
    Ok(())
}

#[test]
fn keyword_usage_counts_fragment_keys() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![doc(
        "rows.json",
        json!({
            "type": "array",
            "items": {
                "properties": {
                    "a": {"type": "string", "minLength": 3, "pattern": "^a"},
                    "b": {"type": "integer"}
                }
            }
        }),
    )];

    let processed = processor.process(&documents)?.expect("main schema");
    let counts: Vec<(&str, usize)> = processed
        .keyword_usage
        .iter()
        .map(|u| (u.keyword.as_str(), u.count))
        .collect();

    assert_eq!(
        counts,
        vec![("type", 2), ("minLength", 1), ("pattern", 1)]
    );
    Ok(())
}

#[test]
fn cross_document_composition_with_categories() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc(
            "common.json",
            json!({
                "$id": "https://example.org/common.json",
                "title": "Common fields",
                "properties": {
                    "id": {"type": "integer"},
                    "created_at": {"type": "string", "format": "date-time"}
                },
                "required": ["id"]
            }),
        ),
        doc(
            "rows.json",
            json!({
                "title": "Measurements",
                "description": "One measurement per row",
                "type": "array",
                "items": {"$ref": "#/$defs/Measurement"},
                "$defs": {
                    "Measurement": {
                        "properties": {"value": {"type": "number"}},
                        "allOf": [{"$ref": "common.json"}]
                    }
                }
            }),
        ),
    ];

    let processed = processor.process(&documents)?.expect("main schema");
    assert_eq!(processed.main_id, "rows.json");

    let table = processed.table.expect("table");
    assert_eq!(table.title, "Measurements");
    assert_eq!(table.description, "One measurement per row");

    let rows: Vec<(Option<&str>, &str, bool)> = table
        .properties
        .iter()
        .map(|p| (p.category.as_deref(), p.name.as_str(), p.required))
        .collect();

    // direct properties first, then the resolved branch under its title
    assert_eq!(
        rows,
        vec![
            (None, "value", false),
            (Some("Common fields"), "id", true),
            (Some("Common fields"), "created_at", false),
        ]
    );
    Ok(())
}

#[test]
fn reprocessing_is_deterministic() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc(
            "common.json",
            json!({"title": "Common", "properties": {"id": {"type": "integer"}}}),
        ),
        doc(
            "rows.json",
            json!({
                "type": "array",
                "items": {"allOf": [{"$ref": "common.json"}]}
            }),
        ),
    ];

    let first = processor.process(&documents)?.expect("main schema");
    let second = processor.process(&documents)?.expect("main schema");

    assert_eq!(first.table, second.table);
    assert_eq!(first.keyword_usage, second.keyword_usage);
    Ok(())
}

#[test]
fn unresolvable_items_reference_means_no_table() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc("rows.json", json!({"type": "array", "items": {"$ref": "gone.json"}})),
        doc("other.json", json!({"title": "unrelated"})),
    ];

    let processed = processor.process(&documents)?.expect("main schema");
    assert!(processed.table.is_none());
    assert!(processed.keyword_usage.is_empty());
    Ok(())
}

#[test]
fn main_schema_survives_later_id_collision() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc(
            "rows.json",
            json!({
                "$id": "https://example.org/rows",
                "type": "array",
                "items": {"properties": {"a": {"type": "string"}}}
            }),
        ),
        doc(
            "notes.json",
            json!({"$id": "https://example.org/rows", "title": "not a table"}),
        ),
    ];

    let processed = processor.process(&documents)?.expect("main schema");
    assert_eq!(processed.main_id, "https://example.org/rows");

    // the later document owns the store entry...
    assert_eq!(
        processed
            .store
            .get("https://example.org/rows")
            .and_then(SchemaNode::title),
        Some("not a table")
    );

    // ...but the table comes from the qualifying document
    let table = processed.table.expect("table from the qualifying document");
    assert_eq!(table.properties[0].name, "a");
    Ok(())
}

#[test]
fn shared_id_documents_do_not_trigger_single_fallback() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc("a.json", json!({"$id": "https://example.org/one", "title": "first"})),
        doc("b.json", json!({"$id": "https://example.org/one", "title": "second"})),
    ];

    // two inputs collapse to one store entry, but the single-document
    // fallback counts submitted inputs
    assert!(processor.process(&documents)?.is_none());
    Ok(())
}

#[test]
fn colliding_identifiers_keep_last_document() -> Result<(), anyhow::Error> {
    let processor = SchemaProcessor::new();
    let documents = vec![
        doc(
            "v1.json",
            json!({
                "$id": "https://example.org/rows",
                "type": "array",
                "items": {"properties": {"old": {}}}
            }),
        ),
        doc(
            "v2.json",
            json!({
                "$id": "https://example.org/rows",
                "type": "array",
                "items": {"properties": {"new": {}}}
            }),
        ),
    ];

    let processed = processor.process(&documents)?.expect("main schema");
    assert_eq!(processed.store.len(), 1);
    let table = processed.table.expect("table");
    assert_eq!(table.properties[0].name, "new");
    Ok(())
}
