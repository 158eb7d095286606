//! Type definitions for schema documents and extracted table data
//!
//! Schema documents are kept as ordered JSON maps rather than a typed
//! `struct` per keyword: the engine only interprets a handful of structural
//! keywords (`$id`, `$ref`, `type`, `items`, `properties`, `required`,
//! `allOf`) and passes everything else through to the table untouched.
//! `serde_json` is built with `preserve_order`, so iteration order over a
//! node equals document key order, which is what drives row order in the
//! rendered table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed JSON Schema document or sub-schema fragment.
///
/// Immutable once loaded; the store owns documents for the lifetime of a
/// processing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaNode(Map<String, Value>);

impl SchemaNode {
    /// Create an empty schema node
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// View a JSON value as a schema node, if it is an object
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|map| Self(map.clone()))
    }

    /// Get a raw keyword value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The document identifier (`$id`)
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field("$id")
    }

    /// The reference target (`$ref`)
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.str_field("$ref")
    }

    /// The schema `title`
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// The schema `description`
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// The schema `type`, when it is a plain string
    #[must_use]
    pub fn schema_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    /// The `items` schema or reference
    #[must_use]
    pub fn items(&self) -> Option<&Value> {
        self.0.get("items")
    }

    /// The `properties` map, in document key order
    #[must_use]
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.0.get("properties").and_then(Value::as_object)
    }

    /// The `allOf` composition branches, in document order
    #[must_use]
    pub fn all_of(&self) -> Option<&Vec<Value>> {
        self.0.get("allOf").and_then(Value::as_array)
    }

    /// Whether `name` appears in this node's `required` array
    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .is_some_and(|names| names.iter().any(|n| n.as_str() == Some(name)))
    }

    /// Whether this node satisfies the main-schema predicate:
    /// `type` is exactly `"array"` and `items` is present
    #[must_use]
    pub fn is_row_array(&self) -> bool {
        self.schema_type() == Some("array") && self.items().is_some()
    }

    /// The underlying keyword map
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the node, yielding it as a JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// One raw input document: a file name and its JSON text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Source file name, used as the store key when the document has no `$id`
    pub name: String,
    /// JSON text content
    pub content: String,
}

impl RawDocument {
    /// Create a raw document from a name and content
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One extracted row candidate of the property table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProperty {
    /// Grouping label, inherited from the `title` of the `allOf` branch
    /// that introduced the property
    pub category: Option<String>,
    /// Property key
    pub name: String,
    /// The property's own schema fragment, not resolved further
    pub schema: Value,
    /// Whether the enclosing object schema lists the property as required
    pub required: bool,
}

/// Occurrence count of one schema keyword across all extracted properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Keyword as it appears in property fragments
    pub keyword: String,
    /// Number of property fragments carrying the keyword
    pub count: usize,
}

/// Derived table view handed to the column model and renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    /// Main schema `title`, or the configured default label
    pub title: String,
    /// Main schema `description`, or empty
    pub description: String,
    /// Extracted properties in extraction order
    pub properties: Vec<ExtractedProperty>,
}

/// JavaScript-style falsiness over JSON values.
///
/// `null`, `false`, numeric zero and the empty string are falsy; empty
/// arrays and objects are truthy. Pointer traversal stops on falsy values,
/// reproducing the original engine's behavior.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
