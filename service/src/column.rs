//! Table column model
//!
//! Columns are either built-in fields of an extracted property (name,
//! required flag) or bound to a schema keyword. A closed set of keywords
//! gets dedicated handling; every other keyword falls through to one
//! generic handler that displays the raw value. The selection holds the
//! user-chosen ordered subset behind the column-picker UI; the UI itself is
//! not part of this crate.

use schematable_core::types::{ExtractedProperty, KeywordCount};
use serde_json::Value;

/// One table column, dispatching on what it displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Property name
    Name,
    /// Whether the property is required by its enclosing schema
    Required,
    /// The `type` keyword
    Type,
    /// The `description` keyword
    Description,
    /// Any other keyword, displayed as its raw JSON value
    Keyword(String),
}

impl ColumnKind {
    /// Map a schema keyword to its column, falling through to the generic
    /// keyword column for anything without dedicated handling
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "type" => Self::Type,
            "description" => Self::Description,
            other => Self::Keyword(other.to_string()),
        }
    }

    /// Column header text
    #[must_use]
    pub fn header(&self) -> &str {
        match self {
            Self::Name => "Name",
            Self::Required => "Required",
            Self::Type => "Type",
            Self::Description => "Description",
            Self::Keyword(keyword) => keyword,
        }
    }

    /// Cell text for one extracted property
    #[must_use]
    pub fn cell(&self, property: &ExtractedProperty) -> String {
        match self {
            Self::Name => property.name.clone(),
            Self::Required => {
                if property.required {
                    "yes".to_string()
                } else {
                    String::new()
                }
            }
            Self::Type => display_value(property.schema.get("type")),
            Self::Description => display_value(property.schema.get("description")),
            Self::Keyword(keyword) => display_value(property.schema.get(keyword)),
        }
    }
}

/// Render a keyword value for a table cell.
///
/// Strings are shown bare; anything else is compact JSON; an absent keyword
/// is an empty cell.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The ordered set of columns currently selected for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<ColumnKind>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnKind::Name,
                ColumnKind::Type,
                ColumnKind::Description,
                ColumnKind::Required,
            ],
        }
    }
}

impl ColumnSelection {
    /// Create a selection from an explicit column list
    #[must_use]
    pub fn new(columns: Vec<ColumnKind>) -> Self {
        Self { columns }
    }

    /// All selectable columns for the given keyword usage: the built-in
    /// columns first, then one column per used keyword in usage rank order
    #[must_use]
    pub fn available(usage: &[KeywordCount]) -> Vec<ColumnKind> {
        let mut kinds = vec![ColumnKind::Name, ColumnKind::Required];
        for entry in usage {
            let kind = ColumnKind::from_keyword(&entry.keyword);
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Selected columns in display order
    #[must_use]
    pub fn columns(&self) -> &[ColumnKind] {
        &self.columns
    }

    /// Append a column if not already selected
    pub fn add(&mut self, kind: ColumnKind) {
        if !self.columns.contains(&kind) {
            self.columns.push(kind);
        }
    }

    /// Remove a column from the selection
    pub fn remove(&mut self, kind: &ColumnKind) {
        self.columns.retain(|existing| existing != kind);
    }

    /// Move the column at `from` to position `to`, shifting the others.
    /// Out-of-range indices leave the selection unchanged.
    pub fn move_column(&mut self, from: usize, to: usize) {
        if from >= self.columns.len() || to >= self.columns.len() {
            return;
        }
        let kind = self.columns.remove(from);
        self.columns.insert(to, kind);
    }
}
