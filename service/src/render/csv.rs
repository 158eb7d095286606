//! CSV renderer
//!
//! The first column is always `Category` (empty when a row has no
//! category), followed by one column per selected column. The category is
//! written on every row, even though the HTML view only shows it once per
//! group.

use schematable_core::types::TableData;

use super::TableRenderer;
use crate::column::ColumnSelection;

/// CSV renderer
pub struct CsvRenderer {
    /// Delimiter character (default: comma)
    delimiter: char,
    /// Quote character for escaping
    quote_char: char,
    /// Whether to include the header row
    include_headers: bool,
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRenderer {
    /// Create a new CSV renderer
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            quote_char: '"',
            include_headers: true,
        }
    }

    /// Set a custom delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Configure header generation
    #[must_use]
    pub fn with_headers(mut self, enabled: bool) -> Self {
        self.include_headers = enabled;
        self
    }

    /// Quote a field when it contains the delimiter, the quote character or
    /// a newline; inner quote characters are doubled
    fn escape_field(&self, value: &str) -> String {
        if value.contains(self.delimiter)
            || value.contains(self.quote_char)
            || value.contains('\n')
        {
            let doubled = value.replace(
                self.quote_char,
                &format!("{}{}", self.quote_char, self.quote_char),
            );
            format!("{}{}{}", self.quote_char, doubled, self.quote_char)
        } else {
            value.to_string()
        }
    }

    fn render_row(&self, fields: &[String]) -> String {
        fields
            .iter()
            .map(|field| self.escape_field(field))
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string())
    }
}

impl TableRenderer for CsvRenderer {
    fn name(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn render(&self, table: &TableData, columns: &ColumnSelection) -> String {
        let mut rows = Vec::new();

        if self.include_headers {
            let mut header = vec!["Category".to_string()];
            header.extend(
                columns
                    .columns()
                    .iter()
                    .map(|kind| kind.header().to_string()),
            );
            rows.push(self.render_row(&header));
        }

        for property in &table.properties {
            let mut fields = vec![property.category.clone().unwrap_or_default()];
            fields.extend(columns.columns().iter().map(|kind| kind.cell(property)));
            rows.push(self.render_row(&fields));
        }

        rows.join("\n")
    }
}
