//! Table rendering
//!
//! Renderers consume the derived [`TableData`] and a [`ColumnSelection`];
//! they never reach back into the store or influence resolution.

use schematable_core::types::TableData;

use crate::column::ColumnSelection;

pub mod csv;
pub mod html;

pub use csv::CsvRenderer;
pub use html::HtmlRenderer;

/// Trait for table renderers
pub trait TableRenderer: Send + Sync {
    /// Renderer name
    fn name(&self) -> &str;

    /// File extension for the rendered output
    fn file_extension(&self) -> &str;

    /// Render the table with the selected columns
    fn render(&self, table: &TableData, columns: &ColumnSelection) -> String;
}
