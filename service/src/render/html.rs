//! HTML renderer
//!
//! Renders the property table as markup. Rows are grouped visually: a
//! category header row spanning all columns is emitted whenever the
//! category changes, so consecutive rows of the same category share one
//! header.

use schematable_core::types::TableData;

use super::TableRenderer;
use crate::column::ColumnSelection;

/// HTML table renderer
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl TableRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn render(&self, table: &TableData, columns: &ColumnSelection) -> String {
        let column_count = columns.columns().len();
        let mut out = String::new();

        out.push_str("<table class=\"schema-table\">\n");
        out.push_str(&format!(
            "<caption>{}</caption>\n",
            escape_html(&table.title)
        ));

        out.push_str("<thead><tr>");
        for kind in columns.columns() {
            out.push_str(&format!("<th>{}</th>", escape_html(kind.header())));
        }
        out.push_str("</tr></thead>\n<tbody>\n");

        let mut current_category: Option<&str> = None;
        for property in &table.properties {
            let category = property.category.as_deref();
            if category != current_category {
                if let Some(label) = category {
                    out.push_str(&format!(
                        "<tr class=\"category\"><th colspan=\"{column_count}\">{}</th></tr>\n",
                        escape_html(label)
                    ));
                }
                current_category = category;
            }

            out.push_str("<tr>");
            for kind in columns.columns() {
                out.push_str(&format!("<td>{}</td>", escape_html(&kind.cell(property))));
            }
            out.push_str("</tr>\n");
        }

        out.push_str("</tbody>\n</table>\n");
        out
    }
}
