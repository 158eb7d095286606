//! Keyword-frequency aggregation over extracted property fragments
//!
//! Counts every key appearing in the extracted properties' own schema
//! fragments, except for structural keywords that never make sense as table
//! columns. The result ranks candidate columns for the column model.

use indexmap::IndexMap;
use schematable_core::types::{ExtractedProperty, KeywordCount};
use serde_json::Value;

/// Structural keywords excluded from aggregation
pub const EXCLUDED_KEYWORDS: [&str; 9] = [
    "$schema",
    "$id",
    "$ref",
    "properties",
    "items",
    "allOf",
    "anyOf",
    "oneOf",
    "enumDescriptions",
];

/// Count keyword occurrences across all extracted property fragments.
///
/// Output is sorted descending by count; ties keep first-encountered order.
#[must_use]
pub fn aggregate(properties: &[ExtractedProperty]) -> Vec<KeywordCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for property in properties {
        let Value::Object(fragment) = &property.schema else {
            continue;
        };
        for key in fragment.keys() {
            if EXCLUDED_KEYWORDS.contains(&key.as_str()) {
                continue;
            }
            *counts.entry(key.as_str()).or_insert(0) += 1;
        }
    }

    let mut usage: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(keyword, count)| KeywordCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect();
    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage
}
