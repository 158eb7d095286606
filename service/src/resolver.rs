//! Reference resolution against a base document and the schema store
//!
//! Two kinds of references occur in the input schemas:
//!
//! - internal pointers (`#/path/to/node`), walked key by key inside the
//!   base document;
//! - external references, matched against stored document identifiers by a
//!   bidirectional suffix heuristic with an exact-key fallback.
//!
//! Resolution is best-effort: a miss returns `None` and the caller degrades
//! the affected composition branch instead of aborting. Internal traversal
//! stops on any falsy value, not only on missing keys — a `false` or `0`
//! sitting on the path ends the walk (see `schematable_core::is_falsy`).

use schematable_core::types::{SchemaNode, is_falsy};
use serde_json::Value;
use tracing::debug;

use crate::store::SchemaStore;

/// Resolves reference strings against the store and a base document
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    store: &'a SchemaStore,
}

impl<'a> ReferenceResolver<'a> {
    /// Create a resolver over the given store
    #[must_use]
    pub fn new(store: &'a SchemaStore) -> Self {
        Self { store }
    }

    /// Resolve a reference string.
    ///
    /// References starting with `#` are internal pointers into `base`;
    /// anything else is looked up in the store. Returns `None` when nothing
    /// matches.
    #[must_use]
    pub fn resolve(&self, reference: &str, base: &SchemaNode) -> Option<Value> {
        if reference.starts_with('#') {
            Self::resolve_pointer(reference, base)
        } else {
            self.resolve_external(reference)
        }
    }

    /// Walk an internal pointer inside `base`.
    ///
    /// The path is the remainder after the leading `#/`, split on `/`. The
    /// walk stops as soon as a segment is missing or the value reached is
    /// falsy, so `#` and `#/` never resolve.
    fn resolve_pointer(reference: &str, base: &SchemaNode) -> Option<Value> {
        let path = reference.get(2..).unwrap_or("");

        let mut current = Value::Object(base.as_map().clone());
        for segment in path.split('/') {
            let next = match &current {
                Value::Object(map) => map.get(segment).cloned(),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index).cloned()),
                _ => None,
            };

            match next {
                Some(value) if !is_falsy(&value) => current = value,
                _ => {
                    debug!(reference, segment, "internal pointer did not resolve");
                    return None;
                }
            }
        }

        Some(current)
    }

    /// Look up an external reference in the store.
    ///
    /// Identifiers are scanned in load order; the first one that is a suffix
    /// of the reference, or of which the reference is a suffix, wins. When
    /// the heuristic finds nothing, the reference is tried as a literal
    /// store key.
    fn resolve_external(&self, reference: &str) -> Option<Value> {
        for (id, document) in self.store.iter() {
            if reference.ends_with(id) || id.ends_with(reference) {
                return Some(Value::Object(document.as_map().clone()));
            }
        }

        if let Some(document) = self.store.get(reference) {
            return Some(Value::Object(document.as_map().clone()));
        }

        debug!(reference, "external reference matched no stored document");
        None
    }
}
