//! Term rewriter and result-field restoration
//!
//! Rewriting turns a validated caller query into the executable statement
//! by substituting every display term with its internal term. It operates
//! on the raw query, not the cleansed token form, so punctuation survives
//! into the statement.
//!
//! Substitution order is the registry's rewrite order: longest display term
//! first, declaration order on ties. Applying `persons` before `person_id`
//! would corrupt the longer column name; the fixed order makes the result
//! independent of how the vocabulary was authored.

use serde_json::{Map, Value};

use crate::vocabulary::VocabularyRegistry;

/// Rewrite a validated query into its executable statement.
///
/// Keyword entries map to themselves, which also normalizes their case
/// (`select` becomes `SELECT`). Calling this on an unvalidated query is
/// undefined; the dispatcher validates first.
pub fn rewrite(registry: &VocabularyRegistry, raw_query: &str) -> String {
    let mut statement = raw_query.to_string();
    for entry in registry.rewrite_entries() {
        statement = replace_ignore_ascii_case(&statement, &entry.display_term, &entry.internal_term);
    }
    statement
}

/// Restore internal identifiers inside result field names back to their
/// display terms, recursively through nested objects and arrays.
///
/// Only table/column mappings are inverted; keyword mappings are identity
/// and have nothing to restore. Values are passed through untouched — only
/// field names are rewritten.
pub fn restore_fields(registry: &VocabularyRegistry, value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut restored = Map::with_capacity(map.len());
            for (key, val) in map {
                restored.insert(restore_name(registry, &key), restore_fields(registry, val));
            }
            Value::Object(restored)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| restore_fields(registry, v))
                .collect(),
        ),
        other => other,
    }
}

/// Restore one field name, longest internal term first
fn restore_name(registry: &VocabularyRegistry, name: &str) -> String {
    let mut restored = name.to_string();
    for entry in registry.restore_entries() {
        restored = replace_ignore_ascii_case(&restored, &entry.internal_term, &entry.display_term);
    }
    restored
}

/// Case-insensitive (ASCII) replace of every occurrence of `needle`
fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    // ASCII lowering preserves byte offsets, so matches found in the
    // lowered copy index directly into the original.
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();

    let mut out = String::with_capacity(haystack.len());
    let mut pos = 0;
    while let Some(found) = lower_haystack[pos..].find(&lower_needle) {
        let start = pos + found;
        out.push_str(&haystack[pos..start]);
        out.push_str(replacement);
        pos = start + needle.len();
    }
    out.push_str(&haystack[pos..]);
    out
}
