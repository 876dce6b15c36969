//! The vocabulary registry
//!
//! Holds the approved entries, enforces construction invariants, and fixes
//! the deterministic orders the rewriter depends on. Built once at startup;
//! every per-request component only reads from it.

use std::collections::HashSet;

use super::entry::{Category, VocabularyEntry};
use super::errors::{VocabularyError, VocabularyResult};

/// Immutable registry of approved query terms
#[derive(Debug, Clone)]
pub struct VocabularyRegistry {
    /// Entries in declaration order (the order the discovery listing shows)
    entries: Vec<VocabularyEntry>,
    /// Lowercased display terms for membership checks
    display_terms: HashSet<String>,
    /// Entry indices in rewrite order: longest display term first,
    /// declaration order on ties
    rewrite_order: Vec<usize>,
    /// Identifier entry indices in restore order: longest internal term first
    restore_order: Vec<usize>,
}

impl VocabularyRegistry {
    /// Build a registry, rejecting ambiguous vocabularies.
    ///
    /// Fails if two entries share a display term case-insensitively, or if
    /// a table/column internal term is itself a display term. Either would
    /// make rewriting or restoration ambiguous, so neither is recoverable.
    pub fn new(entries: Vec<VocabularyEntry>) -> VocabularyResult<Self> {
        let mut display_terms = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !display_terms.insert(entry.display_term.to_lowercase()) {
                return Err(VocabularyError::DuplicateDisplayTerm(
                    entry.display_term.clone(),
                ));
            }
        }

        for entry in &entries {
            if entry.category.is_identifier()
                && display_terms.contains(&entry.internal_term.to_lowercase())
            {
                return Err(VocabularyError::InternalTermCollision(
                    entry.internal_term.clone(),
                ));
            }
        }

        let mut rewrite_order: Vec<usize> = (0..entries.len()).collect();
        // Stable sort keeps declaration order for equal lengths.
        rewrite_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].display_term.len()));

        let mut restore_order: Vec<usize> = (0..entries.len())
            .filter(|&i| entries[i].category.is_identifier())
            .collect();
        restore_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].internal_term.len()));

        Ok(Self {
            entries,
            display_terms,
            rewrite_order,
            restore_order,
        })
    }

    /// The built-in vocabulary: the standard SQL terms plus the demo
    /// persons table and its columns.
    pub fn builtin() -> Self {
        Self::new(builtin_entries()).expect("built-in vocabulary is collision-free")
    }

    /// Case-insensitive membership check for a single token
    pub fn contains(&self, token: &str) -> bool {
        self.display_terms.contains(&token.to_lowercase())
    }

    /// Case-insensitive lookup of a display term
    pub fn lookup(&self, token: &str) -> Option<&VocabularyEntry> {
        self.entries
            .iter()
            .find(|e| e.display_term.eq_ignore_ascii_case(token))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Entries in the order the rewriter must apply them
    pub fn rewrite_entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.rewrite_order.iter().map(|&i| &self.entries[i])
    }

    /// Identifier entries in the order result restoration must apply them
    pub fn restore_entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.restore_order.iter().map(|&i| &self.entries[i])
    }

    /// Discovery listing: one `"display => description"` line per entry,
    /// in declaration order
    pub fn display_listing(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.listing_line()).collect()
    }
}

/// The vocabulary the original service shipped with
fn builtin_entries() -> Vec<VocabularyEntry> {
    let keywords = [
        "SELECT", "FROM", "WHERE", "AND", "OR", "IN", "LIKE", "INSERT", "INTO", "VALUES", " ",
        "_", "%", "*", "=", "<", ">", ",", "?", "(", ")", "'", "\"",
    ];

    let mut entries: Vec<VocabularyEntry> =
        keywords.into_iter().map(VocabularyEntry::keyword).collect();

    entries.push(VocabularyEntry::table(
        "persons",
        "db_persons",
        "Persons Table",
    ));
    entries.push(VocabularyEntry::column(
        "person_id",
        "db_person_id",
        "integer - ID number",
    ));
    entries.push(VocabularyEntry::column(
        "person_name",
        "db_person_name",
        "string - Name",
    ));
    entries.push(VocabularyEntry::column(
        "person_gender",
        "db_person_gender",
        "string - M or F",
    ));
    entries.push(VocabularyEntry::column(
        "person_birthdate",
        "db_person_birthdate",
        "date - YYYY-MM-DD",
    ));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_builds() {
        let registry = VocabularyRegistry::builtin();
        assert!(registry.contains("SELECT"));
        assert!(registry.contains("persons"));
        assert!(!registry.contains("password_hash"));
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let registry = VocabularyRegistry::builtin();
        assert!(registry.contains("select"));
        assert!(registry.contains("Persons"));
        assert!(registry.contains("PERSON_ID"));
    }

    #[test]
    fn test_duplicate_display_term_rejected() {
        let entries = vec![
            VocabularyEntry::keyword("SELECT"),
            VocabularyEntry::table("select", "db_select", "shadows a keyword"),
        ];
        let err = VocabularyRegistry::new(entries).unwrap_err();
        assert!(matches!(err, VocabularyError::DuplicateDisplayTerm(_)));
    }

    #[test]
    fn test_internal_term_collision_rejected() {
        // An internal term that is also someone's display term would make
        // restoration ambiguous.
        let entries = vec![
            VocabularyEntry::column("person_id", "person_key", "id"),
            VocabularyEntry::column("person_key", "db_person_key", "key"),
        ];
        let err = VocabularyRegistry::new(entries).unwrap_err();
        assert!(matches!(err, VocabularyError::InternalTermCollision(_)));
    }

    #[test]
    fn test_keyword_identity_mapping_is_not_a_collision() {
        // Keywords map to themselves; only table/column internals are checked.
        let registry = VocabularyRegistry::new(vec![VocabularyEntry::keyword("SELECT")]);
        assert!(registry.is_ok());
    }

    #[test]
    fn test_rewrite_order_is_longest_first() {
        let registry = VocabularyRegistry::builtin();
        let lengths: Vec<usize> = registry
            .rewrite_entries()
            .map(|e| e.display_term.len())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        // person_birthdate is the longest term and must come first.
        assert_eq!(
            registry.rewrite_entries().next().unwrap().display_term,
            "person_birthdate"
        );
    }

    #[test]
    fn test_restore_order_only_identifiers() {
        let registry = VocabularyRegistry::builtin();
        assert!(registry
            .restore_entries()
            .all(|e| e.category.is_identifier()));
        assert_eq!(registry.restore_entries().count(), 5);
    }

    #[test]
    fn test_display_listing_preserves_declaration_order() {
        let registry = VocabularyRegistry::builtin();
        let listing = registry.display_listing();
        assert_eq!(listing[0], "SELECT => SQL");
        assert_eq!(
            listing.last().unwrap(),
            "person_birthdate => date - YYYY-MM-DD"
        );
        assert_eq!(listing.len(), registry.len());
    }

    #[test]
    fn test_lookup_returns_entry() {
        let registry = VocabularyRegistry::builtin();
        let entry = registry.lookup("PERSONS").unwrap();
        assert_eq!(entry.internal_term, "db_persons");
    }
}
