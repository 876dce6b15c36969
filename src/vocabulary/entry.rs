//! Vocabulary entry types
//!
//! An entry pairs a caller-facing display term with the identifier the
//! storage layer actually understands, plus a human-readable description
//! served by the discovery listing.

use serde::{Deserialize, Serialize};

/// What kind of term an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// SQL vocabulary (SELECT, FROM, operators...) — maps to itself
    Keyword,
    /// A table display name mapped to its storage identifier
    Table,
    /// A column display name mapped to its storage identifier
    Column,
}

impl Category {
    /// Whether entries of this category participate in result-field
    /// restoration (the inverse of rewriting).
    pub fn is_identifier(&self) -> bool {
        matches!(self, Category::Table | Category::Column)
    }
}

/// One approved term and its storage-side mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Caller-facing term usable in queries
    pub display_term: String,
    /// Identifier substituted into the executed statement
    pub internal_term: String,
    /// Term category
    pub category: Category,
    /// Human-readable description for the discovery listing
    pub description: String,
}

impl VocabularyEntry {
    /// Create a keyword entry (display and internal term are the same)
    pub fn keyword(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            display_term: term.clone(),
            internal_term: term,
            category: Category::Keyword,
            description: "SQL".to_string(),
        }
    }

    /// Create a table entry
    pub fn table(
        display: impl Into<String>,
        internal: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_term: display.into(),
            internal_term: internal.into(),
            category: Category::Table,
            description: description.into(),
        }
    }

    /// Create a column entry
    pub fn column(
        display: impl Into<String>,
        internal: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_term: display.into(),
            internal_term: internal.into(),
            category: Category::Column,
            description: description.into(),
        }
    }

    /// Listing line served by the discovery call
    pub fn listing_line(&self) -> String {
        format!("{} => {}", self.display_term, self.description)
    }
}
