//! Token validator
//!
//! Exact case-insensitive membership of every token against the registry.
//! The original implementation tested substring containment against the
//! joined vocabulary, which wrongly accepts any fragment of a longer term
//! (`PER` passes because `person_id` contains it). That is a defect; exact
//! membership is the required behavior here.

use crate::vocabulary::VocabularyRegistry;

/// Outcome of validating one token set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every token is a registered display term
    Accepted,
    /// At least one token is outside the vocabulary
    Rejected {
        /// Unrecognized tokens, deduplicated, in first-seen order
        offending: Vec<String>,
    },
}

impl ValidationOutcome {
    /// Whether the token set was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// Validate a token set against the registry.
pub fn validate(registry: &VocabularyRegistry, tokens: &[String]) -> ValidationOutcome {
    let mut offending: Vec<String> = Vec::new();

    for token in tokens {
        if registry.contains(token) {
            continue;
        }
        if !offending.iter().any(|t| t.eq_ignore_ascii_case(token)) {
            offending.push(token.clone());
        }
    }

    if offending.is_empty() {
        ValidationOutcome::Accepted
    } else {
        ValidationOutcome::Rejected { offending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tokenize;

    fn registry() -> VocabularyRegistry {
        VocabularyRegistry::builtin()
    }

    fn validate_query(query: &str) -> ValidationOutcome {
        validate(&registry(), &tokenize(query))
    }

    #[test]
    fn test_all_whitelisted_tokens_accepted() {
        let outcome = validate_query("SELECT * FROM persons WHERE person_id = ?");
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_foreign_token_rejected_and_reported() {
        let outcome = validate_query("SELECT foo FROM persons");
        match outcome {
            ValidationOutcome::Rejected { offending } => {
                assert_eq!(offending, vec!["foo"]);
            }
            ValidationOutcome::Accepted => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_substring_of_a_term_is_not_accepted() {
        // `PER` is a fragment of `person_id`; containment-style checks
        // accept it, exact membership must not.
        let outcome = validate_query("SELECT PER FROM persons");
        match outcome {
            ValidationOutcome::Rejected { offending } => {
                assert_eq!(offending, vec!["PER"]);
            }
            ValidationOutcome::Accepted => panic!("substring fragment was accepted"),
        }
    }

    #[test]
    fn test_offenders_keep_first_seen_order_deduplicated() {
        let outcome = validate_query("zap SELECT foo FROM zap FOO");
        match outcome {
            ValidationOutcome::Rejected { offending } => {
                assert_eq!(offending, vec!["zap", "foo"]);
            }
            ValidationOutcome::Accepted => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let outcome = validate_query("select * from PERSONS where PERSON_ID = ?");
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_empty_token_set_accepted() {
        // Nothing to reject; the dispatcher separately requires a query.
        let outcome = validate(&registry(), &[]);
        assert!(outcome.is_accepted());
    }
}
