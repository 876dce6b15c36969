//! Query tokenizer
//!
//! Splits a raw query into the terms the validator checks. Characters that
//! attach themselves to whitelisted terms (wildcards, commas, parentheses,
//! quotes) are stripped first so `('Ann')` validates as `Ann` would.

/// Characters removed before splitting. Each is itself whitelisted, but
/// attached to another term it would defeat exact membership checks.
const ATTACHABLE: [char; 6] = ['%', ',', '(', ')', '\'', '"'];

/// Tokenize a raw query string.
///
/// Never yields an empty token: consecutive, leading, or trailing spaces
/// are collapsed away rather than producing `""` entries.
pub fn tokenize(query: &str) -> Vec<String> {
    let cleansed: String = query.chars().filter(|c| !ATTACHABLE.contains(c)).collect();

    cleansed
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_query() {
        let tokens = tokenize("SELECT * FROM persons");
        assert_eq!(tokens, vec!["SELECT", "*", "FROM", "persons"]);
    }

    #[test]
    fn test_repeated_spaces_yield_no_empty_tokens() {
        let tokens = tokenize("SELECT  * FROM persons");
        assert_eq!(tokens, vec!["SELECT", "*", "FROM", "persons"]);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_leading_and_trailing_spaces() {
        let tokens = tokenize("  SELECT * FROM persons  ");
        assert_eq!(tokens, vec!["SELECT", "*", "FROM", "persons"]);
    }

    #[test]
    fn test_attachable_characters_are_stripped() {
        let tokens = tokenize("INSERT INTO persons (person_name) VALUES ('?')");
        assert_eq!(
            tokens,
            vec!["INSERT", "INTO", "persons", "person_name", "VALUES", "?"]
        );
    }

    #[test]
    fn test_wildcard_marker_stripped_from_like_pattern() {
        let tokens = tokenize("SELECT * FROM persons WHERE person_name LIKE '%?%'");
        assert_eq!(
            tokens,
            vec!["SELECT", "*", "FROM", "persons", "WHERE", "person_name", "LIKE", "?"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("(',')").is_empty());
    }
}
