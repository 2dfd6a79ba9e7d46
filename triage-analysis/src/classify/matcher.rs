//! Whole-word literal matching.

use regex::RegexBuilder;

/// Regex source for a case-insensitive whole-word match of a literal.
/// Callers pass vocabulary words, not patterns, so every metacharacter
/// is escaped.
pub(crate) fn word_pattern(word: &str) -> String {
    format!(r"\b{}\b", regex::escape(word))
}

/// Case-insensitive whole-token match of `word` inside `haystack`.
///
/// The word must occur delimited by word boundaries, so `"healthy"` does
/// not match inside `"unhealthy"`. Never fails: a pattern that will not
/// compile counts as no match.
pub fn has_word(haystack: &str, word: &str) -> bool {
    RegexBuilder::new(&word_pattern(word))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_boundaries_respected() {
        assert!(!has_word("unhealthy", "healthy"));
        assert!(has_word("Healthy patient", "healthy"));
        assert!(has_word("patient looks healthy.", "healthy"));
    }

    #[test]
    fn multi_word_and_hyphenated_vocabulary() {
        assert!(has_word("no symptoms were observed", "no symptoms"));
        assert!(has_word("label: non-pcos", "non-pcos"));
        assert!(!has_word("xnon-pcos", "non-pcos"));
    }

    #[test]
    fn metacharacters_are_literal() {
        assert!(has_word("score (a+b) recorded", "a+b"));
        assert!(!has_word("score ab recorded", "a+b"));
    }

    #[test]
    fn case_insensitive() {
        assert!(has_word("NO PCOS DETECTED", "no pcos"));
    }
}
