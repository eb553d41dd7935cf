//! Whitespace tokenizer.

use std::collections::HashSet;

/// Split `text` on runs of Unicode whitespace and drop repeated tokens.
///
/// Tokens come back in first-occurrence order. No case folding, no
/// punctuation stripping: a token is exactly the text between two runs.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|token| seen.insert(*token))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n  ").is_empty());
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        assert_eq!(tokenize("hola mundo hola"), vec!["hola", "mundo"]);
    }

    #[test]
    fn any_whitespace_run_separates() {
        assert_eq!(
            tokenize("  uno\tdos\n\ntres \r\n cuatro  "),
            vec!["uno", "dos", "tres", "cuatro"]
        );
    }

    #[test]
    fn case_and_punctuation_are_preserved() {
        assert_eq!(tokenize("Casa casa casa,"), vec!["Casa", "casa", "casa,"]);
    }

    #[test]
    fn unicode_whitespace_separates() {
        // U+3000 ideographic space
        assert_eq!(tokenize("猫\u{3000}犬"), vec!["猫", "犬"]);
    }
}
