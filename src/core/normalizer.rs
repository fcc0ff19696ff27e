//! Name normalization.
//!
//! Turns free-text titles and release strings into ordered lowercase tokens.
//! Every character that is not alphanumeric acts as a token boundary, so
//! `The.Matrix.1999.x264-ESiR` and `The Matrix (1999) x264 ESiR` produce the
//! same sequence.

use std::collections::HashSet;

/// Normalize a title or release string into an ordered token sequence.
///
/// Apostrophes are separators like any other punctuation (`Grey's` ->
/// `grey`, `s`).
pub fn normalize_name(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the order-independent view of a token sequence.
pub fn token_set(tokens: &[String]) -> HashSet<String> {
    tokens.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_release_string() {
        assert_eq!(
            normalize_name("The.Matrix.1999.720p.HDDVD.DTS.x264-ESiR"),
            vec!["the", "matrix", "1999", "720p", "hddvd", "dts", "x264", "esir"]
        );
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(
            normalize_name("  The__Big...Bang (Theory)  "),
            vec!["the", "big", "bang", "theory"]
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_name("").is_empty());
        assert!(normalize_name(" ._-() ").is_empty());
    }

    #[test]
    fn test_normalize_apostrophe() {
        assert_eq!(
            normalize_name("Grey's Anatomy"),
            vec!["grey", "s", "anatomy"]
        );
        assert_eq!(normalize_name("Grey\u{2019}s"), vec!["grey", "s"]);
    }

    #[test]
    fn test_token_set() {
        let tokens = normalize_name("the matrix the");
        let set = token_set(&tokens);
        assert_eq!(set.len(), 2);
        assert!(set.contains("matrix"));
    }
}
