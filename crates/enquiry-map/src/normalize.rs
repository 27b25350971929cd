//! Query text normalization.

use crate::patterns::FILLER_WORDS;

/// Returns true for words that carry no identifying information.
pub fn is_filler_word(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}

/// Normalizes a raw query for name matching.
///
/// - Lower-cases and splits on whitespace
/// - Strips punctuation around each token (`"dr."` becomes `"dr"`)
/// - Drops filler words and empty tokens
/// - Rejoins with single spaces
///
/// Total and idempotent; empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .map(|token| token.trim_matches(|ch: char| !ch.is_alphanumeric()))
        .filter(|token| !token.is_empty() && !is_filler_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filler_and_case() {
        assert_eq!(normalize("Where is Dr. Manoj Pandey?"), "manoj pandey");
        assert_eq!(normalize("  Cabin   of   MANOJ  "), "manoj");
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_eq!(normalize("dean's office location"), "dean's");
        assert_eq!(normalize("room A1-G12"), "a1-g12");
    }

    #[test]
    fn empty_and_filler_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("where is the office, sir?"), "");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn abbreviations_outside_filler_survive() {
        assert_eq!(normalize("prof sanjeev"), "prof sanjeev");
        assert_eq!(normalize("HOD room number"), "hod number");
    }
}
