//! String similarity used for full-name matching and suggestion ranking.

use rapidfuzz::distance::indel;

/// Case-insensitive similarity ratio in `[0, 1]`.
///
/// Computed as `2 * LCS / (len(a) + len(b))` over characters, where LCS is
/// the longest common subsequence. An empty side shares nothing and scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    indel::normalized_similarity(a.chars(), b.chars())
}
