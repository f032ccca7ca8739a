//! "You may also want" pair generation.

/// Default and maximum pair count for the recommendation widget.
pub const DEFAULT_MAX_PAIRS: usize = 24;

/// An unordered recommendation pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

/// Generate unordered pairs `(symbols[i], symbols[j])` for `i < j` in
/// input order, stopping once `max` pairs are collected. Deterministic
/// for a fixed input ordering.
pub fn build_pairs(symbols: &[String], max: usize) -> Vec<UnitPair> {
    let mut pairs = Vec::new();
    for (i, from) in symbols.iter().enumerate() {
        for to in &symbols[i + 1..] {
            pairs.push(UnitPair {
                from: from.clone(),
                to: to.clone(),
            });
            if pairs.len() >= max {
                return pairs;
            }
        }
    }
    pairs
}
