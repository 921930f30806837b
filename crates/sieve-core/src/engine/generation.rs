use super::error::EngineError;
use crate::core::models::composition::Composition;
use crate::core::models::element::Element;
use std::collections::HashSet;

/// Generates the distinct reduced compositions obtained by scaling a fixed
/// stoichiometric ratio.
///
/// For each multiplier `m` in `[1, max_mult]` the ratio is scaled
/// element-wise, canonicalized, and inserted into a set keyed by canonical
/// equality; because reduction undoes the scaling for any ratio already in
/// lowest terms, distinct multipliers frequently collapse to the same
/// candidate and the result size is anywhere between 1 and `max_mult`.
/// First-seen order is kept for determinism, but callers must not rely on
/// any particular ordering.
pub fn scaled_ratio_set(
    elements: &[Element],
    ratio: &[u64],
    max_mult: u64,
) -> Result<Vec<Composition>, EngineError> {
    if ratio.len() != elements.len() {
        return Err(EngineError::RatioMismatch {
            ratio_len: ratio.len(),
            element_count: elements.len(),
        });
    }
    if max_mult == 0 {
        return Err(EngineError::NonPositiveBound {
            name: "max_mult",
            value: max_mult,
        });
    }
    if let Some(&value) = ratio.iter().find(|&&r| r == 0) {
        return Err(EngineError::NonPositiveBound {
            name: "ratio",
            value,
        });
    }

    let mut seen = HashSet::new();
    let mut compositions = Vec::new();
    for mult in 1..=max_mult {
        let scaled = elements
            .iter()
            .cloned()
            .zip(ratio.iter().map(|&r| r * mult));
        let candidate = Composition::new(scaled)?.reduced();
        if seen.insert(candidate.clone()) {
            compositions.push(candidate);
        }
    }
    Ok(compositions)
}
