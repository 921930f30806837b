use crate::core::models::element::Element;
use itertools::Itertools;
use std::collections::BTreeSet;

/// Enumerates every non-empty chemical subsystem of an element set.
///
/// Each key is the subset's symbols sorted lexicographically and joined with
/// hyphens ("Cl-Na"), ordered by increasing subset size and combination
/// order within each size. Duplicate input elements are collapsed before
/// enumeration, so `N` distinct elements always yield exactly `2^N - 1`
/// keys.
pub fn subsystem_keys(elements: &[Element]) -> Vec<String> {
    let distinct: BTreeSet<&Element> = elements.iter().collect();
    let sorted: Vec<&Element> = distinct.into_iter().collect();

    let mut keys = Vec::with_capacity((1usize << sorted.len().min(63)) - 1);
    for size in 1..=sorted.len() {
        for combination in sorted.iter().combinations(size) {
            keys.push(combination.iter().map(|e| e.symbol()).join("-"));
        }
    }
    keys
}
