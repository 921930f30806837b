//! Default oracle implementations backed by the embedded chemistry tables.
//!
//! These are deliberately simple screening heuristics: a charge-neutrality
//! and electronegativity-ordering validity test, a threshold-filtered
//! oxidation-state catalog, and a frequency-based compound probability
//! model. Each implements the corresponding trait in [`super::oracle`], so
//! callers with access to richer chemistry can swap in their own.

use super::data;
use super::oracle::{OracleError, OxidationCatalog, ProbabilityModel, ValidityOracle};
use crate::core::models::composition::Composition;
use crate::core::models::element::Element;
use crate::core::models::species::Species;
use itertools::Itertools;

/// A composition passes when some assignment of one recorded oxidation state
/// per element is charge-neutral under the reduced stoichiometry and places
/// every cation at or below every anion in electronegativity.
#[derive(Debug, Clone, Default)]
pub struct ChargeNeutralityOracle {
    /// Minimum occurrence count for a state to be considered. Zero admits
    /// every recorded state.
    pub occurrence_threshold: u32,
}

impl ChargeNeutralityOracle {
    pub fn new(occurrence_threshold: u32) -> Self {
        Self {
            occurrence_threshold,
        }
    }

    fn passes_electronegativity_ordering(elements: &[&Element], states: &[i8]) -> bool {
        let max_cation = elements
            .iter()
            .zip(states)
            .filter(|&(_, &state)| state > 0)
            .map(|(element, _)| element.electronegativity())
            .fold(f64::MIN, f64::max);
        let min_anion = elements
            .iter()
            .zip(states)
            .filter(|&(_, &state)| state < 0)
            .map(|(element, _)| element.electronegativity())
            .fold(f64::MAX, f64::min);
        max_cation <= min_anion
    }
}

impl ValidityOracle for ChargeNeutralityOracle {
    fn is_valid(&self, composition: &Composition) -> Result<bool, OracleError> {
        let reduced = composition.reduced();
        let elements: Vec<&Element> = reduced.elements().collect();
        let amounts: Vec<i64> = elements
            .iter()
            .map(|element| reduced.amount(element).unwrap_or(0) as i64)
            .collect();

        let state_lists: Vec<Vec<i8>> = elements
            .iter()
            .map(|element| {
                data::oxidation_occurrences(element.symbol())
                    .iter()
                    .filter(|(_, count)| *count >= self.occurrence_threshold)
                    .map(|(state, _)| *state)
                    .collect()
            })
            .collect();
        // An element with no recorded states admits no neutral assignment.
        if state_lists.iter().any(Vec::is_empty) {
            return Ok(false);
        }

        let neutral_assignment_exists = state_lists
            .iter()
            .map(|states| states.iter().copied())
            .multi_cartesian_product()
            .any(|states| {
                let charge: i64 = states
                    .iter()
                    .zip(&amounts)
                    .map(|(&state, &amount)| i64::from(state) * amount)
                    .sum();
                charge == 0 && Self::passes_electronegativity_ordering(&elements, &states)
            });
        Ok(neutral_assignment_exists)
    }
}

/// Threshold-filtered view over the embedded oxidation-state occurrence
/// table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcsdOxidationCatalog;

impl OxidationCatalog for IcsdOxidationCatalog {
    fn oxidation_states(&self, element: &Element, threshold: u32) -> Result<Vec<i8>, OracleError> {
        Ok(data::oxidation_occurrences(element.symbol())
            .iter()
            .filter(|(_, count)| *count >= threshold)
            .map(|(state, _)| *state)
            .collect())
    }
}

/// Scores a species set by the geometric mean of per-species occurrence
/// frequencies, where a species' frequency is its occurrence count divided
/// by the total count recorded for its element. A species never observed in
/// the table contributes zero, which zeroes the whole score.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeciesFrequencyModel;

impl SpeciesFrequencyModel {
    fn frequency(species: &Species) -> f64 {
        let occurrences = data::oxidation_occurrences(species.element().symbol());
        let total: u32 = occurrences.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return 0.0;
        }
        let count = occurrences
            .iter()
            .find(|(state, _)| *state == species.oxidation_state())
            .map(|(_, count)| *count)
            .unwrap_or(0);
        f64::from(count) / f64::from(total)
    }
}

impl ProbabilityModel for SpeciesFrequencyModel {
    fn compound_probability(&self, species: &[Species]) -> Result<f64, OracleError> {
        if species.is_empty() {
            return Err(OracleError::EmptySpeciesSet);
        }
        let product: f64 = species.iter().map(Self::frequency).product();
        let probability = product.powf(1.0 / species.len() as f64);
        Ok(probability.clamp(0.0, 1.0))
    }
}
