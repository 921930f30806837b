use crate::core::models::composition::Composition;
use crate::core::models::element::Element;
use crate::core::models::species::Species;
use thiserror::Error;

/// Failure of an external chemistry oracle on a well-formed input.
///
/// An oracle error is distinct from a negative verdict: "chemically invalid"
/// is a result, an `OracleError` is a malfunction and must not be conflated
/// with `false` by callers.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OracleError {
    #[error("Cannot score an empty species set")]
    EmptySpeciesSet,

    #[error("Oracle evaluation failed: {0}")]
    Evaluation(String),
}

/// Judges whether a composition is chemically plausible.
///
/// Implementations must be pure: deterministic, side-effect free, and safe to
/// call from multiple threads.
pub trait ValidityOracle {
    fn is_valid(&self, composition: &Composition) -> Result<bool, OracleError>;
}

/// A catalog of observed oxidation states per element.
pub trait OxidationCatalog {
    /// Oxidation states recorded for `element` with at least `threshold`
    /// occurrences. An empty result is a valid answer, not an error.
    fn oxidation_states(&self, element: &Element, threshold: u32) -> Result<Vec<i8>, OracleError>;
}

/// Estimates how likely a set of charged species is to co-occur in a real
/// compound.
pub trait ProbabilityModel {
    /// Returns a probability in `[0, 1]` for a non-empty species set.
    fn compound_probability(&self, species: &[Species]) -> Result<f64, OracleError>;
}
