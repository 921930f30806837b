use crate::core::chem::oracle::OracleError;
use crate::core::models::composition::CompositionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Expected exactly {expected} elements, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("At least {minimum} elements are required, got {actual}")]
    TooFewElements { minimum: usize, actual: usize },

    #[error("Element '{0}' appears more than once in the input")]
    DuplicateElement(String),

    #[error("`{name}` must be at least 1, got {value}")]
    NonPositiveBound { name: &'static str, value: u64 },

    #[error("Ratio has {ratio_len} entries but {element_count} elements were given")]
    RatioMismatch {
        ratio_len: usize,
        element_count: usize,
    },

    #[error("Oracle failed on candidate '{formula}' in system '{system}': {source}")]
    Oracle {
        system: String,
        formula: String,
        #[source]
        source: OracleError,
    },

    #[error(transparent)]
    Composition(#[from] CompositionError),
}
