pub mod binary;
pub mod oxidation;
pub mod quaternary;
pub mod ternary;

use super::config::FailurePolicy;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::chem::oracle::ValidityOracle;
use crate::core::models::composition::Composition;
use crate::core::models::element::Element;
use crate::core::models::table::{ScreeningRow, Verdict};
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A raw candidate: its chemical-system tag and its canonical composition.
pub(crate) struct Candidate {
    pub system: String,
    pub composition: Composition,
}

/// Evaluates every candidate against the validity oracle.
///
/// Evaluation order is unspecified (parallel under the `parallel` feature)
/// but the returned rows are in candidate order, so downstream
/// deduplication sees generation order. Under `FailFast` the first oracle
/// failure aborts the whole batch with the offending candidate identified;
/// under `Partial` failures become marked rows.
pub(crate) fn screen_candidates<O: ValidityOracle + Sync>(
    candidates: &[Candidate],
    oracle: &O,
    policy: FailurePolicy,
    reporter: &ProgressReporter,
) -> Result<Vec<ScreeningRow>, EngineError> {
    reporter.report(Progress::ScreenStart {
        candidates: candidates.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = candidates.iter();

    #[cfg(feature = "parallel")]
    let iterator = candidates.par_iter();

    let rows = iterator
        .map(|candidate| {
            let verdict = match oracle.is_valid(&candidate.composition) {
                Ok(true) => Verdict::Valid,
                Ok(false) => Verdict::Invalid,
                Err(source) => match policy {
                    FailurePolicy::FailFast => {
                        return Err(EngineError::Oracle {
                            system: candidate.system.clone(),
                            formula: candidate.composition.reduced_formula(),
                            source,
                        });
                    }
                    FailurePolicy::Partial => Verdict::OracleError {
                        message: source.to_string(),
                    },
                },
            };
            reporter.report(Progress::CandidateScreened);
            Ok(ScreeningRow {
                system: candidate.system.clone(),
                reduced_formula: candidate.composition.reduced_formula(),
                composition: candidate.composition.clone(),
                verdict,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    reporter.report(Progress::ScreenFinish);
    Ok(rows)
}

pub(crate) fn require_exact_arity(
    elements: &[Element],
    expected: usize,
) -> Result<(), EngineError> {
    if elements.len() != expected {
        return Err(EngineError::Arity {
            expected,
            actual: elements.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_min_arity(elements: &[Element], minimum: usize) -> Result<(), EngineError> {
    if elements.len() < minimum {
        return Err(EngineError::TooFewElements {
            minimum,
            actual: elements.len(),
        });
    }
    Ok(())
}

pub(crate) fn require_unique(elements: &[Element]) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for element in elements {
        if !seen.insert(element) {
            return Err(EngineError::DuplicateElement(element.symbol().to_string()));
        }
    }
    Ok(())
}

pub(crate) fn require_positive(name: &'static str, value: u64) -> Result<(), EngineError> {
    if value == 0 {
        return Err(EngineError::NonPositiveBound { name, value });
    }
    Ok(())
}
