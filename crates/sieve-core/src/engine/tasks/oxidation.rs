use crate::core::chem::oracle::{OracleError, OxidationCatalog, ProbabilityModel};
use crate::core::models::composition::Composition;
use crate::core::models::species::Species;
use crate::core::models::table::{ProbabilityRow, ProbabilityTable, Score};
use crate::engine::config::{FailurePolicy, OxidationAnalysisConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores each composition by the likelihood of its oxidation-state species.
///
/// Unlike the screening tasks this performs no deduplication: one output row
/// per input composition, in input order, even when two inputs are equal
/// under reduction.
#[instrument(skip_all, name = "oxidation_analysis_task")]
pub fn run<C: OxidationCatalog + Sync, P: ProbabilityModel + Sync>(
    compositions: &[Composition],
    config: &OxidationAnalysisConfig,
    catalog: &C,
    model: &P,
    reporter: &ProgressReporter,
) -> Result<ProbabilityTable, EngineError> {
    reporter.report(Progress::ScreenStart {
        candidates: compositions.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = compositions.iter();

    #[cfg(feature = "parallel")]
    let iterator = compositions.par_iter();

    let rows = iterator
        .map(|composition| {
            let formula = composition.reduced_formula();
            let score = match score_composition(composition, config.threshold, catalog, model) {
                Ok(score) => score,
                Err(source) => match config.policy {
                    FailurePolicy::FailFast => {
                        return Err(EngineError::Oracle {
                            system: composition.elements().join("-"),
                            formula,
                            source,
                        });
                    }
                    FailurePolicy::Partial => Score::OracleError {
                        message: source.to_string(),
                    },
                },
            };
            reporter.report(Progress::CandidateScreened);
            Ok(ProbabilityRow {
                composition: composition.clone(),
                formula,
                score,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    reporter.report(Progress::ScreenFinish);

    let mut table = ProbabilityTable::new();
    for row in rows {
        table.push(row);
    }
    info!(rows = table.len(), "Oxidation-state analysis complete.");
    Ok(table)
}

/// A composition whose every element lacks recorded oxidation states scores
/// exactly 0.0; this is a defined result, not an error.
fn score_composition<C: OxidationCatalog, P: ProbabilityModel>(
    composition: &Composition,
    threshold: u32,
    catalog: &C,
    model: &P,
) -> Result<Score, OracleError> {
    let mut species = Vec::new();
    for element in composition.elements() {
        let states = catalog.oxidation_states(element, threshold)?;
        species.extend(
            states
                .into_iter()
                .map(|state| Species::new(element.clone(), state)),
        );
    }
    if species.is_empty() {
        return Ok(Score::Probability(0.0));
    }
    Ok(Score::Probability(model.compound_probability(&species)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::heuristics::{IcsdOxidationCatalog, SpeciesFrequencyModel};
    use crate::core::models::element::Element;

    struct EmptyCatalog;

    impl OxidationCatalog for EmptyCatalog {
        fn oxidation_states(
            &self,
            _element: &Element,
            _threshold: u32,
        ) -> Result<Vec<i8>, OracleError> {
            Ok(Vec::new())
        }
    }

    struct FailingCatalog;

    impl OxidationCatalog for FailingCatalog {
        fn oxidation_states(
            &self,
            _element: &Element,
            _threshold: u32,
        ) -> Result<Vec<i8>, OracleError> {
            Err(OracleError::Evaluation("catalog offline".to_string()))
        }
    }

    fn comp(pairs: &[(&str, u64)]) -> Composition {
        Composition::from_symbols(pairs.iter().copied()).unwrap()
    }

    fn probability(row: &ProbabilityRow) -> f64 {
        match row.score {
            Score::Probability(p) => p,
            Score::OracleError { ref message } => panic!("unexpected oracle error: {message}"),
        }
    }

    #[test]
    fn stateless_composition_scores_exactly_zero() {
        let table = run(
            &[comp(&[("Na", 1), ("Cl", 1)])],
            &OxidationAnalysisConfig::default(),
            &EmptyCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(probability(&table.rows()[0]), 0.0);
    }

    #[test]
    fn known_species_score_above_zero() {
        let table = run(
            &[comp(&[("Na", 1), ("Cl", 1)])],
            &OxidationAnalysisConfig::default(),
            &IcsdOxidationCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        let p = probability(&table.rows()[0]);
        assert!(p > 0.0 && p <= 1.0);
    }

    #[test]
    fn input_order_is_preserved_without_deduplication() {
        let inputs = vec![
            comp(&[("Fe", 2), ("O", 3)]),
            comp(&[("Na", 1), ("Cl", 1)]),
            // Proportional duplicate of the first input.
            comp(&[("Fe", 4), ("O", 6)]),
        ];
        let table = run(
            &inputs,
            &OxidationAnalysisConfig::default(),
            &IcsdOxidationCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();

        let formulas: Vec<_> = table.iter().map(|r| r.formula.as_str()).collect();
        assert_eq!(formulas, vec!["Fe2O3", "NaCl", "Fe2O3"]);
    }

    #[test]
    fn threshold_narrows_the_species_pool() {
        let config = OxidationAnalysisConfig {
            threshold: 8_000,
            ..Default::default()
        };
        // At threshold 8000, Fe keeps only the 3+ state and O keeps 2-.
        let table = run(
            &[comp(&[("Fe", 2), ("O", 3)])],
            &config,
            &IcsdOxidationCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        let narrowed = probability(&table.rows()[0]);

        let table = run(
            &[comp(&[("Fe", 2), ("O", 3)])],
            &OxidationAnalysisConfig::default(),
            &IcsdOxidationCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        let full = probability(&table.rows()[0]);

        // Dropping the rarer Fe2+ species raises the geometric mean.
        assert!(narrowed > full);
    }

    #[test]
    fn catalog_failure_aborts_with_the_candidate_identified() {
        let err = run(
            &[comp(&[("Na", 1), ("Cl", 1)])],
            &OxidationAnalysisConfig::default(),
            &FailingCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        match err {
            EngineError::Oracle { formula, .. } => assert_eq!(formula, "NaCl"),
            other => panic!("expected oracle error, got {other:?}"),
        }
    }

    #[test]
    fn partial_mode_marks_failed_rows() {
        let config = OxidationAnalysisConfig {
            policy: FailurePolicy::Partial,
            ..Default::default()
        };
        let table = run(
            &[comp(&[("Na", 1), ("Cl", 1)])],
            &config,
            &FailingCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(matches!(
            table.rows()[0].score,
            Score::OracleError { .. }
        ));
    }
}
