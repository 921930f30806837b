use super::{Candidate, require_exact_arity, require_positive, require_unique, screen_candidates};
use crate::core::chem::oracle::ValidityOracle;
use crate::core::models::composition::Composition;
use crate::core::models::table::ScreeningTable;
use crate::engine::config::QuaternaryScreenConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::{Itertools, iproduct};
use tracing::{info, instrument};

/// Screens the full 4-D coefficient grid `1..=max_stoich` per element:
/// `max_stoich^4` raw candidates. Growth is quartic, which makes this the
/// dominant cost center; candidate generation stays cheap and sequential
/// while oracle evaluation carries the parallelism.
#[instrument(skip_all, name = "quaternary_screening_task")]
pub fn run<O: ValidityOracle + Sync>(
    config: &QuaternaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    require_exact_arity(&config.elements, 4)?;
    require_unique(&config.elements)?;
    require_positive("max_stoich", config.max_stoich)?;

    reporter.report(Progress::Message(
        "Generating quaternary candidate grid...".to_string(),
    ));
    let system = config.elements.iter().join("-");
    let range = 1..=config.max_stoich;
    let mut candidates = Vec::new();
    for (x, y, z, w) in iproduct!(
        range.clone(),
        range.clone(),
        range.clone(),
        range.clone()
    ) {
        let composition = Composition::new(
            config
                .elements
                .iter()
                .cloned()
                .zip([x, y, z, w]),
        )?
        .reduced();
        candidates.push(Candidate {
            system: system.clone(),
            composition,
        });
    }
    info!(
        system = %system,
        raw_candidates = candidates.len(),
        "Generated quaternary candidate grid."
    );

    let rows = screen_candidates(&candidates, oracle, config.policy, reporter)?;

    let mut table = ScreeningTable::new();
    for row in rows {
        table.push(row);
    }
    info!(rows = table.len(), "Quaternary screening complete.");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::oracle::OracleError;
    use crate::core::models::element::Element;
    use crate::engine::config::QuaternaryScreenConfigBuilder;
    use crate::engine::progress::Progress;
    use std::sync::Mutex;

    struct AlwaysValid;

    impl ValidityOracle for AlwaysValid {
        fn is_valid(&self, _composition: &Composition) -> Result<bool, OracleError> {
            Ok(true)
        }
    }

    fn elements(symbols: &[&str]) -> Vec<Element> {
        symbols.iter().map(|s| Element::new(s).unwrap()).collect()
    }

    fn config(max_stoich: u64) -> QuaternaryScreenConfig {
        QuaternaryScreenConfigBuilder::new()
            .elements(elements(&["Cu", "Ti", "O", "N"]))
            .max_stoich(max_stoich)
            .build()
            .unwrap()
    }

    #[test]
    fn raw_candidate_count_is_max_stoich_to_the_fourth() {
        let raw = Mutex::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            if let Progress::ScreenStart { candidates } = p {
                *raw.lock().unwrap() = candidates;
            }
        }));
        run(&config(2), &AlwaysValid, &reporter).unwrap();
        drop(reporter);
        assert_eq!(raw.into_inner().unwrap(), 16);
    }

    #[test]
    fn only_the_uniform_doubling_collapses_at_max_stoich_two() {
        // Of the 16 coefficient vectors, (2,2,2,2) alone shares a reduced
        // form with another vector: 15 distinct rows remain.
        let table = run(&config(2), &AlwaysValid, &ProgressReporter::new()).unwrap();
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn all_rows_keep_quaternary_arity() {
        let table = run(&config(2), &AlwaysValid, &ProgressReporter::new()).unwrap();
        assert!(table.iter().all(|r| r.composition.arity() == 4));
    }

    #[test]
    fn rows_share_the_quad_system_tag() {
        let table = run(&config(1), &AlwaysValid, &ProgressReporter::new()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].system, "Cu-Ti-O-N");
    }

    #[test]
    fn rejects_wrong_arity() {
        let config = QuaternaryScreenConfigBuilder::new()
            .elements(elements(&["Cu", "Ti", "O"]))
            .max_stoich(2)
            .build()
            .unwrap();
        let err = run(&config, &AlwaysValid, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Arity {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn rejects_zero_max_stoich() {
        let err = run(&config(0), &AlwaysValid, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::NonPositiveBound {
                name: "max_stoich",
                ..
            }
        ));
    }
}
