use super::{Candidate, require_min_arity, require_positive, require_unique, screen_candidates};
use crate::core::chem::oracle::ValidityOracle;
use crate::core::models::composition::Composition;
use crate::core::models::table::ScreeningTable;
use crate::engine::config::BinaryScreenConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use tracing::{info, instrument};

/// Screens every unordered element pair over the bounded coefficient grid
/// `1..=max_stoich` in each dimension. Raw candidate count is
/// `C(n, 2) * max_stoich^2`; the resulting table is deduplicated by reduced
/// formula, first occurrence winning.
#[instrument(skip_all, name = "binary_screening_task")]
pub fn run<O: ValidityOracle + Sync>(
    config: &BinaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    require_min_arity(&config.elements, 2)?;
    require_unique(&config.elements)?;
    require_positive("max_stoich", config.max_stoich)?;

    reporter.report(Progress::Message(
        "Generating binary candidate grid...".to_string(),
    ));
    let mut candidates = Vec::new();
    for (a, b) in config.elements.iter().tuple_combinations() {
        let system = format!("{a}-{b}");
        for x in 1..=config.max_stoich {
            for y in 1..=config.max_stoich {
                let composition = Composition::new([(a.clone(), x), (b.clone(), y)])?.reduced();
                candidates.push(Candidate {
                    system: system.clone(),
                    composition,
                });
            }
        }
    }
    info!(
        pairs = config.elements.len() * (config.elements.len() - 1) / 2,
        raw_candidates = candidates.len(),
        "Generated binary candidate grid."
    );

    let rows = screen_candidates(&candidates, oracle, config.policy, reporter)?;

    let mut table = ScreeningTable::new();
    for row in rows {
        table.push(row);
    }
    info!(rows = table.len(), "Binary screening complete.");
    Ok(table)
}
