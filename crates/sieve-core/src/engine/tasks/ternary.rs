use super::{Candidate, require_exact_arity, require_unique, screen_candidates};
use crate::core::chem::oracle::ValidityOracle;
use crate::core::models::table::ScreeningTable;
use crate::engine::config::TernaryScreenConfig;
use crate::engine::error::EngineError;
use crate::engine::generation::scaled_ratio_set;
use crate::engine::progress::ProgressReporter;
use itertools::Itertools;
use tracing::{info, instrument};

/// Screens the fixed-ratio ternary composition space (default ABX3).
///
/// Candidate generation is delegated entirely to
/// [`scaled_ratio_set`](crate::engine::generation::scaled_ratio_set), which
/// already collapses multipliers that reduce to the same candidate. The
/// system tag is the three elements joined in input order, not sorted.
#[instrument(skip_all, name = "ternary_screening_task")]
pub fn run<O: ValidityOracle + Sync>(
    config: &TernaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    require_exact_arity(&config.elements, 3)?;
    require_unique(&config.elements)?;

    let system = config.elements.iter().join("-");
    let compositions = scaled_ratio_set(&config.elements, &config.ratio, config.max_mult)?;
    info!(
        system = %system,
        distinct_candidates = compositions.len(),
        max_mult = config.max_mult,
        "Generated fixed-ratio ternary candidates."
    );

    let candidates: Vec<Candidate> = compositions
        .into_iter()
        .map(|composition| Candidate {
            system: system.clone(),
            composition,
        })
        .collect();
    let rows = screen_candidates(&candidates, oracle, config.policy, reporter)?;

    let mut table = ScreeningTable::new();
    for row in rows {
        table.push(row);
    }
    info!(rows = table.len(), "Ternary screening complete.");
    Ok(table)
}
