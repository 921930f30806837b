//! Complete screening procedures: the user-facing entry points that tie the
//! engine's candidate generation, oracle evaluation, and result assembly
//! together with progress reporting.

use crate::core::chem::oracle::{OxidationCatalog, ProbabilityModel, ValidityOracle};
use crate::core::models::composition::Composition;
use crate::core::models::table::{ProbabilityTable, ScreeningTable};
use crate::engine::config::{
    BinaryScreenConfig, OxidationAnalysisConfig, QuaternaryScreenConfig, TernaryScreenConfig,
};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use tracing::{info, instrument};

/// Screens every element pair over the bounded stoichiometry grid.
#[instrument(skip_all, name = "binary_screening_workflow")]
pub fn binary<O: ValidityOracle + Sync>(
    config: &BinaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Binary Screening",
    });
    info!(
        elements = config.elements.len(),
        max_stoich = config.max_stoich,
        "Starting binary composition screen."
    );

    let table = tasks::binary::run(config, oracle, reporter)?;

    reporter.report(Progress::PhaseFinish);
    info!(
        rows = table.len(),
        "Binary screen produced {} distinct candidate(s).",
        table.len()
    );
    Ok(table)
}

/// Screens the fixed-ratio ternary space (ABX3 by default).
#[instrument(skip_all, name = "ternary_screening_workflow")]
pub fn ternary<O: ValidityOracle + Sync>(
    config: &TernaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Ternary Screening",
    });
    info!(
        ratio = ?config.ratio,
        max_mult = config.max_mult,
        "Starting fixed-ratio ternary screen."
    );

    let table = tasks::ternary::run(config, oracle, reporter)?;

    reporter.report(Progress::PhaseFinish);
    info!(
        rows = table.len(),
        "Ternary screen produced {} distinct candidate(s).",
        table.len()
    );
    Ok(table)
}

/// Screens the full quaternary coefficient grid.
#[instrument(skip_all, name = "quaternary_screening_workflow")]
pub fn quaternary<O: ValidityOracle + Sync>(
    config: &QuaternaryScreenConfig,
    oracle: &O,
    reporter: &ProgressReporter,
) -> Result<ScreeningTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Quaternary Screening",
    });
    info!(
        max_stoich = config.max_stoich,
        "Starting quaternary composition screen."
    );

    let table = tasks::quaternary::run(config, oracle, reporter)?;

    reporter.report(Progress::PhaseFinish);
    info!(
        rows = table.len(),
        "Quaternary screen produced {} distinct candidate(s).",
        table.len()
    );
    Ok(table)
}

/// Scores compositions by oxidation-state probability.
#[instrument(skip_all, name = "oxidation_analysis_workflow")]
pub fn oxidation<C: OxidationCatalog + Sync, P: ProbabilityModel + Sync>(
    compositions: &[Composition],
    config: &OxidationAnalysisConfig,
    catalog: &C,
    model: &P,
    reporter: &ProgressReporter,
) -> Result<ProbabilityTable, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Oxidation-State Analysis",
    });
    info!(
        compositions = compositions.len(),
        threshold = config.threshold,
        "Starting oxidation-state probability analysis."
    );

    let table = tasks::oxidation::run(compositions, config, catalog, model, reporter)?;

    reporter.report(Progress::PhaseFinish);
    info!(rows = table.len(), "Oxidation-state analysis finished.");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::heuristics::{
        ChargeNeutralityOracle, IcsdOxidationCatalog, SpeciesFrequencyModel,
    };
    use crate::core::models::element::Element;
    use crate::engine::config::{
        BinaryScreenConfigBuilder, QuaternaryScreenConfigBuilder, TernaryScreenConfigBuilder,
    };
    use std::sync::Mutex;

    fn elements(symbols: &[&str]) -> Vec<Element> {
        symbols.iter().map(|s| Element::new(s).unwrap()).collect()
    }

    #[test]
    fn binary_workflow_reports_phases_around_the_screen() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(format!("{p:?}"));
        }));

        let config = BinaryScreenConfigBuilder::new()
            .elements(elements(&["Na", "Cl"]))
            .max_stoich(2)
            .build()
            .unwrap();
        binary(&config, &ChargeNeutralityOracle::default(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(events.first().unwrap().contains("PhaseStart"));
        assert!(events.last().unwrap().contains("PhaseFinish"));
    }

    #[test]
    fn ternary_workflow_runs_the_perovskite_scenario() {
        let config = TernaryScreenConfigBuilder::new()
            .elements(elements(&["Ca", "Ti", "O"]))
            .max_mult(2)
            .build()
            .unwrap();
        let table = ternary(
            &config,
            &ChargeNeutralityOracle::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].reduced_formula, "CaTiO3");
    }

    #[test]
    fn quaternary_workflow_screens_the_full_grid() {
        let config = QuaternaryScreenConfigBuilder::new()
            .elements(elements(&["Cu", "Ti", "O", "N"]))
            .max_stoich(2)
            .build()
            .unwrap();
        let table = quaternary(
            &config,
            &ChargeNeutralityOracle::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn oxidation_workflow_scores_inputs_in_order() {
        let compositions = vec![
            Composition::from_symbols([("Na", 1), ("Cl", 1)]).unwrap(),
            Composition::from_symbols([("Fe", 2), ("O", 3)]).unwrap(),
        ];
        let table = oxidation(
            &compositions,
            &OxidationAnalysisConfig::default(),
            &IcsdOxidationCatalog,
            &SpeciesFrequencyModel,
            &ProgressReporter::new(),
        )
        .unwrap();
        let formulas: Vec<_> = table.iter().map(|r| r.formula.as_str()).collect();
        assert_eq!(formulas, vec!["NaCl", "Fe2O3"]);
    }
}
