use crate::cli::{BinaryArgs, OxidationArgs, QuaternaryArgs, SubsystemsArgs, TernaryArgs};
use crate::error::Result;
use crate::output;
use crate::utils::parser;
use crate::utils::progress::CliProgressHandler;
use std::path::Path;
use stoichsieve::core::chem::heuristics::{
    ChargeNeutralityOracle, IcsdOxidationCatalog, SpeciesFrequencyModel,
};
use stoichsieve::core::models::composition::Composition;
use stoichsieve::engine::config::{
    BinaryScreenConfigBuilder, OxidationAnalysisConfig, QuaternaryScreenConfigBuilder,
    TernaryScreenConfigBuilder,
};
use stoichsieve::engine::progress::ProgressReporter;
use stoichsieve::engine::subsystems::subsystem_keys;
use stoichsieve::workflows;
use tracing::info;

fn reporter_for_terminal(handler: &CliProgressHandler) -> ProgressReporter<'static> {
    ProgressReporter::with_callback(handler.callback())
}

fn report_written(path: &Path, rows: usize) {
    println!("Wrote {} row(s) to {}", rows, path.display());
}

pub fn run_binary(args: &BinaryArgs) -> Result<()> {
    let elements = parser::parse_element_list(&args.elements)?;
    let config = BinaryScreenConfigBuilder::new()
        .elements(elements)
        .max_stoich(args.max_stoich)
        .policy(args.common.policy())
        .build()?;

    let handler = CliProgressHandler::new();
    let reporter = reporter_for_terminal(&handler);
    info!("Invoking the binary screening workflow.");
    let table = workflows::screen::binary(&config, &ChargeNeutralityOracle::default(), &reporter)?;

    output::print_screening_table(&table);
    if let Some(path) = &args.common.output {
        output::write_screening_csv(path, &table)?;
        report_written(path, table.len());
    }
    Ok(())
}

pub fn run_ternary(args: &TernaryArgs) -> Result<()> {
    let elements = parser::parse_element_list(&args.elements)?;
    let ratio = parser::parse_ratio(&args.ratio)?;
    let config = TernaryScreenConfigBuilder::new()
        .elements(elements)
        .ratio(ratio)
        .max_mult(args.max_mult)
        .policy(args.common.policy())
        .build()?;

    let handler = CliProgressHandler::new();
    let reporter = reporter_for_terminal(&handler);
    info!("Invoking the ternary screening workflow.");
    let table = workflows::screen::ternary(&config, &ChargeNeutralityOracle::default(), &reporter)?;

    output::print_screening_table(&table);
    if let Some(path) = &args.common.output {
        output::write_screening_csv(path, &table)?;
        report_written(path, table.len());
    }
    Ok(())
}

pub fn run_quaternary(args: &QuaternaryArgs) -> Result<()> {
    let elements = parser::parse_element_list(&args.elements)?;
    let config = QuaternaryScreenConfigBuilder::new()
        .elements(elements)
        .max_stoich(args.max_stoich)
        .policy(args.common.policy())
        .build()?;

    let handler = CliProgressHandler::new();
    let reporter = reporter_for_terminal(&handler);
    info!("Invoking the quaternary screening workflow.");
    let table =
        workflows::screen::quaternary(&config, &ChargeNeutralityOracle::default(), &reporter)?;

    output::print_screening_table(&table);
    if let Some(path) = &args.common.output {
        output::write_screening_csv(path, &table)?;
        report_written(path, table.len());
    }
    Ok(())
}

pub fn run_oxidation(args: &OxidationArgs) -> Result<()> {
    let compositions = args
        .formulas
        .iter()
        .map(|formula| parser::parse_formula(formula))
        .collect::<std::result::Result<Vec<Composition>, _>>()?;
    let config = OxidationAnalysisConfig {
        threshold: args.threshold,
        policy: args.common.policy(),
    };

    let handler = CliProgressHandler::new();
    let reporter = reporter_for_terminal(&handler);
    info!("Invoking the oxidation-state analysis workflow.");
    let table = workflows::screen::oxidation(
        &compositions,
        &config,
        &IcsdOxidationCatalog,
        &SpeciesFrequencyModel,
        &reporter,
    )?;

    output::print_probability_table(&table);
    if let Some(path) = &args.common.output {
        output::write_probability_csv(path, &table)?;
        report_written(path, table.len());
    }
    Ok(())
}

pub fn run_subsystems(args: &SubsystemsArgs) -> Result<()> {
    let elements = parser::parse_element_list(&args.elements)?;
    let keys = subsystem_keys(&elements);
    output::print_subsystem_keys(&keys);
    Ok(())
}
