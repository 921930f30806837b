use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "sieve - A command-line interface for stoichsieve, a combinatorial stoichiometry screening toolkit for materials discovery.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel screening.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen every element pair over a bounded stoichiometry grid.
    Binary(BinaryArgs),
    /// Screen a ternary system at a fixed stoichiometric ratio (ABX3 by default).
    Ternary(TernaryArgs),
    /// Screen the full quaternary coefficient grid of four elements.
    Quaternary(QuaternaryArgs),
    /// Score compositions by oxidation-state probability.
    Oxidation(OxidationArgs),
    /// List every non-empty chemical subsystem of an element set.
    Subsystems(SubsystemsArgs),
    /// Query the Materials Project for known compounds over an element set.
    Query(QueryArgs),
}

/// Arguments for the `binary` subcommand.
#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Elements to screen, comma-separated (e.g. 'Na,Cl,K,Br').
    #[arg(short, long, required = true, value_name = "LIST")]
    pub elements: String,

    /// Maximum stoichiometric coefficient per element.
    #[arg(short, long, default_value_t = 5, value_name = "INT")]
    pub max_stoich: u64,

    #[command(flatten)]
    pub common: ScreenCommonArgs,
}

/// Arguments for the `ternary` subcommand.
#[derive(Args, Debug)]
pub struct TernaryArgs {
    /// Exactly three elements, comma-separated (e.g. 'Ca,Ti,O').
    #[arg(short, long, required = true, value_name = "LIST")]
    pub elements: String,

    /// Stoichiometric ratio to sweep (e.g. '1,1,3' for ABX3).
    #[arg(short, long, default_value = "1,1,3", value_name = "RATIO")]
    pub ratio: String,

    /// Maximum multiplier applied to the ratio.
    #[arg(long, default_value_t = 2, value_name = "INT")]
    pub max_mult: u64,

    #[command(flatten)]
    pub common: ScreenCommonArgs,
}

/// Arguments for the `quaternary` subcommand.
#[derive(Args, Debug)]
pub struct QuaternaryArgs {
    /// Exactly four elements, comma-separated (e.g. 'Cu,Ti,O,N').
    #[arg(short, long, required = true, value_name = "LIST")]
    pub elements: String,

    /// Maximum stoichiometric coefficient per element.
    /// The raw candidate count grows as this value to the fourth power.
    #[arg(short, long, default_value_t = 3, value_name = "INT")]
    pub max_stoich: u64,

    #[command(flatten)]
    pub common: ScreenCommonArgs,
}

/// Arguments for the `oxidation` subcommand.
#[derive(Args, Debug)]
pub struct OxidationArgs {
    /// Formulas to score, comma-separated (e.g. 'CaTiO3,Fe2O3').
    #[arg(
        short,
        long,
        required = true,
        value_name = "LIST",
        value_delimiter = ','
    )]
    pub formulas: Vec<String>,

    /// Minimum occurrence count for an oxidation state to be considered.
    #[arg(short, long, default_value_t = 50, value_name = "INT")]
    pub threshold: u32,

    #[command(flatten)]
    pub common: ScreenCommonArgs,
}

/// Arguments for the `subsystems` subcommand.
#[derive(Args, Debug)]
pub struct SubsystemsArgs {
    /// Element set, comma- or hyphen-separated (e.g. 'Na-Cl-K').
    #[arg(short, long, required = true, value_name = "LIST")]
    pub elements: String,
}

/// Arguments for the `query` subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Element set whose subsystems are searched (e.g. 'Na,Cl,K').
    #[arg(short, long, required = true, value_name = "LIST")]
    pub elements: String,

    /// Materials Project API key. Falls back to the MP_API_KEY environment
    /// variable when omitted.
    #[arg(short, long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Flags shared by every screening subcommand.
#[derive(Args, Debug)]
pub struct ScreenCommonArgs {
    /// Record oracle failures as marked rows instead of failing the whole
    /// screen.
    #[arg(long)]
    pub partial: bool,

    /// Write the result table to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ScreenCommonArgs {
    pub fn policy(&self) -> stoichsieve::engine::config::FailurePolicy {
        if self.partial {
            stoichsieve::engine::config::FailurePolicy::Partial
        } else {
            stoichsieve::engine::config::FailurePolicy::FailFast
        }
    }
}
