mod cli;
mod commands;
mod db;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file)?;

    info!("🚀 sieve CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let command_result = match cli.command {
        Commands::Binary(args) => {
            info!("Dispatching to 'binary' command.");
            commands::screen::run_binary(&args)
        }
        Commands::Ternary(args) => {
            info!("Dispatching to 'ternary' command.");
            commands::screen::run_ternary(&args)
        }
        Commands::Quaternary(args) => {
            info!("Dispatching to 'quaternary' command.");
            commands::screen::run_quaternary(&args)
        }
        Commands::Oxidation(args) => {
            info!("Dispatching to 'oxidation' command.");
            commands::screen::run_oxidation(&args)
        }
        Commands::Subsystems(args) => {
            info!("Dispatching to 'subsystems' command.");
            commands::screen::run_subsystems(&args)
        }
        Commands::Query(args) => {
            info!("Dispatching to 'query' command.");
            commands::query::run(&args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
