use clap::Parser;
use std::path::Path;
use std::process;

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod stage;
pub mod utils;

use cli::Cli;
use config::Config;
use error::{Result, SweepError};
use stage::Sweep;
use utils::{logger, report};

fn main() {
    let cli = Cli::parse();
    let _ = logger::init(logger::level_for(cli.verbose, cli.quiet));

    let result = run(&cli);
    if let Some(message) = failure_message(&result) {
        eprintln!("{message}");
    }
    process::exit(exit_code(&result));
}

/// Every failure is fatal; there are no structured exit codes.
fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn failure_message(result: &Result<()>) -> Option<String> {
    match result {
        Ok(()) => None,
        // Hard stop on non-Cartesian input
        Err(SweepError::DirectCoordinates) => Some(SweepError::DirectCoordinates.to_string()),
        Err(error) => {
            log::error!("{error}");
            Some(format!("error: {error}"))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = cli.root.as_path();
    let (config, source) = Config::load(cli.config.as_deref(), root)?;
    log::info!("{source}");

    let structure = io::load_structure(&root.join(&config.source))?;
    println!("{}", report::structure_summary(&structure, config.lattice_constant));

    let sweep = Sweep::new(root, &config, &structure);
    if cli.plan {
        print!("{}", report::plan_table(&sweep.grid()));
        return Ok(());
    }

    sweep.run()?;
    println!("{}", report::completion_line());
    log::info!("Results collected in {:?}", display_root(sweep.root()));
    Ok(())
}

fn display_root(root: &Path) -> std::path::PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}
