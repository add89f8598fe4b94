use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dfs_optimizer::lineup::{LineupOptimizer, RosterRules};
use dfs_optimizer::pool::load_pool;
use tracing_subscriber::EnvFilter;

/// Optimal daily-fantasy lineup from a CSV of player projections.
#[derive(Parser, Debug)]
#[command(name = "dfs-optimizer", version, about)]
struct Args {
    /// CSV file with Name, Position, Projection and Salary columns
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let pool = load_pool(&args.file)?;
    let lineup = LineupOptimizer::new(RosterRules::default()).optimize(&pool)?;

    println!("Optimal Lineup:");
    print!("{lineup}");
    println!("Totals:");
    print!("{}", lineup.totals);
    Ok(())
}
