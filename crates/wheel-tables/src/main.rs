//! wheel-tables
//!
//! Prints roulette neighbor-bet tables derived from the wheel order.
//!
//! Usage:
//!   wheel-tables groups <radius>
//!   wheel-tables variants <radius>
//!   wheel-tables covering <pocket> <radius>
//!   wheel-tables sectors
//!   wheel-tables classify <pocket>
//!   wheel-tables dump <radius>

mod config;
mod error;
mod render;

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TablesConfig;
use crate::error::{Error, Result};
use crate::render::{render, Command};

fn print_usage() {
    eprintln!("wheel-tables - Print roulette neighbor-bet tables");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  wheel-tables groups <radius>             Group centered on each pocket");
    eprintln!("  wheel-tables variants <radius>           Labels in wheel order");
    eprintln!("  wheel-tables covering <pocket> <radius>  Groups covering a pocket");
    eprintln!("  wheel-tables sectors                     French call-bet sectors");
    eprintln!("  wheel-tables classify <pocket>           Colour, parity, sector, range, column");
    eprintln!("  wheel-tables dump <radius>               Every table for a radius");
    eprintln!();
    eprintln!("Radius is 1..=18 (1 = 3-pocket groups, 3 = 7-pocket groups).");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WHEEL_FORMAT  text or json (default: text)");
    eprintln!("  WHEEL_ORDER   comma-separated wheel order (default: European)");
    eprintln!("  RUST_LOG      log filter (default: wheel_tables=info,roulette_topology=info)");
}

fn run(args: &[String]) -> Result<String> {
    let config = TablesConfig::from_env()?;
    tracing::debug!(format = ?config.format, european = config.is_european(), "loaded config");

    let command = Command::parse(args)?;
    render(command, &config)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wheel_tables=info,roulette_topology=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help" | "help")) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(Error::Usage(message)) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "wheel-tables failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
