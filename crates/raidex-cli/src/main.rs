use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use raidex::DEFAULT_OUTPUT_DIR;
use tracing::{debug, error};

mod commands;
mod logging;

/// Default location of the inspector's snapshot dump
const DEFAULT_DUMP_PATH: &str = "account-dump.json";

#[derive(Parser, Debug)]
#[command(name = "raid-extractor")]
#[command(version, about = "Export a Raid: Shadow Legends account snapshot to JSON")]
struct Args {
    /// Run the extraction scan on the running Raid: Shadow Legends process
    #[arg(long)]
    scan: bool,

    /// Destination output directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Snapshot dump written by the process inspector
    #[arg(long, value_name = "PATH", env = "RAIDEX_DUMP", default_value = DEFAULT_DUMP_PATH)]
    dump: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_file = logging::init(&logging::default_log_dir());
    if let Some(path) = &log_file {
        debug!("Logging to {}", path.display());
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            // Full chain goes to the log, one line to the user
            error!("Unexpected failure: {:?}", e);
            println!("ERROR: Extraction failed - {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if !args.scan {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    Ok(commands::scan::run(&args.output, &args.dump))
}
