//! Scan command: pull one snapshot from the inspector and export it.

use std::path::Path;
use std::process::ExitCode;

use owo_colors::{OwoColorize, Stream};
use raidex::{DumpFileExtractor, Error, ExportConfig, ExportCoordinator, ExportSummary};
use tracing::{error, info};

/// Run one extraction-then-export. Failures are reported, not returned:
/// the exit code tells scripting callers whether the export is complete.
pub fn run(output: &Path, dump: &Path) -> ExitCode {
    info!("Starting RaidExtractor v{} scan...", env!("CARGO_PKG_VERSION"));

    let config = ExportConfig::builder().output_dir(output).build();
    let coordinator = ExportCoordinator::new(config);

    info!("Initializing extractor...");
    let extractor = DumpFileExtractor::new(dump);

    info!("Extracting data from Raid: Shadow Legends...");
    match coordinator.run_extraction(&extractor) {
        Ok(summary) => {
            log_summary(Some(&summary));
            println!(
                "{} Extraction completed. Files exported to {}",
                "SUCCESS:".if_supports_color(Stream::Stdout, |t| t.green()),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            log_summary(None);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: &Error) {
    let label = "ERROR:".if_supports_color(Stream::Stdout, |t| t.red());
    if err.is_extraction_unavailable() {
        error!("RAID client not detected.");
        println!(
            "{} RAID client not detected. Please ensure Raid: Shadow Legends is running.",
            label
        );
    } else {
        error!("Fatal error during extraction - {:?}", err);
        println!("{} Extraction failed - {}", label, err);
    }
}

fn log_summary(summary: Option<&ExportSummary>) {
    let (champions, artifacts) = summary.map_or((0, 0), |s| (s.champions, s.artifacts));
    info!("Extraction Summary:");
    info!("Champions: {}", champions);
    info!("Artifacts: {}", artifacts);
    info!(
        "Status: {}",
        if summary.is_some() { "Success" } else { "Failure" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_succeeds_with_dump() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("dump.json");
        fs::write(&dump, r#"{"Heroes": [], "Artifacts": []}"#).unwrap();
        let output = dir.path().join("export");

        assert_eq!(run(&output, &dump), ExitCode::SUCCESS);
        assert!(output.join("roster.json").exists());
    }

    #[test]
    fn test_run_fails_without_dump() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("export");

        assert_eq!(run(&output, &dir.path().join("missing.json")), ExitCode::FAILURE);
        assert!(output.join("error.json").exists());
    }
}
