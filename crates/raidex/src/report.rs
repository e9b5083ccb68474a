//! Best-effort failure document (`error.json`).

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::export::{Document, utc_timestamp};
use crate::writer::{self, WriterConfig};

/// `error.json`. Its presence marks the export in that directory as incomplete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDocument {
    pub error: String,
    pub timestamp: String,
}

impl ErrorDocument {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: reason.into(),
            timestamp: utc_timestamp(),
        }
    }
}

impl Document for ErrorDocument {
    const FILE_NAME: &'static str = "error.json";
}

/// Writes failure documents without ever failing itself
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorReporter {
    config: WriterConfig,
}

impl ErrorReporter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Record `reason` in `error.json` inside `output_dir`.
    ///
    /// This runs inside failure handling, so nothing here may replace the
    /// failure being reported: every error is logged and dropped.
    pub fn report(&self, output_dir: &Path, reason: &str) {
        if let Err(e) = fs::create_dir_all(output_dir) {
            warn!(
                "Could not create {} for error report: {}",
                output_dir.display(),
                e
            );
            return;
        }

        let document = ErrorDocument::new(reason);
        match writer::write_document(output_dir, &document, &self.config) {
            Ok(path) => debug!("Error report written to {}", path.display()),
            Err(e) => warn!("Failed to write error report: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_writes_error_document() {
        let dir = tempfile::tempdir().unwrap();

        ErrorReporter::default().report(dir.path(), "RAID client not detected");

        let content = fs::read_to_string(dir.path().join("error.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["error"], "RAID client not detected");
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_report_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("export");

        ErrorReporter::default().report(&output, "boom");

        assert!(output.join("error.json").exists());
    }

    #[test]
    fn test_report_swallows_write_failures() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("export");
        fs::write(&blocker, "not a directory").unwrap();

        ErrorReporter::default().report(&blocker, "boom");

        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
