//! Export run orchestration.
//!
//! One run moves through `Validating -> Mapping -> Writing` and ends either
//! in success or in a failure that has been recorded in `error.json`.
//! Documents already written before a write failure are kept; consumers
//! treat the presence of `error.json` as "this export is incomplete".

use std::fs;
use std::path::PathBuf;

use strum::Display;
use tracing::{error, info, warn};

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::export::{
    AccountDocument, ArtifactsDocument, Document, MetadataDocument, RosterDocument,
    generate_metadata, map_account, map_artifacts, map_roster,
};
use crate::extract::Extractor;
use crate::report::{ErrorDocument, ErrorReporter};
use crate::snapshot::Snapshot;
use crate::validate::validate;
use crate::writer;

/// Stage of an export run, used for progress reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ExportPhase {
    Extracting,
    Validating,
    Mapping,
    Writing,
}

/// Result of a successful export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub champions: usize,
    pub artifacts: usize,
    pub output_dir: PathBuf,
    /// Written documents, in write order
    pub files: Vec<PathBuf>,
}

/// All documents of one run, mapped before anything is written
struct MappedDocuments {
    roster: RosterDocument,
    artifacts: ArtifactsDocument,
    account: AccountDocument,
    metadata: MetadataDocument,
}

pub struct ExportCoordinator {
    config: ExportConfig,
    reporter: ErrorReporter,
}

impl ExportCoordinator {
    pub fn new(config: ExportConfig) -> Self {
        let reporter = ErrorReporter::new(config.writer);
        Self { config, reporter }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Pull a snapshot from `extractor` and export it.
    ///
    /// Extractor failures are recorded in `error.json` like any other failure;
    /// an unavailable client is reported as "RAID client not detected".
    /// Free-form extractor messages saying the client is not running are
    /// treated the same way.
    pub fn run_extraction<E: Extractor + ?Sized>(&self, extractor: &E) -> Result<ExportSummary> {
        info!("Phase: {}", ExportPhase::Extracting);
        let snapshot = match extractor.extract() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let e = match e {
                    Error::Extraction(message) => Error::from_extractor_message(message),
                    other => other,
                };
                if let Error::ExtractionUnavailable { detail } = &e {
                    info!("Extractor detail: {}", detail);
                }
                return Err(self.fail(ExportPhase::Extracting, e));
            }
        };
        info!("Extraction completed successfully.");

        self.export(&snapshot)
    }

    /// Validate, map and write one snapshot
    pub fn export(&self, snapshot: &Snapshot) -> Result<ExportSummary> {
        let output_dir = self.config.output_dir();

        if !output_dir.exists() {
            if let Err(e) = fs::create_dir_all(output_dir) {
                return Err(self.fail(ExportPhase::Writing, Error::io(output_dir, e)));
            }
            info!("Created output directory: {}", output_dir.display());
        }

        info!("Phase: {}", ExportPhase::Validating);
        if let Err(e) = validate(snapshot) {
            return Err(self.fail(ExportPhase::Validating, e.into()));
        }

        info!("Phase: {}", ExportPhase::Mapping);
        let documents = self.map(snapshot);

        info!("Phase: {}", ExportPhase::Writing);
        let files = match self.write_all(&documents) {
            Ok(files) => files,
            Err(e) => return Err(self.fail(ExportPhase::Writing, e)),
        };

        self.clear_stale_error_report();
        info!("Export complete.");
        Ok(ExportSummary {
            champions: documents.roster.champions.len(),
            artifacts: documents.artifacts.artifacts.len(),
            output_dir: output_dir.to_path_buf(),
            files,
        })
    }

    fn map(&self, snapshot: &Snapshot) -> MappedDocuments {
        // Validation guarantees both sections are present
        let heroes = snapshot.heroes.as_deref().unwrap_or_default();
        let artifacts = snapshot.artifacts.as_deref().unwrap_or_default();

        MappedDocuments {
            roster: map_roster(heroes),
            artifacts: map_artifacts(artifacts),
            account: map_account(snapshot),
            metadata: generate_metadata(self.config.output_dir(), &self.config.extractor_version),
        }
    }

    /// Write in fixed order, stopping at the first failure
    fn write_all(&self, documents: &MappedDocuments) -> Result<Vec<PathBuf>> {
        Ok(vec![
            self.write(&documents.roster)?,
            self.write(&documents.artifacts)?,
            self.write(&documents.account)?,
            self.write(&documents.metadata)?,
        ])
    }

    fn write<D: Document>(&self, document: &D) -> Result<PathBuf> {
        info!("Exporting {}", D::FILE_NAME);
        writer::write_document(self.config.output_dir(), document, &self.config.writer)
    }

    /// A successful run must not look incomplete because of an earlier failure
    fn clear_stale_error_report(&self) {
        let path = self.config.output_dir().join(ErrorDocument::FILE_NAME);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => info!("Removed stale {}", ErrorDocument::FILE_NAME),
                Err(e) => warn!("Could not remove stale {}: {}", path.display(), e),
            }
        }
    }

    fn fail(&self, phase: ExportPhase, err: Error) -> Error {
        error!("ERROR during {}: {}", phase, err);
        self.reporter.report(self.config.output_dir(), &err.to_string());
        err
    }
}
