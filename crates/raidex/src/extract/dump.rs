use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

use super::Extractor;

/// Reads the snapshot dump the inspector leaves on disk.
///
/// No dump file means the inspector found no client to capture.
#[derive(Debug, Clone)]
pub struct DumpFileExtractor {
    path: PathBuf,
}

impl DumpFileExtractor {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Extractor for DumpFileExtractor {
    fn extract(&self) -> Result<Snapshot> {
        debug!("Reading snapshot dump from {}", self.path.display());

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ExtractionUnavailable {
                    detail: format!("no dump at {}", self.path.display()),
                });
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        // Tolerate a UTF-8 byte-order mark written by the inspector
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let snapshot = Snapshot::from_json(content).map_err(|source| Error::Dump {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Loaded snapshot: {} heroes, {} artifacts",
            snapshot.hero_count(),
            snapshot.artifact_count()
        );
        Ok(snapshot)
    }
}
