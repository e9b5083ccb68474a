use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

use super::Extractor;

/// Hands out a snapshot that is already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticExtractor {
    snapshot: Option<Snapshot>,
}

impl StaticExtractor {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// An extractor that behaves as if the client is not running
    pub fn unavailable() -> Self {
        Self { snapshot: None }
    }
}

impl Extractor for StaticExtractor {
    fn extract(&self) -> Result<Snapshot> {
        self.snapshot
            .clone()
            .ok_or_else(|| Error::ExtractionUnavailable {
                detail: "no snapshot supplied".to_string(),
            })
    }
}
