use std::fmt;
use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// Message shown to users when the game client could not be inspected
pub const CLIENT_NOT_DETECTED: &str = "RAID client not detected";

/// Snapshot sections that must be present for an export to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Heroes,
    Artifacts,
}

/// Snapshot is missing one or more required sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<Section>,
}

impl ValidationError {
    pub fn new(missing: Vec<Section>) -> Self {
        Self { missing }
    }

    pub fn missing(&self) -> &[Section] {
        &self.missing
    }

    pub fn is_missing(&self, section: Section) -> bool {
        self.missing.contains(&section)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed: ")?;
        for (i, section) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} missing", section)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Error)]
pub enum Error {
    /// The external inspector had no running client to capture.
    /// `detail` is kept for logs only and never shown to users.
    #[error("RAID client not detected")]
    ExtractionUnavailable { detail: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other failure reported by the extractor
    #[error("{0}")]
    Extraction(String),

    #[error("Failed to parse snapshot dump {}: {source}", path.display())]
    Dump {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an error from a free-form extractor message.
    ///
    /// Messages that say the client is not running collapse into
    /// `ExtractionUnavailable` so internal wording never reaches users.
    pub fn from_extractor_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("needs to be running")
            || lower.contains("not running")
            || lower.contains("not detected")
        {
            Self::ExtractionUnavailable { detail: message }
        } else {
            Self::Extraction(message)
        }
    }

    pub fn is_extraction_unavailable(&self) -> bool {
        matches!(self, Error::ExtractionUnavailable { .. })
    }
}
