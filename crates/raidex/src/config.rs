//! Export run configuration.
//!
//! ```ignore
//! use raidex::config::ExportConfig;
//!
//! let config = ExportConfig::builder()
//!     .output_dir("my-export")
//!     .build();
//! ```

use std::path::{Path, PathBuf};

use crate::writer::WriterConfig;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "./export";

/// Configuration for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory receiving the JSON documents (created if absent)
    pub output_dir: PathBuf,
    /// Serializer settings shared by every document of the run
    pub writer: WriterConfig,
    /// Version recorded in `metadata.json`
    pub extractor_version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            writer: WriterConfig::default(),
            extractor_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ExportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Builder for ExportConfig
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    output_dir: Option<PathBuf>,
    writer: Option<WriterConfig>,
    extractor_version: Option<String>,
}

impl ExportConfigBuilder {
    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the serializer settings
    pub fn writer(mut self, writer: WriterConfig) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Override the version written to metadata.json
    pub fn extractor_version<S: Into<String>>(mut self, version: S) -> Self {
        self.extractor_version = Some(version.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            writer: self.writer.unwrap_or(default.writer),
            extractor_version: self.extractor_version.unwrap_or(default.extractor_version),
        }
    }
}
