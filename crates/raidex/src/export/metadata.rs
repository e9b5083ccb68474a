use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{Document, utc_timestamp};

/// `metadata.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocument {
    pub extraction_timestamp: String,
    pub extractor_version: String,
    pub export_path: PathBuf,
}

impl Document for MetadataDocument {
    const FILE_NAME: &'static str = "metadata.json";
}

/// Describe the export run. The timestamp is taken now, not at startup.
pub fn generate_metadata(output_dir: &Path, extractor_version: &str) -> MetadataDocument {
    MetadataDocument {
        extraction_timestamp: utc_timestamp(),
        extractor_version: extractor_version.to_string(),
        export_path: absolute_path(output_dir),
    }
}

fn absolute_path(path: &Path) -> PathBuf {
    // Not canonicalize: on Windows that yields `\\?\` verbatim paths
    std::path::absolute(path)
        .or_else(|_| std::fs::canonicalize(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
