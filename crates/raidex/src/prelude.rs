//! Prelude module for convenient imports
//!
//! ```ignore
//! use raidex::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Pipeline: `ExportCoordinator`, `ExportConfig`, `ExportSummary`
//! - Input: `Snapshot`, `Extractor`, `DumpFileExtractor`
//! - Output: `Document`, `WriterConfig`, `KeyCase`
//! - Error handling: `Error`, `Result`

pub use crate::config::ExportConfig;
pub use crate::coordinator::{ExportCoordinator, ExportSummary};
pub use crate::error::{Error, Result};
pub use crate::export::Document;
pub use crate::extract::{DumpFileExtractor, Extractor};
pub use crate::snapshot::Snapshot;
pub use crate::writer::{KeyCase, WriterConfig};
