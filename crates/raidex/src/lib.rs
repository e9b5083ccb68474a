//! # raidex
//!
//! Export pipeline for Raid: Shadow Legends account snapshots.
//!
//! This crate provides:
//! - The snapshot data model handed over by the external process inspector
//! - Structural validation of possibly partial snapshots
//! - Pure mappers from snapshot sections to versioned JSON documents
//! - An atomic, deterministic JSON writer with explicit serializer settings
//! - The export coordinator and its best-effort `error.json` reporter
//!
//! Reading game memory is out of scope; snapshots arrive through the
//! [`Extractor`] trait.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod export;
pub mod extract;
pub mod prelude;
pub mod report;
pub mod snapshot;
pub mod validate;
pub mod writer;

pub use config::{DEFAULT_OUTPUT_DIR, ExportConfig, ExportConfigBuilder};
pub use coordinator::{ExportCoordinator, ExportPhase, ExportSummary};
pub use error::{CLIENT_NOT_DETECTED, Error, Result, Section, ValidationError};
pub use export::{
    AccountDocument, ArtifactRecord, ArtifactsDocument, ChampionRecord, Document,
    MetadataDocument, RosterDocument, generate_metadata, map_account, map_artifacts, map_roster,
};
pub use extract::{DumpFileExtractor, Extractor, StaticExtractor};
pub use report::{ErrorDocument, ErrorReporter};
pub use snapshot::{Artifact, Bonus, Hero, SecondaryBonus, ShardInfo, Skill, Snapshot};
pub use validate::validate;
pub use writer::{KeyCase, WriterConfig};
