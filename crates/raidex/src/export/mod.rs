//! Output documents and the mappers that build them.
//!
//! Every document is a declared schema type. Mappers are pure: they never
//! touch the file system and never fail, degrading absent optional data to
//! empty values instead.
//!
//! | file | document |
//! |---|---|
//! | `roster.json` | [`RosterDocument`] |
//! | `artifacts.json` | [`ArtifactsDocument`] |
//! | `account.json` | [`AccountDocument`] |
//! | `metadata.json` | [`MetadataDocument`] |

mod account;
mod artifacts;
mod metadata;
mod roster;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub use account::{AccountDocument, ShardRecord, ShardSummonRecord, map_account};
pub use artifacts::{
    ArtifactRecord, ArtifactsDocument, PrimaryBonusRecord, SecondaryBonusRecord, map_artifacts,
};
pub use metadata::{MetadataDocument, generate_metadata};
pub use roster::{ChampionRecord, RosterDocument, SkillRecord, StatsRecord, map_roster};

/// A serializable output document with a fixed file name
pub trait Document: Serialize {
    /// File name inside the output directory
    const FILE_NAME: &'static str;
}

/// Current UTC time as an RFC 3339 string (`2026-10-17T08:15:30.123456Z`)
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
