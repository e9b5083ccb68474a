//! Account snapshot as handed over by the external inspector.
//!
//! The inspector writes its dump using its own PascalCase member names.
//! A section that failed to extract arrives as `null` (or is missing
//! entirely) and is kept as `None` here, which is distinct from an empty
//! section (`Some(vec![])`).

mod account;
mod artifact;
mod hero;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub use account::*;
pub use artifact::*;
pub use hero::*;

/// One captured account state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Snapshot {
    pub heroes: Option<Vec<Hero>>,
    pub artifacts: Option<Vec<Artifact>>,
    pub arena_league: Option<String>,
    pub shards: Option<BTreeMap<String, ShardInfo>>,
    /// Element -> stat kind -> bonus
    pub great_hall: Option<BTreeMap<String, BTreeMap<String, i32>>>,
    pub stage_presets: Option<BTreeMap<i32, Vec<i32>>>,
}

impl Snapshot {
    /// Snapshot with both required sections present but empty
    pub fn empty() -> Self {
        Self {
            heroes: Some(Vec::new()),
            artifacts: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.as_ref().map_or(0, Vec::len)
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.as_ref().map_or(0, Vec::len)
    }
}

/// Treat an explicit `null` the same as a missing member.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_sections_are_none() {
        let snapshot = Snapshot::from_json(r#"{"Heroes": null}"#).unwrap();
        assert!(snapshot.heroes.is_none());
        assert!(snapshot.artifacts.is_none());
        assert!(snapshot.shards.is_none());
    }

    #[test]
    fn test_empty_sections_are_kept() {
        let snapshot = Snapshot::from_json(r#"{"Heroes": [], "Artifacts": []}"#).unwrap();
        assert_eq!(snapshot.heroes, Some(Vec::new()));
        assert_eq!(snapshot.artifacts, Some(Vec::new()));
        assert_eq!(snapshot.hero_count(), 0);
    }

    #[test]
    fn test_account_sections_parse() {
        let json = r#"{
            "Heroes": [],
            "Artifacts": [],
            "ArenaLeague": "Gold3",
            "Shards": {"Mystery": {"Count": 12, "SummonData": null}},
            "GreatHall": {"Magic": {"Health": 3, "Attack": 2}},
            "StagePresets": {"7": [101, 102], "12": []}
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();

        assert_eq!(snapshot.arena_league.as_deref(), Some("Gold3"));
        assert_eq!(snapshot.shards.as_ref().unwrap()["Mystery"].count, 12);
        assert_eq!(snapshot.great_hall.as_ref().unwrap()["Magic"]["Attack"], 2);
        assert_eq!(snapshot.stage_presets.as_ref().unwrap()[&7], vec![101, 102]);
    }
}
