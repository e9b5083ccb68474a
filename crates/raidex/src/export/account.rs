use std::collections::BTreeMap;

use serde::Serialize;

use crate::snapshot::{ShardInfo, ShardSummonInfo, Snapshot};

use super::Document;

/// `account.json`
///
/// A section the extractor could not read is written as an empty map so the
/// document keeps its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDocument {
    pub arena_league: Option<String>,
    pub shards: BTreeMap<String, ShardRecord>,
    pub great_hall: BTreeMap<String, BTreeMap<String, i32>>,
    pub stage_presets: BTreeMap<i32, Vec<i32>>,
}

impl Document for AccountDocument {
    const FILE_NAME: &'static str = "account.json";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardRecord {
    pub count: i32,
    pub summon_data: Vec<ShardSummonRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardSummonRecord {
    pub rarity: String,
    pub last_hero_id: i32,
    pub pull_count: i32,
}

impl From<&ShardSummonInfo> for ShardSummonRecord {
    fn from(info: &ShardSummonInfo) -> Self {
        Self {
            rarity: info.rarity.clone(),
            last_hero_id: info.last_hero_id,
            pull_count: info.pull_count,
        }
    }
}

impl From<&ShardInfo> for ShardRecord {
    fn from(info: &ShardInfo) -> Self {
        Self {
            count: info.count,
            summon_data: info
                .summon_data
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(ShardSummonRecord::from)
                .collect(),
        }
    }
}

/// Project the account-level sections of a snapshot
pub fn map_account(snapshot: &Snapshot) -> AccountDocument {
    AccountDocument {
        arena_league: snapshot.arena_league.clone(),
        shards: snapshot
            .shards
            .iter()
            .flatten()
            .map(|(kind, info)| (kind.clone(), ShardRecord::from(info)))
            .collect(),
        great_hall: snapshot.great_hall.clone().unwrap_or_default(),
        stage_presets: snapshot.stage_presets.clone().unwrap_or_default(),
    }
}
