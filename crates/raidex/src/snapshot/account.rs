use serde::{Deserialize, Serialize};

/// Shard stock for one shard type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShardInfo {
    pub count: i32,
    /// Pity counters per rarity
    pub summon_data: Option<Vec<ShardSummonInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShardSummonInfo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub rarity: String,
    pub last_hero_id: i32,
    pub pull_count: i32,
}
