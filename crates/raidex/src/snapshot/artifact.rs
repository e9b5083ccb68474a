use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Artifact (gear piece) as captured from the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Artifact {
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub set_kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    pub level: i32,
    pub failed_upgrades: i32,
    pub is_activated: bool,
    pub is_seen: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub required_fraction: String,
    pub sell_price: i32,
    pub price: i32,
    pub primary_bonus: Option<Bonus>,
    pub secondary_bonuses: Option<Vec<SecondaryBonus>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bonus {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    pub is_absolute: bool,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryBonus {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    pub is_absolute: bool,
    pub value: f64,
    pub enhancement: f64,
    pub level: i32,
}
