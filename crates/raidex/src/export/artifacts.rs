use serde::Serialize;

use crate::snapshot::{Artifact, Bonus, SecondaryBonus};

use super::Document;

/// `artifacts.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactsDocument {
    pub artifacts: Vec<ArtifactRecord>,
}

impl Document for ArtifactsDocument {
    const FILE_NAME: &'static str = "artifacts.json";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    pub artifact_id: i32,
    pub set: String,
    pub kind: String,
    pub rank: String,
    pub rarity: String,
    pub level: i32,
    pub is_activated: bool,
    pub is_seen: bool,
    pub required_fraction: String,
    pub sell_price: i32,
    pub price: i32,
    pub failed_upgrades: i32,
    /// Serialized as `null` when the artifact has no primary stat
    pub primary_bonus: Option<PrimaryBonusRecord>,
    pub secondary_bonuses: Vec<SecondaryBonusRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryBonusRecord {
    pub kind: String,
    pub is_absolute: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryBonusRecord {
    pub kind: String,
    pub is_absolute: bool,
    pub value: f64,
    pub enhancement: f64,
    pub level: i32,
}

impl From<&Bonus> for PrimaryBonusRecord {
    fn from(bonus: &Bonus) -> Self {
        Self {
            kind: bonus.kind.clone(),
            is_absolute: bonus.is_absolute,
            value: bonus.value,
        }
    }
}

impl From<&SecondaryBonus> for SecondaryBonusRecord {
    fn from(bonus: &SecondaryBonus) -> Self {
        Self {
            kind: bonus.kind.clone(),
            is_absolute: bonus.is_absolute,
            value: bonus.value,
            enhancement: bonus.enhancement,
            level: bonus.level,
        }
    }
}

impl From<&Artifact> for ArtifactRecord {
    fn from(artifact: &Artifact) -> Self {
        Self {
            artifact_id: artifact.id,
            set: artifact.set_kind.clone(),
            kind: artifact.kind.clone(),
            rank: artifact.rank.clone(),
            rarity: artifact.rarity.clone(),
            level: artifact.level,
            is_activated: artifact.is_activated,
            is_seen: artifact.is_seen,
            required_fraction: artifact.required_fraction.clone(),
            sell_price: artifact.sell_price,
            price: artifact.price,
            failed_upgrades: artifact.failed_upgrades,
            primary_bonus: artifact.primary_bonus.as_ref().map(PrimaryBonusRecord::from),
            secondary_bonuses: artifact
                .secondary_bonuses
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(SecondaryBonusRecord::from)
                .collect(),
        }
    }
}

/// Map extracted artifacts to the artifacts document, keeping extraction order
pub fn map_artifacts(artifacts: &[Artifact]) -> ArtifactsDocument {
    ArtifactsDocument {
        artifacts: artifacts.iter().map(ArtifactRecord::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_test_artifact(id: i32) -> Artifact {
        Artifact {
            id,
            set_kind: "Speed".to_string(),
            kind: "Boots".to_string(),
            rank: "Star6".to_string(),
            rarity: "Legendary".to_string(),
            level: 16,
            sell_price: 25_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_map_artifacts_renames_identity_and_set() {
        let doc = map_artifacts(&[make_test_artifact(77)]);
        let value = serde_json::to_value(&doc).unwrap();
        let record = &value["artifacts"][0];

        assert_eq!(record["artifactId"], json!(77));
        assert_eq!(record["set"], json!("Speed"));
        assert!(record.get("setKind").is_none());
        assert!(record.get("id").is_none());
    }

    #[test]
    fn test_map_artifacts_absent_bonuses_are_explicit() {
        let doc = map_artifacts(&[make_test_artifact(1)]);
        let value = serde_json::to_value(&doc).unwrap();
        let record = value["artifacts"][0].as_object().unwrap();

        assert_eq!(record.get("primaryBonus"), Some(&json!(null)));
        assert_eq!(record.get("secondaryBonuses"), Some(&json!([])));
    }

    #[test]
    fn test_map_artifacts_nests_bonuses() {
        let artifact = Artifact {
            primary_bonus: Some(Bonus {
                kind: "Speed".to_string(),
                is_absolute: true,
                value: 45.0,
            }),
            secondary_bonuses: Some(vec![
                SecondaryBonus {
                    kind: "Attack".to_string(),
                    is_absolute: false,
                    value: 0.1,
                    enhancement: 0.02,
                    level: 2,
                },
                SecondaryBonus {
                    kind: "CriticalChance".to_string(),
                    value: 0.05,
                    ..Default::default()
                },
            ]),
            ..make_test_artifact(3)
        };

        let doc = map_artifacts(&[artifact]);
        let record = &doc.artifacts[0];

        let primary = record.primary_bonus.as_ref().unwrap();
        assert_eq!(primary.kind, "Speed");
        assert!(primary.is_absolute);
        assert_eq!(record.secondary_bonuses.len(), 2);
        assert_eq!(record.secondary_bonuses[0].level, 2);
        assert_eq!(record.secondary_bonuses[1].kind, "CriticalChance");
    }

    #[test]
    fn test_map_artifacts_empty() {
        let doc = map_artifacts(&[]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"artifacts":[]}"#);
    }
}
