use serde::Serialize;

use crate::snapshot::{Hero, Skill};

use super::Document;

/// `roster.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterDocument {
    pub champions: Vec<ChampionRecord>,
}

impl Document for RosterDocument {
    const FILE_NAME: &'static str = "roster.json";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRecord {
    pub champion_id: i32,
    pub name: String,
    pub rarity: String,
    pub role: String,
    pub fraction: String,
    pub element: String,
    pub grade: String,
    pub level: i32,
    pub experience: i32,
    pub full_experience: i32,
    pub awaken_level: i32,
    pub locked: bool,
    pub in_storage: bool,
    pub marker: String,
    pub stats: StatsRecord,
    pub skills: Vec<SkillRecord>,
    pub masteries: Vec<i32>,
    pub artifacts: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub resistance: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub critical_heal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: i32,
    pub type_id: i32,
    pub level: i32,
}

impl From<&Skill> for SkillRecord {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            type_id: skill.type_id,
            level: skill.level,
        }
    }
}

impl From<&Hero> for ChampionRecord {
    fn from(hero: &Hero) -> Self {
        Self {
            champion_id: hero.id,
            name: hero.name.clone(),
            rarity: hero.rarity.clone(),
            role: hero.role.clone(),
            fraction: hero.fraction.clone(),
            element: hero.element.clone(),
            grade: hero.grade.clone(),
            level: hero.level,
            experience: hero.experience,
            full_experience: hero.full_experience,
            awaken_level: hero.awaken_level,
            locked: hero.locked,
            in_storage: hero.in_storage,
            marker: hero.marker.clone(),
            stats: StatsRecord {
                health: hero.health,
                attack: hero.attack,
                defense: hero.defense,
                speed: hero.speed,
                accuracy: hero.accuracy,
                resistance: hero.resistance,
                critical_chance: hero.critical_chance,
                critical_damage: hero.critical_damage,
                critical_heal: hero.critical_heal,
            },
            skills: hero
                .skills
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(SkillRecord::from)
                .collect(),
            masteries: hero.masteries.clone().unwrap_or_default(),
            artifacts: hero.artifacts.clone().unwrap_or_default(),
        }
    }
}

/// Map extracted heroes to the roster document, keeping extraction order
pub fn map_roster(heroes: &[Hero]) -> RosterDocument {
    RosterDocument {
        champions: heroes.iter().map(ChampionRecord::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_test_hero(id: i32) -> Hero {
        Hero {
            id,
            name: "Kael".to_string(),
            rarity: "Rare".to_string(),
            role: "Attack".to_string(),
            fraction: "DarkElves".to_string(),
            element: "Magic".to_string(),
            grade: "Stars6".to_string(),
            level: 60,
            health: 15_000.0,
            speed: 103.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_map_roster_preserves_nested_sequences() {
        let hero = Hero {
            skills: Some(vec![
                Skill { id: 3, type_id: 30, level: 1 },
                Skill { id: 1, type_id: 10, level: 4 },
                Skill { id: 2, type_id: 20, level: 2 },
            ]),
            masteries: Some(vec![500_343, 500_111]),
            artifacts: Some(vec![9, 4, 7, 1]),
            ..make_test_hero(1)
        };

        let doc = map_roster(&[hero]);
        let record = &doc.champions[0];

        assert_eq!(record.skills.len(), 3);
        assert_eq!(
            record.skills.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        assert_eq!(record.masteries, vec![500_343, 500_111]);
        assert_eq!(record.artifacts, vec![9, 4, 7, 1]);
    }

    #[test]
    fn test_map_roster_defaults_absent_collections() {
        let doc = map_roster(&[make_test_hero(7)]);
        let value = serde_json::to_value(&doc).unwrap();
        let champion = &value["champions"][0];

        assert_eq!(champion["skills"], json!([]));
        assert_eq!(champion["masteries"], json!([]));
        assert_eq!(champion["artifacts"], json!([]));
    }

    #[test]
    fn test_map_roster_renames_identity_and_nests_stats() {
        let doc = map_roster(&[make_test_hero(42)]);
        let value = serde_json::to_value(&doc).unwrap();
        let champion = &value["champions"][0];

        assert_eq!(champion["championId"], json!(42));
        assert!(champion.get("id").is_none());
        assert_eq!(champion["stats"]["health"], json!(15_000.0));
        assert_eq!(champion["stats"]["speed"], json!(103.0));
        assert!(champion.get("health").is_none());
    }

    #[test]
    fn test_map_roster_keeps_extraction_order() {
        let heroes = vec![make_test_hero(5), make_test_hero(2), make_test_hero(9)];
        let doc = map_roster(&heroes);
        let ids: Vec<_> = doc.champions.iter().map(|c| c.champion_id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_map_roster_empty() {
        let doc = map_roster(&[]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"champions":[]}"#);
    }
}
