use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Champion as captured from the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Hero {
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fraction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub element: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grade: String,
    pub level: i32,
    pub experience: i32,
    pub full_experience: i32,
    pub awaken_level: i32,
    pub locked: bool,
    pub in_storage: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub marker: String,

    pub health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub resistance: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub critical_heal: f64,

    pub skills: Option<Vec<Skill>>,
    pub masteries: Option<Vec<i32>>,
    /// Ids of equipped artifacts
    pub artifacts: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Skill {
    pub id: i32,
    pub type_id: i32,
    pub level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_missing_members_default() {
        let hero: Hero = serde_json::from_str(r#"{"Id": 5, "Name": null}"#).unwrap();
        assert_eq!(hero.id, 5);
        assert_eq!(hero.name, "");
        assert_eq!(hero.level, 0);
        assert!(hero.skills.is_none());
        assert!(hero.masteries.is_none());
    }

    #[test]
    fn test_hero_skills_parse_in_order() {
        let hero: Hero = serde_json::from_str(
            r#"{"Id": 1, "Skills": [
                {"Id": 10, "TypeId": 100, "Level": 2},
                {"Id": 11, "TypeId": 101, "Level": 1}
            ]}"#,
        )
        .unwrap();
        let skills = hero.skills.unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].type_id, 100);
        assert_eq!(skills[1].id, 11);
    }
}
