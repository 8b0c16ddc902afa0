use std::fmt;

use serde::Deserialize;

use super::codex::FactionName;

/// Character rarity band, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Quality {
    Myth,
    #[serde(rename = "Legend+")]
    LegendPlus,
    Legend,
    Epic,
    Elite,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Myth => "Myth",
            Quality::LegendPlus => "Legend+",
            Quality::Legend => "Legend",
            Quality::Epic => "Epic",
            Quality::Elite => "Elite",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CharacterClass {
    Guardian,
    Priest,
    Assassin,
    Warrior,
    Archer,
    Mage,
}

impl CharacterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Guardian => "Guardian",
            CharacterClass::Priest => "Priest",
            CharacterClass::Assassin => "Assassin",
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Archer => "Archer",
            CharacterClass::Mage => "Mage",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subclass branch as listed on a character sheet (name plus icon).
///
/// Not the standalone subclass record; that one lives in [`super::codex`]
/// and carries tier and bonus data.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSubclass {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ability {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub name: String,
    pub quality: Quality,
    pub character_class: CharacterClass,
    pub factions: Vec<FactionName>,
    pub is_global: bool,
    pub subclasses: Vec<CharacterSubclass>,
    pub portraits: Vec<String>,
    pub illustrations: Vec<String>,
    pub height: String,
    pub weight: String,
    pub lore: String,
    pub abilities: Vec<Ability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_character() {
        let character: Character = serde_json::from_value(serde_json::json!({
            "name": "Fireknight",
            "quality": "Legend+",
            "character_class": "Guardian",
            "factions": ["Elemental Echo", "Sanctum Glory"],
            "is_global": false,
            "subclasses": [{"name": "Flame Sentinel", "icon": "flame-sentinel.png"}],
            "portraits": ["fireknight-portrait.png"],
            "illustrations": [],
            "height": "192cm",
            "weight": "88kg",
            "lore": "Sworn to the ember gate.",
            "abilities": [
                {"name": "Cinder Wall", "icon": "cinder-wall.png", "description": "Raises a wall of embers."}
            ]
        }))
        .unwrap();

        assert_eq!(character.quality, Quality::LegendPlus);
        assert_eq!(character.character_class, CharacterClass::Guardian);
        assert_eq!(character.factions[0], FactionName::ElementalEcho);
        assert!(!character.is_global);
        assert_eq!(character.subclasses[0].name, "Flame Sentinel");
    }

    #[test]
    fn test_quality_display() {
        assert_eq!(Quality::LegendPlus.to_string(), "Legend+");
        assert_eq!(Quality::Myth.to_string(), "Myth");
    }
}
