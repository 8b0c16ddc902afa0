//! Equippable and collectible records: artifacts, gear, howlkins, noble phantasms.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::character::{CharacterClass, Quality};

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactEffect {
    pub level: u32,
    pub description: String,
}

/// A treasure slotted into an artifact, bound to one class.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactTreasure {
    pub name: String,
    pub lore: String,
    pub character_class: CharacterClass,
    pub effect: Vec<ArtifactEffect>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub is_global: bool,
    pub lore: String,
    pub quality: Quality,
    pub effect: Vec<ArtifactEffect>,
    pub width: u32,
    pub height: u32,
    pub treasures: Vec<ArtifactTreasure>,
}

/// Gear stat values come through as numbers or display strings ("12%").
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GearSetBonus {
    pub quantity: u32,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gear {
    pub name: String,
    pub set: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub lore: String,
    pub stats: BTreeMap<String, StatValue>,
    pub set_bonus: GearSetBonus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Howlkin {
    pub name: String,
    pub quality: Quality,
    #[serde(default)]
    pub basic_stats: BTreeMap<String, f64>,
    #[serde(default)]
    pub passive_effect: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoblePhantasmEffect {
    pub tier: Option<String>,
    pub tier_level: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoblePhantasmSkill {
    pub level: u32,
    pub tier: Option<String>,
    pub tier_level: Option<u32>,
    pub description: String,
}

/// Signature weapon; `character` is absent for unbound phantasms.
#[derive(Debug, Clone, Deserialize)]
pub struct NoblePhantasm {
    pub name: String,
    pub character: Option<String>,
    pub is_global: bool,
    pub lore: String,
    pub effects: Vec<NoblePhantasmEffect>,
    pub skills: Vec<NoblePhantasmSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gear_mixed_stats() {
        let gear: Gear = serde_json::from_value(serde_json::json!({
            "name": "Emberplate Cuirass",
            "set": "Emberplate",
            "type": "Chest",
            "lore": "Forged in whelp-fire.",
            "stats": {"DEF": 184, "HP": "9.5%"},
            "set_bonus": {"quantity": 4, "description": "+20% burn damage."}
        }))
        .unwrap();
        assert_eq!(gear.kind, "Chest");
        assert_eq!(gear.stats["DEF"], StatValue::Number(184.0));
        assert_eq!(gear.stats["HP"], StatValue::Text("9.5%".to_string()));
    }

    #[test]
    fn test_deserialize_unbound_noble_phantasm() {
        let phantasm: NoblePhantasm = serde_json::from_value(serde_json::json!({
            "name": "Veil of the Last Dawn",
            "is_global": true,
            "lore": "No hand has claimed it.",
            "effects": [{"description": "Shields the weakest ally."}],
            "skills": []
        }))
        .unwrap();
        assert!(phantasm.character.is_none());
        assert!(phantasm.effects[0].tier.is_none());
    }

    #[test]
    fn test_deserialize_howlkin_defaults() {
        let howlkin: Howlkin = serde_json::from_value(serde_json::json!({
            "name": "Mosstail",
            "quality": "Epic"
        }))
        .unwrap();
        assert!(howlkin.basic_stats.is_empty());
        assert!(howlkin.passive_effect.is_empty());
    }
}
