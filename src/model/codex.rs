//! World-knowledge records: factions, subclasses, wyrmspells, status effects.

use std::fmt;

use serde::Deserialize;

use super::character::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FactionName {
    #[serde(rename = "Elemental Echo")]
    ElementalEcho,
    #[serde(rename = "Wild Spirit")]
    WildSpirit,
    #[serde(rename = "Arcane Wisdom")]
    ArcaneWisdom,
    #[serde(rename = "Sanctum Glory")]
    SanctumGlory,
    #[serde(rename = "Otherworld Return")]
    OtherworldReturn,
    #[serde(rename = "Illusion Veil")]
    IllusionVeil,
}

impl FactionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactionName::ElementalEcho => "Elemental Echo",
            FactionName::WildSpirit => "Wild Spirit",
            FactionName::ArcaneWisdom => "Arcane Wisdom",
            FactionName::SanctumGlory => "Sanctum Glory",
            FactionName::OtherworldReturn => "Otherworld Return",
            FactionName::IllusionVeil => "Illusion Veil",
        }
    }
}

impl fmt::Display for FactionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whelp each faction fights alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Wyrm {
    #[serde(rename = "Fire Whelp")]
    FireWhelp,
    #[serde(rename = "Butterfly Whelp")]
    ButterflyWhelp,
    #[serde(rename = "Emerald Whelp")]
    EmeraldWhelp,
    #[serde(rename = "Shadow Whelp")]
    ShadowWhelp,
    #[serde(rename = "Light Whelp")]
    LightWhelp,
    #[serde(rename = "Dark Whelp")]
    DarkWhelp,
}

impl Wyrm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Wyrm::FireWhelp => "Fire Whelp",
            Wyrm::ButterflyWhelp => "Butterfly Whelp",
            Wyrm::EmeraldWhelp => "Emerald Whelp",
            Wyrm::ShadowWhelp => "Shadow Whelp",
            Wyrm::LightWhelp => "Light Whelp",
            Wyrm::DarkWhelp => "Dark Whelp",
        }
    }
}

impl fmt::Display for Wyrm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faction {
    pub name: FactionName,
    pub wyrm: Wyrm,
    pub description: String,
    #[serde(default)]
    pub recommended_artifacts: Vec<String>,
}

/// Standalone subclass record with progression data.
#[derive(Debug, Clone, Deserialize)]
pub struct Subclass {
    pub name: String,
    #[serde(rename = "class")]
    pub character_class: CharacterClass,
    pub tier: u32,
    pub bonuses: Vec<String>,
    pub effect: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WyrmspellType {
    Breach,
    Refuge,
    Wildcry,
    #[serde(rename = "Dragon's Call")]
    DragonsCall,
}

impl WyrmspellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WyrmspellType::Breach => "Breach",
            WyrmspellType::Refuge => "Refuge",
            WyrmspellType::Wildcry => "Wildcry",
            WyrmspellType::DragonsCall => "Dragon's Call",
        }
    }
}

impl fmt::Display for WyrmspellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wyrmspell {
    pub name: String,
    pub effect: String,
    #[serde(rename = "type")]
    pub kind: WyrmspellType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum StatusEffectState {
    Buff,
    Debuff,
    Special,
}

impl StatusEffectState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusEffectState::Buff => "Buff",
            StatusEffectState::Debuff => "Debuff",
            StatusEffectState::Special => "Special",
        }
    }
}

impl fmt::Display for StatusEffectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusEffect {
    pub icon: String,
    pub name: String,
    pub state: StatusEffectState,
    pub effect: String,
    pub remark: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_subclass_class_key() {
        let subclass: Subclass = serde_json::from_value(serde_json::json!({
            "name": "Stormcaller",
            "class": "Mage",
            "tier": 2,
            "bonuses": ["+12% ATK"],
            "effect": "Chain lightning jumps once more."
        }))
        .unwrap();
        assert_eq!(subclass.character_class, CharacterClass::Mage);
        assert_eq!(subclass.tier, 2);
    }

    #[test]
    fn test_deserialize_wyrmspell_apostrophe_type() {
        let spell: Wyrmspell = serde_json::from_value(serde_json::json!({
            "name": "Draconic Summons",
            "effect": "Calls the bonded wyrm to the field.",
            "type": "Dragon's Call"
        }))
        .unwrap();
        assert_eq!(spell.kind, WyrmspellType::DragonsCall);
        assert_eq!(spell.kind.to_string(), "Dragon's Call");
    }

    #[test]
    fn test_deserialize_faction() {
        let faction: Faction = serde_json::from_value(serde_json::json!({
            "name": "Wild Spirit",
            "wyrm": "Emerald Whelp",
            "description": "Children of the deep woods."
        }))
        .unwrap();
        assert_eq!(faction.name, FactionName::WildSpirit);
        assert_eq!(faction.wyrm, Wyrm::EmeraldWhelp);
        assert!(faction.recommended_artifacts.is_empty());
    }
}
