//! Community-authored records: teams, tier lists, useful links.

use std::fmt;

use serde::Deserialize;

use super::codex::FactionName;

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub name: String,
    pub author: String,
    pub content_type: String,
    pub description: String,
    pub faction: FactionName,
    /// Roster, by character name.
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Tier {
    #[serde(rename = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::SPlus => "S+",
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierEntry {
    pub character_name: String,
    pub tier: Tier,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierList {
    pub name: String,
    pub author: String,
    pub content_type: String,
    pub description: String,
    pub entries: Vec<TierEntry>,
}

/// External community resource; `link` is a full URL, not a wiki route.
#[derive(Debug, Clone, Deserialize)]
pub struct UsefulLink {
    pub icon: String,
    pub application: String,
    pub name: String,
    pub description: String,
    pub link: String,
}
