//! Record types for the wiki's searchable collections.
//!
//! These mirror the JSON data files one to one; the data-loading layer
//! deserializes each file into a `Vec` of the matching record and hands the
//! whole bundle over as a [`Catalog`] snapshot.

pub mod character;
pub mod codex;
pub mod equipment;
pub mod guides;
pub mod pages;

pub use character::{Ability, Character, CharacterClass, CharacterSubclass, Quality};
pub use codex::{
    Faction, FactionName, StatusEffect, StatusEffectState, Subclass, Wyrm, Wyrmspell,
    WyrmspellType,
};
pub use equipment::{
    Artifact, ArtifactEffect, ArtifactTreasure, Gear, GearSetBonus, Howlkin, NoblePhantasm,
    NoblePhantasmEffect, NoblePhantasmSkill, StatValue,
};
pub use guides::{Team, Tier, TierEntry, TierList, UsefulLink};
pub use pages::{SitePage, SITE_PAGES};

use std::sync::Arc;

/// One immutable snapshot of every searchable collection.
///
/// Collections are replaced wholesale, never patched in place: the data
/// layer builds a fresh `Vec`, wraps it in an `Arc`, and swaps the catalog.
/// Cloning a catalog is a handful of reference bumps.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub characters: Arc<Vec<Character>>,
    pub artifacts: Arc<Vec<Artifact>>,
    pub gear: Arc<Vec<Gear>>,
    pub wyrmspells: Arc<Vec<Wyrmspell>>,
    pub status_effects: Arc<Vec<StatusEffect>>,
    pub howlkins: Arc<Vec<Howlkin>>,
    pub noble_phantasms: Arc<Vec<NoblePhantasm>>,
    pub factions: Arc<Vec<Faction>>,
    pub subclasses: Arc<Vec<Subclass>>,
    pub teams: Arc<Vec<Team>>,
    pub tier_lists: Arc<Vec<TierList>>,
    pub links: Arc<Vec<UsefulLink>>,
}
