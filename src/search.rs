//! Multi-source search across the wiki's collections.
//!
//! Each collection gets a declarative [`SourcePolicy`]: which fields count,
//! how much they weigh, how many rows the source may contribute, and how a
//! record becomes a [`ResultDescriptor`]. The aggregator walks the sources
//! in a fixed priority order and never branches on record types, so adding
//! a collection is one policy entry, not a new code path.

use once_cell::sync::Lazy;

use crate::matcher::{self, FieldValue, FieldWeight};
use crate::model::{
    Artifact, Catalog, Character, Faction, Gear, Howlkin, NoblePhantasm, SitePage, StatusEffect,
    Subclass, Team, TierList, UsefulLink, Wyrmspell, SITE_PAGES,
};

/// Which collection a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Character,
    Artifact,
    Gear,
    Wyrmspell,
    StatusEffect,
    Howlkin,
    NoblePhantasm,
    Faction,
    Subclass,
    Team,
    TierList,
    UsefulLink,
    Page,
}

impl ResultKind {
    /// Short badge text shown next to the row.
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Character => "Character",
            ResultKind::Artifact => "Artifact",
            ResultKind::Gear => "Gear",
            ResultKind::Wyrmspell => "Wyrmspell",
            ResultKind::StatusEffect => "Status Effect",
            ResultKind::Howlkin => "Howlkin",
            ResultKind::NoblePhantasm => "Noble Phantasm",
            ResultKind::Faction => "Faction",
            ResultKind::Subclass => "Subclass",
            ResultKind::Team => "Team",
            ResultKind::TierList => "Tier List",
            ResultKind::UsefulLink => "Link",
            ResultKind::Page => "Page",
        }
    }

    /// Accent color for the kind badge.
    pub fn accent(&self) -> &'static str {
        match self {
            ResultKind::Character => "#f38ba8",
            ResultKind::Artifact => "#fab387",
            ResultKind::Gear => "#f9e2af",
            ResultKind::Wyrmspell => "#cba6f7",
            ResultKind::StatusEffect => "#94e2d5",
            ResultKind::Howlkin => "#a6e3a1",
            ResultKind::NoblePhantasm => "#eba0ac",
            ResultKind::Faction => "#89b4fa",
            ResultKind::Subclass => "#74c7ec",
            ResultKind::Team => "#89dceb",
            ResultKind::TierList => "#f5c2e7",
            ResultKind::UsefulLink => "#b4befe",
            ResultKind::Page => "#9399b2",
        }
    }

    /// Icon handle used when the record carries no icon of its own.
    pub fn default_icon(&self) -> &'static str {
        match self {
            ResultKind::Character => "icons/character.svg",
            ResultKind::Artifact => "icons/artifact.svg",
            ResultKind::Gear => "icons/gear.svg",
            ResultKind::Wyrmspell => "icons/wyrmspell.svg",
            ResultKind::StatusEffect => "icons/status-effect.svg",
            ResultKind::Howlkin => "icons/howlkin.svg",
            ResultKind::NoblePhantasm => "icons/noble-phantasm.svg",
            ResultKind::Faction => "icons/faction.svg",
            ResultKind::Subclass => "icons/subclass.svg",
            ResultKind::Team => "icons/team.svg",
            ResultKind::TierList => "icons/tier-list.svg",
            ResultKind::UsefulLink => "icons/link.svg",
            ResultKind::Page => "icons/page.svg",
        }
    }
}

/// Everything a result row needs to render and navigate.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDescriptor {
    pub kind: ResultKind,
    pub title: String,
    pub subtitle: Option<String>,
    /// Wiki route, or a full external URL for links.
    pub path: String,
    pub icon: String,
    pub accent: &'static str,
}

/// Declarative search policy for one collection.
pub struct SourcePolicy<R: 'static> {
    pub kind: ResultKind,
    /// Most rows this source may contribute to one result set.
    pub limit: usize,
    pub fields: &'static [FieldWeight<R>],
    pub records: for<'c> fn(&'c Catalog) -> &'c [R],
    pub describe: fn(&R) -> ResultDescriptor,
}

/// Object-safe face of a policy; the aggregator only ever sees this.
pub trait SearchSource: Send + Sync {
    fn kind(&self) -> ResultKind;
    fn append_matches(
        &self,
        catalog: &Catalog,
        query: &str,
        threshold: f64,
        out: &mut Vec<ResultDescriptor>,
    );
}

impl<R: 'static> SearchSource for SourcePolicy<R> {
    fn kind(&self) -> ResultKind {
        self.kind
    }

    fn append_matches(
        &self,
        catalog: &Catalog,
        query: &str,
        threshold: f64,
        out: &mut Vec<ResultDescriptor>,
    ) {
        let records = (self.records)(catalog);
        let hits = matcher::match_collection(records, self.fields, query, threshold);
        out.extend(
            hits.into_iter()
                .take(self.limit)
                .map(|hit| (self.describe)(&records[hit.index])),
        );
    }
}

static CHARACTER_FIELDS: &[FieldWeight<Character>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |c| FieldValue::Text(&c.name),
    },
    FieldWeight {
        name: "subclasses",
        weight: 1.0,
        value: |c| FieldValue::List(c.subclasses.iter().map(|s| s.name.as_str()).collect()),
    },
];

static ARTIFACT_FIELDS: &[FieldWeight<Artifact>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |a| FieldValue::Text(&a.name),
    },
    FieldWeight {
        name: "treasures",
        weight: 1.0,
        value: |a| FieldValue::List(a.treasures.iter().map(|t| t.name.as_str()).collect()),
    },
];

static GEAR_FIELDS: &[FieldWeight<Gear>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |g| FieldValue::Text(&g.name),
    },
    FieldWeight {
        name: "set",
        weight: 1.5,
        value: |g| FieldValue::Text(&g.set),
    },
];

static WYRMSPELL_FIELDS: &[FieldWeight<Wyrmspell>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |w| FieldValue::Text(&w.name),
    },
    FieldWeight {
        name: "type",
        weight: 1.0,
        value: |w| FieldValue::Text(w.kind.as_str()),
    },
];

static STATUS_EFFECT_FIELDS: &[FieldWeight<StatusEffect>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |s| FieldValue::Text(&s.name),
    },
    FieldWeight {
        name: "state",
        weight: 1.0,
        value: |s| FieldValue::Text(s.state.as_str()),
    },
];

static HOWLKIN_FIELDS: &[FieldWeight<Howlkin>] = &[FieldWeight {
    name: "name",
    weight: 2.0,
    value: |h| FieldValue::Text(&h.name),
}];

static NOBLE_PHANTASM_FIELDS: &[FieldWeight<NoblePhantasm>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |p| FieldValue::Text(&p.name),
    },
    FieldWeight {
        name: "character",
        weight: 1.5,
        value: |p| match &p.character {
            Some(owner) => FieldValue::Text(owner),
            None => FieldValue::Missing,
        },
    },
];

static FACTION_FIELDS: &[FieldWeight<Faction>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |f| FieldValue::Text(f.name.as_str()),
    },
    FieldWeight {
        name: "wyrm",
        weight: 1.0,
        value: |f| FieldValue::Text(f.wyrm.as_str()),
    },
];

static SUBCLASS_FIELDS: &[FieldWeight<Subclass>] = &[FieldWeight {
    name: "name",
    weight: 2.0,
    value: |s| FieldValue::Text(&s.name),
}];

static TEAM_FIELDS: &[FieldWeight<Team>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |t| FieldValue::Text(&t.name),
    },
    FieldWeight {
        name: "characters",
        weight: 1.5,
        value: |t| FieldValue::List(t.characters.iter().map(String::as_str).collect()),
    },
];

static TIER_LIST_FIELDS: &[FieldWeight<TierList>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |t| FieldValue::Text(&t.name),
    },
    FieldWeight {
        name: "entries",
        weight: 1.0,
        value: |t| {
            FieldValue::List(t.entries.iter().map(|e| e.character_name.as_str()).collect())
        },
    },
];

static LINK_FIELDS: &[FieldWeight<UsefulLink>] = &[
    FieldWeight {
        name: "name",
        weight: 2.0,
        value: |l| FieldValue::Text(&l.name),
    },
    FieldWeight {
        name: "application",
        weight: 1.5,
        value: |l| FieldValue::Text(&l.application),
    },
    FieldWeight {
        name: "description",
        weight: 1.0,
        value: |l| FieldValue::Text(&l.description),
    },
];

static PAGE_FIELDS: &[FieldWeight<SitePage>] = &[
    FieldWeight {
        name: "title",
        weight: 2.0,
        value: |p| FieldValue::Text(p.title),
    },
    FieldWeight {
        name: "keywords",
        weight: 1.5,
        value: |p| FieldValue::Text(p.keywords),
    },
];

fn describe_character(c: &Character) -> ResultDescriptor {
    let mut subtitle = format!("{} · {}", c.quality, c.character_class);
    if !c.is_global {
        subtitle.push_str(" · CN only");
    }
    ResultDescriptor {
        kind: ResultKind::Character,
        title: c.name.clone(),
        subtitle: Some(subtitle),
        path: format!("/characters/{}", urlencoding::encode(&c.name)),
        icon: c
            .portraits
            .first()
            .cloned()
            .unwrap_or_else(|| ResultKind::Character.default_icon().to_string()),
        accent: ResultKind::Character.accent(),
    }
}

fn describe_artifact(a: &Artifact) -> ResultDescriptor {
    let mut subtitle = a.quality.to_string();
    if !a.is_global {
        subtitle.push_str(" · CN only");
    }
    ResultDescriptor {
        kind: ResultKind::Artifact,
        title: a.name.clone(),
        subtitle: Some(subtitle),
        path: format!("/artifacts/{}", urlencoding::encode(&a.name)),
        icon: ResultKind::Artifact.default_icon().to_string(),
        accent: ResultKind::Artifact.accent(),
    }
}

fn describe_gear(g: &Gear) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Gear,
        title: g.name.clone(),
        subtitle: Some(format!("{} · {}", g.set, g.kind)),
        path: format!("/gear/{}", urlencoding::encode(&g.name)),
        icon: ResultKind::Gear.default_icon().to_string(),
        accent: ResultKind::Gear.accent(),
    }
}

fn describe_wyrmspell(w: &Wyrmspell) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Wyrmspell,
        title: w.name.clone(),
        subtitle: Some(w.kind.to_string()),
        path: format!("/wyrmspells#{}", urlencoding::encode(&w.name)),
        icon: ResultKind::Wyrmspell.default_icon().to_string(),
        accent: ResultKind::Wyrmspell.accent(),
    }
}

fn describe_status_effect(s: &StatusEffect) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::StatusEffect,
        title: s.name.clone(),
        subtitle: Some(s.state.to_string()),
        path: format!("/status-effects#{}", urlencoding::encode(&s.name)),
        icon: if s.icon.is_empty() {
            ResultKind::StatusEffect.default_icon().to_string()
        } else {
            s.icon.clone()
        },
        accent: ResultKind::StatusEffect.accent(),
    }
}

fn describe_howlkin(h: &Howlkin) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Howlkin,
        title: h.name.clone(),
        subtitle: Some(h.quality.to_string()),
        path: format!("/howlkins/{}", urlencoding::encode(&h.name)),
        icon: ResultKind::Howlkin.default_icon().to_string(),
        accent: ResultKind::Howlkin.accent(),
    }
}

fn describe_noble_phantasm(p: &NoblePhantasm) -> ResultDescriptor {
    let subtitle = match (&p.character, p.is_global) {
        (Some(owner), false) => Some(format!("{} · CN only", owner)),
        (Some(owner), true) => Some(owner.clone()),
        (None, false) => Some("CN only".to_string()),
        (None, true) => None,
    };
    ResultDescriptor {
        kind: ResultKind::NoblePhantasm,
        title: p.name.clone(),
        subtitle,
        path: format!("/noble-phantasms/{}", urlencoding::encode(&p.name)),
        icon: ResultKind::NoblePhantasm.default_icon().to_string(),
        accent: ResultKind::NoblePhantasm.accent(),
    }
}

fn describe_faction(f: &Faction) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Faction,
        title: f.name.to_string(),
        subtitle: Some(f.wyrm.to_string()),
        path: format!("/factions#{}", urlencoding::encode(f.name.as_str())),
        icon: ResultKind::Faction.default_icon().to_string(),
        accent: ResultKind::Faction.accent(),
    }
}

fn describe_subclass(s: &Subclass) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Subclass,
        title: s.name.clone(),
        subtitle: Some(format!("{} · Tier {}", s.character_class, s.tier)),
        path: format!("/subclasses#{}", urlencoding::encode(&s.name)),
        icon: ResultKind::Subclass.default_icon().to_string(),
        accent: ResultKind::Subclass.accent(),
    }
}

fn describe_team(t: &Team) -> ResultDescriptor {
    let mut subtitle = t.faction.to_string();
    if !t.content_type.is_empty() {
        subtitle.push_str(" · ");
        subtitle.push_str(&t.content_type);
    }
    ResultDescriptor {
        kind: ResultKind::Team,
        title: t.name.clone(),
        subtitle: Some(subtitle),
        path: format!("/teams/{}", urlencoding::encode(&t.name)),
        icon: ResultKind::Team.default_icon().to_string(),
        accent: ResultKind::Team.accent(),
    }
}

fn describe_tier_list(t: &TierList) -> ResultDescriptor {
    let mut subtitle = t.content_type.clone();
    if !t.author.is_empty() {
        if !subtitle.is_empty() {
            subtitle.push_str(" · ");
        }
        subtitle.push_str(&t.author);
    }
    ResultDescriptor {
        kind: ResultKind::TierList,
        title: t.name.clone(),
        subtitle: (!subtitle.is_empty()).then_some(subtitle),
        path: format!("/tier-lists/{}", urlencoding::encode(&t.name)),
        icon: ResultKind::TierList.default_icon().to_string(),
        accent: ResultKind::TierList.accent(),
    }
}

fn describe_link(l: &UsefulLink) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::UsefulLink,
        title: l.name.clone(),
        subtitle: (!l.application.is_empty()).then(|| l.application.clone()),
        // External URL, passed through untouched.
        path: l.link.clone(),
        icon: if l.icon.is_empty() {
            ResultKind::UsefulLink.default_icon().to_string()
        } else {
            l.icon.clone()
        },
        accent: ResultKind::UsefulLink.accent(),
    }
}

fn describe_page(p: &SitePage) -> ResultDescriptor {
    ResultDescriptor {
        kind: ResultKind::Page,
        title: p.title.to_string(),
        subtitle: None,
        path: p.path.to_string(),
        icon: ResultKind::Page.default_icon().to_string(),
        accent: ResultKind::Page.accent(),
    }
}

/// All sources in priority order. Earlier sources fill the merged list
/// first, so when the global cap bites, later sources lose rows.
static SOURCES: Lazy<Vec<Box<dyn SearchSource>>> = Lazy::new(|| {
    vec![
        Box::new(SourcePolicy {
            kind: ResultKind::Character,
            limit: 8,
            fields: CHARACTER_FIELDS,
            records: |catalog| catalog.characters.as_slice(),
            describe: describe_character,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Artifact,
            limit: 5,
            fields: ARTIFACT_FIELDS,
            records: |catalog| catalog.artifacts.as_slice(),
            describe: describe_artifact,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Gear,
            limit: 5,
            fields: GEAR_FIELDS,
            records: |catalog| catalog.gear.as_slice(),
            describe: describe_gear,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Wyrmspell,
            limit: 4,
            fields: WYRMSPELL_FIELDS,
            records: |catalog| catalog.wyrmspells.as_slice(),
            describe: describe_wyrmspell,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::StatusEffect,
            limit: 4,
            fields: STATUS_EFFECT_FIELDS,
            records: |catalog| catalog.status_effects.as_slice(),
            describe: describe_status_effect,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Howlkin,
            limit: 3,
            fields: HOWLKIN_FIELDS,
            records: |catalog| catalog.howlkins.as_slice(),
            describe: describe_howlkin,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::NoblePhantasm,
            limit: 3,
            fields: NOBLE_PHANTASM_FIELDS,
            records: |catalog| catalog.noble_phantasms.as_slice(),
            describe: describe_noble_phantasm,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Faction,
            limit: 3,
            fields: FACTION_FIELDS,
            records: |catalog| catalog.factions.as_slice(),
            describe: describe_faction,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Subclass,
            limit: 3,
            fields: SUBCLASS_FIELDS,
            records: |catalog| catalog.subclasses.as_slice(),
            describe: describe_subclass,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Team,
            limit: 4,
            fields: TEAM_FIELDS,
            records: |catalog| catalog.teams.as_slice(),
            describe: describe_team,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::TierList,
            limit: 3,
            fields: TIER_LIST_FIELDS,
            records: |catalog| catalog.tier_lists.as_slice(),
            describe: describe_tier_list,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::UsefulLink,
            limit: 3,
            fields: LINK_FIELDS,
            records: |catalog| catalog.links.as_slice(),
            describe: describe_link,
        }),
        Box::new(SourcePolicy {
            kind: ResultKind::Page,
            limit: 3,
            fields: PAGE_FIELDS,
            records: |_| SITE_PAGES,
            describe: describe_page,
        }),
    ]
});

/// Search every source and merge the capped sections in priority order.
///
/// Empty and whitespace-only queries return an empty list without touching
/// any source. Output is fully determined by the catalog snapshot and the
/// query: same inputs, same rows, same order.
pub fn search(
    catalog: &Catalog,
    query: &str,
    threshold: f64,
    max_results: usize,
) -> Vec<ResultDescriptor> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for source in SOURCES.iter() {
        source.append_matches(catalog, query, threshold, &mut results);
    }

    results.truncate(max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharacterClass, Quality, WyrmspellType};
    use std::sync::Arc;

    fn character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            quality: Quality::Myth,
            character_class: CharacterClass::Guardian,
            factions: vec![],
            is_global: true,
            subclasses: vec![],
            portraits: vec![],
            illustrations: vec![],
            height: String::new(),
            weight: String::new(),
            lore: String::new(),
            abilities: vec![],
        }
    }

    fn artifact(name: &str) -> Artifact {
        Artifact {
            name: name.to_string(),
            is_global: true,
            lore: String::new(),
            quality: Quality::Epic,
            effect: vec![],
            width: 2,
            height: 2,
            treasures: vec![],
        }
    }

    fn wyrmspell(name: &str) -> Wyrmspell {
        Wyrmspell {
            name: name.to_string(),
            effect: String::new(),
            kind: WyrmspellType::Breach,
        }
    }

    fn phantasm(name: &str, character: Option<&str>) -> NoblePhantasm {
        NoblePhantasm {
            name: name.to_string(),
            character: character.map(str::to_string),
            is_global: true,
            lore: String::new(),
            effects: vec![],
            skills: vec![],
        }
    }

    fn with_characters(characters: Vec<Character>) -> Catalog {
        Catalog {
            characters: Arc::new(characters),
            ..Catalog::default()
        }
    }

    #[test]
    fn test_typo_prefix_finds_character_first() {
        let catalog = with_characters(vec![
            character("Stormcaller"),
            character("Fireknight"),
            character("Froststrider"),
        ]);
        let results = search(&catalog, "firekn", 0.3, 12);
        assert!(!results.is_empty());
        assert_eq!(results[0].kind, ResultKind::Character);
        assert_eq!(results[0].title, "Fireknight");
    }

    #[test]
    fn test_abbreviation_matches_page_title() {
        let results = search(&Catalog::default(), "chars", 0.3, 12);
        assert!(results
            .iter()
            .any(|r| r.kind == ResultKind::Page && r.title == "Characters"));
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = with_characters(vec![character("Fireknight")]);
        assert!(search(&catalog, "", 0.3, 12).is_empty());
        assert!(search(&catalog, "   ", 0.3, 12).is_empty());
    }

    #[test]
    fn test_per_source_cap_respected() {
        let knights: Vec<Character> = (0..20)
            .map(|i| character(&format!("Knight {:02}", i)))
            .collect();
        let catalog = with_characters(knights);
        let results = search(&catalog, "knight", 0.3, 50);
        let character_rows = results
            .iter()
            .filter(|r| r.kind == ResultKind::Character)
            .count();
        assert_eq!(character_rows, 8);
    }

    #[test]
    fn test_global_cap_truncates() {
        let knights: Vec<Character> = (0..20)
            .map(|i| character(&format!("Knight {:02}", i)))
            .collect();
        let relics: Vec<Artifact> = (0..10)
            .map(|i| artifact(&format!("Knightfall Relic {:02}", i)))
            .collect();
        let catalog = Catalog {
            characters: Arc::new(knights),
            artifacts: Arc::new(relics),
            ..Catalog::default()
        };
        let results = search(&catalog, "knight", 0.3, 12);
        assert_eq!(results.len(), 12);
        // Characters fill their cap before artifacts get a row.
        assert!(results[..8].iter().all(|r| r.kind == ResultKind::Character));
        assert!(results[8..].iter().all(|r| r.kind == ResultKind::Artifact));
    }

    #[test]
    fn test_source_order_beats_score() {
        // The "Gear" page is an exact title match, but the character source
        // runs first, so its fuzzier hit still leads the list.
        let catalog = with_characters(vec![character("Gearwright")]);
        let results = search(&catalog, "gear", 0.3, 12);
        assert_eq!(results[0].kind, ResultKind::Character);
        assert!(results[1..].iter().any(|r| r.kind == ResultKind::Page));
    }

    #[test]
    fn test_deterministic_for_same_snapshot() {
        let catalog = with_characters(vec![
            character("Fireknight"),
            character("Froststrider"),
            character("Firebrand"),
        ]);
        let first = search(&catalog, "fire", 0.3, 12);
        let second = search(&catalog, "fire", 0.3, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_character_path_is_escaped() {
        let catalog = with_characters(vec![character("Kai the Bold")]);
        let results = search(&catalog, "kai the bold", 0.3, 12);
        assert_eq!(results[0].path, "/characters/Kai%20the%20Bold");
    }

    #[test]
    fn test_wyrmspell_path_uses_fragment() {
        let catalog = Catalog {
            wyrmspells: Arc::new(vec![wyrmspell("Emberstorm")]),
            ..Catalog::default()
        };
        let results = search(&catalog, "emberstorm", 0.3, 12);
        assert_eq!(results[0].path, "/wyrmspells#Emberstorm");
    }

    #[test]
    fn test_link_path_is_external_url() {
        let catalog = Catalog {
            links: Arc::new(vec![UsefulLink {
                icon: String::new(),
                application: "Discord".to_string(),
                name: "Community Server".to_string(),
                description: "Trading and team help.".to_string(),
                link: "https://discord.gg/wyrms".to_string(),
            }]),
            ..Catalog::default()
        };
        let results = search(&catalog, "community server", 0.3, 12);
        assert_eq!(results[0].path, "https://discord.gg/wyrms");
        assert_eq!(results[0].subtitle.as_deref(), Some("Discord"));
    }

    #[test]
    fn test_character_subtitle_marks_region() {
        let mut cn_only = character("Fireknight");
        cn_only.is_global = false;
        let catalog = with_characters(vec![cn_only]);
        let results = search(&catalog, "fireknight", 0.3, 12);
        assert_eq!(
            results[0].subtitle.as_deref(),
            Some("Myth · Guardian · CN only")
        );
    }

    #[test]
    fn test_unbound_phantasm_has_no_subtitle() {
        let catalog = Catalog {
            noble_phantasms: Arc::new(vec![phantasm("Veil of the Last Dawn", None)]),
            ..Catalog::default()
        };
        let results = search(&catalog, "veil of the last dawn", 0.3, 12);
        assert_eq!(results[0].subtitle, None);
    }

    #[test]
    fn test_phantasm_found_by_owner_name() {
        let catalog = Catalog {
            noble_phantasms: Arc::new(vec![
                phantasm("Veil of the Last Dawn", None),
                phantasm("Emberbrand Lance", Some("Fireknight")),
            ]),
            ..Catalog::default()
        };
        let results = search(&catalog, "fireknight", 0.3, 12);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Emberbrand Lance");
    }

    #[test]
    fn test_team_found_by_roster_member() {
        let catalog = Catalog {
            teams: Arc::new(vec![Team {
                name: "Ember Vanguard".to_string(),
                author: "driftwood".to_string(),
                content_type: "PvE".to_string(),
                description: String::new(),
                faction: crate::model::FactionName::ElementalEcho,
                characters: vec!["Fireknight".to_string(), "Ashpriest".to_string()],
            }]),
            ..Catalog::default()
        };
        let results = search(&catalog, "fireknight", 0.3, 12);
        assert!(results
            .iter()
            .any(|r| r.kind == ResultKind::Team && r.title == "Ember Vanguard"));
    }

    #[test]
    fn test_character_icon_prefers_portrait() {
        let mut with_portrait = character("Fireknight");
        with_portrait.portraits = vec!["fireknight-portrait.png".to_string()];
        let catalog = with_characters(vec![with_portrait, character("Froststrider")]);
        let results = search(&catalog, "fireknight", 0.3, 12);
        assert_eq!(results[0].icon, "fireknight-portrait.png");
    }
}
