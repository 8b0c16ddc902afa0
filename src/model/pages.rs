/// A static site section, searchable by title and keywords.
#[derive(Debug, Clone, Copy)]
pub struct SitePage {
    pub title: &'static str,
    pub path: &'static str,
    pub keywords: &'static str,
}

/// The wiki's section index. Lets a query like "codes" jump straight to a
/// section even when no record matches.
pub static SITE_PAGES: &[SitePage] = &[
    SitePage {
        title: "Characters",
        path: "/characters",
        keywords: "roster heroes units",
    },
    SitePage {
        title: "Tier Lists",
        path: "/tier-lists",
        keywords: "rankings meta",
    },
    SitePage {
        title: "Teams",
        path: "/teams",
        keywords: "compositions lineups",
    },
    SitePage {
        title: "Artifacts",
        path: "/artifacts",
        keywords: "relics treasures",
    },
    SitePage {
        title: "Gear",
        path: "/gear",
        keywords: "equipment sets",
    },
    SitePage {
        title: "Howlkins",
        path: "/howlkins",
        keywords: "pets companions",
    },
    SitePage {
        title: "Noble Phantasms",
        path: "/noble-phantasms",
        keywords: "signature weapons",
    },
    SitePage {
        title: "Wyrmspells",
        path: "/wyrmspells",
        keywords: "spells dragon magic",
    },
    SitePage {
        title: "Status Effects",
        path: "/status-effects",
        keywords: "buffs debuffs conditions",
    },
    SitePage {
        title: "Factions",
        path: "/factions",
        keywords: "alliances wyrms",
    },
    SitePage {
        title: "Subclasses",
        path: "/subclasses",
        keywords: "specializations branches",
    },
    SitePage {
        title: "Redemption Codes",
        path: "/codes",
        keywords: "codes rewards gifts",
    },
    SitePage {
        title: "Useful Links",
        path: "/links",
        keywords: "resources tools community",
    },
];
