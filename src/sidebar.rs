//! Sidebar trees for the docs sections.
//!
//! A sidebar is an ordered list of items. An item is either a bare doc id
//! or a typed entry:
//!
//! ```toml
//! items = [
//!     "intro",
//!     { type = "doc", id = "installation", label = "Install" },
//!     { type = "category", label = "Guides", items = ["travel", "resources"] },
//!     { type = "link", label = "GitHub", href = "https://github.com/rayners" },
//! ]
//! ```
//!
//! Doc ids are resolved against the section's route base path, so `intro`
//! under `journeys-and-jamborees` becomes `/journeys-and-jamborees/intro`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sidebar {
    pub id: String,
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    DocId(String),
    Entry(SidebarEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarEntry {
    Doc {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Category {
        label: String,
        items: Vec<SidebarItem>,
    },
    Link {
        label: String,
        href: String,
    },
}

impl SidebarItem {
    /// Bare doc reference.
    pub fn doc(id: &str) -> Self {
        SidebarItem::DocId(id.to_string())
    }

    pub fn labelled_doc(id: &str, label: &str) -> Self {
        SidebarItem::Entry(SidebarEntry::Doc {
            id: id.to_string(),
            label: Some(label.to_string()),
        })
    }

    pub fn category(label: &str, ids: &[&str]) -> Self {
        SidebarItem::Entry(SidebarEntry::Category {
            label: label.to_string(),
            items: ids.iter().map(|id| SidebarItem::doc(id)).collect(),
        })
    }

    pub fn link(label: &str, href: &str) -> Self {
        SidebarItem::Entry(SidebarEntry::Link {
            label: label.to_string(),
            href: href.to_string(),
        })
    }

    /// Doc id if this item is a doc reference.
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            SidebarItem::DocId(id) | SidebarItem::Entry(SidebarEntry::Doc { id, .. }) => {
                Some(id.as_str())
            }
            _ => None,
        }
    }

    /// Text shown in the sidebar. Docs without a label show their id.
    pub fn label(&self) -> &str {
        match self {
            SidebarItem::DocId(id) => id.as_str(),
            SidebarItem::Entry(SidebarEntry::Doc { id, label }) => {
                label.as_deref().unwrap_or(id.as_str())
            }
            SidebarItem::Entry(SidebarEntry::Category { label, .. })
            | SidebarItem::Entry(SidebarEntry::Link { label, .. }) => label.as_str(),
        }
    }

    pub fn children(&self) -> &[SidebarItem] {
        match self {
            SidebarItem::Entry(SidebarEntry::Category { items, .. }) => items.as_slice(),
            _ => &[],
        }
    }
}

impl Sidebar {
    /// All doc ids, depth-first, in sidebar order.
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_doc_ids(&self.items, &mut ids);
        ids
    }

    /// The doc a navbar entry for this sidebar points at.
    pub fn first_doc(&self) -> Option<&str> {
        first_doc_in(&self.items)
    }

    /// External links reachable from this sidebar.
    pub fn links(&self) -> Vec<(&str, &str)> {
        let mut links = Vec::new();
        collect_links(&self.items, &mut links);
        links
    }
}

fn collect_doc_ids<'a>(items: &'a [SidebarItem], ids: &mut Vec<&'a str>) {
    for item in items {
        if let Some(id) = item.doc_id() {
            ids.push(id);
        }
        collect_doc_ids(item.children(), ids);
    }
}

fn first_doc_in(items: &[SidebarItem]) -> Option<&str> {
    items
        .iter()
        .find_map(|item| item.doc_id().or_else(|| first_doc_in(item.children())))
}

fn collect_links<'a>(items: &'a [SidebarItem], links: &mut Vec<(&'a str, &'a str)>) {
    for item in items {
        if let SidebarItem::Entry(SidebarEntry::Link { label, href }) = item {
            links.push((label.as_str(), href.as_str()));
        }
        collect_links(item.children(), links);
    }
}

/// Join a doc id onto a section route: `("/", "familiar", "intro")` →
/// `/familiar/intro`.
pub fn doc_route(base_url: &str, route_base_path: &str, doc_id: &str) -> String {
    let mut route = String::from("/");
    for segment in [base_url, route_base_path, doc_id] {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        if !route.ends_with('/') {
            route.push('/');
        }
        route.push_str(segment);
    }
    route
}

// ============================================================================
// Stock sidebars
// ============================================================================

pub fn jj_sidebar() -> Sidebar {
    Sidebar {
        id: "jjSidebar".to_string(),
        items: vec![
            SidebarItem::labelled_doc("intro", "Introduction"),
            SidebarItem::category(
                "Getting Started",
                &["installation", "quick-start", "requirements"],
            ),
            SidebarItem::category(
                "User Guide",
                &["party-management", "travel-system", "resources", "permissions"],
            ),
            SidebarItem::category(
                "Configuration",
                &["system-configuration", "simple-worldbuilding-guide"],
            ),
            SidebarItem::category(
                "Development",
                &["contributing", "localization", "api-reference"],
            ),
        ],
    }
}

pub fn argon_sidebar() -> Sidebar {
    Sidebar {
        id: "argonSidebar".to_string(),
        items: vec![
            SidebarItem::labelled_doc("intro", "Introduction"),
            SidebarItem::category("Getting Started", &["installation", "requirements"]),
        ],
    }
}

pub fn realms_sidebar() -> Sidebar {
    Sidebar {
        id: "realmsSidebar".to_string(),
        items: [
            "intro",
            "installation",
            "requirements",
            "getting-started",
            "user-guide",
            "api-reference",
        ]
        .iter()
        .map(|id| SidebarItem::doc(id))
        .collect(),
    }
}

pub fn seasons_sidebar() -> Sidebar {
    let mut items: Vec<SidebarItem> = [
        "intro",
        "requirements",
        "installation",
        "user-guide",
        "calendar-packs",
    ]
    .iter()
    .map(|id| SidebarItem::doc(id))
    .collect();
    items.push(SidebarItem::category(
        "Migration & Planning",
        &["migration-guide", "roadmap"],
    ));
    items.push(SidebarItem::category(
        "Development",
        &["developer-guide", "applicationv2-development"],
    ));
    Sidebar {
        id: "seasonsSidebar".to_string(),
        items,
    }
}

pub fn compat_sidebar() -> Sidebar {
    Sidebar {
        id: "compatSidebar".to_string(),
        items: vec![
            SidebarItem::category("Getting Started", &["intro", "installation"]),
            SidebarItem::category("Module Integration", &["simple-weather-integration"]),
            SidebarItem::category("Reference", &["api-reference", "troubleshooting"]),
        ],
    }
}

pub fn errors_sidebar() -> Sidebar {
    let mut items: Vec<SidebarItem> = ["intro", "installation", "integration", "api-reference"]
        .iter()
        .map(|id| SidebarItem::doc(id))
        .collect();
    items.extend([
        SidebarItem::category(
            "Advanced Topics",
            &["endpoint-setup", "privacy-guidelines", "testing-debugging"],
        ),
        SidebarItem::category("Legal & Compliance", &["privacy-policy", "legal-compliance"]),
        SidebarItem::link(
            "GitHub Repository",
            "https://github.com/rayners/fvtt-errors-and-echoes",
        ),
        SidebarItem::link(
            "Reference Implementation",
            "https://github.com/rayners/sentry-relay",
        ),
    ]);
    Sidebar {
        id: "errorsSidebar".to_string(),
        items,
    }
}

pub fn familiar_sidebar() -> Sidebar {
    Sidebar {
        id: "familiarSidebar".to_string(),
        items: vec![
            SidebarItem::category("Getting Started", &["intro", "installation", "user-guide"]),
            SidebarItem::category("Advanced", &["advanced-features"]),
        ],
    }
}
