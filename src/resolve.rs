//! Site resolution.
//!
//! Stage 1 of the build pipeline. Takes the loaded site config and the
//! compiled module table and produces the manifest the generate stage reads:
//! every docs section with its entry route and the full list of doc routes.
//!
//! ## Link Checking
//!
//! Internal links owned by the site (module card links and footer `to`
//! links) are resolved against `base_url` and must land on the home route or
//! on a doc listed in some sidebar. Every sidebar doc must also have a
//! content file, `<source>/<path>/<id>.md` or `.mdx`. Unresolved links and
//! missing docs are handled per `on_broken_links`:
//!
//! | policy   | effect                                   |
//! |----------|------------------------------------------|
//! | `throw`  | resolution fails, listing every bad link |
//! | `warn`   | logged, kept in the manifest             |
//! | `ignore` | kept in the manifest, nothing logged     |

use crate::config::{BrokenLinkPolicy, SiteConfig};
use crate::sidebar::doc_route;
use crate::types::ModuleDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{} broken link(s):\n{}", .0.len(), format_broken(.0))]
    BrokenLinks(Vec<BrokenLink>),
    #[error("docs {0:?} has no doc to link to")]
    EmptySection(String),
}

fn format_broken(links: &[BrokenLink]) -> String {
    links
        .iter()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolved site, serialized as `manifest.json` between stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub config: SiteConfig,
    pub modules: Vec<ModuleDescriptor>,
    pub sections: Vec<ResolvedSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub broken_links: Vec<BrokenLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSection {
    pub id: String,
    /// Route of the first doc in the sidebar.
    pub entry_route: String,
    /// Route of every doc in the sidebar, in sidebar order.
    pub routes: Vec<String>,
}

/// Where a link was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    Card,
    Footer,
    /// A sidebar doc id with no content file; the target is the expected file.
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    pub source: LinkSource,
    pub label: String,
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            LinkSource::Card => "module card",
            LinkSource::Footer => "footer link",
            LinkSource::Sidebar => "sidebar doc",
        };
        write!(f, "{} {:?} → {}", source, self.label, self.target)
    }
}

impl Manifest {
    /// Look up the resolved section for a docs id.
    pub fn section(&self, id: &str) -> Option<&ResolvedSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Resolve every docs section's routes, then check internal links and doc
/// files under `source`.
pub fn resolve(
    config: &SiteConfig,
    modules: &[ModuleDescriptor],
    source: &Path,
) -> Result<Manifest, ResolveError> {
    let mut sections = Vec::with_capacity(config.docs.len());
    for docs in &config.docs {
        let route = |id: &str| doc_route(&config.base_url, &docs.route_base_path, id);
        let first = docs
            .sidebar
            .first_doc()
            .ok_or_else(|| ResolveError::EmptySection(docs.id.clone()))?;
        let routes: Vec<String> = docs.sidebar.doc_ids().into_iter().map(route).collect();
        tracing::debug!(docs = %docs.id, routes = routes.len(), "resolved docs section");
        sections.push(ResolvedSection {
            id: docs.id.clone(),
            entry_route: route(first),
            routes,
        });
    }

    let mut broken_links = check_doc_files(config, source);
    broken_links.extend(check_links(config, modules, &sections));
    if !broken_links.is_empty() {
        match config.on_broken_links {
            BrokenLinkPolicy::Throw => return Err(ResolveError::BrokenLinks(broken_links)),
            BrokenLinkPolicy::Warn => {
                for link in &broken_links {
                    tracing::warn!("broken {link}");
                }
            }
            BrokenLinkPolicy::Ignore => {}
        }
    }

    Ok(Manifest {
        config: config.clone(),
        modules: modules.to_vec(),
        sections,
        broken_links,
    })
}

/// Sidebar docs with neither `<id>.md` nor `<id>.mdx` under the section's
/// content directory.
pub fn check_doc_files(config: &SiteConfig, source: &Path) -> Vec<BrokenLink> {
    let mut missing = Vec::new();
    for docs in &config.docs {
        let dir = source.join(&docs.path);
        for id in docs.sidebar.doc_ids() {
            let found = ["md", "mdx"]
                .iter()
                .any(|ext| dir.join(format!("{id}.{ext}")).is_file());
            if !found {
                missing.push(BrokenLink {
                    source: LinkSource::Sidebar,
                    label: format!("{}/{}", docs.id, id),
                    target: format!("{}/{}.md", docs.path.trim_end_matches('/'), id),
                });
            }
        }
    }
    missing
}

/// Internal links that, resolved against `base_url`, match neither the home
/// route nor any doc route.
pub fn check_links(
    config: &SiteConfig,
    modules: &[ModuleDescriptor],
    sections: &[ResolvedSection],
) -> Vec<BrokenLink> {
    let home = doc_route(&config.base_url, "", "");
    let known: BTreeSet<&str> = sections
        .iter()
        .flat_map(|s| s.routes.iter().map(String::as_str))
        .chain(std::iter::once(home.as_str()))
        .collect();
    let resolves = |target: &str| {
        let path = target.split(['#', '?']).next().unwrap_or(target);
        known.contains(doc_route(&config.base_url, "", path).as_str())
    };

    let cards = modules
        .iter()
        .filter(|m| !resolves(&m.link))
        .map(|m| BrokenLink {
            source: LinkSource::Card,
            label: m.title.to_string(),
            target: m.link.to_string(),
        });
    let footer = config
        .footer
        .links
        .iter()
        .flat_map(|column| column.items.iter())
        .filter_map(|link| link.to.as_deref().map(|to| (link, to)))
        .filter(|(_, to)| !resolves(*to))
        .map(|(link, to)| BrokenLink {
            source: LinkSource::Footer,
            label: link.label.clone(),
            target: to.to_string(),
        });
    cards.chain(footer).collect()
}
