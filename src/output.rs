//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Every entity (docs section, sidebar item, module card) leads with its
//! positional index and display name. Routes and ids follow as secondary
//! context, either after `→` or on indented lines.
//!
//! # Output Format
//!
//! ## Resolve
//!
//! ```text
//! Foundry VTT Module Documentation (rayners/foundry-docs)
//!     URL: https://docs.rayners.dev/
//!
//! Docs
//! 001 Journeys & Jamborees (13 docs)
//!     Route: /journeys-and-jamborees/intro
//!     Source: journeys-and-jamborees
//!     Edit: https://github.com/rayners/foundry-docs/tree/main/
//! 002 ARGON Dragonbane (3 docs)
//!     Route: /argon-dragonbane/intro
//!     Source: argon-dragonbane
//!
//! Cards
//! 001 Journeys & Jamborees [development]
//!     Link: /journeys-and-jamborees/intro
//! ```
//!
//! ## Sidebars
//!
//! ```text
//! Journeys & Jamborees (jj)
//!     001 Introduction → /journeys-and-jamborees/intro
//!     002 Getting Started
//!         001 installation → /journeys-and-jamborees/installation
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::{NavbarItem, SiteConfig};
use crate::generate::GenerateReport;
use crate::resolve::Manifest;
use crate::sidebar::{SidebarEntry, SidebarItem, doc_route};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional doc count.
///
/// ```text
/// 001 Journeys & Jamborees (13 docs)
/// 002 Getting Started
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 doc)", format_index(index), title),
        Some(n) => format!("{} {} ({} docs)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Navbar label for a docs section, falling back to its id.
fn section_label<'a>(config: &'a SiteConfig, docs_id: &'a str) -> &'a str {
    config
        .navbar
        .items
        .iter()
        .find_map(|item| match item {
            NavbarItem::DocSidebar { docs_id: id, label, .. } if id == docs_id => {
                Some(label.as_str())
            }
            _ => None,
        })
        .unwrap_or(docs_id)
}

// ============================================================================
// Stage 1: Resolve output
// ============================================================================

/// Format resolve stage output: site identity, docs sections, cards, and
/// any broken links.
pub fn format_resolve_output(manifest: &Manifest) -> Vec<String> {
    let config = &manifest.config;
    let mut lines = Vec::new();

    lines.push(format!(
        "{} ({}/{})",
        config.title, config.organization, config.project
    ));
    lines.push(format!(
        "{}URL: {}{}",
        indent(1),
        config.url.trim_end_matches('/'),
        config.base_url
    ));

    lines.push(String::new());
    lines.push("Docs".to_string());
    for (i, section) in manifest.sections.iter().enumerate() {
        let label = section_label(config, &section.id);
        lines.push(entity_header(i + 1, label, Some(section.routes.len())));
        lines.push(format!("{}Route: {}", indent(1), section.entry_route));
        if let Some(docs) = config.section(&section.id) {
            lines.push(format!("{}Source: {}", indent(1), docs.path));
            if let Some(edit_url) = &docs.edit_url {
                lines.push(format!("{}Edit: {}", indent(1), edit_url));
            }
        }
    }

    lines.push(String::new());
    lines.push("Cards".to_string());
    for (i, module) in manifest.modules.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(i + 1),
            module.title,
            module.status
        ));
        lines.push(format!("{}Link: {}", indent(1), module.link));
    }

    if !manifest.broken_links.is_empty() {
        lines.push(String::new());
        lines.push("Broken links".to_string());
        for link in &manifest.broken_links {
            lines.push(format!("{}{}", indent(1), link));
        }
    }

    lines
}

/// Print resolve output to stdout.
pub fn print_resolve_output(manifest: &Manifest) {
    for line in format_resolve_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Sidebar trees
// ============================================================================

/// Format every docs section's sidebar as an indented tree with routes.
pub fn format_sidebars_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, docs) in config.docs.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} ({})",
            section_label(config, &docs.id),
            docs.id
        ));
        let route = |id: &str| doc_route(&config.base_url, &docs.route_base_path, id);
        walk_sidebar(&docs.sidebar.items, 1, &route, &mut lines);
    }
    lines
}

fn walk_sidebar(
    items: &[SidebarItem],
    depth: usize,
    route: &dyn Fn(&str) -> String,
    lines: &mut Vec<String>,
) {
    for (i, item) in items.iter().enumerate() {
        let header = entity_header(i + 1, item.label(), None);
        match item {
            SidebarItem::DocId(id) | SidebarItem::Entry(SidebarEntry::Doc { id, .. }) => {
                lines.push(format!("{}{} \u{2192} {}", indent(depth), header, route(id.as_str())));
            }
            SidebarItem::Entry(SidebarEntry::Category { items, .. }) => {
                lines.push(format!("{}{}", indent(depth), header));
                walk_sidebar(items, depth + 1, route, lines);
            }
            SidebarItem::Entry(SidebarEntry::Link { href, .. }) => {
                lines.push(format!(
                    "{}{} \u{2192} {} (external)",
                    indent(depth),
                    header,
                    href
                ));
            }
        }
    }
}

/// Print sidebar trees to stdout.
pub fn print_sidebars_output(config: &SiteConfig) {
    for line in format_sidebars_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing the written pages, relative to the
/// output directory.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &report.pages {
        let relative = page.strip_prefix(output_dir).unwrap_or(page);
        lines.push(format!("Home \u{2192} {}", relative.display()));
    }
    lines.push(format!("Generated {} page(s)", report.pages.len()));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrokenLinkPolicy;
    use crate::modules::MODULES;
    use crate::resolve::resolve;
    use crate::test_helpers::stock_source;
    use crate::types::ModuleDescriptor;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn entity_header_counts() {
        assert_eq!(
            entity_header(1, "Realms & Reaches", Some(6)),
            "001 Realms & Reaches (6 docs)"
        );
        assert_eq!(entity_header(2, "Solo", Some(1)), "002 Solo (1 doc)");
        assert_eq!(entity_header(3, "Advanced", None), "003 Advanced");
    }

    #[test]
    fn section_label_prefers_navbar() {
        let mut config = SiteConfig::default();
        assert_eq!(section_label(&config, "compat"), "Calendar Compat");
        config.navbar.items.clear();
        assert_eq!(section_label(&config, "compat"), "compat");
    }

    #[test]
    fn resolve_output_lists_sections_and_cards() {
        let source = stock_source();
        let manifest = resolve(&SiteConfig::default(), MODULES, source.path()).unwrap();
        let lines = format_resolve_output(&manifest);
        assert_eq!(lines[0], "Foundry VTT Module Documentation (rayners/foundry-docs)");
        assert_eq!(lines[1], "    URL: https://docs.rayners.dev/");
        assert_eq!(lines[3], "Docs");
        assert_eq!(lines[4], "001 Journeys & Jamborees (13 docs)");
        assert_eq!(lines[5], "    Route: /journeys-and-jamborees/intro");
        assert_eq!(lines[6], "    Source: journeys-and-jamborees");
        assert_eq!(
            lines[7],
            "    Edit: https://github.com/rayners/foundry-docs/tree/main/"
        );
        assert!(lines.contains(&"002 ARGON Dragonbane [stable]".to_string()));
        assert!(lines.contains(&"    Link: /seasons-and-stars/intro".to_string()));
        assert!(!lines.contains(&"Broken links".to_string()));
    }

    #[test]
    fn resolve_output_reports_broken_links() {
        let mut config = SiteConfig::default();
        config.on_broken_links = BrokenLinkPolicy::Ignore;
        let modules = [ModuleDescriptor::new("Ghost", "d", "/ghost/intro")];
        let source = stock_source();
        let manifest = resolve(&config, &modules, source.path()).unwrap();
        let lines = format_resolve_output(&manifest);
        let at = lines.iter().position(|l| l == "Broken links").unwrap();
        assert_eq!(lines[at + 1], "    module card \"Ghost\" \u{2192} /ghost/intro");
    }

    #[test]
    fn resolve_output_skips_missing_edit_url() {
        let mut config = SiteConfig::default();
        config.organization = "table-tools".to_string();
        config.project = "handbook".to_string();
        config.base_url = "/handbook/".to_string();
        for docs in &mut config.docs {
            docs.edit_url = None;
        }
        let source = stock_source();
        let manifest = resolve(&config, &[], source.path()).unwrap();
        let lines = format_resolve_output(&manifest);
        assert_eq!(lines[0], "Foundry VTT Module Documentation (table-tools/handbook)");
        assert_eq!(lines[1], "    URL: https://docs.rayners.dev/handbook/");
        assert!(!lines.iter().any(|l| l.contains("Edit:")));
        assert_eq!(lines[7], "002 ARGON Dragonbane (3 docs)");
    }

    #[test]
    fn sidebars_output_is_a_tree() {
        let lines = format_sidebars_output(&SiteConfig::default());
        assert_eq!(lines[0], "Journeys & Jamborees (jj)");
        assert_eq!(
            lines[1],
            "    001 Introduction \u{2192} /journeys-and-jamborees/intro"
        );
        assert_eq!(lines[2], "    002 Getting Started");
        assert_eq!(
            lines[3],
            "        001 installation \u{2192} /journeys-and-jamborees/installation"
        );
    }

    #[test]
    fn sidebars_output_marks_external_links() {
        let lines = format_sidebars_output(&SiteConfig::default());
        assert!(lines.contains(
            &"    008 Reference Implementation \u{2192} https://github.com/rayners/sentry-relay (external)"
                .to_string()
        ));
    }

    #[test]
    fn generate_output_is_relative() {
        let out = PathBuf::from("/tmp/site");
        let report = GenerateReport {
            pages: vec![out.join("index.html")],
        };
        let lines = format_generate_output(&report, &out);
        assert_eq!(lines, vec!["Home \u{2192} index.html", "Generated 1 page(s)"]);
    }
}
