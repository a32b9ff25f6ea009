//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults
//! describe the whole Foundry modules portal: site metadata, the seven docs
//! sections with their sidebars, the navbar and the footer. A `site.toml`
//! in the source directory overrides any part of it.
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Foundry VTT Module Documentation"
//! tagline = "Documentation for Foundry VTT modules"
//! url = "https://docs.rayners.dev"
//! base_url = "/"
//! on_broken_links = "throw"     # throw | warn | ignore
//!
//! [i18n]
//! default_locale = "en"
//! locales = ["en"]
//!
//! [[docs]]
//! id = "jj"
//! path = "journeys-and-jamborees"
//! route_base_path = "journeys-and-jamborees"
//! edit_url = "https://github.com/rayners/foundry-docs/tree/main/"
//! sidebar = { id = "jjSidebar", items = ["intro", "installation"] }
//!
//! [navbar]
//! title = "Foundry Modules"
//! logo = { alt = "Foundry Modules Logo", src = "img/logo.svg" }
//! items = [
//!     { type = "doc-sidebar", sidebar_id = "jjSidebar", docs_id = "jj", label = "Journeys & Jamborees" },
//!     { type = "href", href = "https://github.com/rayners", label = "GitHub", position = "right" },
//! ]
//!
//! [footer]
//! style = "dark"
//! copyright = "Copyright © {year} David Raynes."
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key; arrays replace the stock array wholesale. So a
//! `site.toml` holding only `tagline = "..."` keeps every docs section,
//! while one that declares `[[docs]]` replaces the full list.
//!
//! Unknown keys are rejected to catch typos early.

use crate::sidebar::{self, Sidebar};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    /// Favicon path relative to `base_url`.
    pub favicon: String,
    /// Production origin, e.g. `https://docs.rayners.dev`.
    pub url: String,
    /// Path the site is served under. Must start and end with `/`.
    pub base_url: String,
    /// GitHub organization and project the site is published from.
    pub organization: String,
    pub project: String,
    /// Social card image path relative to `base_url`.
    pub image: String,
    pub on_broken_links: BrokenLinkPolicy,
    pub i18n: I18nConfig,
    /// Docs sections, in navbar order.
    pub docs: Vec<DocsSection>,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Foundry VTT Module Documentation".to_string(),
            tagline: "Documentation for Foundry VTT modules".to_string(),
            favicon: "img/favicon.ico".to_string(),
            url: "https://docs.rayners.dev".to_string(),
            base_url: "/".to_string(),
            organization: "rayners".to_string(),
            project: "foundry-docs".to_string(),
            image: "img/docusaurus-social-card.jpg".to_string(),
            on_broken_links: BrokenLinkPolicy::Throw,
            i18n: I18nConfig::default(),
            docs: stock_docs(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

/// What to do when an internal link points at no known route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    #[default]
    Throw,
    Warn,
    Ignore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// One independently routed documentation set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsSection {
    pub id: String,
    /// Content directory, relative to the source root. Holds one
    /// `<id>.md` or `<id>.mdx` per sidebar doc.
    pub path: String,
    pub route_base_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    pub sidebar: Sidebar,
}

const EDIT_URL: &str = "https://github.com/rayners/foundry-docs/tree/main/";

fn section(id: &str, dir: &str, sidebar: Sidebar) -> DocsSection {
    DocsSection {
        id: id.to_string(),
        path: dir.to_string(),
        route_base_path: dir.to_string(),
        edit_url: Some(EDIT_URL.to_string()),
        sidebar,
    }
}

fn stock_docs() -> Vec<DocsSection> {
    vec![
        section("jj", "journeys-and-jamborees", sidebar::jj_sidebar()),
        section("argon", "argon-dragonbane", sidebar::argon_sidebar()),
        section("realms", "realms-and-reaches", sidebar::realms_sidebar()),
        section("seasons", "seasons-and-stars", sidebar::seasons_sidebar()),
        section("compat", "simple-calendar-compat", sidebar::compat_sidebar()),
        section("errors", "errors-and-echoes", sidebar::errors_sidebar()),
        section("familiar", "familiar", sidebar::familiar_sidebar()),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub title: String,
    pub logo: Logo,
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavbarItem {
    /// Opens the first doc of a docs section's sidebar.
    DocSidebar {
        sidebar_id: String,
        docs_id: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
    /// External link.
    Href {
        href: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
}

impl NavbarItem {
    pub fn position(&self) -> Position {
        match self {
            NavbarItem::DocSidebar { position, .. } | NavbarItem::Href { position, .. } => {
                *position
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavbarItem::DocSidebar { label, .. } | NavbarItem::Href { label, .. } => label.as_str(),
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        let doc_sidebar = |docs_id: &str, label: &str| NavbarItem::DocSidebar {
            sidebar_id: format!("{docs_id}Sidebar"),
            docs_id: docs_id.to_string(),
            label: label.to_string(),
            position: Position::Left,
        };
        Self {
            title: "Foundry Modules".to_string(),
            logo: Logo {
                alt: "Foundry Modules Logo".to_string(),
                src: "img/logo.svg".to_string(),
            },
            items: vec![
                doc_sidebar("jj", "Journeys & Jamborees"),
                doc_sidebar("argon", "ARGON Dragonbane"),
                doc_sidebar("realms", "Realms & Reaches"),
                doc_sidebar("seasons", "Seasons & Stars"),
                doc_sidebar("compat", "Calendar Compat"),
                doc_sidebar("errors", "Errors & Echoes"),
                doc_sidebar("familiar", "Foundry Familiar"),
                NavbarItem::Href {
                    href: "https://github.com/rayners".to_string(),
                    label: "GitHub".to_string(),
                    position: Position::Right,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    /// `{year}` is replaced with the build year.
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<FooterLink>,
}

/// A footer entry: `to` is a site route, `href` an external URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterLink {
    fn internal(label: &str, to: &str) -> Self {
        Self {
            label: label.to_string(),
            to: Some(to.to_string()),
            href: None,
        }
    }

    fn external(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            to: None,
            href: Some(href.to_string()),
        }
    }

    /// Link target, preferring the internal route.
    pub fn target(&self) -> &str {
        self.to.as_deref().or(self.href.as_deref()).unwrap_or_default()
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: FooterStyle::Dark,
            links: vec![
                FooterColumn {
                    title: "Modules".to_string(),
                    items: vec![
                        FooterLink::internal("Journeys & Jamborees", "/journeys-and-jamborees/intro"),
                        FooterLink::internal("ARGON Dragonbane", "/argon-dragonbane/intro"),
                        FooterLink::internal("Realms & Reaches", "/realms-and-reaches/intro"),
                        FooterLink::internal("Seasons & Stars", "/seasons-and-stars/intro"),
                        FooterLink::internal("Calendar Compat", "/simple-calendar-compat/intro"),
                        FooterLink::internal("Errors & Echoes", "/errors-and-echoes/intro"),
                        FooterLink::internal("Foundry Familiar", "/familiar/intro"),
                    ],
                },
                FooterColumn {
                    title: "Community".to_string(),
                    items: vec![
                        FooterLink::external("Foundry VTT", "https://foundryvtt.com"),
                        FooterLink::external("Discord", "https://discord.gg/foundryvtt"),
                    ],
                },
                FooterColumn {
                    title: "More".to_string(),
                    items: vec![
                        FooterLink::external("GitHub", "https://github.com/rayners"),
                        FooterLink::external(
                            "Issues",
                            "https://github.com/rayners/foundry-docs/issues",
                        ),
                    ],
                },
            ],
            copyright: "Copyright © {year} David Raynes. Built with foundry-docs.".to_string(),
        }
    }
}

impl SiteConfig {
    /// Look up a docs section by id.
    pub fn section(&self, id: &str) -> Option<&DocsSection> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Validate config values and cross-references.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.tagline.trim().is_empty() {
            return Err(ConfigError::Validation("tagline must not be empty".into()));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must start and end with '/', got {:?}",
                self.base_url
            )));
        }
        if !is_absolute_url(&self.url) {
            return Err(ConfigError::Validation(format!(
                "url must be an http(s) URL, got {:?}",
                self.url
            )));
        }
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale {:?} is not listed in i18n.locales",
                self.i18n.default_locale
            )));
        }
        self.validate_docs()?;
        self.validate_navbar()?;
        self.validate_footer()?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        let mut routes = HashSet::new();
        for docs in &self.docs {
            if docs.id.is_empty() {
                return Err(ConfigError::Validation("docs.id must not be empty".into()));
            }
            if !ids.insert(docs.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate docs id {:?}",
                    docs.id
                )));
            }
            if docs.route_base_path.trim_matches('/').is_empty() {
                return Err(ConfigError::Validation(format!(
                    "docs {:?}: route_base_path must not be empty",
                    docs.id
                )));
            }
            if !routes.insert(docs.route_base_path.trim_matches('/')) {
                return Err(ConfigError::Validation(format!(
                    "docs {:?}: route_base_path {:?} is already used",
                    docs.id, docs.route_base_path
                )));
            }
            if docs.edit_url.as_deref().is_some_and(|url| !is_absolute_url(url)) {
                return Err(ConfigError::Validation(format!(
                    "docs {:?}: edit_url must be an http(s) URL",
                    docs.id
                )));
            }
            let doc_ids = docs.sidebar.doc_ids();
            if doc_ids.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "docs {:?}: sidebar {:?} has no docs",
                    docs.id, docs.sidebar.id
                )));
            }
            let mut seen = HashSet::new();
            for id in doc_ids {
                if !seen.insert(id) {
                    return Err(ConfigError::Validation(format!(
                        "docs {:?}: doc {:?} appears twice in sidebar {:?}",
                        docs.id, id, docs.sidebar.id
                    )));
                }
            }
            for (label, href) in docs.sidebar.links() {
                if !is_absolute_url(href) {
                    return Err(ConfigError::Validation(format!(
                        "docs {:?}: sidebar link {:?} must be an http(s) URL",
                        docs.id, label
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for item in &self.navbar.items {
            match item {
                NavbarItem::DocSidebar {
                    sidebar_id,
                    docs_id,
                    label,
                    ..
                } => {
                    let docs = self.section(docs_id).ok_or_else(|| {
                        ConfigError::Validation(format!(
                            "navbar item {label:?} references unknown docs id {docs_id:?}"
                        ))
                    })?;
                    if &docs.sidebar.id != sidebar_id {
                        return Err(ConfigError::Validation(format!(
                            "navbar item {label:?}: docs {docs_id:?} has no sidebar {sidebar_id:?}"
                        )));
                    }
                }
                NavbarItem::Href { href, label, .. } => {
                    if !is_absolute_url(href) {
                        return Err(ConfigError::Validation(format!(
                            "navbar item {label:?}: href must be an http(s) URL"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_footer(&self) -> Result<(), ConfigError> {
        for column in &self.footer.links {
            for link in &column.items {
                match (&link.to, &link.href) {
                    (Some(to), None) if to.starts_with('/') => {}
                    (None, Some(href)) if is_absolute_url(href) => {}
                    _ => {
                        return Err(ConfigError::Validation(format!(
                            "footer link {:?} needs either a '/'-rooted `to` or an http(s) `href`",
                            link.label
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_absolute_url(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://")
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `site.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    if overlay.is_some() {
        tracing::debug!(path = %dir.join(CONFIG_FILE).display(), "merging site config");
    } else {
        tracing::debug!(dir = %dir.display(), "no site config, using stock defaults");
    }
    resolve_config(base, overlay)
}

/// Returns a commented `site.toml` covering the scalar settings.
///
/// Used by the `gen-config` CLI command. Docs sections, navbar and footer
/// are listed in full by `stock_config_full()`.
pub fn stock_config_toml() -> &'static str {
    r##"# foundry-docs Site Configuration
# ===============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key by key with the stock defaults. Arrays ([[docs]],
# navbar.items, footer.links) replace the stock array entirely, so copy
# the full list from `foundry-docs gen-config --full` before editing one.
# Unknown keys will cause an error.

title = "Foundry VTT Module Documentation"
tagline = "Documentation for Foundry VTT modules"

# Favicon and social card, relative to base_url.
favicon = "img/favicon.ico"
image = "img/docusaurus-social-card.jpg"

# Production origin and the path the site is served under.
# base_url must start and end with "/".
url = "https://docs.rayners.dev"
base_url = "/"

# GitHub organization and project, shown in the resolve report.
organization = "rayners"
project = "foundry-docs"

# What to do when a module card or footer link points at no known doc, or a
# sidebar doc has no <path>/<id>.md file:
# "throw" fails the build, "warn" logs and continues, "ignore" says nothing.
on_broken_links = "throw"

# ---------------------------------------------------------------------------
# Internationalization
# ---------------------------------------------------------------------------
[i18n]
default_locale = "en"
locales = ["en"]

# ---------------------------------------------------------------------------
# Navbar (items are listed by `gen-config --full`)
# ---------------------------------------------------------------------------
[navbar]
title = "Foundry Modules"

[navbar.logo]
alt = "Foundry Modules Logo"
src = "img/logo.svg"

# ---------------------------------------------------------------------------
# Footer (link columns are listed by `gen-config --full`)
# ---------------------------------------------------------------------------
[footer]
# "dark" or "light"
style = "dark"
# {year} is replaced with the build year.
copyright = "Copyright © {year} David Raynes. Built with foundry-docs."
"##
}

/// The complete stock configuration, every docs section included.
pub fn stock_config_full() -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&SiteConfig::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_describes_seven_sections() {
        let config = SiteConfig::default();
        let ids: Vec<&str> = config.docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["jj", "argon", "realms", "seasons", "compat", "errors", "familiar"]
        );
        assert_eq!(
            config.section("compat").unwrap().route_base_path,
            "simple-calendar-compat"
        );
    }

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn default_navbar_matches_sections() {
        let config = SiteConfig::default();
        let left = config
            .navbar
            .items
            .iter()
            .filter(|i| i.position() == Position::Left)
            .count();
        assert_eq!(left, config.docs.len());
        assert_eq!(config.navbar.items.last().unwrap().label(), "GitHub");
    }

    #[test]
    fn stock_defaults_survive_toml_round_trip() {
        let config = resolve_config(stock_defaults_value().unwrap(), None).unwrap();
        assert_eq!(config.title, "Foundry VTT Module Documentation");
        assert_eq!(config.docs[5].sidebar.links().len(), 2);
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let overlay: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.tagline, SiteConfig::default().tagline);
        assert_eq!(config.docs.len(), 7);
    }

    #[test]
    fn stock_config_full_parses() {
        let full = stock_config_full().unwrap();
        let config: SiteConfig = toml::from_str(&full).unwrap();
        config.validate().unwrap();
        assert_eq!(config.navbar.items.len(), 8);
    }

    #[test]
    fn partial_config_keeps_sections() {
        let overlay: toml::Value = toml::from_str(r#"tagline = "Modules for your table""#).unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.tagline, "Modules for your table");
        assert_eq!(config.title, "Foundry VTT Module Documentation");
        assert_eq!(config.docs.len(), 7);
    }

    #[test]
    fn nested_tables_merge() {
        let overlay: toml::Value = toml::from_str(
            r#"
[navbar.logo]
src = "img/other.svg"
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.navbar.logo.src, "img/other.svg");
        assert_eq!(config.navbar.logo.alt, "Foundry Modules Logo");
        assert_eq!(config.navbar.items.len(), 8);
    }

    #[test]
    fn arrays_replace_wholesale() {
        let overlay: toml::Value = toml::from_str(
            r#"
[[docs]]
id = "solo"
path = "solo"
route_base_path = "solo"
sidebar = { id = "soloSidebar", items = ["intro"] }

[navbar]
items = [{ type = "doc-sidebar", sidebar_id = "soloSidebar", docs_id = "solo", label = "Solo" }]
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.docs.len(), 1);
        assert_eq!(config.docs[0].edit_url, None);
        assert_eq!(config.navbar.items.len(), 1);
    }

    #[test]
    fn unknown_keys_rejected() {
        let overlay: toml::Value = toml::from_str(r#"titel = "typo""#).unwrap();
        let result = resolve_config(stock_defaults_value().unwrap(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn broken_link_policy_parses() {
        let overlay: toml::Value = toml::from_str(r#"on_broken_links = "warn""#).unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Warn);

        let overlay: toml::Value = toml::from_str(r#"on_broken_links = "explode""#).unwrap();
        assert!(resolve_config(stock_defaults_value().unwrap(), Some(overlay)).is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn expect_invalid(config: &SiteConfig, needle: &str) {
        match config.validate() {
            Err(ConfigError::Validation(msg)) => {
                assert!(msg.contains(needle), "{msg:?} does not mention {needle:?}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_title_invalid() {
        let mut config = SiteConfig::default();
        config.title = "  ".to_string();
        expect_invalid(&config, "title");
    }

    #[test]
    fn base_url_needs_slashes() {
        let mut config = SiteConfig::default();
        config.base_url = "docs".to_string();
        expect_invalid(&config, "base_url");
    }

    #[test]
    fn default_locale_must_be_listed() {
        let mut config = SiteConfig::default();
        config.i18n.default_locale = "fr".to_string();
        expect_invalid(&config, "default_locale");
    }

    #[test]
    fn duplicate_docs_id_invalid() {
        let mut config = SiteConfig::default();
        config.docs[1].id = "jj".to_string();
        expect_invalid(&config, "duplicate docs id");
    }

    #[test]
    fn duplicate_route_invalid() {
        let mut config = SiteConfig::default();
        config.docs[1].route_base_path = "/journeys-and-jamborees/".to_string();
        expect_invalid(&config, "already used");
    }

    #[test]
    fn empty_sidebar_invalid() {
        let mut config = SiteConfig::default();
        config.docs[0].sidebar.items.clear();
        expect_invalid(&config, "has no docs");
    }

    #[test]
    fn duplicate_doc_in_sidebar_invalid() {
        let mut config = SiteConfig::default();
        config.docs[2]
            .sidebar
            .items
            .push(crate::sidebar::SidebarItem::doc("intro"));
        expect_invalid(&config, "appears twice");
    }

    #[test]
    fn navbar_unknown_docs_invalid() {
        let mut config = SiteConfig::default();
        config.docs.retain(|d| d.id != "familiar");
        expect_invalid(&config, "unknown docs id \"familiar\"");
    }

    #[test]
    fn navbar_wrong_sidebar_invalid() {
        let mut config = SiteConfig::default();
        config.docs[0].sidebar.id = "renamed".to_string();
        expect_invalid(&config, "has no sidebar");
    }

    #[test]
    fn footer_link_needs_one_target() {
        let mut config = SiteConfig::default();
        config.footer.links[0].items[0].href = Some("https://example.com".to_string());
        expect_invalid(&config, "footer link");
    }

    #[test]
    fn footer_target_prefers_route() {
        let link = FooterLink::internal("Docs", "/familiar/intro");
        assert_eq!(link.target(), "/familiar/intro");
        let link = FooterLink::external("Discord", "https://discord.gg/foundryvtt");
        assert_eq!(link.target(), "https://discord.gg/foundryvtt");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Foundry VTT Module Documentation");
        assert_eq!(config.docs.len(), 7);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
title = "My Modules"

[footer]
style = "light"
"#,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "My Modules");
        assert_eq!(config.footer.style, FooterStyle::Light);
        assert_eq!(config.footer.links.len(), 3);
    }

    #[test]
    fn load_config_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "title = [unclosed").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_runs_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"base_url = "docs""#).unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
