//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the resolved manifest and writes the
//! landing page.
//!
//! ## Generated Page
//!
//! `index.html` wraps the landing body in the site chrome:
//!
//! - **Head**: `Home | <title>`, meta description, favicon, canonical URL and
//!   social card, inline CSS
//! - **Navbar**: brand logo and title, then one link per navbar item. Docs
//!   sidebar items open their section's first doc; href items open in a new tab
//! - **Landing**: hero banner, module card grid, "why" section (see [`crate::landing`])
//! - **Footer**: link columns and copyright with `{year}` filled in. Internal
//!   `to` links are served under `base_url`
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and inlined into the page.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{FooterConfig, FooterStyle, NavbarItem, Position, SiteConfig};
use crate::landing;
use crate::resolve::Manifest;
use crate::sidebar::doc_route;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("navbar item {0:?} points at a docs section missing from the manifest")]
    UnresolvedNavbar(String),
}

const CSS: &str = include_str!("../static/style.css");

const PAGE_DESCRIPTION: &str = "Documentation for Foundry VTT modules including Journeys & Jamborees, ARGON Dragonbane, Realms & Reaches, and Seasons & Stars";

/// Files written by [`generate`].
#[derive(Debug)]
pub struct GenerateReport {
    pub pages: Vec<PathBuf>,
}

pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(output_dir)?;

    let index_html = render_home_page(&manifest, year)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, index_html.into_string())?;
    tracing::info!(path = %index_path.display(), cards = manifest.modules.len(), "wrote landing page");

    Ok(GenerateReport {
        pages: vec![index_path],
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Site-absolute path for an asset under `base_url`.
fn asset_path(base_url: &str, asset: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), asset.trim_start_matches('/'))
}

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, title: &str, content: Markup) -> Markup {
    let origin = config.url.trim_end_matches('/');
    html! {
        (DOCTYPE)
        html lang=(config.i18n.default_locale) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (config.title) }
                meta name="description" content=(PAGE_DESCRIPTION);
                meta property="og:title" content=(config.title);
                meta property="og:image" content={ (origin) (asset_path(&config.base_url, &config.image)) };
                link rel="icon" href=(asset_path(&config.base_url, &config.favicon));
                link rel="canonical" href={ (origin) (config.base_url) };
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the top navigation bar.
pub fn render_navbar(config: &SiteConfig, manifest: &Manifest) -> Result<Markup, GenerateError> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for item in &config.navbar.items {
        let link = render_navbar_item(item, manifest)?;
        match item.position() {
            Position::Left => left.push(link),
            Position::Right => right.push(link),
        }
    }
    let home = doc_route(&config.base_url, "", "");

    Ok(html! {
        nav.navbar {
            div.navbar__inner {
                div class="navbar__items" {
                    a.navbar__brand href=(home) {
                        img.navbar__logo src=(asset_path(&config.base_url, &config.navbar.logo.src)) alt=(config.navbar.logo.alt);
                        b.navbar__title { (config.navbar.title) }
                    }
                    @for link in &left { (link) }
                }
                div class="navbar__items navbar__items--right" {
                    @for link in &right { (link) }
                }
            }
        }
    })
}

fn render_navbar_item(item: &NavbarItem, manifest: &Manifest) -> Result<Markup, GenerateError> {
    Ok(match item {
        NavbarItem::DocSidebar { docs_id, label, .. } => {
            let section = manifest
                .section(docs_id)
                .ok_or_else(|| GenerateError::UnresolvedNavbar(label.clone()))?;
            html! {
                a class="navbar__item navbar__link" href=(section.entry_route) { (label) }
            }
        }
        NavbarItem::Href { href, label, .. } => html! {
            a class="navbar__item navbar__link" href=(href) target="_blank" rel="noopener noreferrer" { (label) }
        },
    })
}

/// Renders the footer link columns and copyright line.
pub fn render_footer(footer: &FooterConfig, base_url: &str, year: i32) -> Markup {
    let style = match footer.style {
        FooterStyle::Dark => "footer footer--dark",
        FooterStyle::Light => "footer",
    };
    let copyright = footer.copyright.replace("{year}", &year.to_string());

    html! {
        footer class=(style) {
            div.container {
                div class="row footer__links" {
                    @for column in &footer.links {
                        div class="col footer__col" {
                            div.footer__title { (column.title) }
                            ul class="footer__items clean-list" {
                                @for link in &column.items {
                                    li.footer__item {
                                        @if let Some(to) = &link.to {
                                            a.footer__link-item href=(doc_route(base_url, "", to)) { (link.label) }
                                        } @else {
                                            a.footer__link-item href=(link.target()) target="_blank" rel="noopener noreferrer" { (link.label) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div class="footer__bottom text--center" {
                    div.footer__copyright { (copyright) }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: navbar, landing body, footer.
pub fn render_home_page(manifest: &Manifest, year: i32) -> Result<Markup, GenerateError> {
    let config = &manifest.config;
    let navbar = render_navbar(config, manifest)?;
    let content = html! {
        (navbar)
        (landing::render_landing(&config.title, &config.tagline, &manifest.modules))
        (render_footer(&config.footer, &config.base_url, year))
    };
    Ok(base_document(config, "Home", content))
}

// ============================================================================
// Tests
// ============================================================================
