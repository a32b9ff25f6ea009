//! Shared test utilities.
//!
//! Helpers for setting up a source directory (config and doc files) and for
//! pulling card data back out of rendered HTML.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = site_dir(Some(r#"tagline = "Hello""#));
//! let html = render_landing(...).into_string();
//! assert_eq!(card_titles(&html), vec!["A", "B"]);
//! assert_eq!(badge_for(&html, "A"), ("badge--warning".into(), "beta".into()));
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::{CONFIG_FILE, SiteConfig};

/// A temp source directory, with `site.toml` written when given.
pub fn site_dir(site_toml: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    if let Some(content) = site_toml {
        fs::write(tmp.path().join(CONFIG_FILE), content).unwrap();
    }
    tmp
}

/// Write a stub `<path>/<id>.md` for every sidebar doc in `config`.
pub fn write_docs(root: &Path, config: &SiteConfig) {
    for docs in &config.docs {
        for id in docs.sidebar.doc_ids() {
            let file = root.join(&docs.path).join(format!("{id}.md"));
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, format!("# {id}\n")).unwrap();
        }
    }
}

/// A temp source directory holding a doc file for every stock sidebar doc.
pub fn stock_source() -> TempDir {
    let tmp = site_dir(None);
    write_docs(tmp.path(), &SiteConfig::default());
    tmp
}

/// The text between `start` and the next `end`, for every occurrence.
fn between<'a>(html: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    html.match_indices(start)
        .filter_map(|(at, _)| {
            let rest = &html[at + start.len()..];
            rest.find(end).map(|stop| &rest[..stop])
        })
        .collect()
}

/// Card titles in document order (still HTML-escaped).
pub fn card_titles(html: &str) -> Vec<String> {
    between(html, r#"<div class="card__header"><h3>"#, "</h3>")
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `(color class, badge text)` of the card with the given (escaped) title.
/// Panics if no such card.
pub fn badge_for(html: &str, title: &str) -> (String, String) {
    let header = format!(r#"<div class="card__header"><h3>{title}</h3>"#);
    let at = html
        .find(&header)
        .unwrap_or_else(|| panic!("card '{title}' not found. Available: {:?}", card_titles(html)));
    let rest = &html[at + header.len()..];
    let class = between(rest, r#"<span class="badge "#, r#"">"#)
        .first()
        .map(|c| c.to_string())
        .unwrap_or_else(|| panic!("card '{title}' has no badge"));
    let text = between(rest, r#"">"#, "</span>")
        .first()
        .map(|t| t.to_string())
        .unwrap_or_default();
    (class, text)
}

/// Every `href` of a "View Documentation" button, in document order.
pub fn card_links(html: &str) -> Vec<String> {
    between(
        html,
        r#"<a class="button button--primary button--block" href=""#,
        r#"""#,
    )
    .into_iter()
    .map(str::to_string)
    .collect()
}
