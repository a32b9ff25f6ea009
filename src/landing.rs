//! Landing page rendering.
//!
//! Maps the module descriptor table to the home page body: a hero banner
//! with the site title and tagline, a grid of module cards two per row, and
//! a fixed "why use these modules" section.
//!
//! ```text
//! header.hero            title, tagline
//! main
//!   section.features
//!     div.row            card card
//!     div.row            card card
//!   section.why          three blurbs
//! ```
//!
//! Rendering is pure: the same descriptors always produce the same markup.
//! Links are emitted verbatim and never checked here.

use crate::types::ModuleDescriptor;
use maud::{Markup, html};

/// Cards per grid row.
pub const CARDS_PER_ROW: usize = 2;

const CTA_LABEL: &str = "View Documentation";
const INTRO: &str = "Enhance your Foundry VTT experience with our collection of modules";

/// A heading and blurb in the "why" section.
struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "🎯 Purpose-Built",
        text: "Each module addresses specific needs in the Foundry VTT ecosystem with focused, well-designed features.",
    },
    Feature {
        title: "🤝 Community-Driven",
        text: "Open source development with community feedback and contributions welcome.",
    },
    Feature {
        title: "📚 Well-Documented",
        text: "Comprehensive documentation to help you get the most out of each module.",
    },
];

/// Renders the hero banner.
pub fn render_banner(title: &str, tagline: &str) -> Markup {
    html! {
        header class="hero hero--primary hero-banner" {
            div.container {
                h1.hero__title { (title) }
                p.hero__subtitle { (tagline) }
                p.hero__subtitle { (INTRO) }
            }
        }
    }
}

/// Renders one module card.
pub fn render_card(module: &ModuleDescriptor) -> Markup {
    let badge_class = format!("badge {}", module.status.badge_class());
    html! {
        div class="col col--6" {
            div class="card margin-bottom--lg" {
                div.card__header {
                    h3 { (module.title) }
                    span class=(badge_class) { (module.status.as_str()) }
                }
                div.card__body {
                    p { (module.description) }
                }
                div.card__footer {
                    a class="button button--primary button--block" href=(module.link) { (CTA_LABEL) }
                }
            }
        }
    }
}

/// Renders the card grid, `CARDS_PER_ROW` cards to a row, in input order.
pub fn render_grid(modules: &[ModuleDescriptor]) -> Markup {
    html! {
        section.features {
            div.container {
                @for row in modules.chunks(CARDS_PER_ROW) {
                    div.row {
                        @for module in row {
                            (render_card(module))
                        }
                    }
                }
            }
        }
    }
}

/// Renders the static "Why Use Our Modules?" section.
pub fn render_why() -> Markup {
    html! {
        section class="why padding-vert--lg" {
            div.container {
                div.row {
                    div class="col col--12" {
                        h2 class="text--center margin-bottom--lg" { "Why Use Our Modules?" }
                    }
                }
                div.row {
                    @for feature in &FEATURES {
                        div class="col col--4" {
                            div class="text--center" {
                                h3 { (feature.title) }
                                p { (feature.text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the full landing page body: banner, card grid, "why" section.
pub fn render_landing(title: &str, tagline: &str, modules: &[ModuleDescriptor]) -> Markup {
    html! {
        (render_banner(title, tagline))
        main {
            (render_grid(modules))
            (render_why())
        }
    }
}
