//! # foundry-docs
//!
//! Documentation portal for a family of Foundry VTT modules. The portal has
//! one handwritten page, the landing page, and a declarative description of
//! everything around it: site metadata, the docs sections with their
//! sidebars, the navbar and the footer.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Resolve   site.toml + cards  →  manifest.json   (config → routes, link and doc file check)
//! 2. Generate  manifest           →  build/          (final HTML)
//! ```
//!
//! The manifest is human-readable JSON, so a resolved site can be inspected
//! before any HTML is written, and the generate stage can be tested from a
//! hand-built manifest without touching config files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | Stage 1: docs routes, internal link and doc file checking, the manifest |
//! | [`generate`] | Stage 2: page chrome (head, navbar, footer) and file output |
//! | [`landing`] | Landing page body: banner, module card grid, "why" section |
//! | [`modules`] | The compiled-in module card table |
//! | [`types`] | Shared types serialized between stages (`ModuleDescriptor`, `Status`) |
//! | [`config`] | `site.toml` loading, merging with stock defaults, validation |
//! | [`sidebar`] | Sidebar item grammar, doc ordering, route joining |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | Tracing subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Cards Are Code, Not Config
//!
//! The module cards live in [`modules::MODULES`], a constant table. Adding a
//! module means editing that table and shipping a new binary. Card status is
//! the [`types::Status`] enum, so a misspelled status does not compile.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error, interpolation is auto-escaped, and there is no template
//! directory to ship.
//!
//! ## Stock Defaults As The Base Layer
//!
//! The stock [`config::SiteConfig`] is the complete portal. `site.toml`
//! merges on top of it, so an empty source directory still builds the full
//! site.

pub mod config;
pub mod generate;
pub mod landing;
pub mod logging;
pub mod modules;
pub mod output;
pub mod resolve;
pub mod sidebar;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
