//! The module cards shown on the landing page.
//!
//! Order here is display order. Cards are laid out two per row.

use crate::types::{ModuleDescriptor, Status};

pub const MODULES: &[ModuleDescriptor] = &[
    ModuleDescriptor::new(
        "Journeys & Jamborees",
        "Comprehensive party management module featuring shared resources, travel mechanics, and collaborative inventory management.",
        "/journeys-and-jamborees/intro",
    )
    .with_status(Status::Development),
    ModuleDescriptor::new(
        "ARGON Dragonbane",
        "Enhanced Dragonbane RPG system support with quality-of-life improvements and additional features.",
        "/argon-dragonbane/intro",
    ),
    ModuleDescriptor::new(
        "Realms & Reaches",
        "Biome and terrain mapping system for narrative-driven exploration with tag-based region management.",
        "/realms-and-reaches/intro",
    )
    .with_status(Status::Development),
    ModuleDescriptor::new(
        "Seasons & Stars",
        "Modern calendar and timekeeping module built for Foundry v13+ with ApplicationV2 architecture.",
        "/seasons-and-stars/intro",
    )
    .with_status(Status::Development),
];
