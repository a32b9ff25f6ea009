//! Shared types used across both pipeline stages.
//!
//! These types are serialized into the JSON manifest between stages
//! (resolve → generate) and must be identical on both sides.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Maturity of a documented module, shown as a colored badge on its card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Stable,
    Beta,
    Development,
}

impl Status {
    /// Badge text, identical to the serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Stable => "stable",
            Status::Beta => "beta",
            Status::Development => "development",
        }
    }

    /// Color class for the badge: success, warning, or danger.
    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Stable => "badge--success",
            Status::Beta => "badge--warning",
            Status::Development => "badge--danger",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One card on the landing page.
///
/// The compiled-in table borrows `'static` strings; descriptors read back
/// from a manifest own theirs. `Cow` lets both share one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    /// Path into one of the docs sections. Not checked by the renderer.
    pub link: Cow<'static, str>,
    #[serde(default)]
    pub status: Status,
}

impl ModuleDescriptor {
    /// A descriptor with the default `stable` status.
    pub const fn new(title: &'static str, description: &'static str, link: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            link: Cow::Borrowed(link),
            status: Status::Stable,
        }
    }

    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}
