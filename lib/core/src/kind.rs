//! Supported integrations and their service path segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an integration kind from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// The input that did not match any integration.
    pub input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown integration type: {}", self.input)
    }
}

impl std::error::Error for ParseKindError {}

/// A third-party service items can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationKind {
    Notion,
    Airtable,
    HubSpot,
}

impl IntegrationKind {
    /// Every supported integration, in display order.
    pub const ALL: [Self; 3] = [Self::Notion, Self::Airtable, Self::HubSpot];

    /// Path segment used in `/integrations/{segment}/load`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Notion => "notion",
            Self::Airtable => "airtable",
            Self::HubSpot => "hubspot",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Notion => "Notion",
            Self::Airtable => "Airtable",
            Self::HubSpot => "HubSpot",
        }
    }

    /// Service path for loading this integration's items.
    #[must_use]
    pub fn load_path(self) -> String {
        format!("/integrations/{}/load", self.path_segment())
    }
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IntegrationKind {
    type Err = ParseKindError;

    /// Accepts either the display name or the path segment, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.display_name().eq_ignore_ascii_case(needle)
                    || kind.path_segment().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}
