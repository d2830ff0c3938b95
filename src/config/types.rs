//! Configuration types for the payroll shell.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a
//! default, so a partial file is valid.

use serde::Deserialize;

/// The largest supported `decimal_places`, matching the maximum scale of a
/// `Decimal`.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// How the work type listing is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingFormat {
    /// One line per work type.
    #[default]
    Text,
    /// A pretty-printed JSON array of summaries.
    Json,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of decimal places the average pay is rounded to, at most
    /// [`MAX_DECIMAL_PLACES`].
    pub decimal_places: u32,
    /// The format used when listing work types.
    pub listing_format: ListingFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            listing_format: ListingFormat::Text,
        }
    }
}

/// The complete shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Presentation settings.
    pub display: DisplayConfig,
}
