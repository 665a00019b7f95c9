//! Conversion facade.
//!
//! [`convert`] is the whole public surface most callers need:
//!
//! ```
//! use bijoy_oxide::converter::{convert, ConversionDirection};
//!
//! assert_eq!(convert("Avwg", ConversionDirection::LegacyToLogical), "আমি");
//! assert_eq!(convert("আমি", ConversionDirection::LogicalToLegacy), "Avwg");
//! ```

use crate::config::ConverterConfig;
use crate::error::Error;
use crate::pipeline::ConversionPipeline;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// Bijoy (visual order) → Unicode Bengali (logical order)
    LegacyToLogical,
    /// Unicode Bengali (logical order) → Bijoy (visual order)
    LogicalToLegacy,
}

impl ConversionDirection {
    /// Both directions.
    pub const ALL: [ConversionDirection; 2] = [
        ConversionDirection::LegacyToLogical,
        ConversionDirection::LogicalToLegacy,
    ];

    /// Stable name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyToLogical => "legacy_to_logical",
            Self::LogicalToLegacy => "logical_to_legacy",
        }
    }

    /// The opposite direction.
    pub fn reverse(&self) -> Self {
        match self {
            Self::LegacyToLogical => Self::LogicalToLegacy,
            Self::LogicalToLegacy => Self::LegacyToLogical,
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "legacy_to_logical" | "bijoy_to_unicode" => Ok(Self::LegacyToLogical),
            "logical_to_legacy" | "unicode_to_bijoy" => Ok(Self::LogicalToLegacy),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

/// Stateless converter holding a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `text` in `direction`. Never fails; empty in gives empty out.
    pub fn convert(&self, text: &str, direction: ConversionDirection) -> String {
        if text.is_empty() {
            return String::new();
        }
        ConversionPipeline::with_config(direction, self.config).run(text)
    }
}

/// Convert `text` with the default configuration.
pub fn convert(text: &str, direction: ConversionDirection) -> String {
    Converter::new().convert(text, direction)
}

/// Bijoy → Unicode.
pub fn bijoy_to_unicode(text: &str) -> String {
    convert(text, ConversionDirection::LegacyToLogical)
}

/// Unicode → Bijoy.
pub fn unicode_to_bijoy(text: &str) -> String {
    convert(text, ConversionDirection::LogicalToLegacy)
}
