//! Error types for the converter.
//!
//! The conversion core itself is total and never returns an error. These errors come from
//! the edges: building mapping tables, parsing a direction name, and the I/O and JSON
//! handling done by the command-line tool.

use crate::converter::ConversionDirection;
use crate::mapping::TableRole;

/// Result type alias for fallible library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the conversion core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two rules of one mapping table share a pattern
    #[error("Duplicate pattern {pattern:?} in {role} table ({direction})")]
    DuplicatePattern {
        /// Role of the offending table
        role: TableRole,
        /// Direction of the offending table
        direction: ConversionDirection,
        /// The repeated pattern
        pattern: String,
    },

    /// A mapping rule with an empty pattern
    #[error("Empty pattern in {role} table ({direction})")]
    EmptyPattern {
        /// Role of the offending table
        role: TableRole,
        /// Direction of the offending table
        direction: ConversionDirection,
    },

    /// Direction name not recognized
    #[error("Unknown conversion direction: '{0}'")]
    UnknownDirection(String),

    /// Automatic direction requested but the text is neither Bijoy nor Unicode Bengali
    #[error("Could not detect whether the input is Bijoy or Unicode Bengali")]
    UndetectedEncoding,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON request/response error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
