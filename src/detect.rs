//! Best-effort guess of the encoding a string is written in.
//!
//! Bijoy text is carried in ordinary Latin-1 / Windows-1252 characters, so detection is a
//! heuristic: any Bengali-block code unit means Unicode; otherwise letters or Bijoy
//! glyph characters mean Bijoy. Text made only of digits, spaces and ASCII punctuation
//! reads the same either way and is reported as undetected.

use crate::converter::ConversionDirection;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref RE_BENGALI: Regex = Regex::new(r"\p{Bengali}").unwrap();
    static ref RE_BIJOY_GLYPH: Regex = Regex::new(
        r"[A-Za-z\x{00A1}-\x{00FF}\x{0152}\x{0153}\x{0160}\x{0161}\x{0178}\x{0192}\x{02C6}\x{02DC}\x{2013}\x{2014}\x{2018}-\x{201E}\x{2020}-\x{2022}\x{2026}\x{2030}\x{2039}\x{203A}]"
    )
    .unwrap();
}

/// Encodings the converter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Legacy visual encoding
    Bijoy,
    /// Unicode Bengali
    Unicode,
}

impl Encoding {
    /// The direction that converts text *from* this encoding.
    pub fn conversion_direction(&self) -> ConversionDirection {
        match self {
            Encoding::Bijoy => ConversionDirection::LegacyToLogical,
            Encoding::Unicode => ConversionDirection::LogicalToLegacy,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Bijoy => write!(f, "Bijoy"),
            Encoding::Unicode => write!(f, "Unicode"),
        }
    }
}

/// Guess the encoding of `text`.
pub fn detect_encoding(text: &str) -> Option<Encoding> {
    let detected = if RE_BENGALI.is_match(text) {
        Some(Encoding::Unicode)
    } else if RE_BIJOY_GLYPH.is_match(text) {
        Some(Encoding::Bijoy)
    } else {
        None
    };

    log::debug!("Detected encoding {:?} for {} bytes", detected, text.len());
    detected
}
