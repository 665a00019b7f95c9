// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::needless_range_loop)]
#![allow(clippy::enum_variant_names)]

//! # Bijoy Oxide
//!
//! Bijoy ⇄ Unicode Bengali conversion in Rust.
//!
//! Bijoy (SutonnyMJ and related fonts) is a legacy 8-bit glyph encoding: text is stored in
//! the order it is typed and drawn, with pre-base vowel signs in front of their consonant
//! and the reph after it. Unicode stores Bengali in reading order. Converting between the
//! two is table-driven substitution plus cluster reordering.
//!
//! ## Core Features
//!
//! - **Longest-match substitution** over immutable, process-wide mapping tables
//! - **Cluster reordering** for pre-base signs (ি ে ৈ), two-part signs (ো ৌ) and the reph
//! - **Fixed pipelines**, one per direction, every stage a pure function
//! - **Encoding detection** for callers that do not know what they were handed
//! - **JSON wire types** matching a `{"text": ...}` request/response schema
//!
//! ## Quick Start
//!
//! ```
//! use bijoy_oxide::{bijoy_to_unicode, unicode_to_bijoy};
//!
//! assert_eq!(bijoy_to_unicode("evsjv"), "বাংলা");
//! assert_eq!(unicode_to_bijoy("প্রেম"), "‡cÖg");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! converter  →  pipeline  →  mapping (tables, substitution)
//!                         →  text (classes, clusters, reorder)
//! ```

// Error handling
pub mod error;

// Configuration
pub mod config;

// Character classes and cluster reordering
pub mod text;

// Mapping tables and substitution
pub mod mapping;

// Stage lists
pub mod pipeline;

// Public facade
pub mod converter;

// Encoding detection
pub mod detect;

// Request/response types
pub mod wire;

// Re-exports
pub use config::ConverterConfig;
pub use converter::{bijoy_to_unicode, convert, unicode_to_bijoy, ConversionDirection, Converter};
pub use detect::{detect_encoding, Encoding};
pub use error::{Error, Result};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
