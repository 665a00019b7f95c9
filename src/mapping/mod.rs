//! Mapping tables and the substitution engine.
//!
//! A [`MappingTable`] is an ordered list of `(pattern, replacement)` rules. Patterns are
//! matched on Unicode scalar values (`char`), longest pattern first; when two patterns of
//! the same length match, the one declared earlier wins.
//!
//! The built-in Bijoy/Unicode tables live in [`tables`] and are built once per process.
//!
//! # Example
//!
//! ```
//! use bijoy_oxide::converter::ConversionDirection;
//! use bijoy_oxide::mapping::{apply, MappingTable, TableRole};
//!
//! let table = MappingTable::new(
//!     TableRole::Core,
//!     ConversionDirection::LegacyToLogical,
//!     [("K", "ক"), ("Av", "আ"), ("A", "অ")],
//! )
//! .unwrap();
//!
//! assert_eq!(apply(&table, "AvK A"), "আক অ");
//! ```

pub mod substitute;
pub mod tables;

pub use substitute::apply;

use crate::converter::ConversionDirection;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// Position of a table in a conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRole {
    /// Fixes input quirks before the main mapping
    PreNormalization,
    /// The encoding-to-encoding mapping proper
    Core,
    /// Collapses duplicates introduced by one-to-many core rules
    DuplicateCleanup,
    /// Final cosmetic fixes
    PostNormalization,
}

impl TableRole {
    /// All roles in pipeline order.
    pub const ALL: [TableRole; 4] = [
        TableRole::PreNormalization,
        TableRole::Core,
        TableRole::DuplicateCleanup,
        TableRole::PostNormalization,
    ];

    /// Stable name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreNormalization => "pre-normalization",
            Self::Core => "core",
            Self::DuplicateCleanup => "duplicate-cleanup",
            Self::PostNormalization => "post-normalization",
        }
    }
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRule<'a> {
    /// Code units to match
    pub pattern: &'a str,
    /// Code units to emit instead
    pub replacement: &'a str,
}

/// Ordered, immutable collection of mapping rules.
#[derive(Debug, Clone)]
pub struct MappingTable {
    role: TableRole,
    direction: ConversionDirection,

    /// Pattern → replacement in declaration order. Keys are unique.
    rules: IndexMap<String, String>,

    /// Patterns as code units, parallel to `rules`
    patterns: Vec<Vec<char>>,

    /// Rule indices per first code unit, sorted longest pattern first and then by
    /// declaration order
    candidates: HashMap<char, Vec<usize>>,

    longest_pattern: usize,
}

impl MappingTable {
    /// Build a table from rules in declaration order.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyPattern`] if a pattern is the empty string
    /// - [`Error::DuplicatePattern`] if two rules share a pattern
    pub fn new<I, P, R>(role: TableRole, direction: ConversionDirection, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut map: IndexMap<String, String> = IndexMap::new();

        for (pattern, replacement) in rules {
            let pattern = pattern.into();
            if pattern.is_empty() {
                return Err(Error::EmptyPattern { role, direction });
            }
            if map.contains_key(&pattern) {
                return Err(Error::DuplicatePattern {
                    role,
                    direction,
                    pattern,
                });
            }
            map.insert(pattern, replacement.into());
        }

        let patterns: Vec<Vec<char>> = map.keys().map(|p| p.chars().collect()).collect();

        let mut candidates: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, pattern) in patterns.iter().enumerate() {
            candidates.entry(pattern[0]).or_default().push(index);
        }
        for indices in candidates.values_mut() {
            // Stable sort keeps declaration order among equal lengths
            indices.sort_by(|&a, &b| patterns[b].len().cmp(&patterns[a].len()));
        }

        let longest_pattern = patterns.iter().map(Vec::len).max().unwrap_or(0);

        log::debug!(
            "Built {} table ({}): {} rules, longest pattern {}",
            role,
            direction,
            map.len(),
            longest_pattern
        );

        Ok(Self {
            role,
            direction,
            rules: map,
            patterns,
            candidates,
            longest_pattern,
        })
    }

    /// The table's pipeline role.
    pub fn role(&self) -> TableRole {
        self.role
    }

    /// The direction this table belongs to.
    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Length in code units of the longest pattern.
    pub fn longest_pattern(&self) -> usize {
        self.longest_pattern
    }

    /// Replacement for an exact pattern.
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.rules.get(pattern).map(String::as_str)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = MappingRule<'_>> {
        self.rules.iter().map(|(pattern, replacement)| MappingRule {
            pattern,
            replacement,
        })
    }

    /// Whether any pattern contains `c`.
    pub fn mentions(&self, c: char) -> bool {
        self.patterns.iter().any(|p| p.contains(&c))
    }

    /// Find the rule to apply at the start of `input`.
    ///
    /// Returns the matched pattern length in code units and the replacement.
    pub fn longest_match(&self, input: &[char]) -> Option<(usize, &str)> {
        let first = input.first()?;
        let indices = self.candidates.get(first)?;

        indices.iter().find_map(|&index| {
            let pattern = &self.patterns[index];
            if input.starts_with(pattern) {
                let (_, replacement) = self.rules.get_index(index)?;
                Some((pattern.len(), replacement.as_str()))
            } else {
                None
            }
        })
    }
}
