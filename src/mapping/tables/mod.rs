//! Built-in Bijoy ⇄ Unicode mapping tables.
//!
//! Eight tables, one per [`TableRole`] per [`ConversionDirection`]. They are built on
//! first use and shared by `&'static` reference for the life of the process.

mod bijoy;
mod unicode;

use super::{MappingTable, TableRole};
use crate::converter::ConversionDirection;
use lazy_static::lazy_static;

type RuleSet = &'static [(&'static str, &'static str)];

lazy_static! {
    static ref BIJOY_PRE_NORMALIZATION: MappingTable = build(
        TableRole::PreNormalization,
        ConversionDirection::LegacyToLogical,
        bijoy::PRE_NORMALIZATION
    );
    static ref BIJOY_CORE: MappingTable = build(
        TableRole::Core,
        ConversionDirection::LegacyToLogical,
        bijoy::CORE
    );
    static ref BIJOY_DUPLICATE_CLEANUP: MappingTable = build(
        TableRole::DuplicateCleanup,
        ConversionDirection::LegacyToLogical,
        bijoy::DUPLICATE_CLEANUP
    );
    static ref BIJOY_POST_NORMALIZATION: MappingTable = build(
        TableRole::PostNormalization,
        ConversionDirection::LegacyToLogical,
        bijoy::POST_NORMALIZATION
    );
    static ref UNICODE_PRE_NORMALIZATION: MappingTable = build(
        TableRole::PreNormalization,
        ConversionDirection::LogicalToLegacy,
        unicode::PRE_NORMALIZATION
    );
    static ref UNICODE_CORE: MappingTable = build(
        TableRole::Core,
        ConversionDirection::LogicalToLegacy,
        unicode::CORE
    );
    static ref UNICODE_DUPLICATE_CLEANUP: MappingTable = build(
        TableRole::DuplicateCleanup,
        ConversionDirection::LogicalToLegacy,
        unicode::DUPLICATE_CLEANUP
    );
    static ref UNICODE_POST_NORMALIZATION: MappingTable = build(
        TableRole::PostNormalization,
        ConversionDirection::LogicalToLegacy,
        unicode::POST_NORMALIZATION
    );
}

fn build(role: TableRole, direction: ConversionDirection, rules: RuleSet) -> MappingTable {
    MappingTable::new(role, direction, rules.iter().copied())
        .expect("built-in mapping table has unique, non-empty patterns")
}

/// The built-in table for a direction and role.
pub fn table(direction: ConversionDirection, role: TableRole) -> &'static MappingTable {
    match (direction, role) {
        (ConversionDirection::LegacyToLogical, TableRole::PreNormalization) => {
            &*BIJOY_PRE_NORMALIZATION
        },
        (ConversionDirection::LegacyToLogical, TableRole::Core) => &*BIJOY_CORE,
        (ConversionDirection::LegacyToLogical, TableRole::DuplicateCleanup) => {
            &*BIJOY_DUPLICATE_CLEANUP
        },
        (ConversionDirection::LegacyToLogical, TableRole::PostNormalization) => {
            &*BIJOY_POST_NORMALIZATION
        },
        (ConversionDirection::LogicalToLegacy, TableRole::PreNormalization) => {
            &*UNICODE_PRE_NORMALIZATION
        },
        (ConversionDirection::LogicalToLegacy, TableRole::Core) => &*UNICODE_CORE,
        (ConversionDirection::LogicalToLegacy, TableRole::DuplicateCleanup) => {
            &*UNICODE_DUPLICATE_CLEANUP
        },
        (ConversionDirection::LogicalToLegacy, TableRole::PostNormalization) => {
            &*UNICODE_POST_NORMALIZATION
        },
    }
}

/// Build every built-in table now instead of on first conversion.
pub fn preload() {
    for direction in ConversionDirection::ALL {
        for role in TableRole::ALL {
            let t = table(direction, role);
            log::debug!("Loaded {} {} table with {} rules", direction, role, t.len());
        }
    }
}
