//! Built-in mapping tables and the substitution engine through the public API.

use bijoy_oxide::mapping::{apply, tables, MappingTable, TableRole};
use bijoy_oxide::text::script::visual;
use bijoy_oxide::{ConversionDirection, Error};

fn all_tables() -> Vec<&'static MappingTable> {
    let mut found = Vec::new();
    for direction in ConversionDirection::ALL {
        for role in TableRole::ALL {
            found.push(tables::table(direction, role));
        }
    }
    found
}

// ============================================================================
// Table invariants
// ============================================================================

#[test]
fn test_eight_tables_with_matching_identity() {
    let found = all_tables();
    assert_eq!(found.len(), 8);
    for direction in ConversionDirection::ALL {
        for role in TableRole::ALL {
            let t = tables::table(direction, role);
            assert_eq!(t.direction(), direction);
            assert_eq!(t.role(), role);
        }
    }
}

#[test]
fn test_patterns_non_empty() {
    for t in all_tables() {
        for rule in t.rules() {
            assert!(
                !rule.pattern.is_empty(),
                "{} {} table has an empty pattern",
                t.direction(),
                t.role()
            );
        }
    }
}

#[test]
fn test_tables_are_shared() {
    let a = tables::table(ConversionDirection::LegacyToLogical, TableRole::Core);
    let b = tables::table(ConversionDirection::LegacyToLogical, TableRole::Core);
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_unicode_core_emits_no_bengali() {
    // Unicode → Bijoy output must be entirely in the Bijoy repertoire
    let core = tables::table(ConversionDirection::LogicalToLegacy, TableRole::Core);
    for rule in core.rules() {
        assert!(
            !rule
                .replacement
                .chars()
                .any(|c| ('\u{0980}'..='\u{09FF}').contains(&c)),
            "rule {:?} emits Bengali",
            rule.pattern
        );
    }
}

#[test]
fn test_bijoy_core_emits_no_latin_letters() {
    let core = tables::table(ConversionDirection::LegacyToLogical, TableRole::Core);
    for rule in core.rules() {
        assert!(
            !rule.replacement.chars().any(|c| c.is_ascii_alphabetic()),
            "rule {:?} emits Latin letters",
            rule.pattern
        );
    }
}

#[test]
fn test_visual_marks_map_back_to_glyphs() {
    let core = tables::table(ConversionDirection::LogicalToLegacy, TableRole::Core);
    assert_eq!(core.get(&visual::PRE_I.to_string()), Some("w"));
    assert_eq!(core.get(&visual::PRE_E.to_string()), Some("‡"));
    assert_eq!(core.get(&visual::PRE_AI.to_string()), Some("ˆ"));
    assert_eq!(core.get(&visual::REPH.to_string()), Some("©"));
}

#[test]
fn test_bijoy_pre_base_glyphs_map_to_marks() {
    let core = tables::table(ConversionDirection::LegacyToLogical, TableRole::Core);
    assert_eq!(core.get("w"), Some("\u{E0BF}"));
    assert_eq!(core.get("‡"), Some("\u{E0C7}"));
    assert_eq!(core.get("†"), Some("\u{E0C7}"));
    assert_eq!(core.get("ˆ"), Some("\u{E0C8}"));
    assert_eq!(core.get("©"), Some("\u{E0B0}"));
}

// ============================================================================
// Substitution through the built-in tables
// ============================================================================

#[test]
fn test_core_longest_match() {
    let core = tables::table(ConversionDirection::LegacyToLogical, TableRole::Core);
    // "Av" is one rule; "A" + "v" would give অা
    assert_eq!(apply(core, "Av"), "আ");
    // "¯Œ" beats "¯" followed by "Œ"
    assert_eq!(apply(core, "¯Œ"), "স্ক্র");
}

#[test]
fn test_duplicate_cleanup_tables() {
    for direction in ConversionDirection::ALL {
        let cleanup = tables::table(direction, TableRole::DuplicateCleanup);
        assert_eq!(apply(cleanup, "ন্্য"), "ন্য");
        assert_eq!(apply(cleanup, "\u{200C}\u{200C}"), "\u{200C}");
    }
}

#[test]
fn test_unicode_post_strips_joiners() {
    let post = tables::table(ConversionDirection::LogicalToLegacy, TableRole::PostNormalization);
    assert_eq!(apply(post, "K\u{200D}L\u{200C}"), "KL");
}

#[test]
fn test_bijoy_post_composes() {
    let post = tables::table(ConversionDirection::LegacyToLogical, TableRole::PostNormalization);
    assert_eq!(apply(post, "অা"), "আ");
    assert_eq!(apply(post, "ক\u{09C7}\u{09BE}"), "কো");
}

#[test]
fn test_custom_table() {
    let t = MappingTable::new(
        TableRole::Core,
        ConversionDirection::LegacyToLogical,
        vec![("ab".to_string(), "X".to_string()), ("a".to_string(), "Y".to_string())],
    )
    .unwrap();
    assert_eq!(apply(&t, "aab"), "YX");
}

#[test]
fn test_custom_table_rejects_duplicates() {
    let err = MappingTable::new(
        TableRole::PreNormalization,
        ConversionDirection::LogicalToLegacy,
        [("x", "1"), ("x", "2")],
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicatePattern { .. }));
    assert!(err.to_string().contains("pre-normalization"));
}

#[test]
fn test_preload() {
    tables::preload();
    assert!(!tables::table(ConversionDirection::LogicalToLegacy, TableRole::Core).is_empty());
}
