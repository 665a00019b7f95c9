//! Property tests for the conversion pipeline and the reordering engine.

use bijoy_oxide::mapping::{tables, TableRole};
use bijoy_oxide::text::reorder::{reorder, reorder_with, ReorderMode};
use bijoy_oxide::text::script::visual;
use bijoy_oxide::{convert, ConversionDirection, ConverterConfig};
use proptest::prelude::*;

/// Bengali consonants, signs, joiners and the visual marks, with spaces.
const CLUSTER_ALPHABET: &str = "[\u{0981}-\u{0983}\u{0995}-\u{09B9}\u{09BC}-\u{09CD}\u{09D7}\u{09DC}\u{09DD}\u{09DF}\u{200C}\u{200D}\u{E0B0}\u{E0BF}\u{E0C7}\u{E0C8} ]{0,24}";

/// Code units no table mentions and no cluster rule reacts to.
const FOREIGN_ALPHABET: &str = "[\u{4E00}-\u{4E3F}\u{0400}-\u{042F} \n]{0,32}";

fn is_private_use(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
}

fn foreign_chars() -> impl Iterator<Item = char> {
    ('\u{4E00}'..='\u{4E3F}').chain('\u{0400}'..='\u{042F}')
}

fn arb_direction() -> impl Strategy<Value = ConversionDirection> {
    prop_oneof![
        Just(ConversionDirection::LegacyToLogical),
        Just(ConversionDirection::LogicalToLegacy),
    ]
}

fn arb_mode() -> impl Strategy<Value = ReorderMode> {
    prop_oneof![Just(ReorderMode::Forward), Just(ReorderMode::Inverse)]
}

proptest! {
    #[test]
    fn prop_convert_is_total_and_deterministic(text in any::<String>(), direction in arb_direction()) {
        let first = convert(&text, direction);
        let second = convert(&text, direction);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reorder_is_idempotent(text in CLUSTER_ALPHABET, mode in arb_mode()) {
        let once = reorder(&text, mode);
        let twice = reorder(&once, mode);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_reorder_is_idempotent_for_any_bound(
        text in CLUSTER_ALPHABET,
        mode in arb_mode(),
        bound in 1usize..=4,
    ) {
        let config = ConverterConfig::new().with_max_conjunct_consonants(bound);
        let once = reorder_with(&text, mode, &config);
        let twice = reorder_with(&once, mode, &config);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_forward_never_emits_visual_marks(text in CLUSTER_ALPHABET) {
        let out = reorder(&text, ReorderMode::Forward);
        let marks = [visual::PRE_I, visual::PRE_E, visual::PRE_AI, visual::REPH];
        let has_mark = out.chars().any(|c| marks.contains(&c));
        prop_assert!(!has_mark, "visual mark in {:?}", out);
    }

    #[test]
    fn prop_legacy_to_logical_leaves_no_private_use(text in any::<String>()) {
        // Marks come only from the core table, and the reorder consumes every one of them
        let input: String = text.chars().filter(|&c| !is_private_use(c)).collect();
        let out = convert(&input, ConversionDirection::LegacyToLogical);
        let has_private_use = out.chars().any(is_private_use);
        prop_assert!(!has_private_use, "private-use code unit in {:?}", out);
    }

    #[test]
    fn prop_foreign_text_passes_through(text in FOREIGN_ALPHABET, direction in arb_direction()) {
        prop_assert_eq!(convert(&text, direction), text);
    }

    #[test]
    fn prop_foreign_text_keeps_its_place(
        prefix in FOREIGN_ALPHABET,
        suffix in FOREIGN_ALPHABET,
    ) {
        let text = format!("{}আমি{}", prefix, suffix);
        let out = convert(&text, ConversionDirection::LogicalToLegacy);
        prop_assert_eq!(out, format!("{}Avwg{}", prefix, suffix));
    }
}

#[test]
fn test_foreign_alphabet_is_unmapped() {
    for direction in ConversionDirection::ALL {
        for role in TableRole::ALL {
            let table = tables::table(direction, role);
            for c in foreign_chars() {
                assert!(!table.mentions(c), "{} {} table mentions {:?}", direction, role, c);
            }
        }
    }
}

#[test]
fn test_empty_input_both_directions() {
    for direction in ConversionDirection::ALL {
        assert_eq!(convert("", direction), "");
    }
}
