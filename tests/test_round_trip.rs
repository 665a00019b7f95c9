//! Unicode → Bijoy → Unicode round trips over well-formed Bengali.
//!
//! Every word here has a Bijoy spelling that reads back to the identical Unicode
//! sequence. The corpus mixes plain consonant-vowel words with the structures the
//! reordering engine has to get right: pre-base and two-part vowel signs, reph,
//! conjunct glyphs, phalas, candrabindu and khanda ta.

use bijoy_oxide::{bijoy_to_unicode, unicode_to_bijoy};

const CORPUS: &[&str] = &[
    // Plain
    "আমি",
    "বাংলা",
    "সকাল",
    "নদী",
    "দুঃখ",
    "উৎসব",
    "ঋণ",
    "ঈদ",
    // Pre-base signs
    "প্রেম",
    "কিন্তু",
    "মেয়ে",
    "বিশ্ব",
    "মুক্তি",
    "নিষিদ্ধ",
    "পৃথিবী",
    "বিদ্যালয়",
    "বাংলাদেশ",
    "ঐতিহ্য",
    // Two-part signs
    "বোন",
    "কৌতুক",
    "কিশোর",
    "ভোট",
    "গোষ্ঠী",
    "সৌরভ",
    // Reph
    "কর্ম",
    "কর্মী",
    "সূর্য",
    "পূর্ব",
    "আচার্য",
    "বর্ণ",
    "ধর্ম",
    "ঊর্ধ্ব",
    "প্রার্থনা",
    // Conjuncts and phalas
    "স্কুল",
    "ক্ষমা",
    "শিক্ষা",
    "রাষ্ট্র",
    "চন্দ্র",
    "জ্ঞান",
    "রাজ্য",
    "তথ্য",
    "সংখ্যা",
    "ব্যাংকে",
    "স্তুপ",
    "গ্রুপ",
    // Ligatures with vowel signs
    "গুরু",
    "হৃদয়",
    // Candrabindu
    "চাঁদ",
    "খোঁজ",
];

#[test]
fn test_corpus_round_trips() {
    for word in CORPUS {
        let bijoy = unicode_to_bijoy(word);
        assert_eq!(
            bijoy_to_unicode(&bijoy),
            *word,
            "round trip of {:?} via {:?}",
            word,
            bijoy
        );
    }
}

#[test]
fn test_sentence_round_trips() {
    let sentence = CORPUS.join(" ");
    assert_eq!(bijoy_to_unicode(&unicode_to_bijoy(&sentence)), sentence);
}

#[test]
fn test_punctuation_and_digits_round_trip() {
    let text = "“আমি বাংলায় কথা বলি।” ১২৩৪৫ ৳১০০";
    assert_eq!(bijoy_to_unicode(&unicode_to_bijoy(text)), text);
}

#[test]
fn test_bijoy_round_trips() {
    // Canonical Bijoy spellings survive the opposite trip too
    for bijoy in ["‡cÖg", "Kg©", "evsjv", "wKš‘", "‡g‡q", "¶gv", "Avwg", "‡KŠZyK", "Pvu`"] {
        assert_eq!(unicode_to_bijoy(&bijoy_to_unicode(bijoy)), bijoy);
    }
}

#[test]
fn test_conversion_is_deterministic() {
    for word in CORPUS {
        assert_eq!(unicode_to_bijoy(word), unicode_to_bijoy(word));
    }
}
