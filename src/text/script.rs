//! Bengali character classes.
//!
//! Every code unit the reordering engine cares about is classified here, including the
//! internal *visual marks*: Private Use Area code units that stand for a pre-base vowel
//! sign or a reph while it still sits in its legacy (visual) position.
//!
//! # Visual marks
//!
//! Bijoy stores `ি`, `ে`, `ৈ` before the consonant they follow in Unicode, and stores the
//! reph `র্` after the consonant it precedes in Unicode. On plain Unicode text a sign
//! between two consonants is ambiguous: visually it belongs to the next consonant,
//! logically to the previous one. The Bijoy core table maps these glyphs to visual marks
//! instead, so the forward reorder only ever relocates marks that are provably in visual
//! position, and the inverse reorder emits marks it will never pick up again.
//!
//! Code points follow the Bengali block: `U+E0BF` mirrors `U+09BF`, and so on.

use phf::phf_map;

/// Classification of a code unit for cluster detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Base consonant (ক … হ, ড় ঢ় য়)
    Consonant,
    /// Khanda ta (ৎ), a consonant that never takes vowel signs
    DeadConsonant,
    /// Independent vowel (অ আ ই …)
    IndependentVowel,
    /// Dependent vowel sign written after its consonant (া ী ু ূ ৃ ৗ)
    VowelSign,
    /// Dependent vowel sign written before its consonant (ি ে ৈ)
    PreBaseVowelSign,
    /// Two-part vowel sign (ো ৌ) whose first half is written before the consonant
    SplitVowelSign,
    /// Candrabindu, anusvara, visarga
    Modifier,
    /// Hasanta (্)
    Virama,
    /// Nukta (়)
    Nukta,
    /// ZWJ / ZWNJ
    Joiner,
    /// Bengali digit
    Digit,
    /// Danda, double danda, currency and other signs
    Punctuation,
    /// Pre-base sign still in visual position
    VisualPreBase,
    /// Reph still in visual position
    VisualReph,
}

/// Hasanta / virama
pub const VIRAMA: char = '\u{09CD}';
/// Nukta
pub const NUKTA: char = '\u{09BC}';
/// Letter RA, the reph base
pub const RA: char = '\u{09B0}';
/// Zero width joiner
pub const ZWJ: char = '\u{200D}';
/// Zero width non-joiner
pub const ZWNJ: char = '\u{200C}';

/// Vowel sign AA (া)
pub const SIGN_AA: char = '\u{09BE}';
/// Vowel sign I (ি)
pub const SIGN_I: char = '\u{09BF}';
/// Vowel sign E (ে)
pub const SIGN_E: char = '\u{09C7}';
/// Vowel sign AI (ৈ)
pub const SIGN_AI: char = '\u{09C8}';
/// Vowel sign O (ো)
pub const SIGN_O: char = '\u{09CB}';
/// Vowel sign AU (ৌ)
pub const SIGN_AU: char = '\u{09CC}';
/// AU length mark (ৗ)
pub const AU_LENGTH_MARK: char = '\u{09D7}';

/// Visual-position marks used between pipeline stages.
pub mod visual {
    /// `ি` in visual position
    pub const PRE_I: char = '\u{E0BF}';
    /// `ে` in visual position
    pub const PRE_E: char = '\u{E0C7}';
    /// `ৈ` in visual position
    pub const PRE_AI: char = '\u{E0C8}';
    /// `র্` in visual position
    pub const REPH: char = '\u{E0B0}';
}

static CHAR_CLASSES: phf::Map<char, CharClass> = phf_map! {
    // Modifiers
    '\u{0981}' => CharClass::Modifier, // ঁ
    '\u{0982}' => CharClass::Modifier, // ং
    '\u{0983}' => CharClass::Modifier, // ঃ

    // Independent vowels
    '\u{0985}' => CharClass::IndependentVowel, // অ
    '\u{0986}' => CharClass::IndependentVowel, // আ
    '\u{0987}' => CharClass::IndependentVowel, // ই
    '\u{0988}' => CharClass::IndependentVowel, // ঈ
    '\u{0989}' => CharClass::IndependentVowel, // উ
    '\u{098A}' => CharClass::IndependentVowel, // ঊ
    '\u{098B}' => CharClass::IndependentVowel, // ঋ
    '\u{098C}' => CharClass::IndependentVowel, // ঌ
    '\u{098F}' => CharClass::IndependentVowel, // এ
    '\u{0990}' => CharClass::IndependentVowel, // ঐ
    '\u{0993}' => CharClass::IndependentVowel, // ও
    '\u{0994}' => CharClass::IndependentVowel, // ঔ
    '\u{09E0}' => CharClass::IndependentVowel, // ৠ
    '\u{09E1}' => CharClass::IndependentVowel, // ৡ

    // Consonants
    '\u{0995}' => CharClass::Consonant, // ক
    '\u{0996}' => CharClass::Consonant, // খ
    '\u{0997}' => CharClass::Consonant, // গ
    '\u{0998}' => CharClass::Consonant, // ঘ
    '\u{0999}' => CharClass::Consonant, // ঙ
    '\u{099A}' => CharClass::Consonant, // চ
    '\u{099B}' => CharClass::Consonant, // ছ
    '\u{099C}' => CharClass::Consonant, // জ
    '\u{099D}' => CharClass::Consonant, // ঝ
    '\u{099E}' => CharClass::Consonant, // ঞ
    '\u{099F}' => CharClass::Consonant, // ট
    '\u{09A0}' => CharClass::Consonant, // ঠ
    '\u{09A1}' => CharClass::Consonant, // ড
    '\u{09A2}' => CharClass::Consonant, // ঢ
    '\u{09A3}' => CharClass::Consonant, // ণ
    '\u{09A4}' => CharClass::Consonant, // ত
    '\u{09A5}' => CharClass::Consonant, // থ
    '\u{09A6}' => CharClass::Consonant, // দ
    '\u{09A7}' => CharClass::Consonant, // ধ
    '\u{09A8}' => CharClass::Consonant, // ন
    '\u{09AA}' => CharClass::Consonant, // প
    '\u{09AB}' => CharClass::Consonant, // ফ
    '\u{09AC}' => CharClass::Consonant, // ব
    '\u{09AD}' => CharClass::Consonant, // ভ
    '\u{09AE}' => CharClass::Consonant, // ম
    '\u{09AF}' => CharClass::Consonant, // য
    '\u{09B0}' => CharClass::Consonant, // র
    '\u{09B2}' => CharClass::Consonant, // ল
    '\u{09B6}' => CharClass::Consonant, // শ
    '\u{09B7}' => CharClass::Consonant, // ষ
    '\u{09B8}' => CharClass::Consonant, // স
    '\u{09B9}' => CharClass::Consonant, // হ
    '\u{09DC}' => CharClass::Consonant, // ড়
    '\u{09DD}' => CharClass::Consonant, // ঢ়
    '\u{09DF}' => CharClass::Consonant, // য়
    '\u{09F0}' => CharClass::Consonant, // ৰ (Assamese)
    '\u{09F1}' => CharClass::Consonant, // ৱ (Assamese)
    '\u{09CE}' => CharClass::DeadConsonant, // ৎ

    // Signs
    '\u{09BC}' => CharClass::Nukta,
    '\u{09BE}' => CharClass::VowelSign,        // া
    '\u{09BF}' => CharClass::PreBaseVowelSign, // ি
    '\u{09C0}' => CharClass::VowelSign,        // ী
    '\u{09C1}' => CharClass::VowelSign,        // ু
    '\u{09C2}' => CharClass::VowelSign,        // ূ
    '\u{09C3}' => CharClass::VowelSign,        // ৃ
    '\u{09C4}' => CharClass::VowelSign,        // ৄ
    '\u{09C7}' => CharClass::PreBaseVowelSign, // ে
    '\u{09C8}' => CharClass::PreBaseVowelSign, // ৈ
    '\u{09CB}' => CharClass::SplitVowelSign,   // ো
    '\u{09CC}' => CharClass::SplitVowelSign,   // ৌ
    '\u{09CD}' => CharClass::Virama,
    '\u{09D7}' => CharClass::VowelSign,        // ৗ
    '\u{09E2}' => CharClass::VowelSign,        // ৢ
    '\u{09E3}' => CharClass::VowelSign,        // ৣ

    // Joiners
    '\u{200C}' => CharClass::Joiner,
    '\u{200D}' => CharClass::Joiner,

    // Digits
    '\u{09E6}' => CharClass::Digit,
    '\u{09E7}' => CharClass::Digit,
    '\u{09E8}' => CharClass::Digit,
    '\u{09E9}' => CharClass::Digit,
    '\u{09EA}' => CharClass::Digit,
    '\u{09EB}' => CharClass::Digit,
    '\u{09EC}' => CharClass::Digit,
    '\u{09ED}' => CharClass::Digit,
    '\u{09EE}' => CharClass::Digit,
    '\u{09EF}' => CharClass::Digit,

    // Punctuation and symbols
    '\u{0964}' => CharClass::Punctuation, // ।
    '\u{0965}' => CharClass::Punctuation, // ॥
    '\u{09F3}' => CharClass::Punctuation, // ৳
    '\u{09FA}' => CharClass::Punctuation, // ৺

    // Visual marks
    '\u{E0BF}' => CharClass::VisualPreBase,
    '\u{E0C7}' => CharClass::VisualPreBase,
    '\u{E0C8}' => CharClass::VisualPreBase,
    '\u{E0B0}' => CharClass::VisualReph,
};

/// Look up the class of a code unit. `None` for anything outside the table
/// (Latin, spaces, other scripts).
#[inline]
pub fn char_class(c: char) -> Option<CharClass> {
    CHAR_CLASSES.get(&c).copied()
}

/// Base consonant that can carry vowel signs.
#[inline]
pub fn is_consonant(c: char) -> bool {
    char_class(c) == Some(CharClass::Consonant)
}

/// Any dependent vowel sign, in whichever position its class puts it.
#[inline]
pub fn is_vowel_sign(c: char) -> bool {
    matches!(
        char_class(c),
        Some(CharClass::VowelSign | CharClass::PreBaseVowelSign | CharClass::SplitVowelSign)
    )
}

/// Vowel sign that the legacy encoding places before the consonant, whole or in part.
#[inline]
pub fn is_pre_base_sign(c: char) -> bool {
    matches!(
        char_class(c),
        Some(CharClass::PreBaseVowelSign | CharClass::SplitVowelSign)
    )
}

/// Candrabindu, anusvara or visarga.
#[inline]
pub fn is_modifier(c: char) -> bool {
    char_class(c) == Some(CharClass::Modifier)
}

/// Pre-base sign in visual position.
#[inline]
pub fn is_visual_pre_base(c: char) -> bool {
    char_class(c) == Some(CharClass::VisualPreBase)
}

/// Logical sign for a visual pre-base mark.
pub fn visual_to_logical(mark: char) -> Option<char> {
    match mark {
        visual::PRE_I => Some(SIGN_I),
        visual::PRE_E => Some(SIGN_E),
        visual::PRE_AI => Some(SIGN_AI),
        _ => None,
    }
}

/// Visual mark for a logical pre-base sign.
pub fn logical_to_visual(sign: char) -> Option<char> {
    match sign {
        SIGN_I => Some(visual::PRE_I),
        SIGN_E => Some(visual::PRE_E),
        SIGN_AI => Some(visual::PRE_AI),
        _ => None,
    }
}

/// Split a two-part vowel sign into its pre-base and post-base halves.
pub fn split_vowel_sign(sign: char) -> Option<(char, char)> {
    match sign {
        SIGN_O => Some((SIGN_E, SIGN_AA)),
        SIGN_AU => Some((SIGN_E, AU_LENGTH_MARK)),
        _ => None,
    }
}

/// Compose a pre-base half and a post-base half into a two-part vowel sign.
pub fn compose_vowel_sign(pre: char, post: char) -> Option<char> {
    match (pre, post) {
        (SIGN_E, SIGN_AA) => Some(SIGN_O),
        (SIGN_E, AU_LENGTH_MARK) => Some(SIGN_AU),
        _ => None,
    }
}
