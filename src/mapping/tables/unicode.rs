//! Unicode → Bijoy rules.
//!
//! Where Bijoy offers several glyphs for the same Unicode sequence, the rule picks the
//! glyph SutonnyMJ keyboards produce, so converted text reads back to the same Unicode.

/// Bring equivalent Unicode spellings to the one form the core table knows.
pub(super) const PRE_NORMALIZATION: &[(&str, &str)] = &[
    // Two-part vowel signs are written as two Bijoy glyphs around the consonant
    ("\u{09CB}", "\u{09C7}\u{09BE}"),
    ("\u{09CC}", "\u{09C7}\u{09D7}"),
    // Consonant + nukta to the precomposed letters
    ("\u{09A1}\u{09BC}", "\u{09DC}"),
    ("\u{09A2}\u{09BC}", "\u{09DD}"),
    ("\u{09AF}\u{09BC}", "\u{09DF}"),
    // Khanda ta spelled with an explicit joiner
    ("\u{09A4}\u{09CD}\u{200D}", "\u{09CE}"),
    ("অা", "আ"),
];

/// Unicode → glyph. Conjuncts come first so they win by length over their parts.
pub(super) const CORE: &[(&str, &str)] = &[
    // Ra + ya-phala, spelled with ZWJ to keep it from forming a reph
    ("র\u{200D}্য", "i¨"),
    ("্র্য", "ª¨"),
    // Three-consonant conjuncts
    ("স্ক্র", "¯Œ"),
    ("ঙ্ক্ষ", "•¶"),
    ("চ্ছ্ব", "”Q¡"),
    ("জ্জ্ব", "¾¡"),
    ("ত্ত্ব", "Ë¡"),
    ("ন্ত্র", "š¿"),
    ("ন্দ্ব", "›Ø"),
    ("ম্ভ্র", "¤£"),
    ("ষ্ক্র", "®Œ"),
    ("স্ত্র", "¯¿"),
    ("ন্তু", "š‘"),
    ("স্তু", "¯‘"),
    ("গ্রু", "Mæ"),
    // Two-consonant conjuncts
    ("ক্ক", "°"),
    ("ক্ট", "±"),
    ("ক্ত", "³"),
    ("ক্ব", "K¡"),
    ("ক্র", "µ"),
    ("ক্ল", "K¬"),
    ("ক্ষ", "¶"),
    ("ক্স", "·"),
    ("গ্ধ", "»"),
    ("গ্ন", "Mœ"),
    ("গ্ম", "M¥"),
    ("গ্ল", "Mø"),
    ("ঙ্ক", "¼"),
    ("ঙ্খ", "•L"),
    ("ঙ্গ", "½"),
    ("ঙ্ঘ", "•N"),
    ("চ্চ", "”P"),
    ("চ্ছ", "”Q"),
    ("চ্ঞ", "”T"),
    ("জ্জ", "¾"),
    ("জ্ঝ", "À"),
    ("জ্ঞ", "Á"),
    ("জ্ব", "R¡"),
    ("ঞ্চ", "Â"),
    ("ঞ্ছ", "Ã"),
    ("ঞ্জ", "Ä"),
    ("ঞ্ঝ", "Å"),
    ("ট্ট", "Æ"),
    ("ট্ব", "U¡"),
    ("ট্ম", "U¥"),
    ("ড্ড", "Ç"),
    ("ণ্ট", "È"),
    ("ণ্ঠ", "É"),
    ("ণ্ড", "Ê"),
    ("ণ্ব", "Y^"),
    ("ত্ত", "Ë"),
    ("ত্থ", "Ì"),
    ("ত্ন", "Zœ"),
    ("ত্ম", "Z¥"),
    ("ত্র", "Î"),
    ("ত্ব", "Z¡"),
    ("থ্ব", "_¡"),
    ("দ্গ", "˜M"),
    ("দ্ঘ", "˜N"),
    ("দ্দ", "Ï"),
    ("দ্ধ", "×"),
    ("দ্ব", "Ø"),
    ("দ্ভ", "™¢"),
    ("দ্ম", "Ù"),
    ("দ্য", "`¨"),
    ("দ্র", "`Ö"),
    ("ধ্ব", "aŸ"),
    ("ধ্ম", "a¥"),
    ("ন্ট", "›U"),
    ("ন্ঠ", "Ú"),
    ("ন্ড", "Û"),
    ("ন্ত", "š—"),
    ("ন্থ", "š’"),
    ("ন্দ", "›`"),
    ("ন্ধ", "Ü"),
    ("ন্ন", "bœ"),
    ("ন্ব", "š^"),
    ("ন্ম", "b¥"),
    ("ন্স", "Ý"),
    ("ন্য", "b¨"),
    ("ন্র", "bÖ"),
    ("প্ট", "Þ"),
    ("প্ত", "ß"),
    ("প্ন", "cœ"),
    ("প্প", "à"),
    ("প্ল", "cø"),
    ("প্স", "á"),
    ("ফ্ল", "dø"),
    ("ব্জ", "â"),
    ("ব্দ", "ã"),
    ("ব্ধ", "ä"),
    ("ব্ব", "eŸ"),
    ("ব্ল", "eø"),
    ("ভ্র", "å"),
    ("ম্ন", "gœ"),
    ("ম্প", "¤ú"),
    ("ম্ফ", "ç"),
    ("ম্ব", "¤^"),
    ("ম্ভ", "¤¢"),
    ("ম্ম", "¤§"),
    ("ম্ল", "¤ø"),
    ("ম্য", "g¨"),
    ("ম্র", "gÖ"),
    ("ল্ক", "é"),
    ("ল্গ", "ê"),
    ("ল্ট", "ë"),
    ("ল্ড", "ì"),
    ("ল্প", "í"),
    ("ল্ফ", "î"),
    ("ল্ব", "j¦"),
    ("ল্ম", "j¥"),
    ("ল্ল", "jø"),
    ("শ্চ", "ð"),
    ("শ্ন", "kœ"),
    ("শ্ব", "k¦"),
    ("শ্ম", "k¥"),
    ("শ্ল", "kø"),
    ("ষ্ক", "®‹"),
    ("ষ্ট", "ó"),
    ("ষ্ঠ", "ô"),
    ("ষ্ণ", "ò"),
    ("ষ্প", "®ú"),
    ("ষ্ফ", "õ"),
    ("ষ্ম", "®§"),
    ("ষ্য", "l¨"),
    ("স্ক", "¯‹"),
    ("স্ট", "÷"),
    ("স্খ", "ö"),
    ("স্ত", "¯—"),
    ("স্থ", "¯’"),
    ("স্ন", "¯œ"),
    ("স্প", "¯ú"),
    ("স্ফ", "ù"),
    ("স্ব", "¯^"),
    ("স্ম", "¯§"),
    ("স্ল", "¯ø"),
    ("স্য", "m¨"),
    ("স্র", "mÖ"),
    ("হ্ণ", "nè"),
    ("হ্ব", "nŸ"),
    ("হ্ন", "ý"),
    ("হ্ম", "þ"),
    ("হ্ল", "n¬"),
    // Consonant + vowel sign ligatures
    ("গু", "¸"),
    ("রু", "iæ"),
    ("রূ", "iƒ"),
    ("শু", "ï"),
    ("হু", "û"),
    ("হৃ", "ü"),
    // Half forms for conjuncts with no glyph of their own
    ("দ্", "˜"),
    ("ন্", "š"),
    ("ম্", "¤"),
    ("ষ্", "®"),
    ("স্", "¯"),
    // Phala forms
    ("্য", "¨"),
    ("্র", "Ö"),
    ("্ব", "^"),
    ("্ল", "ø"),
    ("্ম", "¥"),
    ("্ন", "œ"),
    ("্ত", "—"),
    ("্থ", "’"),
    ("্ক", "‹"),
    ("্ভ", "¢"),
    ("্প", "ú"),
    ("্ণ", "è"),
    // Hasanta
    ("্\u{200C}", "&"),
    ("্", "&"),
    // Independent vowels
    ("আ", "Av"),
    ("অ", "A"),
    ("ই", "B"),
    ("ঈ", "C"),
    ("উ", "D"),
    ("ঊ", "E"),
    ("ঋ", "F"),
    ("এ", "G"),
    ("ঐ", "H"),
    ("ও", "I"),
    ("ঔ", "J"),
    // Consonants
    ("ক", "K"),
    ("খ", "L"),
    ("গ", "M"),
    ("ঘ", "N"),
    ("ঙ", "O"),
    ("চ", "P"),
    ("ছ", "Q"),
    ("জ", "R"),
    ("ঝ", "S"),
    ("ঞ", "T"),
    ("ট", "U"),
    ("ঠ", "V"),
    ("ড", "W"),
    ("ঢ", "X"),
    ("ণ", "Y"),
    ("ত", "Z"),
    ("থ", "_"),
    ("দ", "`"),
    ("ধ", "a"),
    ("ন", "b"),
    ("প", "c"),
    ("ফ", "d"),
    ("ব", "e"),
    ("ভ", "f"),
    ("ম", "g"),
    ("য", "h"),
    ("র", "i"),
    ("ল", "j"),
    ("শ", "k"),
    ("ষ", "l"),
    ("স", "m"),
    ("হ", "n"),
    ("\u{09DC}", "o"), // ড়
    ("\u{09DD}", "p"), // ঢ়
    ("\u{09DF}", "q"), // য়
    ("ৎ", "r"),
    ("ং", "s"),
    ("ঃ", "t"),
    ("ঁ", "u"),
    // Digits
    ("০", "0"),
    ("১", "1"),
    ("২", "2"),
    ("৩", "3"),
    ("৪", "4"),
    ("৫", "5"),
    ("৬", "6"),
    ("৭", "7"),
    ("৮", "8"),
    ("৯", "9"),
    // Vowel signs in visual position
    ("\u{E0BF}", "w"), // ি
    ("\u{E0C7}", "‡"), // ে
    ("\u{E0C8}", "ˆ"), // ৈ
    ("\u{E0B0}", "©"), // র্
    // Vowel signs
    ("া", "v"),
    ("ি", "w"),
    ("ী", "x"),
    ("ু", "y"),
    ("ূ", "~"),
    ("ৃ", "„"),
    ("ে", "‡"),
    ("ৈ", "ˆ"),
    ("ৗ", "Š"),
    // Punctuation
    ("।", "|"),
    ("৳", "$"),
    ("“", "Ò"),
    ("”", "Ó"),
    ("‘", "Ô"),
    ("’", "Õ"),
];

/// Double hasanta and doubled joiners.
pub(super) const DUPLICATE_CLEANUP: &[(&str, &str)] = &[
    ("্\u{200C}্\u{200C}", "্\u{200C}"),
    ("্্", "্"),
    ("\u{200C}\u{200C}", "\u{200C}"),
    ("\u{200D}\u{200D}", "\u{200D}"),
];

/// Joiners have no Bijoy glyph; whatever the core table did not consume is dropped.
pub(super) const POST_NORMALIZATION: &[(&str, &str)] = &[("\u{200C}", ""), ("\u{200D}", "")];
