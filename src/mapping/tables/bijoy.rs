//! Bijoy → Unicode rules.
//!
//! Bijoy (SutonnyMJ and its family of fonts) is an 8-bit glyph encoding. Text typed in
//! it arrives as the Windows-1252 characters its bytes decode to, so the patterns below
//! are Latin-1 / Windows-1252 characters, one per Bijoy glyph.
//!
//! Pre-base vowel signs and the reph map to visual marks (`U+E0xx`), which the forward
//! reorder moves into logical position.

/// Typing mistakes that render identically in Bijoy fonts.
pub(super) const PRE_NORMALIZATION: &[(&str, &str)] = &[
    ("yy", "y"),
    ("zz", "z"),
    ("vv", "v"),
    ("xx", "x"),
    ("ww", "w"),
    ("~~", "~"),
    ("‡‡", "‡"),
    ("„„", "„"),
    // Hasanta typed after a kar has no visual effect
    ("y&", "y"),
    ("„&", "„"),
];

/// Glyph → Unicode. Conjunct glyphs expand to several code units.
pub(super) const CORE: &[(&str, &str)] = &[
    // Conjuncts and ligatures
    ("i¨", "র\u{200D}্য"),
    ("ª¨", "্র্য"),
    ("°", "ক্ক"),
    ("±", "ক্ট"),
    ("³", "ক্ত"),
    ("K¡", "ক্ব"),
    ("¯Œ", "স্ক্র"),
    ("µ", "ক্র"),
    ("K¬", "ক্ল"),
    ("¶", "ক্ষ"),
    ("ÿ", "ক্ষ"),
    ("·", "ক্স"),
    ("¸", "গু"),
    ("»", "গ্ধ"),
    ("Mœ", "গ্ন"),
    ("M¥", "গ্ম"),
    ("Mø", "গ্ল"),
    ("Mæ", "গ্রু"),
    ("¼", "ঙ্ক"),
    ("•¶", "ঙ্ক্ষ"),
    ("•L", "ঙ্খ"),
    ("½", "ঙ্গ"),
    ("•N", "ঙ্ঘ"),
    ("”Q¡", "চ্ছ্ব"),
    ("”P", "চ্চ"),
    ("”Q", "চ্ছ"),
    ("”T", "চ্ঞ"),
    ("¾¡", "জ্জ্ব"),
    ("¾", "জ্জ"),
    ("À", "জ্ঝ"),
    ("Á", "জ্ঞ"),
    ("R¡", "জ্ব"),
    ("Â", "ঞ্চ"),
    ("Ã", "ঞ্ছ"),
    ("Ä", "ঞ্জ"),
    ("Å", "ঞ্ঝ"),
    ("Æ", "ট্ট"),
    ("U¡", "ট্ব"),
    ("U¥", "ট্ম"),
    ("Ç", "ড্ড"),
    ("È", "ণ্ট"),
    ("É", "ণ্ঠ"),
    ("Ê", "ণ্ড"),
    ("Y^", "ণ্ব"),
    ("Ë¡", "ত্ত্ব"),
    ("Ë", "ত্ত"),
    ("Ì", "ত্থ"),
    ("Zœ", "ত্ন"),
    ("Z¥", "ত্ম"),
    ("Î", "ত্র"),
    ("Z¡", "ত্ব"),
    ("_¡", "থ্ব"),
    ("˜M", "দ্গ"),
    ("˜N", "দ্ঘ"),
    ("Ï", "দ্দ"),
    ("×", "দ্ধ"),
    ("˜¡", "দ্ব"),
    ("Ø", "দ্ব"),
    ("™¢", "দ্ভ"),
    ("Ù", "দ্ম"),
    ("`ª", "দ্রু"),
    ("aŸ", "ধ্ব"),
    ("a¥", "ধ্ম"),
    ("›U", "ন্ট"),
    ("Ú", "ন্ঠ"),
    ("Û", "ন্ড"),
    ("š¿", "ন্ত্র"),
    ("š‘", "ন্তু"),
    ("š—", "ন্ত"),
    ("š’", "ন্থ"),
    ("›`", "ন্দ"),
    ("›Ø", "ন্দ্ব"),
    ("Ü", "ন্ধ"),
    ("bœ", "ন্ন"),
    ("š^", "ন্ব"),
    ("b¥", "ন্ম"),
    ("Ý", "ন্স"),
    ("Þ", "প্ট"),
    ("ß", "প্ত"),
    ("cœ", "প্ন"),
    ("à", "প্প"),
    ("cø", "প্ল"),
    ("á", "প্স"),
    ("dø", "ফ্ল"),
    ("â", "ব্জ"),
    ("ã", "ব্দ"),
    ("ä", "ব্ধ"),
    ("eŸ", "ব্ব"),
    ("eø", "ব্ল"),
    ("å", "ভ্র"),
    ("gœ", "ম্ন"),
    ("¤ú", "ম্প"),
    ("ç", "ম্ফ"),
    ("¤^", "ম্ব"),
    ("¤¢", "ম্ভ"),
    ("¤£", "ম্ভ্র"),
    ("¤§", "ম্ম"),
    ("¤ø", "ম্ল"),
    ("iæ", "রু"),
    ("iƒ", "রূ"),
    ("é", "ল্ক"),
    ("ê", "ল্গ"),
    ("ë", "ল্ট"),
    ("ì", "ল্ড"),
    ("í", "ল্প"),
    ("î", "ল্ফ"),
    ("j¦", "ল্ব"),
    ("j¥", "ল্ম"),
    ("jø", "ল্ল"),
    ("ï", "শু"),
    ("ð", "শ্চ"),
    ("kœ", "শ্ন"),
    ("k¦", "শ্ব"),
    ("k¥", "শ্ম"),
    ("kø", "শ্ল"),
    ("®‹", "ষ্ক"),
    ("®Œ", "ষ্ক্র"),
    ("ó", "ষ্ট"),
    ("ô", "ষ্ঠ"),
    ("ò", "ষ্ণ"),
    ("®ú", "ষ্প"),
    ("õ", "ষ্ফ"),
    ("®§", "ষ্ম"),
    ("¯¿", "স্ত্র"),
    ("¯‹", "স্ক"),
    ("÷", "স্ট"),
    ("ö", "স্খ"),
    ("¯—", "স্ত"),
    ("¯‘", "স্তু"),
    ("¯’", "স্থ"),
    ("¯œ", "স্ন"),
    ("¯ú", "স্প"),
    ("ù", "স্ফ"),
    ("¯^", "স্ব"),
    ("¯§", "স্ম"),
    ("¯ø", "স্ল"),
    ("û", "হু"),
    ("nè", "হ্ণ"),
    ("nŸ", "হ্ব"),
    ("ý", "হ্ন"),
    ("þ", "হ্ম"),
    ("n¬", "হ্ল"),
    ("ü", "হৃ"),
    // Reph, typed after the consonant it sits on
    ("©", "\u{E0B0}"),
    // Independent vowels
    ("Av", "আ"),
    ("A", "অ"),
    ("B", "ই"),
    ("C", "ঈ"),
    ("D", "উ"),
    ("E", "ঊ"),
    ("F", "ঋ"),
    ("G", "এ"),
    ("H", "ঐ"),
    ("I", "ও"),
    ("J", "ঔ"),
    // Consonants
    ("K", "ক"),
    ("L", "খ"),
    ("M", "গ"),
    ("N", "ঘ"),
    ("O", "ঙ"),
    ("P", "চ"),
    ("Q", "ছ"),
    ("R", "জ"),
    ("S", "ঝ"),
    ("T", "ঞ"),
    ("U", "ট"),
    ("V", "ঠ"),
    ("W", "ড"),
    ("X", "ঢ"),
    ("Y", "ণ"),
    ("Z", "ত"),
    ("_", "থ"),
    ("`", "দ"),
    ("a", "ধ"),
    ("b", "ন"),
    ("c", "প"),
    ("d", "ফ"),
    ("e", "ব"),
    ("f", "ভ"),
    ("g", "ম"),
    ("h", "য"),
    ("i", "র"),
    ("j", "ল"),
    ("k", "শ"),
    ("l", "ষ"),
    ("m", "স"),
    ("n", "হ"),
    ("o", "\u{09DC}"), // ড়
    ("p", "\u{09DD}"), // ঢ়
    ("q", "\u{09DF}"), // য়
    ("r", "ৎ"),
    ("s", "ং"),
    ("t", "ঃ"),
    ("u", "ঁ"),
    // Digits
    ("0", "০"),
    ("1", "১"),
    ("2", "২"),
    ("3", "৩"),
    ("4", "৪"),
    ("5", "৫"),
    ("6", "৬"),
    ("7", "৭"),
    ("8", "৮"),
    ("9", "৯"),
    // Vowel signs
    ("v", "া"),
    ("w", "\u{E0BF}"), // ি, visual
    ("x", "ী"),
    ("y", "ু"),
    ("z", "ু"),
    ("æ", "ু"),
    ("~", "ূ"),
    ("ƒ", "ূ"),
    ("‚", "ূ"),
    ("„", "ৃ"),
    ("…", "ৃ"),
    ("‡", "\u{E0C7}"), // ে, visual
    ("†", "\u{E0C7}"), // ে, visual
    ("ˆ", "\u{E0C8}"), // ৈ, visual
    ("‰", "\u{E0C8}"), // ৈ, visual
    ("Š", "ৗ"),
    // Hasanta with an explicit non-joiner
    ("&", "্\u{200C}"),
    // Phala and half forms
    ("^", "্ব"),
    ("‘", "্তু"),
    ("’", "্থ"),
    ("‹", "্ক"),
    ("Œ", "্ক্র"),
    ("—", "্ত"),
    ("Í", "্ত"),
    ("˜", "দ্"),
    ("™", "দ্"),
    ("š", "ন্"),
    ("›", "ন্"),
    ("œ", "্ন"),
    ("Ÿ", "্ব"),
    ("¡", "্ব"),
    ("¢", "্ভ"),
    ("£", "্ভ্র"),
    ("¤", "ম্"),
    ("¥", "্ম"),
    ("¦", "্ব"),
    ("§", "্ম"),
    ("¨", "্য"),
    ("ª", "্র"),
    ("«", "্র"),
    ("Ö", "্র"),
    ("¬", "্ল"),
    ("\u{00AD}", "্ল"), // soft hyphen slot
    ("ø", "্ল"),
    ("ú", "্প"),
    ("è", "্ণ"),
    ("®", "ষ্"),
    ("¯", "স্"),
    // Punctuation
    ("|", "।"),
    ("$", "৳"),
    ("Ò", "“"),
    ("Ó", "”"),
    ("Ô", "‘"),
    ("Õ", "’"),
];

/// Double hasanta and doubled joiners left behind by half-form + phala expansions.
pub(super) const DUPLICATE_CLEANUP: &[(&str, &str)] = &[
    ("্\u{200C}্\u{200C}", "্\u{200C}"),
    ("্্", "্"),
    ("\u{200C}\u{200C}", "\u{200C}"),
    ("\u{200D}\u{200D}", "\u{200D}"),
];

/// Preferred spellings after reordering.
pub(super) const POST_NORMALIZATION: &[(&str, &str)] = &[
    ("অা", "আ"),
    // Split vowel signs the reorder could not compose (kar typed after the consonant)
    ("\u{09C7}\u{09BE}", "\u{09CB}"),
    ("\u{09C7}\u{09D7}", "\u{09CC}"),
    // Consonant + nukta to the precomposed letters Bijoy produces
    ("\u{09A1}\u{09BC}", "\u{09DC}"),
    ("\u{09A2}\u{09BC}", "\u{09DD}"),
    ("\u{09AF}\u{09BC}", "\u{09DF}"),
];
