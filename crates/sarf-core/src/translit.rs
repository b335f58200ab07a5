// Transliteration codec: Buckwalter ASCII <-> Arabic script, ASCII -> ALA-LC.
//
// All three conversions are total. Characters without a table entry are
// copied through unchanged, so mixed Latin/Arabic text survives intact.

// ---------------------------------------------------------------------------
// Character map
// ---------------------------------------------------------------------------

/// Buckwalter ASCII symbol paired with its Arabic code point.
///
/// The table is a bijection: 36 letters, tatweel, 8 diacritics, dagger alef,
/// alef wasla and the 10 digits. Order follows the Unicode Arabic block.
pub const CHARACTER_MAP: [(char, char); 57] = [
    ('\'', '\u{0621}'), // hamza
    ('|', '\u{0622}'),  // alef with madda above
    ('>', '\u{0623}'),  // alef with hamza above
    ('&', '\u{0624}'),  // waw with hamza above
    ('<', '\u{0625}'),  // alef with hamza below
    ('}', '\u{0626}'),  // yeh with hamza above
    ('A', '\u{0627}'),  // alef
    ('b', '\u{0628}'),
    ('p', '\u{0629}'), // teh marbuta
    ('t', '\u{062A}'),
    ('v', '\u{062B}'),
    ('j', '\u{062C}'),
    ('H', '\u{062D}'),
    ('x', '\u{062E}'),
    ('d', '\u{062F}'),
    ('*', '\u{0630}'),
    ('r', '\u{0631}'),
    ('z', '\u{0632}'),
    ('s', '\u{0633}'),
    ('$', '\u{0634}'),
    ('S', '\u{0635}'),
    ('D', '\u{0636}'),
    ('T', '\u{0637}'),
    ('Z', '\u{0638}'),
    ('E', '\u{0639}'),
    ('g', '\u{063A}'),
    ('_', '\u{0640}'), // tatweel
    ('f', '\u{0641}'),
    ('q', '\u{0642}'),
    ('k', '\u{0643}'),
    ('l', '\u{0644}'),
    ('m', '\u{0645}'),
    ('n', '\u{0646}'),
    ('h', '\u{0647}'),
    ('w', '\u{0648}'),
    ('Y', '\u{0649}'), // alef maksura
    ('y', '\u{064A}'),
    ('F', '\u{064B}'), // fathatan
    ('N', '\u{064C}'), // dammatan
    ('K', '\u{064D}'), // kasratan
    ('a', '\u{064E}'), // fatha
    ('u', '\u{064F}'), // damma
    ('i', '\u{0650}'), // kasra
    ('~', '\u{0651}'), // shadda
    ('o', '\u{0652}'), // sukun
    ('`', '\u{0670}'), // dagger alef
    ('{', '\u{0671}'), // alef wasla
    ('0', '\u{0660}'),
    ('1', '\u{0661}'),
    ('2', '\u{0662}'),
    ('3', '\u{0663}'),
    ('4', '\u{0664}'),
    ('5', '\u{0665}'),
    ('6', '\u{0666}'),
    ('7', '\u{0667}'),
    ('8', '\u{0668}'),
    ('9', '\u{0669}'),
];

/// Arabic letter alef wasla.
pub const ALEF_WASLA: char = '\u{0671}';

/// Arabic letter alef.
pub const ALEF: char = '\u{0627}';

/// Buckwalter gemination mark (shadda).
pub const GEMINATION_MARK: char = '~';

// ---------------------------------------------------------------------------
// Romanization tables
// ---------------------------------------------------------------------------

/// ALA-LC romanization of each Buckwalter symbol.
///
/// Digits and symbols missing here pass through unchanged. Tatweel, sukun and
/// a stray shadda romanize to nothing.
const ALA_TABLE: &[(char, &str)] = &[
    ('\'', "\u{02BC}"),
    ('|', "\u{02BC}\u{0101}"),
    ('>', "\u{02BC}"),
    ('&', "\u{02BC}"),
    ('<', "\u{02BC}"),
    ('}', "\u{02BC}"),
    ('A', "\u{0101}"),
    ('b', "b"),
    ('p', "h"),
    ('t', "t"),
    ('v', "th"),
    ('j', "j"),
    ('H', "\u{1E25}"),
    ('x', "kh"),
    ('d', "d"),
    ('*', "dh"),
    ('r', "r"),
    ('z', "z"),
    ('s', "s"),
    ('$', "sh"),
    ('S', "\u{1E63}"),
    ('D', "\u{1E0D}"),
    ('T', "\u{1E6D}"),
    ('Z', "\u{1E93}"),
    ('E', "\u{02BB}"),
    ('g', "gh"),
    ('_', ""),
    ('f', "f"),
    ('q', "q"),
    ('k', "k"),
    ('l', "l"),
    ('m', "m"),
    ('n', "n"),
    ('h', "h"),
    ('w', "w"),
    ('Y', "\u{00E1}"),
    ('y', "y"),
    ('F', "an"),
    ('N', "un"),
    ('K', "in"),
    ('a', "a"),
    ('u', "u"),
    ('i', "i"),
    ('~', ""),
    ('o', ""),
    ('`', "\u{0101}"),
];

/// Alef wasla romanizes as the bare vowel of the definite article.
const ALA_WASLA: (char, &str) = ('{', "a");

/// Substring rewrites applied in order after per-character romanization.
///
/// Later rules match text produced by earlier ones (and by gemination
/// expansion), so the order is fixed.
pub const ROMANIZATION_RULES: [(&str, &str); 5] = [
    ("a\u{0101}", "\u{0101}"), // fatha + alef
    ("uw", "\u{016B}"),        // damma + waw
    ("iy", "\u{012B}"),        // kasra + yeh
    ("an\u{0101}", "an"),      // fathatan before alef
    ("lll", "ll"),             // allāh
];

// ---------------------------------------------------------------------------
// Character-level lookups
// ---------------------------------------------------------------------------

/// Map a Buckwalter symbol to its Arabic code point.
pub fn ascii_to_native_char(c: char) -> Option<char> {
    CHARACTER_MAP
        .iter()
        .find(|&&(ascii, _)| ascii == c)
        .map(|&(_, native)| native)
}

/// Map an Arabic code point to its Buckwalter symbol.
pub fn native_to_ascii_char(c: char) -> Option<char> {
    CHARACTER_MAP
        .iter()
        .find(|&&(_, native)| native == c)
        .map(|&(ascii, _)| ascii)
}

fn romanize_char(c: char) -> Option<&'static str> {
    if c == ALA_WASLA.0 {
        return Some(ALA_WASLA.1);
    }
    ALA_TABLE
        .iter()
        .find(|&&(ascii, _)| ascii == c)
        .map(|&(_, roman)| roman)
}

// ---------------------------------------------------------------------------
// String conversions
// ---------------------------------------------------------------------------

/// Convert Buckwalter ASCII to Arabic script.
///
/// Alef wasla is displayed as plain alef, so this is not a perfect inverse of
/// [`to_ascii_encoded`].
pub fn to_native_script(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| ascii_to_native_char(c).unwrap_or(c))
        .map(|c| if c == ALEF_WASLA { ALEF } else { c })
        .collect()
}

/// Convert Arabic script to Buckwalter ASCII.
pub fn to_ascii_encoded(native: &str) -> String {
    native
        .chars()
        .map(|c| native_to_ascii_char(c).unwrap_or(c))
        .collect()
}

/// Convert Buckwalter ASCII to ALA-LC romanization.
pub fn to_romanized(ascii: &str) -> String {
    let expanded = expand_gemination(ascii);

    let mut roman = String::with_capacity(expanded.len() * 2);
    for c in expanded.chars() {
        match romanize_char(c) {
            Some(s) => roman.push_str(s),
            None => roman.push(c),
        }
    }

    apply_romanization_rules(&roman)
}

/// Replace every `<c>~` pair with `<c><c>`.
///
/// A mark with no preceding character is left in place.
pub fn expand_gemination(ascii: &str) -> String {
    let mut out = String::with_capacity(ascii.len());
    let mut chars = ascii.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c != GEMINATION_MARK && chars.peek() == Some(&GEMINATION_MARK) {
            chars.next();
            out.push(c);
        }
    }
    out
}

/// Apply [`ROMANIZATION_RULES`] in order.
pub fn apply_romanization_rules(roman: &str) -> String {
    ROMANIZATION_RULES
        .iter()
        .fold(roman.to_string(), |text, &(from, to)| text.replace(from, to))
}
