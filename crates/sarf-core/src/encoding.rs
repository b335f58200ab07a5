// Encoding tag and conversion dispatch between the three representations.

use crate::translit::{to_ascii_encoded, to_native_script, to_romanized};

/// Textual representation of Arabic handled by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Encoding {
    /// Buckwalter ASCII transliteration, used internally for matching.
    AsciiEncoded,
    /// Arabic script.
    NativeScript,
    /// ALA-LC romanization with diacritics.
    Romanized,
}

impl Encoding {
    /// Parse a short encoding name as used on command lines.
    ///
    /// Accepts `ascii`/`buckwalter`, `arabic`/`native` and `roman`/`ala`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" | "buckwalter" | "bw" => Some(Encoding::AsciiEncoded),
            "arabic" | "native" | "ar" => Some(Encoding::NativeScript),
            "roman" | "ala" | "romanized" => Some(Encoding::Romanized),
            _ => None,
        }
    }

    /// Short name of this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::AsciiEncoded => "ascii",
            Encoding::NativeScript => "arabic",
            Encoding::Romanized => "roman",
        }
    }

    /// Convert `text` from one encoding to another.
    ///
    /// Romanization is output-only: text whose source encoding is
    /// [`Encoding::Romanized`] is returned unchanged.
    pub fn convert(text: &str, from: Encoding, to: Encoding) -> String {
        match (from, to) {
            (Encoding::AsciiEncoded, Encoding::NativeScript) => to_native_script(text),
            (Encoding::AsciiEncoded, Encoding::Romanized) => to_romanized(text),
            (Encoding::NativeScript, Encoding::AsciiEncoded) => to_ascii_encoded(text),
            (Encoding::NativeScript, Encoding::Romanized) => to_romanized(&to_ascii_encoded(text)),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for enc in [
            Encoding::AsciiEncoded,
            Encoding::NativeScript,
            Encoding::Romanized,
        ] {
            assert_eq!(Encoding::from_name(enc.name()), Some(enc));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Encoding::from_name("ASCII"), Some(Encoding::AsciiEncoded));
        assert_eq!(Encoding::from_name("Arabic"), Some(Encoding::NativeScript));
        assert_eq!(Encoding::from_name("klingon"), None);
    }

    #[test]
    fn convert_native_to_roman_goes_through_ascii() {
        let native = to_native_script("kitAb");
        assert_eq!(
            Encoding::convert(&native, Encoding::NativeScript, Encoding::Romanized),
            "kit\u{0101}b"
        );
    }

    #[test]
    fn convert_same_encoding_is_identity() {
        assert_eq!(
            Encoding::convert("ktb", Encoding::AsciiEncoded, Encoding::AsciiEncoded),
            "ktb"
        );
    }

    #[test]
    fn convert_from_roman_is_identity() {
        assert_eq!(
            Encoding::convert("kit\u{0101}b", Encoding::Romanized, Encoding::NativeScript),
            "kit\u{0101}b"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&Encoding::NativeScript).unwrap();
        assert_eq!(json, "\"nativeScript\"");
    }
}
