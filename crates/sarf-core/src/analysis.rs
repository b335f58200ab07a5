// Morphological analysis result type

use crate::translit::{to_ascii_encoded, to_romanized};

/// Gloss carried by the placeholder result for words without an analysis.
pub const NOT_FOUND_GLOSS: &str = "Not found in dictionary";

/// One reading of a word: a validated prefix + stem + suffix combination.
///
/// All fields are plain strings. `root` and `pos` are empty when the stem
/// entry carries none. Equality is by content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    /// The submitted word in Arabic script.
    pub word: String,
    /// Fully vowelled reading in Arabic script.
    pub vowelled: String,
    /// Romanization of the vowelled reading.
    pub transliteration: String,
    /// Root in Arabic script.
    pub root: String,
    /// Part-of-speech tag of the stem.
    pub pos: String,
    /// Prefix, stem and suffix glosses joined with `" + "`.
    pub gloss: String,
}

impl AnalysisResult {
    /// Placeholder result for a word that has no analysis.
    ///
    /// Only `word`, `transliteration` (romanized from the word itself) and
    /// the fixed [`NOT_FOUND_GLOSS`] are filled in.
    pub fn not_found(word: &str) -> Self {
        Self {
            word: word.to_string(),
            vowelled: String::new(),
            transliteration: to_romanized(&to_ascii_encoded(word)),
            root: String::new(),
            pos: String::new(),
            gloss: NOT_FOUND_GLOSS.to_string(),
        }
    }

    /// Whether this is a [`not_found`](Self::not_found) placeholder.
    pub fn is_not_found(&self) -> bool {
        self.vowelled.is_empty() && self.gloss == NOT_FOUND_GLOSS
    }
}

/// Results for one whitespace-separated token of a longer text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WordAnalysis {
    /// The token as it appeared in the text.
    pub token: String,
    /// Character offset of the token within the text.
    pub offset: usize,
    /// Analyses of the token, or a single not-found placeholder.
    pub results: Vec<AnalysisResult>,
}

impl WordAnalysis {
    /// Whether the token had at least one real analysis.
    pub fn is_found(&self) -> bool {
        !self.results.iter().all(AnalysisResult::is_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::to_native_script;

    #[test]
    fn not_found_shape() {
        let word = to_native_script("ktb");
        let r = AnalysisResult::not_found(&word);
        assert_eq!(r.word, word);
        assert_eq!(r.vowelled, "");
        assert_eq!(r.root, "");
        assert_eq!(r.pos, "");
        assert_eq!(r.gloss, NOT_FOUND_GLOSS);
        assert_eq!(r.transliteration, "ktb");
        assert!(r.is_not_found());
    }

    #[test]
    fn not_found_empty_word() {
        let r = AnalysisResult::not_found("");
        assert_eq!(r.transliteration, "");
        assert!(r.is_not_found());
    }

    #[test]
    fn default_is_not_placeholder() {
        assert!(!AnalysisResult::default().is_not_found());
    }

    #[test]
    fn equality_is_by_content() {
        let a = AnalysisResult::not_found("x");
        let b = a.clone();
        assert_eq!(a, b);
        let mut c = a.clone();
        c.pos = "NOUN".to_string();
        assert_ne!(a, c);
    }

    #[test]
    fn word_analysis_found() {
        let missing = WordAnalysis {
            token: "x".to_string(),
            offset: 0,
            results: vec![AnalysisResult::not_found("x")],
        };
        assert!(!missing.is_found());

        let mut hit = AnalysisResult::not_found("x");
        hit.vowelled = "x".to_string();
        hit.gloss = "thing".to_string();
        let found = WordAnalysis {
            token: "x".to_string(),
            offset: 0,
            results: vec![hit],
        };
        assert!(found.is_found());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_all_fields() {
        let r = AnalysisResult::not_found("abc");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["word"], "abc");
        assert_eq!(v["gloss"], NOT_FOUND_GLOSS);
        assert_eq!(v["transliteration"], "abc");
    }
}
