// SarfHandle: top-level integration point for Arabic morphological analysis.
//
// Owns the Dictionary and creates a BuckwalterAnalyzer on the fly in each
// method call. Every method takes `&self` and the dictionary is never mutated
// after construction, so a handle can be shared between threads.

use sarf_core::translit;
use sarf_core::{AnalysisResult, WordAnalysis};
use sarf_dict::format::{DictionarySources, parse_dictionary};
use sarf_dict::{DictError, Dictionary};

use crate::morphology::{Analyzer, BuckwalterAnalyzer};

/// Error type for SarfHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum SarfError {
    /// The dictionary text could not be parsed.
    #[error("failed to load dictionary: {0}")]
    DictionaryLoad(#[from] DictError),
}

/// Top-level handle that owns a dictionary and exposes analysis and
/// transliteration through a single interface.
#[derive(Debug, Clone)]
pub struct SarfHandle {
    dictionary: Dictionary,
}

impl SarfHandle {
    /// Create a handle around an already-built dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Create a handle from the raw text of the six dictionary files.
    pub fn from_text(sources: &DictionarySources<'_>) -> Result<Self, SarfError> {
        let dictionary = parse_dictionary(sources)?;
        Ok(Self::new(dictionary))
    }

    /// The dictionary this handle analyzes against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn analyzer(&self) -> BuckwalterAnalyzer<'_> {
        BuckwalterAnalyzer::new(&self.dictionary)
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Perform morphological analysis on a word in Arabic script.
    ///
    /// Returns every valid reading in discovery order. An empty vector means
    /// the word has no analysis; see [`info_for_word`](Self::info_for_word).
    pub fn analyze(&self, word: &str) -> Vec<AnalysisResult> {
        self.analyzer().analyze(word)
    }

    /// Perform morphological analysis on a word in Buckwalter ASCII.
    pub fn analyze_ascii(&self, ascii: &str) -> Vec<AnalysisResult> {
        self.analyzer()
            .analyze_encoded(ascii, &translit::to_native_script(ascii))
    }

    /// Placeholder result for a word without an analysis.
    ///
    /// Does not consult the dictionary.
    pub fn info_for_word(&self, word: &str) -> AnalysisResult {
        AnalysisResult::not_found(word)
    }

    /// Analyze every whitespace-separated token of a text.
    ///
    /// Tokens without an analysis get a single
    /// [`info_for_word`](Self::info_for_word) placeholder. Offsets are in
    /// characters.
    pub fn analyze_text(&self, text: &str) -> Vec<WordAnalysis> {
        let mut out = Vec::new();
        let mut token_start: Option<(usize, usize)> = None; // (byte, char)

        let mut flush = |start: Option<(usize, usize)>, end: usize| {
            if let Some((byte, offset)) = start {
                let token = &text[byte..end];
                let mut results = self.analyze(token);
                if results.is_empty() {
                    results.push(self.info_for_word(token));
                }
                out.push(WordAnalysis {
                    token: token.to_string(),
                    offset,
                    results,
                });
            }
        };

        for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
            if c.is_whitespace() {
                flush(token_start.take(), byte_idx);
            } else if token_start.is_none() {
                token_start = Some((byte_idx, char_idx));
            }
        }
        flush(token_start, text.len());

        out
    }

    // =========================================================================
    // Transliteration
    // =========================================================================

    /// Convert Buckwalter ASCII to Arabic script.
    pub fn to_native_script(ascii: &str) -> String {
        translit::to_native_script(ascii)
    }

    /// Convert Arabic script to Buckwalter ASCII.
    pub fn to_ascii_encoded(native: &str) -> String {
        translit::to_ascii_encoded(native)
    }

    /// Convert Buckwalter ASCII to ALA-LC romanization.
    pub fn to_romanized(ascii: &str) -> String {
        translit::to_romanized(ascii)
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
