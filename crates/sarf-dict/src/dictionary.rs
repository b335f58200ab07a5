// The morphological dictionary: lexicon tables and compatibility matrices.
//
// A Dictionary is built once (by the text parser or DictionaryBuilder) and is
// read-only afterwards, so it can be shared between threads freely.

use hashbrown::HashMap;

use crate::entry::{AffixEntry, StemEntry};
use crate::matrix::CompatibilityMatrix;

/// Immutable prefix/stem/suffix lexicon with its compatibility matrices.
///
/// Null affixes are not implicit: the empty prefix and empty suffix only
/// match when the tables hold explicit entries for `""`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    prefixes: HashMap<String, Vec<AffixEntry>>,
    stems: HashMap<String, Vec<StemEntry>>,
    suffixes: HashMap<String, Vec<AffixEntry>>,
    prefix_stem: CompatibilityMatrix,
    stem_suffix: CompatibilityMatrix,
    prefix_suffix: CompatibilityMatrix,
}

impl Dictionary {
    /// Assemble a dictionary from already-built tables.
    pub fn from_parts(
        prefixes: HashMap<String, Vec<AffixEntry>>,
        stems: HashMap<String, Vec<StemEntry>>,
        suffixes: HashMap<String, Vec<AffixEntry>>,
        prefix_stem: CompatibilityMatrix,
        stem_suffix: CompatibilityMatrix,
        prefix_suffix: CompatibilityMatrix,
    ) -> Self {
        Self {
            prefixes,
            stems,
            suffixes,
            prefix_stem,
            stem_suffix,
            prefix_suffix,
        }
    }

    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Prefix entries for a surface form, if any.
    pub fn prefixes(&self, surface: &str) -> Option<&[AffixEntry]> {
        self.prefixes.get(surface).map(Vec::as_slice)
    }

    /// Stem entries for a surface form, if any.
    pub fn stems(&self, surface: &str) -> Option<&[StemEntry]> {
        self.stems.get(surface).map(Vec::as_slice)
    }

    /// Suffix entries for a surface form, if any.
    pub fn suffixes(&self, surface: &str) -> Option<&[AffixEntry]> {
        self.suffixes.get(surface).map(Vec::as_slice)
    }

    /// Prefix category to stem category matrix.
    pub fn prefix_stem(&self) -> &CompatibilityMatrix {
        &self.prefix_stem
    }

    /// Stem category to suffix category matrix.
    pub fn stem_suffix(&self) -> &CompatibilityMatrix {
        &self.stem_suffix
    }

    /// Prefix category to suffix category matrix.
    ///
    /// Loaded with the rest of the data but not consulted by the analyzer.
    pub fn prefix_suffix(&self) -> &CompatibilityMatrix {
        &self.prefix_suffix
    }

    /// Number of distinct surface forms in each lexicon table, as
    /// `(prefixes, stems, suffixes)`.
    pub fn surface_counts(&self) -> (usize, usize, usize) {
        (self.prefixes.len(), self.stems.len(), self.suffixes.len())
    }
}

/// Incremental in-memory construction of a [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    prefixes: HashMap<String, Vec<AffixEntry>>,
    stems: HashMap<String, Vec<StemEntry>>,
    suffixes: HashMap<String, Vec<AffixEntry>>,
    prefix_stem: CompatibilityMatrix,
    stem_suffix: CompatibilityMatrix,
    prefix_suffix: CompatibilityMatrix,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prefix entry under `surface`. Entries keep insertion order.
    pub fn add_prefix(&mut self, surface: impl Into<String>, entry: AffixEntry) -> &mut Self {
        self.prefixes.entry(surface.into()).or_default().push(entry);
        self
    }

    pub fn add_stem(&mut self, surface: impl Into<String>, entry: StemEntry) -> &mut Self {
        self.stems.entry(surface.into()).or_default().push(entry);
        self
    }

    pub fn add_suffix(&mut self, surface: impl Into<String>, entry: AffixEntry) -> &mut Self {
        self.suffixes.entry(surface.into()).or_default().push(entry);
        self
    }

    pub fn allow_prefix_stem(
        &mut self,
        prefix_cat: impl Into<String>,
        stem_cat: impl Into<String>,
    ) -> &mut Self {
        self.prefix_stem.allow(prefix_cat, stem_cat);
        self
    }

    pub fn allow_stem_suffix(
        &mut self,
        stem_cat: impl Into<String>,
        suffix_cat: impl Into<String>,
    ) -> &mut Self {
        self.stem_suffix.allow(stem_cat, suffix_cat);
        self
    }

    pub fn allow_prefix_suffix(
        &mut self,
        prefix_cat: impl Into<String>,
        suffix_cat: impl Into<String>,
    ) -> &mut Self {
        self.prefix_suffix.allow(prefix_cat, suffix_cat);
        self
    }

    /// Replace a whole matrix, e.g. one parsed from a table file.
    pub fn prefix_stem_matrix(&mut self, matrix: CompatibilityMatrix) -> &mut Self {
        self.prefix_stem = matrix;
        self
    }

    pub fn stem_suffix_matrix(&mut self, matrix: CompatibilityMatrix) -> &mut Self {
        self.stem_suffix = matrix;
        self
    }

    pub fn prefix_suffix_matrix(&mut self, matrix: CompatibilityMatrix) -> &mut Self {
        self.prefix_suffix = matrix;
        self
    }

    pub fn build(self) -> Dictionary {
        Dictionary::from_parts(
            self.prefixes,
            self.stems,
            self.suffixes,
            self.prefix_stem,
            self.stem_suffix,
            self.prefix_suffix,
        )
    }
}
