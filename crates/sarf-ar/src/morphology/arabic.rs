// Buckwalter-style lexicon analyzer.
//
// For every spelling alternative and every segmentation of the word, the
// prefix, stem and suffix surfaces are looked up in their lexicon tables. If
// all three are present, every combination of their entries is checked
// against the prefix/stem and stem/suffix matrices; combinations that pass are
// assembled into results. The prefix/suffix matrix is not consulted.

use hashbrown::HashSet;
use sarf_core::AnalysisResult;
use sarf_core::translit::{to_ascii_encoded, to_native_script, to_romanized};
use sarf_dict::{AffixEntry, Dictionary, StemEntry};

use super::Analyzer;
use super::segment::{Segmentation, segmentations};
use super::spelling::alternative_spellings;

/// Separator placed between prefix, stem and suffix glosses.
pub const GLOSS_SEPARATOR: &str = " + ";

/// Join the three glosses and drop separators left dangling by empty ones
/// at either end.
pub fn compose_gloss(prefix: &str, stem: &str, suffix: &str) -> String {
    let joined = [prefix, stem, suffix].join(GLOSS_SEPARATOR);
    let mut gloss = joined.as_str();
    while let Some(rest) = gloss.strip_prefix(GLOSS_SEPARATOR) {
        gloss = rest;
    }
    while let Some(rest) = gloss.strip_suffix(GLOSS_SEPARATOR) {
        gloss = rest;
    }
    gloss.to_string()
}

/// Analyzer backed by a borrowed [`Dictionary`].
///
/// Holds no state of its own; create one per call or keep it around, it
/// makes no difference.
#[derive(Debug, Clone, Copy)]
pub struct BuckwalterAnalyzer<'d> {
    dictionary: &'d Dictionary,
}

/// Key results are deduplicated on: `(vowelled, pos, gloss)`.
type DedupKey = (String, String, String);

impl<'d> BuckwalterAnalyzer<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Analyze a word given in Buckwalter ASCII.
    ///
    /// `word` is the Arabic-script form reported in each result's `word`
    /// field; it is not re-derived from the spelling being matched.
    pub fn analyze_encoded(&self, ascii: &str, word: &str) -> Vec<AnalysisResult> {
        let mut results = Vec::new();
        let mut seen: HashSet<DedupKey> = HashSet::new();

        for spelling in alternative_spellings(ascii) {
            for segmentation in segmentations(&spelling) {
                self.match_segmentation(&segmentation, word, &mut results, &mut seen);
            }
        }

        results
    }

    /// Check one segmentation and append its new results.
    fn match_segmentation(
        &self,
        segmentation: &Segmentation<'_>,
        word: &str,
        results: &mut Vec<AnalysisResult>,
        seen: &mut HashSet<DedupKey>,
    ) {
        let dict = self.dictionary;
        let (Some(prefixes), Some(stems), Some(suffixes)) = (
            dict.prefixes(segmentation.prefix),
            dict.stems(segmentation.stem),
            dict.suffixes(segmentation.suffix),
        ) else {
            return;
        };

        for prefix in prefixes {
            for stem in stems {
                if !dict
                    .prefix_stem()
                    .is_compatible(&prefix.category, &stem.category)
                {
                    continue;
                }
                for suffix in suffixes {
                    if !dict
                        .stem_suffix()
                        .is_compatible(&stem.category, &suffix.category)
                    {
                        continue;
                    }
                    let result = assemble(word, prefix, stem, suffix);
                    let key = (
                        result.vowelled.clone(),
                        result.pos.clone(),
                        result.gloss.clone(),
                    );
                    if seen.insert(key) {
                        results.push(result);
                    }
                }
            }
        }
    }
}

impl Analyzer for BuckwalterAnalyzer<'_> {
    fn analyze(&self, word: &str) -> Vec<AnalysisResult> {
        self.analyze_encoded(&to_ascii_encoded(word), word)
    }
}

/// Build a result from one compatible prefix/stem/suffix combination.
fn assemble(
    word: &str,
    prefix: &AffixEntry,
    stem: &StemEntry,
    suffix: &AffixEntry,
) -> AnalysisResult {
    let vowelled = format!("{}{}{}", prefix.vowelled, stem.vowelled, suffix.vowelled);
    AnalysisResult {
        word: word.to_string(),
        vowelled: to_native_script(&vowelled),
        transliteration: to_romanized(&vowelled),
        root: to_native_script(stem.root()),
        pos: stem.pos().to_string(),
        gloss: compose_gloss(&prefix.gloss, &stem.gloss, &suffix.gloss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_dict::DictionaryBuilder;

    fn base_builder() -> DictionaryBuilder {
        let mut b = DictionaryBuilder::new();
        b.add_prefix("", AffixEntry::new("Pref-0", "", ""))
            .add_prefix("w", AffixEntry::new("Pref-Wa", "wa", "and"))
            .add_suffix("", AffixEntry::new("Suff-0", "", ""))
            .add_suffix("t", AffixEntry::new("PVSuff-t", "tu", "I <verb>"))
            .add_stem(
                "ktb",
                StemEntry::new("PV", "katab", "write")
                    .with_root("ktb")
                    .with_pos("VERB_PERFECT"),
            )
            .allow_prefix_stem("Pref-0", "PV")
            .allow_prefix_stem("Pref-Wa", "PV")
            .allow_stem_suffix("PV", "Suff-0")
            .allow_stem_suffix("PV", "PVSuff-t");
        b
    }

    fn analyze(dict: &Dictionary, ascii: &str) -> Vec<AnalysisResult> {
        BuckwalterAnalyzer::new(dict).analyze_encoded(ascii, &to_native_script(ascii))
    }

    #[test]
    fn compose_gloss_trims_empty_ends() {
        assert_eq!(compose_gloss("", "book", ""), "book");
        assert_eq!(compose_gloss("and", "book", ""), "and + book");
        assert_eq!(compose_gloss("", "write", "I"), "write + I");
        assert_eq!(compose_gloss("", "", "they"), "they");
        assert_eq!(compose_gloss("", "", ""), "");
        assert_eq!(compose_gloss("the", "", "s"), "the +  + s");
    }

    #[test]
    fn bare_stem() {
        let dict = base_builder().build();
        let results = analyze(&dict, "ktb");
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.word, to_native_script("ktb"));
        assert_eq!(r.vowelled, to_native_script("katab"));
        assert_eq!(r.transliteration, "katab");
        assert_eq!(r.root, to_native_script("ktb"));
        assert_eq!(r.pos, "VERB_PERFECT");
        assert_eq!(r.gloss, "write");
    }

    #[test]
    fn prefix_stem_suffix() {
        let dict = base_builder().build();
        let results = analyze(&dict, "wktbt");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].vowelled, to_native_script("wakatabtu"));
        assert_eq!(results[0].transliteration, "wakatabtu");
        assert_eq!(results[0].gloss, "and + write + I <verb>");
    }

    #[test]
    fn null_affixes_need_explicit_entries() {
        let mut b = DictionaryBuilder::new();
        b.add_stem("ktb", StemEntry::new("PV", "katab", "write"))
            .add_suffix("", AffixEntry::new("Suff-0", "", ""))
            .allow_prefix_stem("Pref-0", "PV")
            .allow_stem_suffix("PV", "Suff-0");
        let dict = b.build();
        assert!(analyze(&dict, "ktb").is_empty());
    }

    #[test]
    fn missing_suffix_surface_is_filtered() {
        // "ktbx" could only match with suffix "x", which has no entry.
        let dict = base_builder().build();
        assert!(analyze(&dict, "ktbx").is_empty());
    }

    #[test]
    fn prefix_stem_incompatibility_blocks_every_suffix() {
        let mut b = base_builder();
        b.add_prefix("f", AffixEntry::new("Pref-Fa", "fa", "so"))
            .allow_stem_suffix("PV", "Suff-0")
            .allow_prefix_suffix("Pref-Fa", "Suff-0");
        let dict = b.build();
        assert!(analyze(&dict, "fktb").is_empty());
        assert!(analyze(&dict, "fktbt").is_empty());
    }

    #[test]
    fn stem_suffix_incompatibility_blocks() {
        let mut b = base_builder();
        b.add_suffix("A", AffixEntry::new("PVSuff-A", "A", "they two"));
        let dict = b.build();
        assert!(analyze(&dict, "ktbA").is_empty());
    }

    #[test]
    fn prefix_suffix_matrix_is_not_consulted() {
        // The prefix/suffix matrix is empty, yet the combination matches.
        let dict = base_builder().build();
        assert!(dict.prefix_suffix().is_empty());
        assert_eq!(analyze(&dict, "wktbt").len(), 1);
    }

    #[test]
    fn cross_product_of_entries() {
        let mut b = base_builder();
        b.add_stem(
            "ktb",
            StemEntry::new("N", "kutub", "books")
                .with_root("ktb")
                .with_pos("NOUN"),
        )
        .add_suffix("", AffixEntry::new("NSuff-0", "", ""))
        .allow_prefix_stem("Pref-0", "N")
        .allow_stem_suffix("N", "NSuff-0");
        let dict = b.build();

        let results = analyze(&dict, "ktb");
        let vowelled: Vec<&str> = results.iter().map(|r| r.vowelled.as_str()).collect();
        assert_eq!(
            vowelled,
            vec![
                to_native_script("katab").as_str(),
                to_native_script("kutub").as_str()
            ]
        );
    }

    #[test]
    fn duplicates_are_removed_in_discovery_order() {
        // Both "k|tb" and "kt|b" splits assemble to the same reading.
        let mut b = DictionaryBuilder::new();
        b.add_prefix("", AffixEntry::new("P0", "", ""))
            .add_stem("k", StemEntry::new("S", "ka", "x").with_pos("T"))
            .add_stem("kt", StemEntry::new("S", "k", "x").with_pos("T"))
            .add_suffix("tb", AffixEntry::new("X0", "tab", ""))
            .add_suffix("b", AffixEntry::new("X0", "atab", ""))
            .allow_prefix_stem("P0", "S")
            .allow_stem_suffix("S", "X0");
        let dict = b.build();

        let results = analyze(&dict, "ktb");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].vowelled, to_native_script("katab"));
    }

    #[test]
    fn different_pos_is_not_a_duplicate() {
        let mut b = base_builder();
        b.add_stem(
            "ktb",
            StemEntry::new("PV", "katab", "write").with_pos("VERB"),
        );
        let dict = b.build();
        let results = analyze(&dict, "ktb");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].pos, "VERB_PERFECT");
        assert_eq!(results[1].pos, "VERB");
    }

    #[test]
    fn waw_final_word_tries_alef_spelling() {
        let mut b = base_builder();
        b.add_suffix("uwA", AffixEntry::new("PVSuff-uwA", "uwA", "they"))
            .allow_stem_suffix("PV", "PVSuff-uwA");
        let dict = b.build();

        // Only the "ktbuwA" spelling has a matching suffix surface.
        let results = analyze(&dict, "ktbuw");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].vowelled, to_native_script("katabuwA"));
        assert_eq!(results[0].transliteration, "katab\u{016B}\u{0101}");
        assert_eq!(results[0].gloss, "write + they");
        assert_eq!(results[0].word, to_native_script("ktbuw"));
    }

    #[test]
    fn word_not_ending_in_waw_gets_no_alef_variant() {
        let mut b = base_builder();
        b.add_suffix("A", AffixEntry::new("PVSuff-A", "A", "they two"))
            .allow_stem_suffix("PV", "PVSuff-A");
        let dict = b.build();
        // "ktbA" matches directly, but "ktb" does not get an "A" variant.
        assert_eq!(analyze(&dict, "ktbA").len(), 1);
        assert_eq!(analyze(&dict, "ktb").len(), 1);
        assert_eq!(analyze(&dict, "ktb")[0].gloss, "write");
    }

    #[test]
    fn missing_root_and_pos_are_empty() {
        let mut b = DictionaryBuilder::new();
        b.add_prefix("", AffixEntry::new("P0", "", ""))
            .add_stem("mn", StemEntry::new("Prep", "min", "from"))
            .add_suffix("", AffixEntry::new("S0", "", ""))
            .allow_prefix_stem("P0", "Prep")
            .allow_stem_suffix("Prep", "S0");
        let dict = b.build();
        let results = analyze(&dict, "mn");
        assert_eq!(results[0].root, "");
        assert_eq!(results[0].pos, "");
    }

    #[test]
    fn analyze_trait_keeps_input_word() {
        let dict = base_builder().build();
        let word = to_native_script("ktb");
        let results = BuckwalterAnalyzer::new(&dict).analyze(&word);
        assert_eq!(results[0].word, word);
    }

    #[test]
    fn empty_word_has_no_results() {
        let dict = base_builder().build();
        assert!(BuckwalterAnalyzer::new(&dict).analyze("").is_empty());
    }
}
