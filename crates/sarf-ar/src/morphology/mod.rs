// Morphological analysis module

mod arabic;
pub mod segment;
pub mod spelling;

pub use arabic::{BuckwalterAnalyzer, GLOSS_SEPARATOR, compose_gloss};
pub use segment::{MAX_PREFIX_LEN, MAX_SUFFIX_LEN, Segmentation, segmentations};
pub use spelling::alternative_spellings;

use sarf_core::AnalysisResult;

/// Trait for morphological analyzers.
///
/// Implementations take a word in Arabic script and return every valid
/// reading in discovery order. An empty vector means no analysis.
pub trait Analyzer {
    fn analyze(&self, word: &str) -> Vec<AnalysisResult>;
}
