//! Dictionary-based morphological analysis of Arabic.
//!
//! A word is converted to Buckwalter ASCII, split into every admissible
//! prefix + stem + suffix triple, and each triple is checked against the
//! lexicon tables and compatibility matrices of a [`Dictionary`].
//!
//! - [`morphology`] -- Spelling alternatives, segmentation and matching
//! - [`handle`] -- `SarfHandle`, the top-level API

pub mod handle;
pub mod morphology;

pub use handle::{SarfError, SarfHandle};
pub use sarf_core::{AnalysisResult, Encoding, NOT_FOUND_GLOSS, WordAnalysis, translit};
pub use sarf_dict::Dictionary;
