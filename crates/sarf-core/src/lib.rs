//! Shared types and the transliteration codec for sarf.
//!
//! - [`translit`] -- Buckwalter ASCII, Arabic script and ALA-LC romanization
//! - [`encoding`] -- Encoding tag and conversion dispatch
//! - [`analysis`] -- The analysis result value type

pub mod analysis;
pub mod encoding;
pub mod translit;

pub use analysis::{AnalysisResult, NOT_FOUND_GLOSS, WordAnalysis};
pub use encoding::Encoding;
