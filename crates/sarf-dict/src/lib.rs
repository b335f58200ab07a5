//! Morphological dictionary for sarf.
//!
//! The dictionary is three lexicon tables (prefixes, stems, suffixes) keyed
//! by Buckwalter surface form, plus the category compatibility matrices that
//! decide which entries may combine.
//!
//! # Architecture
//!
//! - [`entry`] -- Affix and stem entry types
//! - [`matrix`] -- Category-pair compatibility matrix
//! - [`dictionary`] -- The immutable `Dictionary` and its builder
//! - [`format`] -- Parser for the Buckwalter lexicon and table text formats

pub mod dictionary;
pub mod entry;
pub mod format;
pub mod matrix;

pub use dictionary::{Dictionary, DictionaryBuilder};
pub use entry::{AffixEntry, StemEntry};
pub use matrix::CompatibilityMatrix;

/// Error type for dictionary parsing.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("{table}:{line}: missing {field} field")]
    MissingField {
        table: &'static str,
        line: usize,
        field: &'static str,
    },
    #[error("{table}:{line}: empty category")]
    EmptyCategory { table: &'static str, line: usize },
    #[error("{table}:{line}: expected two categories")]
    InvalidMatrixLine { table: &'static str, line: usize },
}
