// Lexicon entry types

/// A prefix or suffix entry.
///
/// Several entries may share one surface form; the lexicon table maps each
/// surface form to all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffixEntry {
    /// Compatibility category, the key into the matrices.
    pub category: String,
    /// Fully vowelled Buckwalter form.
    pub vowelled: String,
    /// English gloss. May be empty for null affixes.
    pub gloss: String,
}

impl AffixEntry {
    pub fn new(
        category: impl Into<String>,
        vowelled: impl Into<String>,
        gloss: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            vowelled: vowelled.into(),
            gloss: gloss.into(),
        }
    }
}

/// A stem entry.
///
/// `root` and `pos` are optional in the source data; accessors return an
/// empty string when they are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StemEntry {
    pub category: String,
    pub vowelled: String,
    pub gloss: String,
    /// Buckwalter triliteral or quadriliteral root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub root: Option<String>,
    /// Part-of-speech tag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pos: Option<String>,
}

impl StemEntry {
    pub fn new(
        category: impl Into<String>,
        vowelled: impl Into<String>,
        gloss: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            vowelled: vowelled.into(),
            gloss: gloss.into(),
            root: None,
            pos: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// The root, or `""` when the entry has none.
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or("")
    }

    /// The part-of-speech tag, or `""` when the entry has none.
    pub fn pos(&self) -> &str {
        self.pos.as_deref().unwrap_or("")
    }
}
