// Category compatibility matrix

use hashbrown::HashMap;

/// Mapping from a pair of categories to a compatibility flag.
///
/// Pairs that were never set are incompatible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    rows: HashMap<String, HashMap<String, bool>>,
}

impl CompatibilityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for `(left, right)`, replacing any previous value.
    pub fn set(&mut self, left: impl Into<String>, right: impl Into<String>, compatible: bool) {
        self.rows
            .entry(left.into())
            .or_default()
            .insert(right.into(), compatible);
    }

    /// Mark `(left, right)` as compatible.
    pub fn allow(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.set(left, right, true);
    }

    /// Whether `left` may be followed by `right`.
    pub fn is_compatible(&self, left: &str, right: &str) -> bool {
        self.rows
            .get(left)
            .and_then(|row| row.get(right))
            .copied()
            .unwrap_or(false)
    }

    /// Number of explicitly set pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
