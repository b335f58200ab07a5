// Prefix/stem/suffix segmentation.
//
// Lengths are counted in characters. Splits are produced by prefix length
// ascending, then stem length descending (suffix growing as the stem shrinks).

/// Longest prefix tried, in characters.
pub const MAX_PREFIX_LEN: usize = 4;

/// Longest suffix tried, in characters.
pub const MAX_SUFFIX_LEN: usize = 6;

/// One way of splitting a word into three contiguous parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmentation<'w> {
    pub prefix: &'w str,
    pub stem: &'w str,
    pub suffix: &'w str,
}

/// Every admissible split of `word`.
///
/// The stem is never empty, so an empty word has no segmentations. A word
/// of `n` characters yields at most
/// `(MAX_PREFIX_LEN + 1) * (MAX_SUFFIX_LEN + 1)` splits.
pub fn segmentations(word: &str) -> Vec<Segmentation<'_>> {
    // Byte offset of each character boundary, including the end.
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();
    let len = bounds.len() - 1;

    let mut out = Vec::new();
    for prefix_len in 0..=MAX_PREFIX_LEN {
        for suffix_len in 0..=MAX_SUFFIX_LEN {
            if prefix_len + suffix_len >= len {
                break;
            }
            let stem_end = bounds[len - suffix_len];
            let stem_start = bounds[prefix_len];
            out.push(Segmentation {
                prefix: &word[..stem_start],
                stem: &word[stem_start..stem_end],
                suffix: &word[stem_end..],
            });
        }
    }
    out
}
