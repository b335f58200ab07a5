// Alternative spellings tried during lookup.
//
// The lexicon lists some stems ending in waw with a trailing alef that
// surface text usually omits, so a word ending in `w` is also tried with `A`
// appended.

/// Candidate spellings of a Buckwalter word, original first.
pub fn alternative_spellings(word: &str) -> Vec<String> {
    let mut spellings = vec![word.to_string()];
    if word.ends_with('w') {
        spellings.push(format!("{word}A"));
    }
    spellings
}
