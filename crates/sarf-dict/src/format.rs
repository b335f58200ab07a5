// Buckwalter lexicon and compatibility-table text formats.
//
// Lexicon files hold one entry per line as four tab-separated fields:
//
//   surface<TAB>vowelled<TAB>category<TAB>gloss
//
// Lines starting with `;` are comments. In the stem lexicon a comment of the
// form `;--- ROOT` sets the root for the entries that follow. Glosses may
// embed a `<pos>TAG</pos>` annotation, which is lifted out of the gloss.
//
// Table files hold one compatible category pair per line, separated by
// whitespace.
//
// Parsing works on in-memory text; reading the files is left to the caller.

use hashbrown::HashMap;

use crate::DictError;
use crate::dictionary::Dictionary;
use crate::entry::{AffixEntry, StemEntry};
use crate::matrix::CompatibilityMatrix;

/// Comment prefix shared by all files.
const COMMENT: char = ';';

/// Root marker inside the stem lexicon.
const ROOT_MARKER: &str = ";---";

const POS_OPEN: &str = "<pos>";
const POS_CLOSE: &str = "</pos>";

/// Raw text of the six dictionary files.
#[derive(Debug, Clone, Copy)]
pub struct DictionarySources<'a> {
    pub prefixes: &'a str,
    pub stems: &'a str,
    pub suffixes: &'a str,
    pub prefix_stem: &'a str,
    pub stem_suffix: &'a str,
    /// The prefix/suffix table is optional; it is never consulted.
    pub prefix_suffix: Option<&'a str>,
}

/// Parse all dictionary files into a [`Dictionary`].
pub fn parse_dictionary(sources: &DictionarySources<'_>) -> Result<Dictionary, DictError> {
    let prefixes = parse_affixes(sources.prefixes, "dictprefixes")?;
    let stems = parse_stems(sources.stems)?;
    let suffixes = parse_affixes(sources.suffixes, "dictsuffixes")?;
    let prefix_stem = parse_matrix(sources.prefix_stem, "tableab")?;
    let stem_suffix = parse_matrix(sources.stem_suffix, "tablebc")?;
    let prefix_suffix = match sources.prefix_suffix {
        Some(text) => parse_matrix(text, "tableac")?,
        None => CompatibilityMatrix::new(),
    };

    Ok(Dictionary::from_parts(
        prefixes,
        stems,
        suffixes,
        prefix_stem,
        stem_suffix,
        prefix_suffix,
    ))
}

/// A lexicon line split into its four fields.
struct RawEntry<'a> {
    surface: &'a str,
    vowelled: &'a str,
    category: &'a str,
    gloss: &'a str,
}

fn split_entry<'a>(
    line: &'a str,
    table: &'static str,
    line_no: usize,
) -> Result<RawEntry<'a>, DictError> {
    let mut fields = line.split('\t');
    // split always yields at least one item
    let surface = fields.next().unwrap_or("");
    let vowelled = fields.next().ok_or(DictError::MissingField {
        table,
        line: line_no,
        field: "vowelled",
    })?;
    let category = fields
        .next()
        .ok_or(DictError::MissingField {
            table,
            line: line_no,
            field: "category",
        })?
        .trim();
    if category.is_empty() {
        return Err(DictError::EmptyCategory {
            table,
            line: line_no,
        });
    }
    let gloss = fields.next().unwrap_or("");

    Ok(RawEntry {
        surface: surface.trim(),
        vowelled: vowelled.trim(),
        category,
        gloss,
    })
}

/// Split a `<pos>TAG</pos>` annotation off a gloss.
///
/// Returns the remaining gloss and the tag, if present.
pub fn split_pos_tag(gloss: &str) -> (String, Option<String>) {
    let Some(open) = gloss.find(POS_OPEN) else {
        return (gloss.trim().to_string(), None);
    };
    let inner_start = open + POS_OPEN.len();
    let Some(close_rel) = gloss[inner_start..].find(POS_CLOSE) else {
        return (gloss.trim().to_string(), None);
    };
    let close = inner_start + close_rel;
    let tag = gloss[inner_start..close].trim().to_string();
    let rest = format!("{}{}", &gloss[..open], &gloss[close + POS_CLOSE.len()..]);
    (rest.trim().to_string(), Some(tag))
}

/// Default part-of-speech tag for a stem category.
pub fn pos_for_category(category: &str) -> Option<&'static str> {
    if category.starts_with("PV") {
        Some("VERB_PERFECT")
    } else if category.starts_with("IV") {
        Some("VERB_IMPERFECT")
    } else if category.starts_with("CV") {
        Some("VERB_IMPERATIVE")
    } else if category.starts_with('N') {
        Some("NOUN")
    } else {
        None
    }
}

fn is_skipped(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT)
}

/// Parse a prefix or suffix lexicon.
pub fn parse_affixes(
    text: &str,
    table: &'static str,
) -> Result<HashMap<String, Vec<AffixEntry>>, DictError> {
    let mut out: HashMap<String, Vec<AffixEntry>> = HashMap::new();
    for (idx, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let raw = split_entry(line, table, idx + 1)?;
        let (gloss, _) = split_pos_tag(raw.gloss);
        out.entry(raw.surface.to_string())
            .or_default()
            .push(AffixEntry::new(raw.category, raw.vowelled, gloss));
    }
    Ok(out)
}

/// Parse the stem lexicon, tracking `;--- ROOT` markers.
pub fn parse_stems(text: &str) -> Result<HashMap<String, Vec<StemEntry>>, DictError> {
    const TABLE: &str = "dictstems";

    let mut out: HashMap<String, Vec<StemEntry>> = HashMap::new();
    let mut root: Option<String> = None;

    for (idx, line) in text.lines().enumerate() {
        if let Some(rest) = line.strip_prefix(ROOT_MARKER) {
            root = rest.split_whitespace().next().map(str::to_string);
            continue;
        }
        if is_skipped(line) {
            continue;
        }
        let raw = split_entry(line, TABLE, idx + 1)?;
        let (gloss, tag) = split_pos_tag(raw.gloss);
        let pos = tag.or_else(|| pos_for_category(raw.category).map(str::to_string));

        let mut entry = StemEntry::new(raw.category, raw.vowelled, gloss);
        entry.root = root.clone();
        entry.pos = pos;
        out.entry(raw.surface.to_string()).or_default().push(entry);
    }
    Ok(out)
}

/// Parse a compatibility table.
pub fn parse_matrix(text: &str, table: &'static str) -> Result<CompatibilityMatrix, DictError> {
    let mut matrix = CompatibilityMatrix::new();
    for (idx, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let mut cats = line.split_whitespace();
        match (cats.next(), cats.next(), cats.next()) {
            (Some(left), Some(right), None) => matrix.allow(left, right),
            _ => {
                return Err(DictError::InvalidMatrixLine {
                    table,
                    line: idx + 1,
                });
            }
        }
    }
    Ok(matrix)
}
