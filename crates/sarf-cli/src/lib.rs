// sarf-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use sarf_ar::handle::{SarfError, SarfHandle};
use sarf_dict::format::DictionarySources;

/// Default dictionary directory name under the search roots.
const DICT_SUBDIR: &str = "buckwalter";

/// Stem lexicon file name; its presence marks a dictionary directory.
const STEMS_FILE: &str = "dictstems";

const PREFIXES_FILE: &str = "dictprefixes";
const SUFFIXES_FILE: &str = "dictsuffixes";
const TABLE_AB: &str = "tableab";
const TABLE_BC: &str = "tablebc";
const TABLE_AC: &str = "tableac";

/// Search for dictionary files and create a SarfHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SARF_DICT_PATH` environment variable
/// 3. `~/.sarf/buckwalter`
/// 4. System directories under `/usr/share/sarf` and `/usr/local/share/sarf`
/// 5. Current working directory
pub fn load_handle(dict_path: Option<&str>) -> Result<SarfHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if dir.join(STEMS_FILE).is_file() {
            return load_from_dir(dir);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        STEMS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn read_required(dir: &Path, name: &str) -> Result<String, String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Load all dictionary files from one directory.
///
/// `tableac` is optional; the other five files are required.
pub fn load_from_dir(dir: &Path) -> Result<SarfHandle, String> {
    let prefixes = read_required(dir, PREFIXES_FILE)?;
    let stems = read_required(dir, STEMS_FILE)?;
    let suffixes = read_required(dir, SUFFIXES_FILE)?;
    let ab = read_required(dir, TABLE_AB)?;
    let bc = read_required(dir, TABLE_BC)?;

    let ac_path = dir.join(TABLE_AC);
    let ac = if ac_path.is_file() {
        Some(read_required(dir, TABLE_AC)?)
    } else {
        None
    };

    let sources = DictionarySources {
        prefixes: &prefixes,
        stems: &stems,
        suffixes: &suffixes,
        prefix_stem: &ab,
        stem_suffix: &bc,
        prefix_suffix: ac.as_deref(),
    };
    SarfHandle::from_text(&sources)
        .map_err(|e: SarfError| format!("{}: {e}", dir.display()))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SARF_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("SARF_DICT_PATH") {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(DICT_SUBDIR));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".sarf").join(DICT_SUBDIR));
    }

    // 4. System paths
    paths.push(PathBuf::from("/usr/share/sarf").join(DICT_SUBDIR));
    paths.push(PathBuf::from("/usr/local/share/sarf").join(DICT_SUBDIR));

    // 5. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Take the value of an option given as `--name=VALUE`, `--name VALUE` or
/// `-s VALUE` out of the argument list.
///
/// Returns `(value, remaining_args)`. Exits if the option has no value.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let long_eq = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", "-d")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check whether a boolean flag is present.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_dict_path_forms() {
        let (p, rest) = parse_dict_path(&args(&["-d", "/x", "word"]));
        assert_eq!(p.as_deref(), Some("/x"));
        assert_eq!(rest, args(&["word"]));

        let (p, rest) = parse_dict_path(&args(&["--dict-path=/y", "a", "b"]));
        assert_eq!(p.as_deref(), Some("/y"));
        assert_eq!(rest, args(&["a", "b"]));

        let (p, rest) = parse_dict_path(&args(&["a"]));
        assert_eq!(p, None);
        assert_eq!(rest, args(&["a"]));
    }

    #[test]
    fn take_option_custom_names() {
        let (v, rest) = take_option(&args(&["--from", "ascii", "ktb"]), "--from", "-f");
        assert_eq!(v.as_deref(), Some("ascii"));
        assert_eq!(rest, args(&["ktb"]));
    }

    #[test]
    fn flags() {
        let a = args(&["--json", "x"]);
        assert!(has_flag(&a, "--json"));
        assert!(!wants_help(&a));
        assert!(wants_help(&args(&["-h"])));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/tmp/dict"));
        assert_eq!(paths[0], PathBuf::from("/tmp/dict"));
    }

    #[test]
    fn load_from_fixture_dir() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../sarf-ar/tests/data");
        let handle = load_from_dir(&dir).unwrap();
        assert_eq!(handle.dictionary().surface_counts(), (6, 4, 6));
    }

    #[test]
    fn load_from_missing_dir_fails() {
        let err = load_from_dir(Path::new("/nonexistent/sarf")).unwrap_err();
        assert!(err.contains("dictprefixes"));
    }
}
