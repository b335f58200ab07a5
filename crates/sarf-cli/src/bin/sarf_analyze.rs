// sarf-analyze: Morphological analysis of Arabic words.
//
// Reads text from stdin or words from the command line and prints
// every analysis of each word. Words without an analysis get the not-found
// placeholder.
//
// Usage:
//   sarf-analyze [-d DICT_PATH] [--json] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing dictstems etc.
//       --json             Print one JSON array per word
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use sarf_ar::{AnalysisResult, SarfHandle};

/// All analyses of a word, or the not-found placeholder.
fn analyze_word(handle: &SarfHandle, word: &str) -> Vec<AnalysisResult> {
    let results = handle.analyze(word);
    if results.is_empty() {
        vec![handle.info_for_word(word)]
    } else {
        results
    }
}

fn print_results(out: &mut impl Write, word: &str, results: &[AnalysisResult], json: bool) {
    if json {
        match serde_json::to_string(results) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => eprintln!("error serializing {word}: {e}"),
        }
        return;
    }

    let _ = writeln!(out, "{word}:");
    for (i, r) in results.iter().enumerate() {
        let _ = writeln!(out, "  Analysis {}:", i + 1);
        let _ = writeln!(out, "    vowelled={}", r.vowelled);
        let _ = writeln!(out, "    transliteration={}", r.transliteration);
        let _ = writeln!(out, "    root={}", r.root);
        let _ = writeln!(out, "    pos={}", r.pos);
        let _ = writeln!(out, "    gloss={}", r.gloss);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = sarf_cli::parse_dict_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-analyze: Morphological analysis of Arabic words.");
        println!();
        println!("Usage: sarf-analyze [-d DICT_PATH] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads text from stdin and analyzes every token.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing dictstems");
        println!("      --json             Print results as JSON");
        println!("  -h, --help             Print this help");
        return;
    }

    let json = sarf_cli::has_flag(&args, "--json");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let handle =
        sarf_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            for analysis in handle.analyze_text(&line) {
                print_results(&mut out, &analysis.token, &analysis.results, json);
            }
        }
    } else {
        for word in &words {
            let results = analyze_word(&handle, word);
            print_results(&mut out, word, &results, json);
        }
    }
}
