// sarf-translit: Convert text between Buckwalter ASCII, Arabic script and
// ALA-LC romanization.
//
// Does not need a dictionary.
//
// Usage:
//   sarf-translit [--from ENC] [--to ENC] [TEXT...]
//
// Encodings: ascii, arabic, roman. Default: --from ascii --to arabic.

use std::io::{self, BufRead, Write};

use sarf_core::Encoding;

fn parse_encoding(value: Option<String>, default: Encoding) -> Encoding {
    match value {
        Some(name) => Encoding::from_name(&name)
            .unwrap_or_else(|| sarf_cli::fatal(&format!("unknown encoding: {name}"))),
        None => default,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if sarf_cli::wants_help(&args) {
        println!("sarf-translit: Convert between Arabic text encodings.");
        println!();
        println!("Usage: sarf-translit [--from ENC] [--to ENC] [TEXT...]");
        println!();
        println!("Encodings: ascii (Buckwalter), arabic, roman (ALA-LC).");
        println!("If TEXT arguments are given, converts each one.");
        println!("Otherwise converts stdin line by line.");
        println!();
        println!("Options:");
        println!("  -f, --from ENC   Source encoding (default: ascii)");
        println!("  -t, --to ENC     Target encoding (default: arabic)");
        println!("  -h, --help       Print this help");
        return;
    }

    let (from, args) = sarf_cli::take_option(&args, "--from", "-f");
    let (to, texts) = sarf_cli::take_option(&args, "--to", "-t");
    let from = parse_encoding(from, Encoding::AsciiEncoded);
    let to = parse_encoding(to, Encoding::NativeScript);

    if from == Encoding::Romanized {
        sarf_cli::fatal("romanized text cannot be converted back");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let _ = writeln!(out, "{}", Encoding::convert(&line, from, to));
        }
    } else {
        for text in &texts {
            let _ = writeln!(out, "{}", Encoding::convert(text, from, to));
        }
    }
}
