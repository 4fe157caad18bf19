// cesura-hyphenate: hyphenate words with a TeX pattern file.
//
// Reads words from the command line (or stdin, one per line) and prints
// the hyphenated form, using '-' as the default separator.
//
// Usage:
//   cesura-hyphenate -p PATTERNS.tex [OPTIONS] [WORD...]
//
// Options:
//   -p, --patterns PATH    TeX pattern file (or set CESURA_PATTERNS)
//   --separator SEP        Separator inserted at break points (default: -)
//   --left-min N           Runes kept unbroken at the left edge (default: 2)
//   --right-min N          Runes kept unbroken at the right edge (default: 2)
//   --stats                Print index statistics to stderr after loading
//   -h, --help             Print help

use std::fs::File;
use std::io::{self, BufRead, Write};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (patterns_arg, args) = cesura_cli::parse_patterns_path(&args);

    if cesura_cli::wants_help(&args) {
        println!("cesura-hyphenate: hyphenate words with a TeX pattern file.");
        println!();
        println!("Usage: cesura-hyphenate -p PATTERNS.tex [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, hyphenates each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -p, --patterns PATH    TeX pattern file (or set CESURA_PATTERNS)");
        println!("  --separator SEP        Separator inserted at break points (default: -)");
        println!("  --left-min N           Runes kept unbroken at the left edge (default: 2)");
        println!("  --right-min N          Runes kept unbroken at the right edge (default: 2)");
        println!("  --stats                Print index statistics to stderr after loading");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut separator = "-".to_string();
    let mut left_min: u8 = 2;
    let mut right_min: u8 = 2;
    let mut show_stats = false;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => {
                if i + 1 < args.len() {
                    separator = args[i + 1].clone();
                    skip_next = true;
                }
            }
            "--left-min" => {
                if i + 1 < args.len() {
                    left_min = args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| cesura_cli::fatal("invalid number for --left-min"));
                    skip_next = true;
                }
            }
            "--right-min" => {
                if i + 1 < args.len() {
                    right_min = args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| cesura_cli::fatal("invalid number for --right-min"));
                    skip_next = true;
                }
            }
            "--stats" => show_stats = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let Some(patterns_path) = cesura_cli::resolve_patterns_path(patterns_arg) else {
        cesura_cli::fatal("no pattern file: pass -p PATH or set CESURA_PATTERNS");
    };
    let file = File::open(&patterns_path)
        .unwrap_or_else(|e| cesura_cli::fatal(&format!("cannot open {patterns_path}: {e}")));
    let mut dict = cesura::tex::load_dictionary(&patterns_path, file)
        .unwrap_or_else(|e| cesura_cli::fatal(&format!("cannot load {patterns_path}: {e}")));
    dict.set_edge_minimums(left_min, right_min);

    if show_stats {
        let stats = dict.stats();
        eprintln!(
            "{}: backend={} slots={}/{} max_state={} fill={:.3} skipped={}",
            dict.identifier(),
            stats.backend,
            stats.used_slots,
            stats.total_slots,
            stats.max_state_id,
            stats.fill_ratio,
            stats.skipped_patterns,
        );
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let emit = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = dict.hyphenate(word).join(&separator);
        let _ = writeln!(out, "{result}");
    };

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
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            emit(word, &mut out);
        }
    } else {
        for word in &words {
            emit(word, &mut out);
        }
    }
}
