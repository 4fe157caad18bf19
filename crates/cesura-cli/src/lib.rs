// cesura-cli: shared utilities for CLI tools.

use std::process;

/// Environment variable consulted when no pattern file is given.
pub const PATTERNS_ENV: &str = "CESURA_PATTERNS";

/// Parses a `--patterns=PATH`, `--patterns PATH`, or `-p PATH` argument
/// from command line args.
///
/// Returns `(patterns_path, remaining_args)`.
pub fn parse_patterns_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut patterns_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--patterns=") {
            patterns_path = Some(value.to_string());
        } else if arg == "--patterns" || arg == "-p" {
            if i + 1 < args.len() {
                patterns_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (patterns_path, remaining)
}

/// Resolves the pattern file path from the argument or the
/// `CESURA_PATTERNS` environment variable.
pub fn resolve_patterns_path(arg: Option<String>) -> Option<String> {
    arg.or_else(|| std::env::var(PATTERNS_ENV).ok())
}

/// Prints an error message and exits with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Checks if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
