//! CLI entry point for heft

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use heft::{SizeQuery, print_diagnostics, print_json, print_matches};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Colors go to stderr (diagnostics), so that is the stream to check
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "Find files by size in a directory tree")]
#[command(version)]
struct Args {
    /// Directory to search recursively
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Size expression to compare against, e.g. 10MB or 2.5GiB
    /// (binary units; a bare number without a unit means zero bytes)
    #[arg(short = 's', long = "size")]
    size: Option<String>,

    /// Comparison operator: eq, le, ge, gt, lt (default: eq)
    #[arg(short = 'o', long = "operator", value_name = "OP")]
    operator: Option<String>,

    /// Output matches and diagnostics as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let mut query = SizeQuery::new(&args.path);
    if let Some(size) = args.size {
        query = query.with_size(size);
    }
    if let Some(operator) = args.operator {
        query = query.with_operator(operator);
    }

    let output = query.run();

    let result = if args.json {
        print_json(&output)
    } else {
        print_diagnostics(&output.diagnostics, should_use_color(args.color)).and_then(|_| {
            match &output.matches {
                Some(matches) => print_matches(matches),
                None => Ok(()),
            }
        })
    };

    if let Err(e) = result {
        eprintln!("heft: error writing output: {}", e);
        process::exit(1);
    }

    // A query that failed validation produced no result at all; signal that
    // to the shell even though the process itself never faults.
    if output.matches.is_none() {
        process::exit(1);
    }
}
