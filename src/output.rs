//! Output formatting for matches and diagnostics

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::query::QueryOutput;

/// Print matched entry names to stdout, one per line, in traversal order.
pub fn print_matches(matches: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in matches {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Print the whole query output as pretty-printed JSON to stdout.
pub fn print_json(output: &QueryOutput) -> io::Result<()> {
    let json = serde_json::to_string_pretty(output).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Print diagnostics to stderr, one per line, prefixed with
/// `heft: warning:`. The prefix is colored yellow when `use_color` is set.
pub fn print_diagnostics(diagnostics: &[String], use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    for note in diagnostics {
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stderr, "heft: warning:")?;
        stderr.reset()?;
        writeln!(stderr, " {}", note)?;
    }
    Ok(())
}
