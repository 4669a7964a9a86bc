//! Output formatting for match results

use crate::result::ResultCollection;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Matches found for one input line of a batch scan
#[derive(Debug, Clone, Serialize)]
pub struct LineMatches {
    /// 1-based line number in the input
    pub line: usize,
    /// The phrase that was searched (after normalization)
    pub phrase: String,
    pub matches: ResultCollection,
}

/// Open stdout with color enabled or disabled
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print matches one per line, highlighted
pub fn print_matches<W: WriteColor>(out: &mut W, matches: &[String]) -> io::Result<()> {
    for m in matches {
        print_entry(out, m)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print batch results in `line:phrase` form followed by the matches
///
/// Lines without matches are skipped.
pub fn print_line_matches<W: WriteColor>(out: &mut W, lines: &[LineMatches]) -> io::Result<()> {
    for entry in lines.iter().filter(|l| !l.matches.is_empty()) {
        // Print line number
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", entry.line)?;
        out.reset()?;
        write!(out, ":{}", entry.phrase)?;

        write!(out, " ->")?;
        for m in &entry.matches {
            write!(out, " ")?;
            print_entry(out, m)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print any serializable value as one line of JSON
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print a dictionary entry with its surrounding spaces made visible
fn print_entry<W: WriteColor>(out: &mut W, entry: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    if entry.starts_with(' ') || entry.ends_with(' ') {
        write!(out, "{:?}", entry)?;
    } else {
        write!(out, "{}", entry)?;
    }
    out.reset()
}
