//! Query acquisition
//!
//! Reads the search term from an interactive prompt. Only the line
//! terminator is removed; anything else the user typed is used verbatim.

use crate::error::SearchResult;
use std::io::{BufRead, Write};

/// Prompt printed before reading the query
pub const PROMPT: &str = "Please enter a search term: ";

/// Print the prompt and read one query line
pub fn prompt_query<R, W>(input: &mut R, output: &mut W, default: &str) -> SearchResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    read_query(input, default)
}

/// Read one line, substituting `default` when it is empty
pub fn read_query<R: BufRead>(input: &mut R, default: &str) -> SearchResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(resolve(strip_line_ending(&line), default))
}

/// Pick the query for a line with its terminator already removed
pub fn resolve(line: &str, default: &str) -> String {
    if line.is_empty() {
        default.to_string()
    } else {
        line.to_string()
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
