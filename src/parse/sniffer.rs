//! Delimiter sniffing for pasted text.
//!
//! Pastes arrive from Excel, Google Sheets, TSV/CSV exports, and
//! semicolon-separated locales with no schema attached. The sniffer splits
//! the text with each known delimiter and keeps the first one that yields a
//! consistent, multi-column grid.

use tracing::debug;

use crate::parse::cells::try_parse_cells;
use crate::parse::error::{ParseError, ParseResult};

/// Delimiters tried in priority order
const DELIMITERS: [char; 3] = ['\t', ',', ';'];

/// One delimiter's attempt at splitting the pasted text
pub(crate) struct DelimiterCandidate {
    pub delimiter: char,
    pub rows: Vec<Vec<String>>,
    pub columns: usize,
    pub consistent: bool,
}

/// Normalize line endings and drop blank lines
fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn candidate_for(lines: &[&str], delimiter: char) -> DelimiterCandidate {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            line.split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();
    let columns = rows.first().map_or(0, Vec::len);
    let consistent = !rows.is_empty() && rows.iter().all(|row| row.len() == columns);
    DelimiterCandidate {
        delimiter,
        rows,
        columns,
        consistent,
    }
}

/// Pick the delimiter whose split looks most like a spreadsheet: the first
/// consistent candidate with more than one column, else the first
/// consistent one, else the tab split even when inconsistent (the priority
/// order of [`DELIMITERS`] breaks ties).
pub(crate) fn choose_delimiter(lines: &[&str]) -> DelimiterCandidate {
    let mut candidates: Vec<DelimiterCandidate> = DELIMITERS
        .iter()
        .map(|&delimiter| candidate_for(lines, delimiter))
        .collect();

    let chosen = candidates
        .iter()
        .position(|c| c.consistent && c.columns > 1)
        .or_else(|| candidates.iter().position(|c| c.consistent))
        .unwrap_or(0);
    candidates.swap_remove(chosen)
}

/// Parse raw pasted text into a [`crate::types::Spreadsheet`].
///
/// Fails with `"No values"` for blank input and `"All rows don't have same
/// number of columns"` for ragged input; everything else is delegated to
/// [`try_parse_cells`].
pub fn try_parse_spreadsheet(text: &str) -> ParseResult {
    let lines = non_blank_lines(text);
    let candidate = choose_delimiter(&lines);

    if candidate.rows.is_empty() {
        return Err(ParseError::NoValues);
    }
    if !candidate.consistent {
        return Err(ParseError::InconsistentColumns);
    }

    debug!(
        delimiter = ?candidate.delimiter,
        rows = candidate.rows.len(),
        columns = candidate.columns,
        "sniffed pasted text"
    );
    try_parse_cells(&candidate.rows)
}
