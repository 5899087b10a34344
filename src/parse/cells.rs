//! Grid classification: turning rows x columns of trimmed strings into a
//! normalized [`Spreadsheet`].
//!
//! The branching is driven entirely by column count:
//!
//! - 1 column: a single unlabeled series, header optional.
//! - 2 columns: first column is always labels, second is the values. This
//!   holds even when the first column is numeric-looking; "always
//!   interprets 2-column data as label in first column" is intentional and
//!   must not be changed without product sign-off.
//! - 3+ columns: columns become series ("tall"), unless there are more
//!   value columns than data rows, in which case rows become series
//!   ("wide", see [`is_wide_layout`]).

use tracing::debug;

use crate::parse::error::{ParseError, ParseResult};
use crate::parse::number::try_parse_number;
use crate::types::{Spreadsheet, SpreadsheetSeries};

/// Whether every data cell of `column` (all rows but the first) is numeric
fn is_numeric_column(cells: &[Vec<String>], column: usize) -> bool {
    cells[1..]
        .iter()
        .all(|row| try_parse_number(&row[column]).is_some())
}

/// A first row whose every cell is non-numeric is a header row
fn is_header_row(row: &[String]) -> bool {
    row.iter().all(|cell| try_parse_number(cell).is_none())
}

/// Wide data has more value columns than data rows; rows are then
/// reinterpreted as series so e.g. a one-row grid still charts.
fn is_wide_layout(value_columns: usize, data_rows: usize) -> bool {
    value_columns > data_rows
}

/// Non-empty trimmed cell content, or `None`
fn non_blank(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Classify a rectangular grid of trimmed cells.
///
/// The caller guarantees at least one row and equal row lengths (the
/// delimiter sniffer enforces both).
pub fn try_parse_cells(cells: &[Vec<String>]) -> ParseResult {
    let num_cols = cells[0].len();

    if num_cols > 2 {
        return parse_multi_column(cells, num_cols);
    }

    if num_cols == 1 {
        return parse_single_column(cells);
    }

    parse_label_value_columns(cells)
}

/// 3+ columns: first column is labels, remaining columns are series values,
/// unless the wide heuristic transposes the grid.
fn parse_multi_column(cells: &[Vec<String>], num_cols: usize) -> ParseResult {
    let has_header = is_header_row(&cells[0]);
    let rows = if has_header { &cells[1..] } else { cells };

    if rows.is_empty() {
        return Err(ParseError::NoDataRows);
    }

    let has_non_numeric_value = rows
        .iter()
        .any(|row| row[1..].iter().any(|value| try_parse_number(value).is_none()));
    if has_non_numeric_value {
        return Err(ParseError::NonNumericValue);
    }

    let num_value_cols = num_cols - 1;
    if is_wide_layout(num_value_cols, rows.len()) {
        let labels = has_header.then(|| {
            cells[0][1..]
                .iter()
                .map(|header| header.trim().to_string())
                .collect()
        });
        let series: Vec<SpreadsheetSeries> = rows
            .iter()
            .map(|row| SpreadsheetSeries {
                title: non_blank(&row[0]),
                values: row[1..]
                    .iter()
                    .filter_map(|value| try_parse_number(value))
                    .collect(),
            })
            .collect();
        let title = if series.len() == 1 {
            series[0].title.clone()
        } else if has_header {
            non_blank(&cells[0][0])
        } else {
            None
        };

        debug!(
            series = series.len(),
            dimensions = num_value_cols,
            "parsed wide grid by transposing rows into series"
        );
        return Ok(Spreadsheet {
            title,
            labels,
            series,
        });
    }

    let series = cells[0][1..]
        .iter()
        .enumerate()
        .map(|(index, series_title)| {
            let value_column = index + 1;
            let fallback_title = format!("Series {value_column}");
            SpreadsheetSeries {
                title: Some(if has_header {
                    non_blank(series_title).unwrap_or(fallback_title)
                } else {
                    fallback_title
                }),
                values: rows
                    .iter()
                    .filter_map(|row| try_parse_number(&row[value_column]))
                    .collect(),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        series = series.len(),
        dimensions = rows.len(),
        has_header,
        "parsed tall grid"
    );
    Ok(Spreadsheet {
        title: if has_header {
            non_blank(&cells[0][0])
        } else {
            None
        },
        labels: Some(rows.iter().map(|row| row[0].clone()).collect()),
        series,
    })
}

/// 1 column: a single series of values with no labels
fn parse_single_column(cells: &[Vec<String>]) -> ParseResult {
    if !is_numeric_column(cells, 0) {
        return Err(ParseError::NonNumericValue);
    }

    let has_header = try_parse_number(&cells[0][0]).is_none();
    let title = has_header.then(|| cells[0][0].clone());
    let rows = if has_header { &cells[1..] } else { cells };
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| try_parse_number(&row[0]))
        .collect();

    if values.len() < 2 {
        return Err(ParseError::TooFewRows);
    }

    debug!(dimensions = values.len(), "parsed single-column grid");
    Ok(Spreadsheet {
        title: title.clone(),
        labels: None,
        series: vec![SpreadsheetSeries { title, values }],
    })
}

/// 2 columns: first column is always labels, second is the one series
fn parse_label_value_columns(cells: &[Vec<String>]) -> ParseResult {
    let has_header = try_parse_number(&cells[0][1]).is_none();
    let rows = if has_header { &cells[1..] } else { cells };

    if rows.len() < 2 {
        return Err(ParseError::TooFewLabeledRows);
    }

    if rows.iter().any(|row| try_parse_number(&row[1]).is_none()) {
        return Err(ParseError::NonNumericValue);
    }

    let title = has_header.then(|| cells[0][1].clone());

    debug!(dimensions = rows.len(), "parsed label/value grid");
    Ok(Spreadsheet {
        title: title.clone(),
        labels: Some(rows.iter().map(|row| row[0].clone()).collect()),
        series: vec![SpreadsheetSeries {
            title,
            values: rows
                .iter()
                .filter_map(|row| try_parse_number(&row[1]))
                .collect(),
        }],
    })
}
