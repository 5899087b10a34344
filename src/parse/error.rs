//! Error types for spreadsheet parsing.
//!
//! Parse failures are values, not panics. The display text is the
//! user-facing diagnostic; callers surface it directly and re-prompt for
//! different input rather than branching on the variant.

use thiserror::Error;

use crate::types::Spreadsheet;

/// Reasons pasted data could not be understood as a spreadsheet
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no non-blank lines
    #[error("No values")]
    NoValues,

    /// The chosen delimiter produced rows of differing lengths
    #[error("All rows don't have same number of columns")]
    InconsistentColumns,

    /// A cell in a value column did not parse as a number
    #[error("Value is not numeric")]
    NonNumericValue,

    /// Single-column input needs at least two data rows
    #[error("Less than two rows")]
    TooFewRows,

    /// Two-column input needs at least two data rows
    #[error("Less than 2 rows")]
    TooFewLabeledRows,

    /// Wide input lost all its rows to the header
    #[error("No data rows")]
    NoDataRows,
}

/// Result type alias for parsing operations
pub type ParseResult = Result<Spreadsheet, ParseError>;
