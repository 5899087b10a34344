//! Chartboard turns pasted tabular text into chart drawings.
//!
//! The pipeline has two halves:
//!
//! 1. **Parsing** ([`parse`]): raw delimited text (or a pre-split grid of
//!    cells) is classified into a normalized [`Spreadsheet`] — optional
//!    title, optional per-dimension labels, one or more numeric series —
//!    inferring delimiter, orientation, and headers without a schema.
//! 2. **Rendering** ([`render`]): a [`ChartEngine`] lays the spreadsheet
//!    out as a grouped bar, multi-series line, or radar chart and emits
//!    plain [`Element`] descriptors (rectangles, lines, ellipses, text)
//!    for the host canvas to realize.
//!
//! Everything is synchronous and free of I/O. Renders are deterministic
//! when given an explicit color seed; without one, the engine's injected
//! random source varies the palette rotation.

pub mod color;
pub mod constants;
pub mod element;
pub mod parse;
pub mod render;
pub mod text;
pub mod types;

pub use color::{FixedRandomSource, RandomSource, ThreadRandomSource, DEFAULT_PALETTE};
pub use element::{
    Element, ElementKind, FillStyle, FontFamily, FontSpec, Roundness, StrokeStyle, TextAlign,
    TextContent, VerticalAlign,
};
pub use parse::{try_parse_cells, try_parse_number, try_parse_spreadsheet, ParseError, ParseResult};
pub use render::{CartesianChartLayout, ChartEngine};
pub use text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics};
pub use types::{ChartType, Spreadsheet, SpreadsheetSeries};
