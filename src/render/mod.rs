//! Chart rendering.
//!
//! [`ChartEngine`] owns the injected configuration (palette, text
//! measurer, random source) and turns a [`Spreadsheet`] into an ordered
//! list of [`Element`] descriptors. Shared services live in `cartesian`
//! (slot layout, axes, rotated labels) and `legend`; the chart types are
//! `bar`, `line`, and `radar`.

mod bar;
mod cartesian;
mod legend;
mod line;
mod radar;

pub use cartesian::CartesianChartLayout;

use tracing::debug;

use crate::color::{color_offset, series_colors, RandomSource, ThreadRandomSource, DEFAULT_PALETTE};
use crate::constants::COLOR_TRANSPARENT;
use crate::element::{Element, FontSpec};
use crate::parse::{try_parse_spreadsheet, ParseError};
use crate::text::{HeuristicTextMeasurer, TextMeasurer};
use crate::types::{ChartType, Spreadsheet};

/// Per-render color assignment: the chart's background hue plus one color
/// per series
pub(crate) struct ColorScheme {
    pub background: String,
    pub series: Vec<String>,
}

/// Renders spreadsheets into drawable elements.
///
/// Construction wires the defaults (built-in palette, heuristic text
/// measurer, thread RNG); hosts and tests override them through the
/// `with_*` builders. Rendering takes `&mut self` because unseeded renders
/// consume the random source; everything else is pure.
pub struct ChartEngine {
    palette: Vec<String>,
    measurer: Box<dyn TextMeasurer>,
    random: Box<dyn RandomSource>,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngine {
    pub fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.clone(),
            measurer: Box::new(HeuristicTextMeasurer::default()),
            random: Box::new(ThreadRandomSource),
        }
    }

    /// Replace the palette colors the engine draws from
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the text measurement backend
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Replace the random source used for unseeded color offsets
    pub fn with_random_source(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub(crate) fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Render `spreadsheet` as `chart_type` anchored at `(x, y)` (`y` is
    /// the chart baseline).
    ///
    /// Returns `None` when the chart type cannot represent the data (radar
    /// with fewer than 3 dimensions). An identical `color_seed` makes the
    /// series-to-color assignment reproducible.
    pub fn render(
        &mut self,
        chart_type: ChartType,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        color_seed: Option<f64>,
    ) -> Option<Vec<Element>> {
        debug!(
            chart_type = chart_type.label(),
            series = spreadsheet.series.len(),
            dimensions = spreadsheet.dimension_count(),
            "rendering spreadsheet"
        );
        match chart_type {
            ChartType::Bar => Some(self.render_bar_chart(spreadsheet, x, y, color_seed)),
            ChartType::Line => Some(self.render_line_chart(spreadsheet, x, y, color_seed)),
            ChartType::Radar => self.render_radar_chart(spreadsheet, x, y, color_seed),
        }
    }

    /// The paste pipeline: sniff and parse `text`, then render it.
    ///
    /// Parse failures come back as `Err`; a successful parse that the
    /// chart type cannot represent yields `Ok(None)`.
    pub fn render_pasted_text(
        &mut self,
        chart_type: ChartType,
        text: &str,
        x: f64,
        y: f64,
        color_seed: Option<f64>,
    ) -> Result<Option<Vec<Element>>, ParseError> {
        let spreadsheet = try_parse_spreadsheet(text)?;
        Ok(self.render(chart_type, &spreadsheet, x, y, color_seed))
    }

    /// Resolve the render's color assignment from the seed (or the random
    /// source) and the injected palette
    pub(crate) fn color_scheme(&mut self, series_count: usize, color_seed: Option<f64>) -> ColorScheme {
        let offset = color_offset(self.palette.len(), color_seed, self.random.as_mut());
        let background = self
            .palette
            .get(offset)
            .cloned()
            .unwrap_or_else(|| COLOR_TRANSPARENT.to_string());
        // An empty injected palette still yields one color per series so
        // renderers can index freely.
        let series = if self.palette.is_empty() {
            vec![background.clone(); series_count]
        } else {
            series_colors(&self.palette, series_count, offset)
        };
        ColorScheme { background, series }
    }

    /// Wrap `text` at whitespace when it contains any, otherwise leave it
    /// alone; titles and radial labels never ellipsify
    pub(crate) fn display_text(&self, text: &str, font: &FontSpec, max_width: f64) -> String {
        if text.trim().chars().any(char::is_whitespace) {
            self.measurer.wrap(text, font, max_width)
        } else {
            text.to_string()
        }
    }
}
