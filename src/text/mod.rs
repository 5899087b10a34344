//! Text measurement and fitting.
//!
//! Chart layout needs text extents before any real rasterization happens,
//! so measurement sits behind the [`TextMeasurer`] trait: hosts plug in
//! their actual font metrics, while [`HeuristicTextMeasurer`] gives rough
//! average-glyph-width bounds that are good enough for layout decisions
//! and for tests.

mod fit;

pub use fit::{
    ellipsify_to_width, fit_axis_label, is_ellipsified, rotated_bounding_box,
    wrap_or_ellipsify_to_width, AxisLabelFit, FittedText,
};

use crate::element::FontSpec;

/// Measured extents of a (possibly multi-line) piece of text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Text measurement interface used by the layout engine.
///
/// All widths and heights are in the same canvas units as the emitted
/// elements.
pub trait TextMeasurer {
    /// Extents of `text` at `font`; embedded `\n` starts a new line.
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics;

    /// Greedily wrap `text` at whitespace so no line exceeds `max_width`
    /// (single words wider than the budget land on their own line).
    fn wrap(&self, text: &str, font: &FontSpec, max_width: f64) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if self.measure(&candidate, font).width <= max_width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(current);
                }
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }

    /// Narrowest width at which a line can still hold one glyph
    fn min_line_width(&self, font: &FontSpec) -> f64;
}

/// Average-glyph-width measurer: ~0.6 em per glyph, one line height per
/// line. Real fonts differ per glyph, but the layout only needs a stable
/// estimate with the right order of magnitude.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    glyph_width_em: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { glyph_width_em: 0.6 }
    }
}

impl HeuristicTextMeasurer {
    pub fn new(glyph_width_em: f64) -> Self {
        Self { glyph_width_em }
    }

    fn glyph_width(&self, font: &FontSpec) -> f64 {
        self.glyph_width_em * font.size
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics {
        let mut line_count = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            line_count += 1;
            widest = widest.max(line.chars().count());
        }
        TextMetrics {
            width: widest as f64 * self.glyph_width(font),
            height: line_count as f64 * font.line_height_px(),
        }
    }

    fn min_line_width(&self, font: &FontSpec) -> f64 {
        self.glyph_width(font)
    }
}
