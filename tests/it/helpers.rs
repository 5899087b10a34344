//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides spreadsheet builders, a deterministic engine factory, and
//! element filters mirroring how the host distinguishes chart parts
//! (bars vs. legend pill, series lines vs. grid lines, and so on).

use chartboard::{
    ChartEngine, Element, ElementKind, FixedRandomSource, Spreadsheet, SpreadsheetSeries,
    StrokeStyle,
};

/// Build a spreadsheet from literals.
///
/// Pass an empty `labels` slice for unlabeled data.
pub fn spreadsheet(title: Option<&str>, labels: &[&str], series: &[(&str, &[f64])]) -> Spreadsheet {
    Spreadsheet {
        title: title.map(str::to_string),
        labels: if labels.is_empty() {
            None
        } else {
            Some(labels.iter().map(|label| label.to_string()).collect())
        },
        series: series
            .iter()
            .map(|(series_title, values)| SpreadsheetSeries {
                title: Some(series_title.to_string()),
                values: values.to_vec(),
            })
            .collect(),
    }
}

/// An engine whose unseeded renders are deterministic (random offset 0)
pub fn engine() -> ChartEngine {
    ChartEngine::new().with_random_source(FixedRandomSource(0))
}

/// Plain data rectangles: stroke width 1, fully opaque, no rounding.
/// Excludes the rounded legend pill and swatches.
pub fn bars(elements: &[Element]) -> Vec<&Element> {
    elements
        .iter()
        .filter(|element| {
            matches!(element.kind, ElementKind::Rectangle)
                && element.stroke_width == 1.0
                && element.opacity == 100
                && element.roundness.is_none()
        })
        .collect()
}

/// All text elements
pub fn texts(elements: &[Element]) -> Vec<&Element> {
    elements.iter().filter(|element| element.is_text()).collect()
}

/// Series polylines: open lines with the series stroke width
pub fn series_lines(elements: &[Element]) -> Vec<&Element> {
    elements
        .iter()
        .filter(|element| {
            matches!(element.kind, ElementKind::Line { polygon: false, .. })
                && element.stroke_width == 2.0
        })
        .collect()
}

/// Closed series polygons (radar)
pub fn polygons(elements: &[Element]) -> Vec<&Element> {
    elements
        .iter()
        .filter(|element| {
            matches!(element.kind, ElementKind::Line { polygon: true, .. })
                && element.stroke_width == 2.0
        })
        .collect()
}

/// Data point dots: stroke-width-2 ellipses
pub fn dots(elements: &[Element]) -> Vec<&Element> {
    elements
        .iter()
        .filter(|element| {
            matches!(element.kind, ElementKind::Ellipse) && element.stroke_width == 2.0
        })
        .collect()
}

/// The solid horizontal x-axis line (points on y = 0, positive extent)
pub fn x_axis_line(elements: &[Element]) -> Option<&Element> {
    elements.iter().find(|element| {
        element.stroke_style == StrokeStyle::Solid
            && element.stroke_width == 1.0
            && element
                .line_points()
                .is_some_and(|points| {
                    points.len() == 2
                        && points[0] == (0.0, 0.0)
                        && points[1].1 == 0.0
                        && points[1].0 > 0.0
                })
    })
}

/// The `original_text` of a text element, if any
pub fn original_text(element: &Element) -> Option<&str> {
    element
        .text_content()
        .map(|content| content.original_text.as_str())
}

/// Rotated axis-aligned bounds of a (possibly angled) text element
pub struct RotatedBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub center_x: f64,
}

pub fn rotated_bounds(element: &Element) -> RotatedBounds {
    let cos = element.angle.cos().abs();
    let sin = element.angle.sin().abs();
    let rotated_width = element.width * cos + element.height * sin;
    let rotated_height = element.width * sin + element.height * cos;
    let center_x = element.x + element.width / 2.0;
    let center_y = element.y + element.height / 2.0;
    RotatedBounds {
        left: center_x - rotated_width / 2.0,
        right: center_x + rotated_width / 2.0,
        top: center_y - rotated_height / 2.0,
        bottom: center_y + rotated_height / 2.0,
        center_x,
    }
}

/// Palette index of each color, panicking on colors outside the palette
pub fn palette_indices(palette: &[String], colors: &[&str]) -> Vec<usize> {
    colors
        .iter()
        .map(|color| {
            palette
                .iter()
                .position(|palette_color| palette_color == color)
                .expect("color should come from the palette")
        })
        .collect()
}

/// Minimum pairwise circular distance between palette indices
pub fn min_circular_distance(indices: &[usize], palette_size: usize) -> usize {
    let mut min = usize::MAX;
    for i in 0..indices.len() {
        for j in (i + 1)..indices.len() {
            let absolute = indices[i].abs_diff(indices[j]);
            min = min.min(absolute.min(palette_size - absolute));
        }
    }
    min
}
