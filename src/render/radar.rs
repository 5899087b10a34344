//! Radar (spider) chart rendering.

use std::f64::consts::PI;

use crate::constants::{
    FONT_SIZE_SM, FONT_SIZE_XL, GRID_OPACITY, LEGEND_FALLBACK_DROP, RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD,
    RADAR_AXIS_LABEL_CLEARANCE, RADAR_AXIS_LABEL_MAX_WIDTH, RADAR_AXIS_LABEL_NUDGE, RADAR_DIAMETER,
    RADAR_GRID_LEVELS, RADAR_LABEL_OFFSET, RADAR_LOG_SCALE_SKEW_THRESHOLD, RADAR_PADDING,
};
use crate::element::{
    Element, FontFamily, FontSpec, TextAlign, TextContent, VerticalAlign,
};
use crate::render::ChartEngine;
use crate::types::{ChartType, Spreadsheet, SpreadsheetSeries};

/// Overall radar chart bounds: the ring plus padding on every side
pub(crate) fn radar_dimensions() -> (f64, f64) {
    (
        RADAR_DIAMETER + RADAR_PADDING * 2.0,
        RADAR_DIAMETER + RADAR_PADDING * 2.0,
    )
}

/// Value-to-radius normalization shared by all series of one render.
///
/// Linear against the global maximum by default. A lone series with
/// heavily skewed positive values (max over min positive at or beyond the
/// skew threshold) switches to a log10 scale so near-zero spokes stay
/// visible. Step rings are computed but only emitted when the scale asks
/// for them; the current strategy never does, keeping mixed linear/log
/// renders visually proportional.
struct RadarValueScale {
    render_steps: bool,
    use_log_scale: bool,
    max: f64,
}

impl RadarValueScale {
    fn for_series(series: &[SpreadsheetSeries]) -> Self {
        let clamped: Vec<f64> = series
            .iter()
            .flat_map(|series_data| series_data.values.iter())
            .map(|&value| value.max(0.0))
            .collect();
        let max = clamped.iter().fold(1.0_f64, |max, &value| max.max(value));
        let min_positive = clamped
            .iter()
            .filter(|&&value| value > 0.0)
            .fold(f64::INFINITY, |min, &value| min.min(value));
        let min_positive = if min_positive.is_finite() {
            min_positive
        } else {
            1.0
        };
        let use_log_scale = series.len() == 1
            && min_positive > 0.0
            && max / min_positive >= RADAR_LOG_SCALE_SKEW_THRESHOLD;

        Self {
            render_steps: false,
            use_log_scale,
            max,
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        let safe_value = value.max(0.0);
        if self.use_log_scale {
            (safe_value + 1.0).log10() / (self.max + 1.0).log10()
        } else {
            safe_value / self.max
        }
    }
}

impl ChartEngine {
    /// Axis labels placed outside the ring, offset along each spoke by the
    /// projected text extent so they clear the ring regardless of angle.
    /// Returns the labels plus their top and bottom canvas extents (for
    /// title and legend placement).
    fn radar_axis_labels(
        &self,
        labels: &[String],
        angles: &[f64],
        center_x: f64,
        center_y: f64,
        radius: f64,
        background: &str,
    ) -> (Vec<Element>, f64, f64) {
        let font = FontSpec::new(FontFamily::Hand, FONT_SIZE_SM);
        let base_label_width = RADAR_AXIS_LABEL_MAX_WIDTH
            .min(radius * if labels.len() > 8 { 0.56 } else { 0.72 });
        let min_label_width = self.measurer().min_line_width(&font);

        let mut elements = Vec::with_capacity(labels.len());
        let mut top_y = f64::INFINITY;
        let mut bottom_y = f64::NEG_INFINITY;

        for (label, &angle) in labels.iter().zip(angles) {
            let longest_word_width = label
                .split_whitespace()
                .map(|word| self.measurer().measure(word, &font).width)
                .fold(0.0_f64, f64::max);
            let max_label_width = min_label_width.max(base_label_width).max(longest_word_width);
            let display_label = self.display_text(label, &font, max_label_width);
            let metrics = self.measurer().measure(&display_label, &font);
            let cos = angle.cos();
            let sin = angle.sin();

            let text_align = if cos > RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD {
                TextAlign::Left
            } else if cos < -RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD {
                TextAlign::Right
            } else {
                TextAlign::Center
            };

            // Keep labels outside the ring by projecting text extents
            // onto the spoke direction.
            let center_aligned_x_extent = if text_align == TextAlign::Center {
                metrics.width / 2.0
            } else {
                0.0
            };
            let projected_extent =
                cos.abs() * center_aligned_x_extent + sin.abs() * (metrics.height / 2.0);
            let radial_offset =
                RADAR_LABEL_OFFSET + projected_extent + RADAR_AXIS_LABEL_CLEARANCE;
            let anchor_x = center_x + cos * (radius + radial_offset);
            let anchor_y = center_y + sin * (radius + radial_offset);

            let y_nudge = if sin > RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD {
                RADAR_AXIS_LABEL_NUDGE
            } else if sin < -RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD {
                -RADAR_AXIS_LABEL_NUDGE
            } else {
                0.0
            };

            let content = TextContent {
                text: display_label.clone(),
                original_text: label.clone(),
                font,
                line_height: font.family.line_height(),
                text_align,
                vertical_align: VerticalAlign::Middle,
                auto_resize: true,
            };
            let element = Element::text(anchor_x, anchor_y + y_nudge, content, metrics, background);
            top_y = top_y.min(element.y);
            bottom_y = bottom_y.max(element.y + element.height);
            elements.push(element);
        }

        (elements, top_y, bottom_y)
    }

    /// Spokes from the center at equal angular steps starting at the top,
    /// one closed polygon per series, labels, title, and legend.
    ///
    /// Returns `None` for data with fewer than 3 dimensions.
    pub fn render_radar_chart(
        &mut self,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        color_seed: Option<f64>,
    ) -> Option<Vec<Element>> {
        if !spreadsheet.is_valid_for_chart_type(ChartType::Radar) {
            return None;
        }

        let labels: Vec<String> = match &spreadsheet.labels {
            Some(labels) => labels.clone(),
            None => (0..spreadsheet.series[0].values.len())
                .map(|index| format!("Value {}", index + 1))
                .collect(),
        };

        let series = &spreadsheet.series;
        let scale = RadarValueScale::for_series(series);
        let colors = self.color_scheme(series.len(), color_seed);
        let (chart_width, chart_height) = radar_dimensions();
        let center_x = x + chart_width / 2.0;
        let center_y = y - chart_height / 2.0;
        let radius = RADAR_DIAMETER / 2.0;
        let angles: Vec<f64> = (0..labels.len())
            .map(|index| -PI / 2.0 + (PI * 2.0 * index as f64) / labels.len() as f64)
            .collect();

        let (axis_labels, axis_label_top_y, axis_label_bottom_y) = self.radar_axis_labels(
            &labels,
            &angles,
            center_x,
            center_y,
            radius,
            &colors.background,
        );

        let title = spreadsheet.title.as_ref().map(|title| {
            let font = FontSpec::new(FontFamily::Display, FONT_SIZE_XL);
            let title_text =
                self.display_text(title, &font, chart_width + RADAR_LABEL_OFFSET * 2.0);
            let metrics = self.measurer().measure(&title_text, &font);
            let content = TextContent {
                text: title_text,
                original_text: title.clone(),
                font,
                line_height: font.family.line_height(),
                text_align: TextAlign::Center,
                vertical_align: VerticalAlign::Middle,
                auto_resize: true,
            };
            Element::text(
                x + chart_width / 2.0,
                axis_label_top_y - RADAR_LABEL_OFFSET - metrics.height / 2.0,
                content,
                metrics,
                colors.background.clone(),
            )
        });

        let grid_rings: Vec<Element> = if scale.render_steps {
            (0..RADAR_GRID_LEVELS)
                .map(|level_index| {
                    let level_ratio = (level_index + 1) as f64 / RADAR_GRID_LEVELS as f64;
                    let level_radius = radius * level_ratio;
                    let mut points: Vec<(f64, f64)> = angles
                        .iter()
                        .map(|&angle| (angle.cos() * level_radius, angle.sin() * level_radius))
                        .collect();
                    points.push(points[0]);
                    Element::polygon(center_x, center_y, points)
                        .with_size(level_radius * 2.0, level_radius * 2.0)
                        .with_roughness(0)
                        .with_opacity(GRID_OPACITY)
                })
                .collect()
        } else {
            Vec::new()
        };

        let spokes: Vec<Element> = angles
            .iter()
            .map(|&angle| {
                let px = angle.cos() * radius;
                let py = angle.sin() * radius;
                Element::line(center_x, center_y, vec![(0.0, 0.0), (px, py)])
                    .with_roughness(0)
                    .with_opacity(GRID_OPACITY)
            })
            .collect();

        let series_polygons: Vec<Element> = series
            .iter()
            .enumerate()
            .map(|(series_index, series_data)| {
                let mut points: Vec<(f64, f64)> = angles
                    .iter()
                    .enumerate()
                    .map(|(axis_index, &angle)| {
                        let value = series_data.values.get(axis_index).copied().unwrap_or(0.0);
                        let point_radius = scale.normalize(value) * radius;
                        (angle.cos() * point_radius, angle.sin() * point_radius)
                    })
                    .collect();
                points.push(points[0]);
                Element::polygon(center_x, center_y, points)
                    .with_size(radius * 2.0, radius * 2.0)
                    .with_stroke_color(colors.series[series_index].clone())
                    .with_stroke_width(2.0)
            })
            .collect();

        let legend = self.series_legend(
            series,
            &colors.series,
            center_x,
            axis_label_bottom_y,
            y + LEGEND_FALLBACK_DROP,
        );

        let mut elements = Vec::new();
        elements.extend(title);
        elements.extend(axis_labels);
        elements.extend(grid_rings);
        elements.extend(spokes);
        elements.extend(series_polygons);
        elements.extend(legend);
        Some(elements)
    }
}
