//! Multi-series line chart rendering.

use crate::constants::GRID_OPACITY;
use crate::element::{Element, FillStyle, StrokeStyle};
use crate::render::cartesian::{cartesian_layout, chart_dimensions};
use crate::render::ChartEngine;
use crate::types::{ChartType, Spreadsheet};

impl ChartEngine {
    /// One polyline per series, one filled dot per data point, and a
    /// dashed vertical guideline per category reaching the highest value
    /// at that category. Series strokes are width 2 so they read apart
    /// from the width-1 axis scaffolding.
    pub fn render_line_chart(
        &mut self,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        color_seed: Option<f64>,
    ) -> Vec<Element> {
        let series = &spreadsheet.series;
        let Some(first_series) = series.first() else {
            return Vec::new();
        };

        let layout = cartesian_layout(ChartType::Line, series.len());
        let max = series
            .iter()
            .flat_map(|series_data| series_data.values.iter())
            .fold(1.0_f64, |max, &value| max.max(value));
        let colors = self.color_scheme(series.len(), color_seed);
        let slot_pitch = layout.slot_width + layout.gap;

        let mut lines = Vec::with_capacity(series.len());
        for (series_index, series_data) in series.iter().enumerate() {
            let points: Vec<(f64, f64)> = series_data
                .values
                .iter()
                .enumerate()
                .map(|(value_index, &value)| {
                    (
                        value_index as f64 * slot_pitch,
                        -(value / max) * layout.chart_height,
                    )
                })
                .collect();
            lines.push(
                Element::line(x + layout.gap + layout.slot_width / 2.0, y - layout.gap, points)
                    .with_stroke_color(colors.series[series_index].clone())
                    .with_stroke_width(2.0),
            );
        }

        let mut dots = Vec::with_capacity(series.len() * first_series.values.len());
        for (series_index, series_data) in series.iter().enumerate() {
            for (value_index, &value) in series_data.values.iter().enumerate() {
                let cx = value_index as f64 * slot_pitch + layout.gap / 2.0;
                let cy = -(value / max) * layout.chart_height + layout.gap / 2.0;
                dots.push(
                    Element::ellipse(
                        x + cx + layout.slot_width / 2.0,
                        y + cy - layout.gap * 2.0,
                        layout.gap,
                        layout.gap,
                        colors.series[series_index].clone(),
                    )
                    .with_fill_style(FillStyle::Solid)
                    .with_stroke_color(colors.series[series_index].clone())
                    .with_stroke_width(2.0),
                );
            }
        }

        // Per-category reference guides up to the highest series value.
        let mut guides = Vec::with_capacity(first_series.values.len());
        for value_index in 0..first_series.values.len() {
            let guide_value = series
                .iter()
                .map(|series_data| series_data.values.get(value_index).copied().unwrap_or(0.0))
                .fold(0.0_f64, f64::max);
            let cx = value_index as f64 * slot_pitch + layout.gap / 2.0;
            let cy = guide_value / max * layout.chart_height + layout.gap / 2.0 + layout.gap;
            guides.push(
                Element::line(
                    x + cx + layout.slot_width / 2.0 + layout.gap / 2.0,
                    y - cy,
                    vec![(0.0, 0.0), (0.0, cy)],
                )
                .with_background(colors.background.clone())
                .with_stroke_style(StrokeStyle::Dotted)
                .with_opacity(GRID_OPACITY),
            );
        }

        let (mut elements, x_labels_bottom) =
            self.cartesian_scaffold(spreadsheet, x, y, &colors.background, &layout, max);
        elements.extend(lines);
        elements.extend(guides);
        elements.extend(dots);

        let (chart_width, _) = chart_dimensions(spreadsheet, &layout);
        elements.extend(self.series_legend(
            series,
            &colors.series,
            x + chart_width / 2.0,
            x_labels_bottom,
            y + layout.gap * 5.0,
        ));

        elements
    }
}
