//! Grouped bar chart rendering.

use crate::element::{Element, FillStyle};
use crate::render::cartesian::{cartesian_layout, chart_dimensions};
use crate::render::ChartEngine;
use crate::types::{ChartType, Spreadsheet};

impl ChartEngine {
    /// One rectangle per series per category, clustered and centered in
    /// the category slot. Bars scale against the global maximum (at least
    /// 1) and negative values clip to zero height.
    pub fn render_bar_chart(
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

        let layout = cartesian_layout(ChartType::Bar, series.len());
        let max = series
            .iter()
            .flat_map(|series_data| series_data.values.iter())
            .fold(1.0_f64, |max, &value| max.max(value.max(0.0)));
        let colors = self.color_scheme(series.len(), color_seed);

        let multi_series = series.len() > 1;
        let inter_bar_gap = if multi_series {
            (layout.gap / (series.len() + 1) as f64).floor().max(1.0)
        } else {
            0.0
        };
        let bar_width = if multi_series {
            ((layout.slot_width - inter_bar_gap * (series.len() - 1) as f64)
                / series.len() as f64)
                .max(2.0)
        } else {
            layout.slot_width
        };
        let cluster_width =
            series.len() as f64 * bar_width + inter_bar_gap * (series.len() - 1) as f64;
        let cluster_offset = (layout.slot_width - cluster_width) / 2.0;

        let mut bars = Vec::with_capacity(series.len() * first_series.values.len());
        for category_index in 0..first_series.values.len() {
            for (series_index, series_data) in series.iter().enumerate() {
                let value = series_data
                    .values
                    .get(category_index)
                    .copied()
                    .unwrap_or(0.0)
                    .max(0.0);
                let bar_height = value / max * layout.chart_height;
                let bar_color = if multi_series {
                    &colors.series[series_index]
                } else {
                    &colors.background
                };
                let mut bar = Element::rectangle(
                    x + category_index as f64 * (layout.slot_width + layout.gap)
                        + layout.gap
                        + cluster_offset
                        + series_index as f64 * (bar_width + inter_bar_gap),
                    y - bar_height - layout.gap,
                    bar_width,
                    bar_height,
                    bar_color.clone(),
                );
                if multi_series {
                    bar = bar
                        .with_fill_style(FillStyle::Solid)
                        .with_stroke_color(bar_color.clone());
                }
                bars.push(bar);
            }
        }

        let (mut elements, x_labels_bottom) =
            self.cartesian_scaffold(spreadsheet, x, y, &colors.background, &layout, max);
        elements.extend(bars);

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
