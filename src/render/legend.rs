//! Series legend: a rounded pill holding one color swatch and label per
//! series, shared by all chart types.

use crate::constants::{
    COLOR_TRANSPARENT, FONT_SIZE_LG, LEGEND_CLEARANCE, LEGEND_ITEM_GAP, LEGEND_LABEL_MAX_WIDTH,
    LEGEND_SWATCH_SIZE, LEGEND_TEXT_GAP,
};
use crate::element::{
    Element, FillStyle, FontFamily, FontSpec, Roundness, TextAlign, TextContent, VerticalAlign,
};
use crate::render::ChartEngine;
use crate::types::SpreadsheetSeries;

struct LegendItem {
    label: String,
    display_label: String,
    color: String,
    width: f64,
    height: f64,
}

impl ChartEngine {
    /// Build the legend for a multi-series chart, centered on `center_x`
    /// and placed below `min_legend_top_y` with a fixed clearance (or at
    /// `fallback_legend_y` when the labels sit higher than that).
    ///
    /// Single-series charts get no legend.
    pub(crate) fn series_legend(
        &self,
        series: &[SpreadsheetSeries],
        series_colors: &[String],
        center_x: f64,
        min_legend_top_y: f64,
        fallback_legend_y: f64,
    ) -> Vec<Element> {
        if series.len() <= 1 {
            return Vec::new();
        }

        let font = FontSpec::new(FontFamily::Display, FONT_SIZE_LG);
        let items: Vec<LegendItem> = series
            .iter()
            .enumerate()
            .map(|(index, series_item)| {
                let label = series_item
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|title| !title.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Series {}", index + 1));
                let display_label = self.display_text(&label, &font, LEGEND_LABEL_MAX_WIDTH);
                let metrics = self.measurer().measure(&display_label, &font);
                LegendItem {
                    label,
                    display_label,
                    color: series_colors[index].clone(),
                    width: LEGEND_SWATCH_SIZE + LEGEND_TEXT_GAP + metrics.width,
                    height: metrics.height,
                }
            })
            .collect();

        let max_half_height = items
            .iter()
            .map(|item| item.height / 2.0)
            .fold(LEGEND_SWATCH_SIZE / 2.0, f64::max);
        let legend_y =
            fallback_legend_y.max(min_legend_top_y + max_half_height + LEGEND_CLEARANCE);

        let pill_padding_x = LEGEND_ITEM_GAP;
        let pill_padding_y = LEGEND_SWATCH_SIZE * 0.6;
        let total_width = items.iter().map(|item| item.width).sum::<f64>()
            + LEGEND_ITEM_GAP * (items.len() - 1) as f64;
        let pill_width = total_width + pill_padding_x * 2.0;
        let pill_height = max_half_height * 2.0 + pill_padding_y * 2.0;

        let mut elements = Vec::with_capacity(items.len() * 2 + 1);
        elements.push(
            Element::rectangle(
                center_x - pill_width / 2.0,
                legend_y - pill_height / 2.0,
                pill_width,
                pill_height,
                COLOR_TRANSPARENT,
            )
            .with_fill_style(FillStyle::Solid)
            .with_roughness(0)
            .with_roundness(Roundness::ProportionalRadius),
        );

        let mut cursor_x = center_x - total_width / 2.0;
        for item in items {
            elements.push(
                Element::rectangle(
                    cursor_x,
                    legend_y - LEGEND_SWATCH_SIZE / 2.0,
                    LEGEND_SWATCH_SIZE,
                    LEGEND_SWATCH_SIZE,
                    item.color.clone(),
                )
                .with_fill_style(FillStyle::Solid)
                .with_stroke_color(item.color.clone())
                .with_roughness(0)
                .with_roundness(Roundness::ProportionalRadius),
            );

            let metrics = self.measurer().measure(&item.display_label, &font);
            let content = TextContent {
                text: item.display_label.clone(),
                original_text: item.label.clone(),
                font,
                line_height: font.family.line_height(),
                text_align: TextAlign::Left,
                vertical_align: VerticalAlign::Middle,
                auto_resize: false,
            };
            elements.push(Element::text(
                cursor_x + LEGEND_SWATCH_SIZE + LEGEND_TEXT_GAP,
                legend_y,
                content,
                metrics,
                COLOR_TRANSPARENT,
            ));

            cursor_x += item.width + LEGEND_ITEM_GAP;
        }

        elements
    }
}
