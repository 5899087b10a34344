//! Shared layout for bar and line charts: slot sizing, axes, rotated
//! x-axis labels, y-axis value labels, and the title.

use crate::constants::{
    CARTESIAN_BAR_HEIGHT, CARTESIAN_BASE_SLOT_WIDTH, CARTESIAN_GAP,
    CARTESIAN_LABEL_AXIS_CLEARANCE, CARTESIAN_LABEL_MAX_WIDTH_BUFFER, CARTESIAN_LABEL_ROTATION,
    CARTESIAN_LABEL_ROTATED_WIDTH_BUFFER, CARTESIAN_LABEL_SLOT_PADDING, CARTESIAN_LINE_HEIGHT,
    CARTESIAN_LINE_SLOT_WIDTH, CARTESIAN_SLOT_EXTRA_MAX, CARTESIAN_SLOT_EXTRA_PER_SERIES,
    FONT_SIZE_MD, FONT_SIZE_SM, FONT_SIZE_XL, GRID_OPACITY,
};
use crate::element::{
    Element, ElementKind, FontFamily, FontSpec, StrokeStyle, TextAlign, TextContent, VerticalAlign,
};
use crate::render::ChartEngine;
use crate::text::{fit_axis_label, rotated_bounding_box};
use crate::types::{ChartType, Spreadsheet};

/// Derived per-render slot geometry for bar and line charts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianChartLayout {
    /// Width of one category slot
    pub slot_width: f64,
    /// Gap between slots
    pub gap: f64,
    /// Height of the plot area
    pub chart_height: f64,
    /// Widest an x-axis label may grow before fitting kicks in
    pub x_label_max_width: f64,
}

/// Widen the base slot for each series beyond the first, up to a cap
fn series_aware_slot_width(base_slot_width: f64, series_count: usize) -> f64 {
    let extra = if series_count <= 1 {
        0.0
    } else {
        CARTESIAN_SLOT_EXTRA_MAX
            .min((series_count - 1) as f64 * CARTESIAN_SLOT_EXTRA_PER_SERIES)
    };
    base_slot_width + extra
}

/// Slot geometry for the given chart type and series count
pub(crate) fn cartesian_layout(chart_type: ChartType, series_count: usize) -> CartesianChartLayout {
    let (base_slot_width, chart_height) = match chart_type {
        ChartType::Line => (CARTESIAN_LINE_SLOT_WIDTH, CARTESIAN_LINE_HEIGHT),
        _ => (CARTESIAN_BASE_SLOT_WIDTH, CARTESIAN_BAR_HEIGHT),
    };
    let slot_width = series_aware_slot_width(base_slot_width, series_count);
    CartesianChartLayout {
        slot_width,
        gap: CARTESIAN_GAP,
        chart_height,
        x_label_max_width: slot_width + CARTESIAN_GAP * 3.0 + CARTESIAN_LABEL_MAX_WIDTH_BUFFER,
    }
}

/// Overall plot bounds including the slot gaps
pub(crate) fn chart_dimensions(
    spreadsheet: &Spreadsheet,
    layout: &CartesianChartLayout,
) -> (f64, f64) {
    let value_count = spreadsheet
        .series
        .first()
        .map_or(0, |series| series.values.len());
    let chart_width = (layout.slot_width + layout.gap) * value_count as f64 + layout.gap;
    let chart_height = layout.chart_height + layout.gap * 2.0;
    (chart_width, chart_height)
}

/// Lowest canvas point covered by an element, accounting for rotation of
/// text elements
pub(crate) fn rotated_text_bottom(element: &Element) -> f64 {
    if !matches!(element.kind, ElementKind::Text(_)) {
        return element.y + element.height;
    }
    let (_, rotated_height) =
        rotated_bounding_box(element.width, element.height, element.angle);
    element.y + element.height / 2.0 + rotated_height / 2.0
}

/// Thousands-grouped value formatting for axis labels (up to 3 fraction
/// digits, trailing zeros trimmed)
pub(crate) fn format_value(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let frac_trimmed = frac_part.trim_end_matches('0');
    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if !frac_trimmed.is_empty() {
        result.push('.');
        result.push_str(frac_trimmed);
    }
    result
}

impl ChartEngine {
    /// Rotated x-axis labels, one per dimension, fitted to the slot pitch
    pub(crate) fn x_axis_labels(
        &self,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        background: &str,
        layout: &CartesianChartLayout,
    ) -> Vec<Element> {
        let Some(labels) = &spreadsheet.labels else {
            return Vec::new();
        };

        let font = FontSpec::new(FontFamily::Hand, FONT_SIZE_SM);
        let max_rotated_width = (layout.slot_width + layout.gap
            - CARTESIAN_LABEL_SLOT_PADDING * 2.0
            + CARTESIAN_LABEL_ROTATED_WIDTH_BUFFER)
            .max(1.0);

        labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let fit = fit_axis_label(
                    label,
                    layout.x_label_max_width,
                    max_rotated_width,
                    &font,
                    self.measurer(),
                );
                let center_x = x
                    + index as f64 * (layout.slot_width + layout.gap)
                    + layout.gap
                    + layout.slot_width / 2.0;
                let label_y = y
                    + CARTESIAN_LABEL_AXIS_CLEARANCE
                    + (fit.rotated_height - fit.metrics.height) / 2.0;

                let content = TextContent {
                    original_text: if fit.wrapped {
                        label.clone()
                    } else {
                        fit.text.clone()
                    },
                    text: fit.text,
                    font,
                    line_height: font.family.line_height(),
                    text_align: TextAlign::Center,
                    vertical_align: VerticalAlign::Top,
                    auto_resize: !fit.wrapped,
                };
                Element::text(center_x, label_y, content, fit.metrics, background)
                    .with_angle(CARTESIAN_LABEL_ROTATION)
            })
            .collect()
    }

    /// `0` and the max value, right-aligned against the y-axis
    fn y_axis_labels(
        &self,
        x: f64,
        y: f64,
        background: &str,
        layout: &CartesianChartLayout,
        max_value: f64,
    ) -> Vec<Element> {
        let font = FontSpec::new(FontFamily::Hand, FONT_SIZE_MD);
        let make_content = |text: String| TextContent {
            original_text: text.clone(),
            text,
            font,
            line_height: font.family.line_height(),
            text_align: TextAlign::Right,
            vertical_align: VerticalAlign::Middle,
            auto_resize: true,
        };

        let min_metrics = self.measurer().measure("0", &font);
        let min_label = Element::text(
            x - layout.gap,
            y - layout.gap,
            make_content("0".to_string()),
            min_metrics,
            background,
        );

        let max_text = format_value(max_value);
        let max_metrics = self.measurer().measure(&max_text, &font);
        let max_label = Element::text(
            x - layout.gap,
            y - layout.chart_height - min_metrics.height / 2.0,
            make_content(max_text),
            max_metrics,
            background,
        );

        vec![min_label, max_label]
    }

    /// The x-axis, the y-axis, and the dashed max-value guideline
    fn axis_lines(
        &self,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        background: &str,
        layout: &CartesianChartLayout,
    ) -> Vec<Element> {
        let (chart_width, chart_height) = chart_dimensions(spreadsheet, layout);

        let x_line =
            Element::line(x, y, vec![(0.0, 0.0), (chart_width, 0.0)]).with_background(background);
        let y_line =
            Element::line(x, y, vec![(0.0, 0.0), (0.0, -chart_height)]).with_background(background);
        let max_line = Element::line(
            x,
            y - layout.chart_height - layout.gap,
            vec![(0.0, 0.0), (chart_width, 0.0)],
        )
        .with_background(background)
        .with_stroke_style(StrokeStyle::Dotted)
        .with_opacity(GRID_OPACITY);

        vec![x_line, y_line, max_line]
    }

    /// Title, x-axis labels, y-axis labels, and axis lines shared by bar
    /// and line charts. Returns the elements plus the lowest rotated
    /// bottom of the x-axis labels, which anchors the legend.
    pub(crate) fn cartesian_scaffold(
        &self,
        spreadsheet: &Spreadsheet,
        x: f64,
        y: f64,
        background: &str,
        layout: &CartesianChartLayout,
        max_value: f64,
    ) -> (Vec<Element>, f64) {
        let (chart_width, _) = chart_dimensions(spreadsheet, layout);
        let mut elements = Vec::new();

        if let Some(title) = &spreadsheet.title {
            let font = FontSpec::new(FontFamily::Display, FONT_SIZE_XL);
            let metrics = self.measurer().measure(title, &font);
            let content = TextContent {
                text: title.clone(),
                original_text: title.clone(),
                font,
                line_height: font.family.line_height(),
                text_align: TextAlign::Center,
                vertical_align: VerticalAlign::Middle,
                auto_resize: true,
            };
            elements.push(Element::text(
                x + chart_width / 2.0,
                y - layout.chart_height - layout.gap * 2.0 - FONT_SIZE_MD,
                content,
                metrics,
                background,
            ));
        }

        let x_labels = self.x_axis_labels(spreadsheet, x, y, background, layout);
        let x_labels_bottom = x_labels
            .iter()
            .map(rotated_text_bottom)
            .fold(y + layout.gap / 2.0, f64::max);
        elements.extend(x_labels);
        elements.extend(self.y_axis_labels(x, y, background, layout, max_value));
        elements.extend(self.axis_lines(spreadsheet, x, y, background, layout));

        (elements, x_labels_bottom)
    }
}
