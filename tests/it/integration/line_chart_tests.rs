//! Line chart rendering tests.

use chartboard::{ChartType, ElementKind, StrokeStyle};

use crate::helpers::{
    dots, engine, min_circular_distance, original_text, palette_indices, rotated_bounds,
    series_lines, spreadsheet, texts, x_axis_line,
};

#[test]
fn renders_one_line_per_series_and_one_dot_per_point() {
    let data = spreadsheet(
        Some("Scores"),
        &["alpha", "beta", "gamma", "delta", "epsilon"],
        &[
            ("Team A", &[42150.0, 8300.0, 95400.0, 7820.0, 310500.0]),
            ("Team B", &[63400.0, 3150.0, 51200.0, 4670.0, 125800.0]),
        ],
    );

    let elements = engine()
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();

    assert_eq!(series_lines(&elements).len(), 2);
    assert_eq!(dots(&elements).len(), 2 * 5);
}

#[test]
fn renders_one_dashed_guide_per_category() {
    let data = spreadsheet(
        Some("Scores"),
        &["alpha", "beta", "gamma"],
        &[
            ("Team A", &[4.0, 8.0, 3.0]),
            ("Team B", &[6.0, 3.0, 5.0]),
        ],
    );

    let elements = engine()
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();
    let guides: Vec<_> = elements
        .iter()
        .filter(|element| {
            element.stroke_style == StrokeStyle::Dotted
                && element.line_points().is_some_and(|points| {
                    points.len() == 2 && points[1].0 == 0.0 && points[1].1 > 0.0
                })
        })
        .collect();

    assert_eq!(guides.len(), 3);
}

#[test]
fn spreads_line_colors_across_the_palette() {
    let data = spreadsheet(
        Some("Trait"),
        &["A", "B", "C", "D", "E"],
        &[
            ("S1", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            ("S2", &[2.0, 3.0, 4.0, 5.0, 1.0]),
            ("S3", &[3.0, 4.0, 5.0, 1.0, 2.0]),
            ("S4", &[4.0, 5.0, 1.0, 2.0, 3.0]),
        ],
    );

    let mut chart_engine = engine();
    let elements = chart_engine
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();
    let line_colors: Vec<&str> = series_lines(&elements)
        .iter()
        .map(|line| line.stroke_color.as_str())
        .collect();

    let palette = chart_engine.palette().to_vec();
    let indices = palette_indices(&palette, &line_colors);
    assert!(min_circular_distance(&indices, palette.len()) > 1);
}

#[test]
fn color_seed_makes_renders_reproducible() {
    let data = spreadsheet(
        Some("Trait"),
        &["A", "B", "C", "D"],
        &[
            ("S1", &[1.0, 2.0, 3.0, 4.0]),
            ("S2", &[4.0, 3.0, 2.0, 1.0]),
            ("S3", &[2.0, 3.0, 4.0, 1.0]),
        ],
    );

    let render_colors = |seed: f64| -> Vec<String> {
        let elements = engine()
            .render(ChartType::Line, &data, 0.0, 0.0, Some(seed))
            .unwrap();
        series_lines(&elements)
            .iter()
            .map(|line| line.stroke_color.clone())
            .collect()
    };

    assert_eq!(render_colors(0.125), render_colors(0.125));
    assert_ne!(render_colors(0.125), render_colors(0.875));
}

#[test]
fn identical_seeds_produce_identical_element_lists() {
    let data = spreadsheet(
        Some("Scores"),
        &["alpha", "beta", "gamma", "delta"],
        &[
            ("Team A", &[42.0, 83.0, 95.0, 12.0]),
            ("Team B", &[63.0, 31.0, 51.0, 92.0]),
        ],
    );

    let first = engine()
        .render(ChartType::Line, &data, 10.0, 600.0, Some(7.0))
        .unwrap();
    let second = engine()
        .render(ChartType::Line, &data, 10.0, 600.0, Some(7.0))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn multi_series_line_charts_are_wider_than_single_series() {
    let single = spreadsheet(
        Some("Trait"),
        &["A", "B", "C", "D"],
        &[("Trait", &[10.0, 8.0, 3.0, 2.5])],
    );
    let multi = spreadsheet(
        Some("Trait"),
        &["A", "B", "C", "D"],
        &[
            ("Dunk", &[10.0, 8.0, 3.0, 2.5]),
            ("Egg", &[2.0, 1.0, 9.0, 8.0]),
            ("Aerion", &[7.0, 8.0, 7.0, 4.0]),
        ],
    );

    let single_elements = engine()
        .render(ChartType::Line, &single, 0.0, 0.0, None)
        .unwrap();
    let multi_elements = engine()
        .render(ChartType::Line, &multi, 0.0, 0.0, None)
        .unwrap();

    let single_axis = x_axis_line(&single_elements).unwrap();
    let multi_axis = x_axis_line(&multi_elements).unwrap();
    assert!(multi_axis.width > single_axis.width);
}

#[test]
fn legend_sits_below_axis_labels_with_clearance() {
    let data = spreadsheet(
        Some("Scores"),
        &["alpha", "beta", "gamma", "delta", "epsilon"],
        &[
            ("Team A", &[42150.0, 8300.0, 95400.0, 12600.0, 310500.0]),
            ("Team B", &[63400.0, 3150.0, 51200.0, 9200.0, 125800.0]),
        ],
    );

    let elements = engine()
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();
    let text_elements = texts(&elements);

    let axis_labels: Vec<_> = text_elements
        .iter()
        .filter(|element| {
            original_text(element)
                .is_some_and(|text| data.labels.as_ref().unwrap().iter().any(|l| l == text))
        })
        .collect();
    let legend_labels: Vec<_> = text_elements
        .iter()
        .filter(|element| {
            matches!(original_text(element), Some("Team A") | Some("Team B"))
        })
        .collect();

    assert!(!axis_labels.is_empty());
    assert_eq!(legend_labels.len(), 2);

    let axis_bottom = axis_labels
        .iter()
        .map(|label| label.y + label.height)
        .fold(f64::NEG_INFINITY, f64::max);
    let legend_top = legend_labels
        .iter()
        .map(|label| label.y)
        .fold(f64::INFINITY, f64::min);
    assert!(legend_top > axis_bottom + 2.0);
}

#[test]
fn axis_labels_avoid_neighbor_overlap() {
    let data = spreadsheet(
        Some("trait"),
        &[
            "Physical Strength",
            "Swordsmanship",
            "Political Instinct",
            "Book Knowledge",
            "Strategic Thinking",
            "charisma",
            "courage",
            "Stubbornness",
            "Empathy",
            "Practical Survival Skills",
        ],
        &[
            ("Dunk", &[10.0, 8.0, 3.0, 2.5, 5.0, 7.0, 9.0, 8.0, 8.0, 9.0]),
            ("Egg", &[2.0, 1.0, 9.0, 8.0, 9.0, 8.0, 7.0, 9.0, 8.0, 4.0]),
        ],
    );

    let elements = engine()
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();
    let axis_labels: Vec<_> = texts(&elements)
        .into_iter()
        .filter(|element| element.angle.abs() > 0.0)
        .collect();

    assert_eq!(axis_labels.len(), data.labels.as_ref().unwrap().len());

    let mut bounds: Vec<_> = axis_labels.iter().map(|label| rotated_bounds(label)).collect();
    for bound in &bounds {
        assert!(bound.top > 0.0);
    }
    bounds.sort_by(|left, right| left.center_x.partial_cmp(&right.center_x).unwrap());
    for pair in bounds.windows(2) {
        assert!(pair[0].right <= pair[1].left + 2.0);
    }
}

#[test]
fn series_lines_are_open_polylines() {
    let data = spreadsheet(
        Some("Scores"),
        &["a", "b", "c"],
        &[("Team A", &[1.0, 5.0, 3.0])],
    );

    let elements = engine()
        .render(ChartType::Line, &data, 0.0, 0.0, None)
        .unwrap();
    let lines = series_lines(&elements);
    assert_eq!(lines.len(), 1);
    match &lines[0].kind {
        ElementKind::Line { points, polygon } => {
            assert!(!polygon);
            assert_eq!(points.len(), 3);
            assert_ne!(points.first(), points.last());
        }
        _ => panic!("series line should be a line element"),
    }
}
