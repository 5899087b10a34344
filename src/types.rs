//! Core types for the chart inference engine.
//!
//! This module defines the normalized data model produced by the tabular
//! parsers and consumed by the renderers: a [`Spreadsheet`] with an optional
//! title, optional per-dimension labels, and one or more named numeric
//! series.

use serde::{Deserialize, Serialize};

// ============================================================================
// Spreadsheet Model
// ============================================================================

/// Normalized result of parsing tabular input.
///
/// Invariant: all series hold the same number of values, and when `labels`
/// is present its length equals that count. The parsers uphold this; the
/// renderers rely on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spreadsheet {
    /// Chart title, when one could be inferred from the input
    pub title: Option<String>,
    /// Per-dimension labels (x-axis categories / radar spokes)
    pub labels: Option<Vec<String>>,
    /// One or more named numeric series
    pub series: Vec<SpreadsheetSeries>,
}

/// One named ordered sequence of numeric values, one per dimension.
///
/// Created once by the tabular parser; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadsheetSeries {
    /// Series name shown in the legend, when known
    pub title: Option<String>,
    /// The values, one per dimension
    pub values: Vec<f64>,
}

impl Spreadsheet {
    /// Number of dimensions shared by all series: the label count, or the
    /// first series' value count when no labels were inferred.
    pub fn dimension_count(&self) -> usize {
        self.labels
            .as_ref()
            .map(|labels| labels.len())
            .or_else(|| self.series.first().map(|series| series.values.len()))
            .unwrap_or(0)
    }

    /// Whether this data can be rendered as the given chart type.
    ///
    /// Bar and line charts need at least 2 dimensions; radar charts need at
    /// least 3 (a 2-spoke radar degenerates into a line).
    pub fn is_valid_for_chart_type(&self, chart_type: ChartType) -> bool {
        let dimension_count = self.dimension_count();
        if dimension_count < 2 {
            return false;
        }
        match chart_type {
            ChartType::Radar => dimension_count >= 3,
            ChartType::Bar | ChartType::Line => true,
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Radar,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Radar => "Radar",
        }
    }

    pub fn all() -> &'static [ChartType] {
        &[ChartType::Bar, ChartType::Line, ChartType::Radar]
    }
}
