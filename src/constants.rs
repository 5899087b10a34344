//! Crate-wide layout and style constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting. All lengths are in canvas
//! units at zoom 1.0.

// ============================================================================
// Cartesian Layout (bar + line)
// ============================================================================

/// Base slot width per category for bar charts
pub const CARTESIAN_BASE_SLOT_WIDTH: f64 = 44.0;

/// Slot widening per series beyond the first
pub const CARTESIAN_SLOT_EXTRA_PER_SERIES: f64 = 22.0;

/// Cap on the total slot widening
pub const CARTESIAN_SLOT_EXTRA_MAX: f64 = 66.0;

/// Base slot width per category for line charts
pub const CARTESIAN_LINE_SLOT_WIDTH: f64 = 48.0;

/// Gap between category slots
pub const CARTESIAN_GAP: f64 = 14.0;

/// Plot height for bar charts
pub const CARTESIAN_BAR_HEIGHT: f64 = 304.0;

/// Plot height for line charts
pub const CARTESIAN_LINE_HEIGHT: f64 = 320.0;

/// Rotation angle (radians) applied to x-axis labels
pub const CARTESIAN_LABEL_ROTATION: f64 = 5.87;

/// Narrowest candidate width tried when fitting an x-axis label
pub const CARTESIAN_LABEL_MIN_WIDTH: f64 = 28.0;

/// Step between candidate widths in the label fitting search
pub const CARTESIAN_LABEL_WIDTH_STEP: f64 = 4.0;

/// Horizontal padding kept between a label and its slot edges
pub const CARTESIAN_LABEL_SLOT_PADDING: f64 = 4.0;

/// Vertical clearance between the x-axis and its labels
pub const CARTESIAN_LABEL_AXIS_CLEARANCE: f64 = 2.0;

/// Extra width allowance on the widest label fitting candidate
pub const CARTESIAN_LABEL_MAX_WIDTH_BUFFER: f64 = 10.0;

/// Extra rotated-width allowance before a label counts as overflowing
pub const CARTESIAN_LABEL_ROTATED_WIDTH_BUFFER: f64 = 10.0;

/// How much extra overflow a non-ellipsified label may have and still
/// win over the least-overflowing ellipsified candidate
pub const CARTESIAN_LABEL_OVERFLOW_PREFERENCE_BUFFER: f64 = 8.0;

// ============================================================================
// Radar Layout
// ============================================================================

/// Diameter of the radar ring (spokes radiate to half of this)
pub const RADAR_DIAMETER: f64 = 256.0;

/// Padding around the radar ring inside the chart bounds
pub const RADAR_PADDING: f64 = 24.0;

/// Number of concentric step rings (computed, conditionally rendered)
pub const RADAR_GRID_LEVELS: usize = 4;

/// Base radial offset of axis labels beyond the ring
pub const RADAR_LABEL_OFFSET: f64 = 24.0;

/// Max-to-min-positive ratio at which a lone series switches to log scale
pub const RADAR_LOG_SCALE_SKEW_THRESHOLD: f64 = 100.0;

/// Hard cap on radar axis label width
pub const RADAR_AXIS_LABEL_MAX_WIDTH: f64 = 140.0;

/// |cos|/|sin| threshold picking left/center/right alignment and the
/// vertical nudge direction for radar axis labels
pub const RADAR_AXIS_LABEL_ALIGNMENT_THRESHOLD: f64 = 0.35;

/// Extra clearance between the ring and an axis label
pub const RADAR_AXIS_LABEL_CLEARANCE: f64 = 6.0;

/// Vertical nudge applied to labels on steep spokes
pub const RADAR_AXIS_LABEL_NUDGE: f64 = 4.0;

// ============================================================================
// Legend
// ============================================================================

/// Side length of a legend color swatch
pub const LEGEND_SWATCH_SIZE: f64 = 20.0;

/// Horizontal gap between legend items (also the pill side padding)
pub const LEGEND_ITEM_GAP: f64 = 24.0;

/// Gap between a swatch and its label
pub const LEGEND_TEXT_GAP: f64 = 12.0;

/// Widest a legend label may grow before wrapping
pub const LEGEND_LABEL_MAX_WIDTH: f64 = 256.0;

/// Vertical clearance between the lowest axis label and the legend
pub const LEGEND_CLEARANCE: f64 = 24.0;

/// Fallback drop below the anchor when a chart has no axis labels to
/// hang the legend under
pub const LEGEND_FALLBACK_DROP: f64 = 60.0;

// ============================================================================
// Fonts
// ============================================================================

/// Small font size (axis labels)
pub const FONT_SIZE_SM: f64 = 16.0;

/// Default font size (y-axis values, untitled text)
pub const FONT_SIZE_MD: f64 = 20.0;

/// Large font size (legend labels)
pub const FONT_SIZE_LG: f64 = 28.0;

/// Extra large font size (chart titles)
pub const FONT_SIZE_XL: f64 = 36.0;

// ============================================================================
// Style
// ============================================================================

/// Opacity (percent) used for grid lines and guidelines
pub const GRID_OPACITY: u8 = 10;

/// Default stroke color for chart scaffolding and text
pub const DEFAULT_STROKE_COLOR: &str = "#1e1e1e";

/// Transparent background marker understood by the host
pub const COLOR_TRANSPARENT: &str = "transparent";
