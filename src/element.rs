//! Drawable primitive descriptors.
//!
//! Renderers emit plain [`Element`] records describing rectangles, lines,
//! ellipses, and text. The host application turns these into its native
//! canvas objects; this crate only populates the fields and never
//! interprets them after creation. Every render call returns a fresh,
//! independent list.

use serde::{Deserialize, Serialize};

use crate::constants::{COLOR_TRANSPARENT, DEFAULT_STROKE_COLOR};
use crate::text::TextMetrics;

// ============================================================================
// Style Enums
// ============================================================================

/// How a closed shape is filled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    /// Sketchy hatching, the canvas default
    Hachure,
    Solid,
}

/// How a stroke is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
    Dotted,
}

/// Corner rounding for rectangles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Roundness {
    /// Radius proportional to the smaller side
    ProportionalRadius,
}

/// Horizontal anchoring of text relative to its anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to its anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

// ============================================================================
// Fonts
// ============================================================================

/// Font families the host maps to its own font stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Hand-drawn body font (axis labels, values)
    Hand,
    /// Display font (titles, legend labels)
    Display,
}

impl FontFamily {
    /// Unitless line height multiplier for this family
    pub fn line_height(&self) -> f64 {
        match self {
            FontFamily::Hand => 1.25,
            FontFamily::Display => 1.15,
        }
    }
}

/// A concrete font choice: family plus size in canvas units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self { family, size }
    }

    /// Line height in canvas units
    pub fn line_height_px(&self) -> f64 {
        self.size * self.family.line_height()
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Text payload of a text element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// The text as rendered, possibly wrapped or ellipsified
    pub text: String,
    /// The unmodified source text, kept for editing and tooltips
    pub original_text: String,
    pub font: FontSpec,
    /// Line height multiplier at render time
    pub line_height: f64,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Whether the host may re-measure and grow the element when the
    /// text is edited; wrapped labels keep their fixed width
    pub auto_resize: bool,
}

/// Shape-specific payload of an element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Line {
        /// Vertices relative to the element position
        points: Vec<(f64, f64)>,
        /// Whether the host should close and treat this as a polygon
        polygon: bool,
    },
    Text(TextContent),
}

/// One drawable primitive.
///
/// `x`/`y` is the top-left corner for rectangles, ellipses, and text, and
/// the local origin of `points` for lines. `angle` rotates around the
/// element center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in radians
    pub angle: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub fill_style: FillStyle,
    pub stroke_style: StrokeStyle,
    pub stroke_width: f64,
    /// Sketchiness hint for the host renderer (0 = clean)
    pub roughness: u8,
    /// Opacity in percent
    pub opacity: u8,
    pub roundness: Option<Roundness>,
}

impl Element {
    /// Shared defaults for every chart element, so the host's properties
    /// panel shows stable values when a chart group is selected.
    fn base(kind: ElementKind, background_color: impl Into<String>) -> Self {
        Self {
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            background_color: background_color.into(),
            fill_style: FillStyle::Hachure,
            stroke_style: StrokeStyle::Solid,
            stroke_width: 1.0,
            roughness: 1,
            opacity: 100,
            roundness: None,
        }
    }

    pub fn rectangle(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        background_color: impl Into<String>,
    ) -> Self {
        let mut element = Self::base(ElementKind::Rectangle, background_color);
        element.x = x;
        element.y = y;
        element.width = width;
        element.height = height;
        element
    }

    pub fn ellipse(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        background_color: impl Into<String>,
    ) -> Self {
        let mut element = Self::base(ElementKind::Ellipse, background_color);
        element.x = x;
        element.y = y;
        element.width = width;
        element.height = height;
        element
    }

    /// An open polyline anchored at `(x, y)`; width/height default to the
    /// bounding box of `points` and can be overridden with [`with_size`].
    ///
    /// [`with_size`]: Element::with_size
    pub fn line(x: f64, y: f64, points: Vec<(f64, f64)>) -> Self {
        let (width, height) = points_bounds(&points);
        let mut element = Self::base(
            ElementKind::Line {
                points,
                polygon: false,
            },
            COLOR_TRANSPARENT,
        );
        element.x = x;
        element.y = y;
        element.width = width;
        element.height = height;
        element
    }

    /// A closed polygon; the caller is expected to repeat the first vertex
    /// as the last so the shape reads as closed even for hosts that ignore
    /// the polygon flag.
    pub fn polygon(x: f64, y: f64, points: Vec<(f64, f64)>) -> Self {
        let mut element = Self::line(x, y, points);
        if let ElementKind::Line { polygon, .. } = &mut element.kind {
            *polygon = true;
        }
        element
    }

    /// A text element anchored at `(anchor_x, anchor_y)`.
    ///
    /// The stored `x`/`y` is the resolved top-left corner: the anchor is
    /// shifted left by the alignment (center: half width, right: full
    /// width) and up by the vertical alignment (middle: half height,
    /// bottom: full height). `metrics` become the element size.
    pub fn text(
        anchor_x: f64,
        anchor_y: f64,
        content: TextContent,
        metrics: TextMetrics,
        background_color: impl Into<String>,
    ) -> Self {
        let x = match content.text_align {
            TextAlign::Left => anchor_x,
            TextAlign::Center => anchor_x - metrics.width / 2.0,
            TextAlign::Right => anchor_x - metrics.width,
        };
        let y = match content.vertical_align {
            VerticalAlign::Top => anchor_y,
            VerticalAlign::Middle => anchor_y - metrics.height / 2.0,
            VerticalAlign::Bottom => anchor_y - metrics.height,
        };
        let mut element = Self::base(ElementKind::Text(content), background_color);
        element.x = x;
        element.y = y;
        element.width = metrics.width;
        element.height = metrics.height;
        element
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = style;
        self
    }

    pub fn with_roughness(mut self, roughness: u8) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_roundness(mut self, roundness: Roundness) -> Self {
        self.roundness = Some(roundness);
        self
    }

    /// Whether this element is a text element
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text(_))
    }

    /// The text payload, when this is a text element
    pub fn text_content(&self) -> Option<&TextContent> {
        match &self.kind {
            ElementKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// The line vertices, when this is a line element
    pub fn line_points(&self) -> Option<&[(f64, f64)]> {
        match &self.kind {
            ElementKind::Line { points, .. } => Some(points),
            _ => None,
        }
    }
}

/// Axis-aligned bounding box size of a point list
fn points_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if points.is_empty() {
        (0.0, 0.0)
    } else {
        (max_x - min_x, max_y - min_y)
    }
}
