//! Attribute value types for series styling.
//!
//! These are plain value types with structural equality: two strokes with the
//! same width and pattern are the same stroke, wherever they came from. With
//! the `serde` feature enabled they serialize as explicit tagged unions
//! (a kind tag plus fields), so persisted chart styles do not depend on any
//! platform object-serialization scheme.

/// Dash pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DashPattern {
    /// Continuous line.
    #[default]
    Solid,
    /// Evenly dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Alternating dash and dot.
    DashDot,
}

/// A line stroke: width in device units plus a dash pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Line width in device units.
    pub width: f32,
    /// Dash pattern.
    pub pattern: DashPattern,
}

impl Stroke {
    /// Create a solid stroke of the given width.
    #[must_use]
    pub const fn solid(width: f32) -> Self {
        Self {
            width,
            pattern: DashPattern::Solid,
        }
    }

    /// Create a stroke with an explicit pattern.
    #[must_use]
    pub const fn new(width: f32, pattern: DashPattern) -> Self {
        Self { width, pattern }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(1.0)
    }
}

/// Marker shape drawn for a data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerShape {
    /// Filled square.
    #[default]
    Square,
    /// Filled circle.
    Circle,
    /// Upward-pointing triangle.
    TriangleUp,
    /// Diamond.
    Diamond,
    /// Downward-pointing triangle.
    TriangleDown,
    /// Diagonal cross.
    Cross,
    /// Upright plus.
    Plus,
}

/// A font request for item and legend labels.
///
/// The core does not measure or rasterize text; this is the value handed to
/// the text collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Family name (e.g. "SansSerif").
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Bold weight.
    pub bold: bool,
}

impl FontSpec {
    /// Create a regular-weight font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// Create a bold font.
    #[must_use]
    pub fn bold(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: true,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("SansSerif", 10.0)
    }
}

/// Where an item label is placed relative to its data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelPlacement {
    /// Above the item (the conventional position for positive values).
    #[default]
    Above,
    /// Below the item (the conventional position for negative values).
    Below,
    /// Centered on the item.
    Center,
    /// Left of the item.
    Left,
    /// Right of the item.
    Right,
}
