//! Translation between screen space and logical drawing space.
//!
//! A chart is laid out at its natural size in logical space, then scaled to
//! fit the panel: if the available area is smaller than the minimum draw
//! size the chart is drawn at the minimum and shrunk; if larger than the
//! maximum it is drawn at the maximum and stretched. The mapper captures the
//! resulting scale factors once per draw pass; every coordinate conversion
//! during the following interaction step uses those last-known factors, so a
//! resize racing a drag cannot make the gesture jitter mid-flight.

use crate::error::{Error, Result};
use crate::geometry::{Insets, Point, Rect, Size};

/// Validated minimum/maximum draw sizes for the fit-to-panel rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawBounds {
    min: Size,
    max: Size,
}

impl DrawBounds {
    /// Create draw bounds, validating that both sizes are positive and the
    /// minimum does not exceed the maximum.
    pub fn new(min: Size, max: Size) -> Result<Self> {
        for size in [min, max] {
            if size.width <= 0.0 || size.height <= 0.0 {
                return Err(Error::InvalidDimensions {
                    width: size.width,
                    height: size.height,
                });
            }
        }
        if min.width > max.width || min.height > max.height {
            return Err(Error::InvalidArgument(format!(
                "minimum draw size {}x{} exceeds maximum {}x{}",
                min.width, min.height, max.width, max.height
            )));
        }
        Ok(Self { min, max })
    }

    /// Minimum draw size.
    #[must_use]
    pub fn min(&self) -> Size {
        self.min
    }

    /// Maximum draw size.
    #[must_use]
    pub fn max(&self) -> Size {
        self.max
    }
}

impl Default for DrawBounds {
    fn default() -> Self {
        Self {
            min: Size::new(300.0, 200.0),
            max: Size::new(1024.0, 768.0),
        }
    }
}

/// Bidirectional transform between physical screen/panel coordinates and the
/// logical drawing space the chart was laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    insets: Insets,
    scale_x: f64,
    scale_y: f64,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateMapper {
    /// Identity mapper: no insets, unit scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            insets: Insets::NONE,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Set the component insets (borders around the drawing surface).
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    /// Current insets.
    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Current horizontal scale factor.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Current vertical scale factor.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Recompute the scale factors for a draw pass and return the size the
    /// chart should be laid out at in logical space.
    ///
    /// Each axis is handled independently: available size below the minimum
    /// draws at the minimum and scales down; above the maximum draws at the
    /// maximum and scales up; otherwise the chart draws at the available
    /// size with unit scale.
    pub fn rescale(&mut self, available: Size, bounds: &DrawBounds) -> Size {
        let mut draw_width = available.width;
        let mut draw_height = available.height;
        self.scale_x = 1.0;
        self.scale_y = 1.0;

        if draw_width < bounds.min.width {
            self.scale_x = draw_width / bounds.min.width;
            draw_width = bounds.min.width;
        } else if draw_width > bounds.max.width {
            self.scale_x = draw_width / bounds.max.width;
            draw_width = bounds.max.width;
        }

        if draw_height < bounds.min.height {
            self.scale_y = draw_height / bounds.min.height;
            draw_height = bounds.min.height;
        } else if draw_height > bounds.max.height {
            self.scale_y = draw_height / bounds.max.height;
            draw_height = bounds.max.height;
        }

        Size::new(draw_width, draw_height)
    }

    /// Translate a screen/panel point into logical drawing space.
    #[must_use]
    pub fn screen_to_logical(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.insets.left) / self.scale_x,
            (point.y - self.insets.top) / self.scale_y,
        )
    }

    /// Translate a logical drawing-space point onto the screen.
    #[must_use]
    pub fn logical_to_screen(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale_x + self.insets.left,
            point.y * self.scale_y + self.insets.top,
        )
    }

    /// Apply the logical-to-screen transform to a rectangle's origin and
    /// extent independently in x and y.
    #[must_use]
    pub fn scale_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x * self.scale_x + self.insets.left,
            rect.y * self.scale_y + self.insets.top,
            rect.width * self.scale_x,
            rect.height * self.scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapper() {
        let mapper = CoordinateMapper::new();
        let p = Point::new(12.5, 7.0);
        assert_eq!(mapper.screen_to_logical(p), p);
        assert_eq!(mapper.logical_to_screen(p), p);
    }

    #[test]
    fn test_draw_bounds_validation() {
        assert!(DrawBounds::new(Size::new(10.0, 10.0), Size::new(100.0, 100.0)).is_ok());
        assert!(DrawBounds::new(Size::new(0.0, 10.0), Size::new(100.0, 100.0)).is_err());
        assert!(DrawBounds::new(Size::new(200.0, 10.0), Size::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_rescale_within_bounds_is_unit_scale() {
        let mut mapper = CoordinateMapper::new();
        let bounds =
            DrawBounds::new(Size::new(100.0, 100.0), Size::new(800.0, 600.0)).expect("valid");
        let drawn = mapper.rescale(Size::new(400.0, 300.0), &bounds);
        assert_eq!(drawn, Size::new(400.0, 300.0));
        assert!((mapper.scale_x() - 1.0).abs() < 1e-12);
        assert!((mapper.scale_y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rescale_below_minimum_shrinks() {
        let mut mapper = CoordinateMapper::new();
        let bounds =
            DrawBounds::new(Size::new(200.0, 100.0), Size::new(800.0, 600.0)).expect("valid");
        let drawn = mapper.rescale(Size::new(100.0, 300.0), &bounds);
        // chart laid out at the minimum width, scaled to half
        assert_eq!(drawn, Size::new(200.0, 300.0));
        assert!((mapper.scale_x() - 0.5).abs() < 1e-12);
        assert!((mapper.scale_y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rescale_above_maximum_stretches() {
        let mut mapper = CoordinateMapper::new();
        let bounds =
            DrawBounds::new(Size::new(100.0, 100.0), Size::new(400.0, 300.0)).expect("valid");
        let drawn = mapper.rescale(Size::new(800.0, 300.0), &bounds);
        assert_eq!(drawn, Size::new(400.0, 300.0));
        assert!((mapper.scale_x() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_screen_logical_round_trip_with_insets_and_scale() {
        let mut mapper = CoordinateMapper::new();
        mapper.set_insets(Insets::new(5.0, 8.0, 5.0, 8.0));
        let bounds =
            DrawBounds::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0)).expect("valid");
        let _ = mapper.rescale(Size::new(100.0, 900.0), &bounds);

        let p = Point::new(57.0, 131.0);
        let back = mapper.logical_to_screen(mapper.screen_to_logical(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_scale_rect() {
        let mut mapper = CoordinateMapper::new();
        mapper.set_insets(Insets::new(10.0, 20.0, 0.0, 0.0));
        let bounds =
            DrawBounds::new(Size::new(100.0, 100.0), Size::new(200.0, 200.0)).expect("valid");
        let _ = mapper.rescale(Size::new(400.0, 100.0), &bounds); // scale_x = 2

        let scaled = mapper.scale_rect(Rect::new(10.0, 10.0, 50.0, 50.0));
        assert!((scaled.x - 30.0).abs() < 1e-9);
        assert!((scaled.y - 30.0).abs() < 1e-9);
        assert!((scaled.width - 100.0).abs() < 1e-9);
        assert!((scaled.height - 50.0).abs() < 1e-9);
    }
}
