//! Geometric primitives for chart interaction.
//!
//! Provides the point/rectangle/insets types used by the coordinate mapper
//! and the gesture state machine. Coordinates are `f64` because they carry
//! both device pixels and logical chart-space values.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Constrain this point to lie within the given rectangle.
    #[must_use]
    pub fn clamp_to(self, area: &Rect) -> Self {
        Self::new(
            self.x.clamp(area.min_x(), area.max_x()),
            self.y.clamp(area.min_y(), area.max_y()),
        )
    }
}

/// A rectangle defined by position and size.
///
/// Width and height may be negative while a selection drag is in progress
/// (the moving corner is above or left of the origin); consumers that need a
/// normalized rectangle use [`Rect::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the origin corner.
    pub x: f64,
    /// Y coordinate of the origin corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest x coordinate.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    /// Smallest y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    /// Largest x coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    /// Largest y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Return an equivalent rectangle with non-negative width and height.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            self.min_x(),
            self.min_y(),
            self.width.abs(),
            self.height.abs(),
        )
    }
}

/// Empty space around a component's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
}

impl Insets {
    /// Zero insets on every edge.
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create new insets.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_clamp_to() {
        let area = Rect::new(0.0, 0.0, 400.0, 300.0);
        let inside = Point::new(50.0, 50.0).clamp_to(&area);
        assert_eq!(inside, Point::new(50.0, 50.0));

        let outside = Point::new(500.0, -10.0).clamp_to(&area);
        assert_eq!(outside, Point::new(400.0, 0.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(5.0, 5.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_rect_extrema() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!((rect.min_x() - 10.0).abs() < f64::EPSILON);
        assert!((rect.max_x() - 40.0).abs() < f64::EPSILON);
        assert!((rect.min_y() - 20.0).abs() < f64::EPSILON);
        assert!((rect.max_y() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_negative_extent_normalized() {
        // a drag up-and-left produces negative width/height
        let rect = Rect::new(100.0, 100.0, -40.0, -30.0);
        assert!((rect.min_x() - 60.0).abs() < f64::EPSILON);
        assert!((rect.max_x() - 100.0).abs() < f64::EPSILON);

        let norm = rect.normalized();
        assert_eq!(norm, Rect::new(60.0, 70.0, 40.0, 30.0));
        assert!(norm.contains(Point::new(80.0, 80.0)));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(rect.center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_insets_none() {
        assert_eq!(Insets::NONE.left, 0.0);
        assert_eq!(Insets::NONE.bottom, 0.0);
    }
}
