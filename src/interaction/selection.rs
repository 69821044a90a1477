//! Zoom-rectangle selection state.
//!
//! Tracks the rectangle the user drags out before a zoom commit. All
//! coordinates here are screen/panel coordinates, not logical chart
//! coordinates; the rectangle is never allowed to extend past the data area
//! on its far edge, while the origin is clamped by the controller at press
//! time.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// Minimum drag distance (device units) required for a zoom commit.
pub const DEFAULT_ZOOM_TRIGGER_DISTANCE: f64 = 10.0;

/// Mutable zoom-rectangle selection with configurable trigger distance and
/// display paints.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionZoom {
    origin: Option<Point>,
    rect: Option<Rect>,
    trigger_distance: f64,
    fill_rectangle: bool,
    outline_paint: Rgba,
    fill_paint: Rgba,
}

impl Default for SelectionZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionZoom {
    /// Selection with the default trigger distance and a translucent blue
    /// fill.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            rect: None,
            trigger_distance: DEFAULT_ZOOM_TRIGGER_DISTANCE,
            fill_rectangle: true,
            outline_paint: Rgba::BLUE,
            fill_paint: Rgba::BLUE.with_alpha(63),
        }
    }

    /// True once a drag has produced a selection rectangle.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.rect.is_some()
    }

    /// The press point the selection grows from, if a gesture is in flight.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Record the (already clamped) press point.
    pub fn set_origin(&mut self, point: Point) {
        self.origin = Some(point);
    }

    /// The current selection rectangle, if any.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Minimum drag distance for a zoom commit.
    #[must_use]
    pub fn trigger_distance(&self) -> f64 {
        self.trigger_distance
    }

    /// Set the minimum drag distance for a zoom commit.
    pub fn set_trigger_distance(&mut self, distance: f64) {
        self.trigger_distance = distance;
    }

    /// Whether the rectangle is drawn filled rather than outlined.
    #[must_use]
    pub fn fill_rectangle(&self) -> bool {
        self.fill_rectangle
    }

    /// Draw the rectangle filled (true) or outlined (false).
    pub fn set_fill_rectangle(&mut self, fill: bool) {
        self.fill_rectangle = fill;
    }

    /// Paint for the rectangle outline.
    #[must_use]
    pub fn outline_paint(&self) -> Rgba {
        self.outline_paint
    }

    /// Set the outline paint.
    pub fn set_outline_paint(&mut self, paint: Rgba) {
        self.outline_paint = paint;
    }

    /// Paint for the rectangle fill (normally translucent).
    #[must_use]
    pub fn fill_paint(&self) -> Rgba {
        self.fill_paint
    }

    /// Set the fill paint.
    pub fn set_fill_paint(&mut self, paint: Rgba) {
        self.fill_paint = paint;
    }

    /// Grow the selection rectangle toward `point`, constrained by which axes
    /// are zoomable and clamped so the far edge never leaves the data area.
    ///
    /// With only one zoomable axis the rectangle spans the full data area on
    /// the other axis. Does nothing when no origin is recorded or neither
    /// axis is zoomable.
    pub fn update_selection(&mut self, point: Point, h_zoom: bool, v_zoom: bool, data_area: Rect) {
        let Some(origin) = self.origin else {
            return;
        };
        if h_zoom && v_zoom {
            let x_max = point.x.min(data_area.max_x());
            let y_max = point.y.min(data_area.max_y());
            self.rect = Some(Rect::new(
                origin.x,
                origin.y,
                x_max - origin.x,
                y_max - origin.y,
            ));
        } else if h_zoom {
            let x_max = point.x.min(data_area.max_x());
            self.rect = Some(Rect::new(
                origin.x,
                data_area.min_y(),
                x_max - origin.x,
                data_area.height,
            ));
        } else if v_zoom {
            let y_max = point.y.min(data_area.max_y());
            self.rect = Some(Rect::new(
                data_area.min_x(),
                origin.y,
                data_area.width,
                y_max - origin.y,
            ));
        }
    }

    /// The rectangle a commit should zoom to, expanded to the full data area
    /// on any non-zoomable axis and clipped to the data area's far edges.
    ///
    /// Callers only reach this after the trigger test, so at least one of
    /// `h_zoom`/`v_zoom` is true; returns `None` if no gesture is in flight.
    #[must_use]
    pub fn selection_rect(&self, h_zoom: bool, v_zoom: bool, data_area: Rect) -> Option<Rect> {
        let origin = self.origin?;
        let rect = self.rect?;
        let max_x = data_area.max_x();
        let max_y = data_area.max_y();
        let selection = if !v_zoom {
            Rect::new(
                origin.x,
                data_area.min_y(),
                rect.width.min(max_x - origin.x),
                data_area.height,
            )
        } else if !h_zoom {
            Rect::new(
                data_area.min_x(),
                origin.y,
                data_area.width,
                rect.height.min(max_y - origin.y),
            )
        } else {
            Rect::new(
                origin.x,
                origin.y,
                rect.width.min(max_x - origin.x),
                rect.height.min(max_y - origin.y),
            )
        };
        Some(selection)
    }

    /// Forget the origin and rectangle, ending the gesture.
    pub fn reset(&mut self) {
        self.origin = None;
        self.rect = None;
    }
}
