//! Mouse gesture state machine for zoom and pan.
//!
//! The controller owns no widget toolkit types: an embedding shell feeds it
//! [`MouseEvent`]s and the [`RenderInfo`] recorded by the last draw pass, and
//! acts on the returned [`GestureOutcome`] (repaint, cursor change, popup).
//! The plot itself is only borrowed for the duration of each handler call.
//!
//! Gesture rules:
//!
//! - a press whose modifiers match the pan mask for the pressed button starts
//!   a pan when the plot is pannable and the press lands in the data area;
//! - otherwise a press matching the zoom mask arms a selection at the press
//!   point, clamped into the data area;
//! - pan takes precedence over zoom when both masks match;
//! - a released selection commits a zoom only when the drag moved at least
//!   the trigger distance along some zoomable screen axis, and restores the
//!   auto bounds instead when the release point is up or left of the origin
//!   on a zoomable axis;
//! - multi-axis commits toggle the plot's notify flag around the axis
//!   mutations so listeners see exactly one change event;
//! - a missing data area degrades every handler to a silent no-op.

use std::collections::HashMap;

use bitflags::bitflags;

use crate::entity::{ChartEntity, EntityCollection};
use crate::geometry::{Point, Rect};
use crate::interaction::mapper::CoordinateMapper;
use crate::interaction::selection::SelectionZoom;
use crate::plot::{Plot, PlotCapabilities, PlotOrientation};

bitflags! {
    /// Keyboard modifiers held during a mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt/Option key.
        const ALT = 1 << 2;
        /// Meta/Command key.
        const META = 1 << 3;
    }
}

/// The mouse button that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Middle button or wheel press.
    Middle,
    /// Secondary button.
    Right,
}

/// A toolkit-neutral mouse event in screen/panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Pointer position on the panel.
    pub point: Point,
    /// Button that changed state (for drag events, the button held).
    pub button: MouseButton,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Whether the platform flags this event as a popup trigger.
    pub popup_trigger: bool,
}

impl MouseEvent {
    /// An event with no popup trigger.
    #[must_use]
    pub fn new(point: Point, button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            point,
            button,
            modifiers,
            popup_trigger: false,
        }
    }

    /// Mark this event as the platform popup trigger.
    #[must_use]
    pub fn with_popup_trigger(mut self) -> Self {
        self.popup_trigger = true;
        self
    }
}

/// What the draw pass recorded, in logical (pre-panel-scaling) coordinates.
#[derive(Debug, Clone, Default)]
pub struct RenderInfo {
    /// Area occupied by the data (axes excluded), if a draw pass completed.
    pub data_area: Option<Rect>,
    /// Interactive elements recorded during the draw pass.
    pub entities: EntityCollection,
}

impl RenderInfo {
    /// Empty render info (no draw pass yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// What a handler did, so the shell knows how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing happened; no repaint needed.
    Ignored,
    /// A pan gesture started; show a move cursor.
    PanStarted,
    /// The plot was panned; repaint.
    Panned,
    /// The pan gesture ended; restore the cursor.
    PanEnded,
    /// A selection origin was armed; no repaint yet.
    ZoomArmed,
    /// The selection rectangle changed; repaint the overlay.
    SelectionUpdated,
    /// The drag stayed under the trigger distance; erase the overlay.
    SelectionDiscarded,
    /// The plot zoomed to the selection; repaint.
    ZoomCommitted,
    /// The plot returned to its auto bounds; repaint.
    AutoBoundsRestored,
    /// The shell should show its popup menu at the event point.
    PopupRequested,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Panning { last: Point, pan_w: f64, pan_h: f64 },
    Selecting,
}

/// Translates mouse events into plot zoom/pan operations.
#[derive(Debug)]
pub struct InteractionController {
    capabilities: PlotCapabilities,
    mapper: CoordinateMapper,
    selection: SelectionZoom,
    gesture: Gesture,
    pan_mask: Modifiers,
    zoom_mask: Modifiers,
    pan_button_masks: HashMap<MouseButton, Modifiers>,
    zoom_button_masks: HashMap<MouseButton, Modifiers>,
    popup_visible: bool,
}

impl InteractionController {
    /// Attach to a plot, caching its capabilities. The snapshot is not
    /// refreshed automatically; call [`InteractionController::attach`] again
    /// after reconfiguring the plot.
    #[must_use]
    pub fn attach(plot: &dyn Plot) -> Self {
        Self {
            capabilities: PlotCapabilities::of(plot),
            mapper: CoordinateMapper::new(),
            selection: SelectionZoom::new(),
            gesture: Gesture::Idle,
            pan_mask: Modifiers::CTRL,
            zoom_mask: Modifiers::empty(),
            pan_button_masks: HashMap::new(),
            zoom_button_masks: HashMap::new(),
            popup_visible: false,
        }
    }

    /// The cached plot capabilities.
    #[must_use]
    pub fn capabilities(&self) -> PlotCapabilities {
        self.capabilities
    }

    /// The coordinate mapper; the draw pass updates it via
    /// [`CoordinateMapper::rescale`].
    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Mutable access to the coordinate mapper.
    pub fn mapper_mut(&mut self) -> &mut CoordinateMapper {
        &mut self.mapper
    }

    /// The selection-zoom state (for overlay drawing).
    #[must_use]
    pub fn selection(&self) -> &SelectionZoom {
        &self.selection
    }

    /// Mutable access to the selection-zoom state (trigger distance, paints).
    pub fn selection_mut(&mut self) -> &mut SelectionZoom {
        &mut self.selection
    }

    /// Whether a pan gesture is in flight.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    /// Whether a selection gesture is in flight.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.gesture, Gesture::Selecting)
    }

    /// Global modifier mask that starts a pan (any button without its own
    /// override).
    pub fn set_pan_mask(&mut self, mask: Modifiers) {
        self.pan_mask = mask;
    }

    /// Global modifier mask that starts a zoom selection.
    pub fn set_zoom_mask(&mut self, mask: Modifiers) {
        self.zoom_mask = mask;
    }

    /// Per-button override for the pan mask.
    pub fn set_pan_button_mask(&mut self, button: MouseButton, mask: Modifiers) {
        self.pan_button_masks.insert(button, mask);
    }

    /// Per-button override for the zoom mask.
    pub fn set_zoom_button_mask(&mut self, button: MouseButton, mask: Modifiers) {
        self.zoom_button_masks.insert(button, mask);
    }

    /// Gate gestures while the shell's popup menu is showing.
    pub fn set_popup_visible(&mut self, visible: bool) {
        self.popup_visible = visible;
    }

    /// Whether the shell's popup menu is showing.
    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    /// The data area in screen coordinates, if a draw pass recorded one.
    #[must_use]
    pub fn screen_data_area(&self, info: &RenderInfo) -> Option<Rect> {
        info.data_area.map(|area| self.mapper.scale_rect(area))
    }

    /// The interactive element under a screen point, for tooltips.
    #[must_use]
    pub fn entity_at<'a>(&self, info: &'a RenderInfo, point: Point) -> Option<&'a ChartEntity> {
        info.entities.entity_at(self.mapper.screen_to_logical(point))
    }

    fn pan_mask_for(&self, button: MouseButton) -> Modifiers {
        self.pan_button_masks
            .get(&button)
            .copied()
            .unwrap_or(self.pan_mask)
    }

    fn zoom_mask_for(&self, button: MouseButton) -> Modifiers {
        self.zoom_button_masks
            .get(&button)
            .copied()
            .unwrap_or(self.zoom_mask)
    }

    /// Handle a mouse press: start a pan, arm a zoom selection, or request
    /// the popup. Pan is checked first, so a button whose pan and zoom masks
    /// coincide pans. No gesture starts while the shell's popup menu is
    /// showing.
    pub fn mouse_pressed(&mut self, info: &RenderInfo, event: &MouseEvent) -> GestureOutcome {
        if self.popup_visible {
            return GestureOutcome::Ignored;
        }
        if event.modifiers == self.pan_mask_for(event.button) {
            if self.capabilities.is_pannable() {
                if let Some(area) = self.screen_data_area(info) {
                    if area.contains(event.point) {
                        self.gesture = Gesture::Panning {
                            last: event.point,
                            pan_w: area.width,
                            pan_h: area.height,
                        };
                        return GestureOutcome::PanStarted;
                    }
                }
            }
        } else if !self.selection.is_activated() {
            if event.popup_trigger {
                return GestureOutcome::PopupRequested;
            }
            if event.modifiers == self.zoom_mask_for(event.button) {
                if let Some(area) = self.screen_data_area(info) {
                    self.selection.set_origin(event.point.clamp_to(&area));
                    self.gesture = Gesture::Selecting;
                    return GestureOutcome::ZoomArmed;
                }
            }
        }
        GestureOutcome::Ignored
    }

    /// Handle a mouse drag: advance a pan or grow the selection rectangle.
    pub fn mouse_dragged(
        &mut self,
        plot: &mut dyn Plot,
        info: &RenderInfo,
        event: &MouseEvent,
    ) -> GestureOutcome {
        if self.popup_visible {
            return GestureOutcome::Ignored;
        }

        if let Gesture::Panning { last, pan_w, pan_h } = self.gesture {
            let dx = event.point.x - last.x;
            let dy = event.point.y - last.y;
            if dx == 0.0 && dy == 0.0 {
                return GestureOutcome::Ignored;
            }
            // dragging right moves the view left, so the domain shifts the
            // other way; vertical screen coordinates already grow downward
            let w_percent = -dx / pan_w;
            let h_percent = dy / pan_h;
            let saved = plot.is_notify();
            plot.set_notify(false);
            match self.capabilities.orientation {
                PlotOrientation::Vertical => {
                    plot.pan_domain_axes(w_percent, last);
                    plot.pan_range_axes(h_percent, last);
                }
                PlotOrientation::Horizontal => {
                    plot.pan_domain_axes(h_percent, last);
                    plot.pan_range_axes(w_percent, last);
                }
            }
            self.gesture = Gesture::Panning {
                last: event.point,
                pan_w,
                pan_h,
            };
            plot.set_notify(saved);
            return GestureOutcome::Panned;
        }

        if self.gesture != Gesture::Selecting || self.selection.origin().is_none() {
            return GestureOutcome::Ignored;
        }
        let Some(area) = self.screen_data_area(info) else {
            return GestureOutcome::Ignored;
        };
        let (h_zoom, v_zoom) = self.capabilities.screen_zoomable();
        if !h_zoom && !v_zoom {
            return GestureOutcome::Ignored;
        }
        self.selection
            .update_selection(event.point, h_zoom, v_zoom, area);
        GestureOutcome::SelectionUpdated
    }

    /// Handle a mouse release: end a pan, commit or discard a selection, or
    /// request the popup.
    pub fn mouse_released(
        &mut self,
        plot: &mut dyn Plot,
        info: &RenderInfo,
        event: &MouseEvent,
    ) -> GestureOutcome {
        if self.is_panning() {
            self.gesture = Gesture::Idle;
            return GestureOutcome::PanEnded;
        }

        if self.selection.is_activated() {
            self.gesture = Gesture::Idle;
            let Some(origin) = self.selection.origin() else {
                self.selection.reset();
                return GestureOutcome::Ignored;
            };
            let (h_zoom, v_zoom) = self.capabilities.screen_zoomable();
            let zoom_trigger1 = h_zoom
                && (event.point.x - origin.x).abs() >= self.selection.trigger_distance();
            let zoom_trigger2 = v_zoom
                && (event.point.y - origin.y).abs() >= self.selection.trigger_distance();
            if zoom_trigger1 || zoom_trigger2 {
                let outcome = if (h_zoom && event.point.x < origin.x)
                    || (v_zoom && event.point.y < origin.y)
                {
                    self.restore_auto_bounds(plot);
                    GestureOutcome::AutoBoundsRestored
                } else if let Some(area) = self.screen_data_area(info) {
                    match self.selection.selection_rect(h_zoom, v_zoom, area) {
                        Some(selection) => {
                            self.zoom(plot, selection, area);
                            GestureOutcome::ZoomCommitted
                        }
                        None => GestureOutcome::Ignored,
                    }
                } else {
                    GestureOutcome::Ignored
                };
                self.selection.reset();
                return outcome;
            }
            self.selection.reset();
            return GestureOutcome::SelectionDiscarded;
        }

        self.gesture = Gesture::Idle;
        if event.popup_trigger {
            return GestureOutcome::PopupRequested;
        }
        GestureOutcome::Ignored
    }

    /// Zoom the plot to a selection rectangle, both given in screen
    /// coordinates relative to the screen data area.
    ///
    /// Fractional bounds are measured from the area's left edge horizontally
    /// and from its bottom edge vertically (screen y grows downward, axis
    /// values grow upward). Axis routing follows the plot orientation, and
    /// the notify flag is toggled so the whole commit raises one event.
    pub fn zoom(&self, plot: &mut dyn Plot, selection: Rect, screen_data_area: Rect) {
        if selection.width <= 0.0 || selection.height <= 0.0 {
            return;
        }
        let anchor = self
            .mapper
            .screen_to_logical(Point::new(selection.x, selection.y));
        let h_lower = (selection.min_x() - screen_data_area.min_x()) / screen_data_area.width;
        let h_upper = (selection.max_x() - screen_data_area.min_x()) / screen_data_area.width;
        let v_lower = (screen_data_area.max_y() - selection.max_y()) / screen_data_area.height;
        let v_upper = (screen_data_area.max_y() - selection.min_y()) / screen_data_area.height;

        let saved = plot.is_notify();
        plot.set_notify(false);
        match self.capabilities.orientation {
            PlotOrientation::Horizontal => {
                plot.zoom_domain_axes(v_lower, v_upper, anchor);
                plot.zoom_range_axes(h_lower, h_upper, anchor);
            }
            PlotOrientation::Vertical => {
                plot.zoom_domain_axes(h_lower, h_upper, anchor);
                plot.zoom_range_axes(v_lower, v_upper, anchor);
            }
        }
        plot.set_notify(saved);
    }

    /// Restore the auto bounds on both axes with a single change event.
    pub fn restore_auto_bounds(&self, plot: &mut dyn Plot) {
        let saved = plot.is_notify();
        plot.set_notify(false);
        plot.restore_auto_domain_bounds();
        plot.restore_auto_range_bounds();
        plot.set_notify(saved);
    }
}
