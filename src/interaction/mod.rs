//! Mouse-driven chart navigation.
//!
//! Three collaborators turn raw mouse events into plot mutations:
//!
//! - [`CoordinateMapper`] converts between screen/panel coordinates and the
//!   logical space the chart was drawn in;
//! - [`SelectionZoom`] tracks the zoom rectangle a drag sweeps out;
//! - [`InteractionController`] is the gesture state machine that starts,
//!   advances, and commits pans and zoom selections against a [`Plot`].
//!
//! [`Plot`]: crate::plot::Plot

pub mod controller;
pub mod mapper;
pub mod selection;

pub use controller::{
    GestureOutcome, InteractionController, Modifiers, MouseButton, MouseEvent, RenderInfo,
};
pub use mapper::{CoordinateMapper, DrawBounds};
pub use selection::{SelectionZoom, DEFAULT_ZOOM_TRIGGER_DISTANCE};
