//! # Interchart
//!
//! Interactive 2D chart styling and navigation core.
//!
//! Interchart provides the two mechanisms every interactive chart component
//! needs, independent of any widget toolkit or rendering backend:
//!
//! - **Per-series styling**: paints, strokes, marker shapes, fonts, and
//!   visibility flags resolved through a three-step fallback chain (explicit
//!   per-series override, auto-populated supplier value, process-wide
//!   default), with change events so views repaint exactly when style state
//!   changes.
//! - **Mouse navigation**: a gesture state machine that turns press/drag/
//!   release sequences into zoom-rectangle selections and fractional pans on
//!   any [`Plot`](plot::Plot), plus the coordinate mapping between panel
//!   space and the logical space the chart was drawn in.
//!
//! ## Quick Start
//!
//! ```rust
//! use interchart::prelude::*;
//!
//! let mut plot = XyPlot::new(
//!     Range::new(0.0, 100.0)?,
//!     Range::new(0.0, 50.0)?,
//! );
//! plot.set_drawing_supplier(Box::new(DefaultDrawingSupplier::new()));
//!
//! // first two series get distinct paints from the supplier
//! let first = plot.series_paint(0);
//! let second = plot.series_paint(1);
//! assert_ne!(first, second);
//!
//! // drag out a zoom rectangle
//! let mut controller = InteractionController::attach(&plot);
//! let info = RenderInfo {
//!     data_area: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
//!     ..RenderInfo::default()
//! };
//! let press = MouseEvent::new(Point::new(100.0, 100.0), MouseButton::Left, Modifiers::empty());
//! let release = MouseEvent::new(Point::new(300.0, 200.0), MouseButton::Left, Modifiers::empty());
//! controller.mouse_pressed(&info, &press);
//! controller.mouse_dragged(&mut plot, &info, &release);
//! controller.mouse_released(&mut plot, &info, &release);
//! assert_eq!(plot.domain_range().lower(), 25.0);
//! # Ok::<(), interchart::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization derives for the style value types

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for chart paints.
pub mod color;

/// Geometric primitives (points, rectangles, insets).
pub mod geometry;

/// Change events and the listener registry.
pub mod event;

/// Interactive chart elements recorded per draw pass.
pub mod entity;

/// Plot capability trait and the stock two-axis plot.
pub mod plot;

// ============================================================================
// Subsystems
// ============================================================================

/// Per-series style attribute resolution.
pub mod style;

/// Mouse-driven zoom and pan.
pub mod interaction;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for interchart operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use interchart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::entity::{ChartEntity, EntityCollection};
    pub use crate::error::{Error, Result};
    pub use crate::event::{ChangeEvent, ChangeKind, ChangeListener, ChangeNotifier};
    pub use crate::geometry::{Insets, Point, Rect, Size};
    pub use crate::interaction::{
        CoordinateMapper, DrawBounds, GestureOutcome, InteractionController, Modifiers,
        MouseButton, MouseEvent, RenderInfo, SelectionZoom,
    };
    pub use crate::plot::{Plot, PlotCapabilities, PlotOrientation, Range, XyPlot};
    pub use crate::style::{
        AttributeResolver, AttributeTable, DashPattern, DefaultDrawingSupplier, DrawingSupplier,
        FontSpec, LabelPlacement, MarkerShape, SeriesRenderer, Stroke,
    };
}

// ============================================================================
// Tests
// ============================================================================
