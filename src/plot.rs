//! Plot capabilities and a concrete two-axis plot.
//!
//! The interaction controller drives any [`Plot`] implementation through the
//! capability trait: fractional zoom, fractional pan, auto-bounds restore,
//! and the notify flag used to coalesce multi-axis mutations into one change
//! event. [`XyPlot`] is the stock implementation with a linear domain and
//! range axis; it also owns the [`DrawingSupplier`] shared by its renderer.

use std::fmt;
use std::rc::Rc;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::event::{ChangeEvent, ChangeKind, ChangeListener, ChangeNotifier};
use crate::geometry::Point;
use crate::style::supplier::DrawingSupplier;
use crate::style::values::{MarkerShape, Stroke};
use crate::style::SeriesRenderer;

/// The direction of the domain axis on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotOrientation {
    /// Domain axis runs horizontally (the common case).
    #[default]
    Vertical,
    /// Domain axis runs vertically.
    Horizontal,
}

/// A closed axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// Create a range, validating `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower >= upper {
            return Err(Error::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Length of the range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// The sub-range between two fractions of this range.
    ///
    /// `zoomed(0.25, 0.75)` is the middle half. Callers guarantee
    /// `lower_frac < upper_frac`.
    #[must_use]
    pub fn zoomed(&self, lower_frac: f64, upper_frac: f64) -> Self {
        let len = self.length();
        Self {
            lower: self.lower + lower_frac * len,
            upper: self.lower + upper_frac * len,
        }
    }

    /// The range shifted by a fraction of its own length.
    #[must_use]
    pub fn panned(&self, fraction: f64) -> Self {
        let delta = fraction * self.length();
        Self {
            lower: self.lower + delta,
            upper: self.upper + delta,
        }
    }
}

/// The capability surface the interaction controller drives.
///
/// Fractions passed to the zoom methods are relative to the current axis
/// range; fractions passed to the pan methods are relative to the data-area
/// dimension. The anchor is the gesture origin in logical drawing space;
/// implementations may ignore it.
pub trait Plot {
    /// Orientation of the domain axis.
    fn orientation(&self) -> PlotOrientation;

    /// Whether the domain axis can be zoomed.
    fn is_domain_zoomable(&self) -> bool;
    /// Whether the range axis can be zoomed.
    fn is_range_zoomable(&self) -> bool;
    /// Whether the domain axis can be panned.
    fn is_domain_pannable(&self) -> bool;
    /// Whether the range axis can be panned.
    fn is_range_pannable(&self) -> bool;

    /// Zoom the domain axis to the given fractional bounds.
    fn zoom_domain_axes(&mut self, lower_frac: f64, upper_frac: f64, anchor: Point);
    /// Zoom the range axis to the given fractional bounds.
    fn zoom_range_axes(&mut self, lower_frac: f64, upper_frac: f64, anchor: Point);
    /// Pan the domain axis by a fraction of the visible span.
    fn pan_domain_axes(&mut self, fraction: f64, anchor: Point);
    /// Pan the range axis by a fraction of the visible span.
    fn pan_range_axes(&mut self, fraction: f64, anchor: Point);
    /// Restore automatic bounds on the domain axis.
    fn restore_auto_domain_bounds(&mut self);
    /// Restore automatic bounds on the range axis.
    fn restore_auto_range_bounds(&mut self);

    /// Whether mutations currently broadcast change events.
    fn is_notify(&self) -> bool;
    /// Toggle change broadcasting. Re-enabling fires one event, which is the
    /// coalescing mechanism for multi-axis operations.
    fn set_notify(&mut self, notify: bool);
}

/// Plot capabilities resolved once when a chart is attached to a panel,
/// instead of re-querying the plot on every mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotCapabilities {
    /// Orientation of the domain axis.
    pub orientation: PlotOrientation,
    /// Domain axis zoomable.
    pub domain_zoomable: bool,
    /// Range axis zoomable.
    pub range_zoomable: bool,
    /// Domain axis pannable.
    pub domain_pannable: bool,
    /// Range axis pannable.
    pub range_pannable: bool,
}

impl PlotCapabilities {
    /// Snapshot the capabilities of a plot.
    #[must_use]
    pub fn of(plot: &dyn Plot) -> Self {
        Self {
            orientation: plot.orientation(),
            domain_zoomable: plot.is_domain_zoomable(),
            range_zoomable: plot.is_range_zoomable(),
            domain_pannable: plot.is_domain_pannable(),
            range_pannable: plot.is_range_pannable(),
        }
    }

    /// Whether any axis is pannable.
    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.domain_pannable || self.range_pannable
    }

    /// Zoomability of the (horizontal, vertical) screen axes, after routing
    /// through the plot orientation.
    #[must_use]
    pub fn screen_zoomable(&self) -> (bool, bool) {
        match self.orientation {
            PlotOrientation::Horizontal => (self.range_zoomable, self.domain_zoomable),
            PlotOrientation::Vertical => (self.domain_zoomable, self.range_zoomable),
        }
    }
}

/// A two-axis plot with linear value axes.
pub struct XyPlot {
    orientation: PlotOrientation,
    domain: Range,
    range: Range,
    auto_domain: Range,
    auto_range: Range,
    domain_zoomable: bool,
    range_zoomable: bool,
    domain_pannable: bool,
    range_pannable: bool,
    notify: bool,
    notifier: ChangeNotifier,
    renderer: SeriesRenderer,
    supplier: Option<Box<dyn DrawingSupplier>>,
}

impl XyPlot {
    /// Create a plot over the given axis ranges. The initial ranges double
    /// as the auto bounds restored by a reset-zoom gesture.
    #[must_use]
    pub fn new(domain: Range, range: Range) -> Self {
        Self {
            orientation: PlotOrientation::Vertical,
            domain,
            range,
            auto_domain: domain,
            auto_range: range,
            domain_zoomable: true,
            range_zoomable: true,
            domain_pannable: true,
            range_pannable: true,
            notify: true,
            notifier: ChangeNotifier::new(),
            renderer: SeriesRenderer::new(),
            supplier: None,
        }
    }

    /// Set the plot orientation.
    pub fn set_orientation(&mut self, orientation: PlotOrientation) {
        self.orientation = orientation;
    }

    /// Enable or disable domain-axis zooming.
    pub fn set_domain_zoomable(&mut self, zoomable: bool) {
        self.domain_zoomable = zoomable;
    }

    /// Enable or disable range-axis zooming.
    pub fn set_range_zoomable(&mut self, zoomable: bool) {
        self.range_zoomable = zoomable;
    }

    /// Enable or disable domain-axis panning.
    pub fn set_domain_pannable(&mut self, pannable: bool) {
        self.domain_pannable = pannable;
    }

    /// Enable or disable range-axis panning.
    pub fn set_range_pannable(&mut self, pannable: bool) {
        self.range_pannable = pannable;
    }

    /// Current domain axis range.
    #[must_use]
    pub fn domain_range(&self) -> Range {
        self.domain
    }

    /// Current range axis range.
    #[must_use]
    pub fn range_range(&self) -> Range {
        self.range
    }

    /// Install the drawing supplier shared by this plot's renderer.
    pub fn set_drawing_supplier(&mut self, supplier: Box<dyn DrawingSupplier>) {
        self.supplier = Some(supplier);
    }

    /// The renderer's style aggregate.
    #[must_use]
    pub fn renderer(&self) -> &SeriesRenderer {
        &self.renderer
    }

    /// Mutable access to the renderer's style aggregate.
    pub fn renderer_mut(&mut self) -> &mut SeriesRenderer {
        &mut self.renderer
    }

    /// Resolve the paint for a series through this plot's supplier.
    pub fn series_paint(&mut self, series: usize) -> Rgba {
        self.renderer
            .lookup_series_paint(series, self.supplier.as_deref_mut())
    }

    /// Resolve the fill paint for a series through this plot's supplier.
    pub fn series_fill_paint(&mut self, series: usize) -> Rgba {
        self.renderer
            .lookup_series_fill_paint(series, self.supplier.as_deref_mut())
    }

    /// Resolve the outline paint for a series through this plot's supplier.
    pub fn series_outline_paint(&mut self, series: usize) -> Rgba {
        self.renderer
            .lookup_series_outline_paint(series, self.supplier.as_deref_mut())
    }

    /// Resolve the stroke for a series through this plot's supplier.
    pub fn series_stroke(&mut self, series: usize) -> Stroke {
        self.renderer
            .lookup_series_stroke(series, self.supplier.as_deref_mut())
    }

    /// Resolve the outline stroke for a series through this plot's supplier.
    pub fn series_outline_stroke(&mut self, series: usize) -> Stroke {
        self.renderer
            .lookup_series_outline_stroke(series, self.supplier.as_deref_mut())
    }

    /// Resolve the marker shape for a series through this plot's supplier.
    pub fn series_shape(&mut self, series: usize) -> MarkerShape {
        self.renderer
            .lookup_series_shape(series, self.supplier.as_deref_mut())
    }

    /// Register a change listener for axis-range changes.
    pub fn add_listener(&self, listener: Rc<dyn ChangeListener>) {
        self.notifier.register(listener);
    }

    /// Unregister a change listener (no-op if absent).
    pub fn remove_listener(&self, listener: &Rc<dyn ChangeListener>) {
        self.notifier.unregister(listener);
    }

    fn notify_listeners(&self) {
        if self.notify {
            self.notifier
                .fire(&ChangeEvent::new(ChangeKind::AxisRanges));
        }
    }
}

impl Plot for XyPlot {
    fn orientation(&self) -> PlotOrientation {
        self.orientation
    }

    fn is_domain_zoomable(&self) -> bool {
        self.domain_zoomable
    }

    fn is_range_zoomable(&self) -> bool {
        self.range_zoomable
    }

    fn is_domain_pannable(&self) -> bool {
        self.domain_pannable
    }

    fn is_range_pannable(&self) -> bool {
        self.range_pannable
    }

    fn zoom_domain_axes(&mut self, lower_frac: f64, upper_frac: f64, _anchor: Point) {
        if self.domain_zoomable && lower_frac < upper_frac {
            self.domain = self.domain.zoomed(lower_frac, upper_frac);
            self.notify_listeners();
        }
    }

    fn zoom_range_axes(&mut self, lower_frac: f64, upper_frac: f64, _anchor: Point) {
        if self.range_zoomable && lower_frac < upper_frac {
            self.range = self.range.zoomed(lower_frac, upper_frac);
            self.notify_listeners();
        }
    }

    fn pan_domain_axes(&mut self, fraction: f64, _anchor: Point) {
        if self.domain_pannable && fraction != 0.0 {
            self.domain = self.domain.panned(fraction);
            self.notify_listeners();
        }
    }

    fn pan_range_axes(&mut self, fraction: f64, _anchor: Point) {
        if self.range_pannable && fraction != 0.0 {
            self.range = self.range.panned(fraction);
            self.notify_listeners();
        }
    }

    fn restore_auto_domain_bounds(&mut self) {
        self.domain = self.auto_domain;
        self.notify_listeners();
    }

    fn restore_auto_range_bounds(&mut self) {
        self.range = self.auto_range;
        self.notify_listeners();
    }

    fn is_notify(&self) -> bool {
        self.notify
    }

    fn set_notify(&mut self, notify: bool) {
        self.notify = notify;
        if notify {
            self.notifier
                .fire(&ChangeEvent::new(ChangeKind::AxisRanges));
        }
    }
}

impl fmt::Debug for XyPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XyPlot")
            .field("orientation", &self.orientation)
            .field("domain", &self.domain)
            .field("range", &self.range)
            .field("notify", &self.notify)
            .finish_non_exhaustive()
    }
}
