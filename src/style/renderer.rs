//! The per-series style aggregate used by plot renderers.
//!
//! [`SeriesRenderer`] composes one [`AttributeResolver`] per attribute kind
//! instead of inheriting the fields from a base class: paint, fill paint,
//! outline paint, stroke, outline stroke, marker shape, item label styling,
//! legend styling, and the tri-state boolean flags (series visibility,
//! legend visibility, entity creation).
//!
//! Every mutating operation takes a `notify` flag. With `notify = true` the
//! operation fires exactly one change event after the mutation; with
//! `notify = false` it stays silent so a caller can batch several mutations
//! and notify once. Auto-populate cache fills never notify regardless — they
//! are memoization of the supplier sequence, not a style change.

use std::rc::Rc;

use crate::color::Rgba;
use crate::event::{ChangeEvent, ChangeKind, ChangeListener, ChangeNotifier};
use crate::style::resolver::AttributeResolver;
use crate::style::supplier::DrawingSupplier;
use crate::style::table::AttributeTable;
use crate::style::values::{FontSpec, LabelPlacement, MarkerShape, Stroke};

/// Default series paint.
pub const DEFAULT_PAINT: Rgba = Rgba::BLUE;
/// Default series fill paint.
pub const DEFAULT_FILL_PAINT: Rgba = Rgba::LIGHT_GRAY;
/// Default series outline paint.
pub const DEFAULT_OUTLINE_PAINT: Rgba = Rgba::GRAY;
/// Default item label paint.
pub const DEFAULT_ITEM_LABEL_PAINT: Rgba = Rgba::BLACK;

/// Resolves every per-series style attribute for one renderer.
#[derive(Debug)]
pub struct SeriesRenderer {
    paint: AttributeResolver<Rgba>,
    fill_paint: AttributeResolver<Rgba>,
    outline_paint: AttributeResolver<Rgba>,
    stroke: AttributeResolver<Stroke>,
    outline_stroke: AttributeResolver<Stroke>,
    shape: AttributeResolver<MarkerShape>,

    item_labels_visible: AttributeResolver<bool>,
    item_label_font: AttributeResolver<FontSpec>,
    item_label_paint: AttributeResolver<Rgba>,
    positive_label_position: AttributeResolver<LabelPlacement>,
    negative_label_position: AttributeResolver<LabelPlacement>,

    series_visible: AttributeResolver<bool>,
    series_visible_in_legend: AttributeResolver<bool>,
    create_entities: AttributeResolver<bool>,

    legend_shape: AttributeTable<MarkerShape>,
    default_legend_shape: Option<MarkerShape>,
    legend_text_font: AttributeResolver<FontSpec>,
    legend_text_paint: AttributeResolver<Rgba>,

    notifier: ChangeNotifier,
}

impl Default for SeriesRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesRenderer {
    /// Create a renderer with the stock defaults: auto-population enabled
    /// for paint, stroke, and shape; disabled for fill paint, outline paint,
    /// and outline stroke.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paint: AttributeResolver::new(DEFAULT_PAINT, true),
            fill_paint: AttributeResolver::new(DEFAULT_FILL_PAINT, false),
            outline_paint: AttributeResolver::new(DEFAULT_OUTLINE_PAINT, false),
            stroke: AttributeResolver::new(Stroke::default(), true),
            outline_stroke: AttributeResolver::new(Stroke::default(), false),
            shape: AttributeResolver::new(MarkerShape::default(), true),

            item_labels_visible: AttributeResolver::new(false, false),
            item_label_font: AttributeResolver::new(FontSpec::default(), false),
            item_label_paint: AttributeResolver::new(DEFAULT_ITEM_LABEL_PAINT, false),
            positive_label_position: AttributeResolver::new(LabelPlacement::Above, false),
            negative_label_position: AttributeResolver::new(LabelPlacement::Below, false),

            series_visible: AttributeResolver::new(true, false),
            series_visible_in_legend: AttributeResolver::new(true, false),
            create_entities: AttributeResolver::new(true, false),

            legend_shape: AttributeTable::new(),
            default_legend_shape: None,
            legend_text_font: AttributeResolver::new(FontSpec::default(), false),
            legend_text_paint: AttributeResolver::new(Rgba::BLACK, false),

            notifier: ChangeNotifier::new(),
        }
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    /// Register a change listener.
    pub fn add_listener(&self, listener: Rc<dyn ChangeListener>) {
        self.notifier.register(listener);
    }

    /// Unregister a change listener (no-op if absent).
    pub fn remove_listener(&self, listener: &Rc<dyn ChangeListener>) {
        self.notifier.unregister(listener);
    }

    /// The underlying notifier.
    #[must_use]
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    fn fire_change(&self) {
        self.notifier.fire(&ChangeEvent::new(ChangeKind::Style));
    }

    fn maybe_fire(&self, notify: bool) {
        if notify {
            self.fire_change();
        }
    }

    // ------------------------------------------------------------------
    // Paint
    // ------------------------------------------------------------------

    /// Resolve the paint for a series (override, else auto-populate, else
    /// default).
    pub fn lookup_series_paint(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> Rgba {
        match supplier {
            Some(s) => {
                let mut next = || s.next_paint();
                self.paint.lookup(series, Some(&mut next))
            }
            None => self.paint.lookup(series, None),
        }
    }

    /// The explicit paint override for a series, if any.
    #[must_use]
    pub fn series_paint(&self, series: usize) -> Option<&Rgba> {
        self.paint.series_override(series)
    }

    /// Set or unset the paint override for a series.
    pub fn set_series_paint(&mut self, series: usize, paint: Option<Rgba>, notify: bool) {
        self.paint.set_series(series, paint);
        self.maybe_fire(notify);
    }

    /// The default paint.
    #[must_use]
    pub fn default_paint(&self) -> Rgba {
        *self.paint.default_value()
    }

    /// Set the default paint.
    pub fn set_default_paint(&mut self, paint: Rgba, notify: bool) {
        self.paint.set_default(paint);
        self.maybe_fire(notify);
    }

    /// Whether paint lookups auto-populate from the supplier.
    #[must_use]
    pub fn auto_populate_series_paint(&self) -> bool {
        self.paint.auto_populate()
    }

    /// Set the paint auto-population policy. Never notifies: this is a
    /// policy toggle, not an observable style change.
    pub fn set_auto_populate_series_paint(&mut self, auto: bool) {
        self.paint.set_auto_populate(auto);
    }

    /// Remove every per-series paint override.
    pub fn clear_series_paints(&mut self, notify: bool) {
        self.paint.clear_series();
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Fill paint
    // ------------------------------------------------------------------

    /// Resolve the fill paint for a series.
    pub fn lookup_series_fill_paint(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> Rgba {
        match supplier {
            Some(s) => {
                let mut next = || s.next_fill_paint();
                self.fill_paint.lookup(series, Some(&mut next))
            }
            None => self.fill_paint.lookup(series, None),
        }
    }

    /// Set or unset the fill paint override for a series.
    pub fn set_series_fill_paint(&mut self, series: usize, paint: Option<Rgba>, notify: bool) {
        self.fill_paint.set_series(series, paint);
        self.maybe_fire(notify);
    }

    /// Set the default fill paint.
    pub fn set_default_fill_paint(&mut self, paint: Rgba, notify: bool) {
        self.fill_paint.set_default(paint);
        self.maybe_fire(notify);
    }

    /// Set the fill paint auto-population policy (never notifies).
    pub fn set_auto_populate_series_fill_paint(&mut self, auto: bool) {
        self.fill_paint.set_auto_populate(auto);
    }

    /// Remove every per-series fill paint override.
    pub fn clear_series_fill_paints(&mut self, notify: bool) {
        self.fill_paint.clear_series();
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Outline paint
    // ------------------------------------------------------------------

    /// Resolve the outline paint for a series.
    pub fn lookup_series_outline_paint(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> Rgba {
        match supplier {
            Some(s) => {
                let mut next = || s.next_outline_paint();
                self.outline_paint.lookup(series, Some(&mut next))
            }
            None => self.outline_paint.lookup(series, None),
        }
    }

    /// Set or unset the outline paint override for a series.
    pub fn set_series_outline_paint(&mut self, series: usize, paint: Option<Rgba>, notify: bool) {
        self.outline_paint.set_series(series, paint);
        self.maybe_fire(notify);
    }

    /// Set the default outline paint.
    pub fn set_default_outline_paint(&mut self, paint: Rgba, notify: bool) {
        self.outline_paint.set_default(paint);
        self.maybe_fire(notify);
    }

    /// Set the outline paint auto-population policy (never notifies).
    pub fn set_auto_populate_series_outline_paint(&mut self, auto: bool) {
        self.outline_paint.set_auto_populate(auto);
    }

    // ------------------------------------------------------------------
    // Stroke
    // ------------------------------------------------------------------

    /// Resolve the stroke for a series.
    pub fn lookup_series_stroke(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> Stroke {
        match supplier {
            Some(s) => {
                let mut next = || s.next_stroke();
                self.stroke.lookup(series, Some(&mut next))
            }
            None => self.stroke.lookup(series, None),
        }
    }

    /// The explicit stroke override for a series, if any.
    #[must_use]
    pub fn series_stroke(&self, series: usize) -> Option<&Stroke> {
        self.stroke.series_override(series)
    }

    /// Set or unset the stroke override for a series.
    pub fn set_series_stroke(&mut self, series: usize, stroke: Option<Stroke>, notify: bool) {
        self.stroke.set_series(series, stroke);
        self.maybe_fire(notify);
    }

    /// Set the default stroke.
    pub fn set_default_stroke(&mut self, stroke: Stroke, notify: bool) {
        self.stroke.set_default(stroke);
        self.maybe_fire(notify);
    }

    /// Set the stroke auto-population policy (never notifies).
    pub fn set_auto_populate_series_stroke(&mut self, auto: bool) {
        self.stroke.set_auto_populate(auto);
    }

    /// Remove every per-series stroke override.
    pub fn clear_series_strokes(&mut self, notify: bool) {
        self.stroke.clear_series();
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Outline stroke
    // ------------------------------------------------------------------

    /// Resolve the outline stroke for a series.
    pub fn lookup_series_outline_stroke(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> Stroke {
        match supplier {
            Some(s) => {
                let mut next = || s.next_outline_stroke();
                self.outline_stroke.lookup(series, Some(&mut next))
            }
            None => self.outline_stroke.lookup(series, None),
        }
    }

    /// Set or unset the outline stroke override for a series.
    pub fn set_series_outline_stroke(
        &mut self,
        series: usize,
        stroke: Option<Stroke>,
        notify: bool,
    ) {
        self.outline_stroke.set_series(series, stroke);
        self.maybe_fire(notify);
    }

    /// Set the default outline stroke.
    pub fn set_default_outline_stroke(&mut self, stroke: Stroke, notify: bool) {
        self.outline_stroke.set_default(stroke);
        self.maybe_fire(notify);
    }

    /// Set the outline stroke auto-population policy (never notifies).
    pub fn set_auto_populate_series_outline_stroke(&mut self, auto: bool) {
        self.outline_stroke.set_auto_populate(auto);
    }

    // ------------------------------------------------------------------
    // Marker shape
    // ------------------------------------------------------------------

    /// Resolve the marker shape for a series.
    pub fn lookup_series_shape(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> MarkerShape {
        match supplier {
            Some(s) => {
                let mut next = || s.next_shape();
                self.shape.lookup(series, Some(&mut next))
            }
            None => self.shape.lookup(series, None),
        }
    }

    /// Set or unset the shape override for a series.
    pub fn set_series_shape(&mut self, series: usize, shape: Option<MarkerShape>, notify: bool) {
        self.shape.set_series(series, shape);
        self.maybe_fire(notify);
    }

    /// Set the default marker shape.
    pub fn set_default_shape(&mut self, shape: MarkerShape, notify: bool) {
        self.shape.set_default(shape);
        self.maybe_fire(notify);
    }

    /// Set the shape auto-population policy (never notifies).
    pub fn set_auto_populate_series_shape(&mut self, auto: bool) {
        self.shape.set_auto_populate(auto);
    }

    /// Remove every per-series shape override.
    pub fn clear_series_shapes(&mut self, notify: bool) {
        self.shape.clear_series();
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Item labels
    // ------------------------------------------------------------------

    /// Whether item labels are visible for a series.
    #[must_use]
    pub fn is_item_labels_visible(&self, series: usize) -> bool {
        self.item_labels_visible.lookup_no_populate(series)
    }

    /// Set or unset the item-label visibility override for a series.
    pub fn set_series_item_labels_visible(
        &mut self,
        series: usize,
        visible: Option<bool>,
        notify: bool,
    ) {
        self.item_labels_visible.set_series(series, visible);
        self.maybe_fire(notify);
    }

    /// Set the default item-label visibility.
    pub fn set_default_item_labels_visible(&mut self, visible: bool, notify: bool) {
        self.item_labels_visible.set_default(visible);
        self.maybe_fire(notify);
    }

    /// Resolve the item label font for a series.
    #[must_use]
    pub fn lookup_item_label_font(&self, series: usize) -> FontSpec {
        self.item_label_font.lookup_no_populate(series)
    }

    /// Set or unset the item-label font override for a series.
    pub fn set_series_item_label_font(
        &mut self,
        series: usize,
        font: Option<FontSpec>,
        notify: bool,
    ) {
        self.item_label_font.set_series(series, font);
        self.maybe_fire(notify);
    }

    /// Set the default item label font.
    pub fn set_default_item_label_font(&mut self, font: FontSpec, notify: bool) {
        self.item_label_font.set_default(font);
        self.maybe_fire(notify);
    }

    /// Resolve the item label paint for a series.
    #[must_use]
    pub fn lookup_item_label_paint(&self, series: usize) -> Rgba {
        self.item_label_paint.lookup_no_populate(series)
    }

    /// Set or unset the item-label paint override for a series.
    pub fn set_series_item_label_paint(&mut self, series: usize, paint: Option<Rgba>, notify: bool) {
        self.item_label_paint.set_series(series, paint);
        self.maybe_fire(notify);
    }

    /// Set the default item label paint.
    pub fn set_default_item_label_paint(&mut self, paint: Rgba, notify: bool) {
        self.item_label_paint.set_default(paint);
        self.maybe_fire(notify);
    }

    /// Resolve the label position for positive values.
    #[must_use]
    pub fn lookup_positive_label_position(&self, series: usize) -> LabelPlacement {
        self.positive_label_position.lookup_no_populate(series)
    }

    /// Set or unset the positive label position override for a series.
    pub fn set_series_positive_label_position(
        &mut self,
        series: usize,
        position: Option<LabelPlacement>,
        notify: bool,
    ) {
        self.positive_label_position.set_series(series, position);
        self.maybe_fire(notify);
    }

    /// Resolve the label position for negative values.
    #[must_use]
    pub fn lookup_negative_label_position(&self, series: usize) -> LabelPlacement {
        self.negative_label_position.lookup_no_populate(series)
    }

    /// Set or unset the negative label position override for a series.
    pub fn set_series_negative_label_position(
        &mut self,
        series: usize,
        position: Option<LabelPlacement>,
        notify: bool,
    ) {
        self.negative_label_position.set_series(series, position);
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Visibility and entity flags (tri-state, no supplier step)
    // ------------------------------------------------------------------

    /// Whether a series is visible.
    #[must_use]
    pub fn is_series_visible(&self, series: usize) -> bool {
        self.series_visible.lookup_no_populate(series)
    }

    /// Set or unset the visibility override for a series.
    pub fn set_series_visible(&mut self, series: usize, visible: Option<bool>, notify: bool) {
        self.series_visible.set_series(series, visible);
        self.maybe_fire(notify);
    }

    /// Set the default series visibility.
    pub fn set_default_series_visible(&mut self, visible: bool, notify: bool) {
        self.series_visible.set_default(visible);
        self.maybe_fire(notify);
    }

    /// Whether a series appears in the legend.
    #[must_use]
    pub fn is_series_visible_in_legend(&self, series: usize) -> bool {
        self.series_visible_in_legend.lookup_no_populate(series)
    }

    /// Set or unset the legend-visibility override for a series.
    pub fn set_series_visible_in_legend(
        &mut self,
        series: usize,
        visible: Option<bool>,
        notify: bool,
    ) {
        self.series_visible_in_legend.set_series(series, visible);
        self.maybe_fire(notify);
    }

    /// Set the default legend visibility.
    pub fn set_default_series_visible_in_legend(&mut self, visible: bool, notify: bool) {
        self.series_visible_in_legend.set_default(visible);
        self.maybe_fire(notify);
    }

    /// Whether entities are recorded for a series during a draw pass.
    #[must_use]
    pub fn is_create_entities(&self, series: usize) -> bool {
        self.create_entities.lookup_no_populate(series)
    }

    /// Set or unset the entity-creation override for a series.
    pub fn set_series_create_entities(
        &mut self,
        series: usize,
        create: Option<bool>,
        notify: bool,
    ) {
        self.create_entities.set_series(series, create);
        self.maybe_fire(notify);
    }

    /// Set the default entity-creation flag.
    pub fn set_default_create_entities(&mut self, create: bool, notify: bool) {
        self.create_entities.set_default(create);
        self.maybe_fire(notify);
    }

    // ------------------------------------------------------------------
    // Legend styling
    // ------------------------------------------------------------------

    /// Resolve the legend shape for a series: legend override, else legend
    /// default, else the series marker shape.
    pub fn lookup_legend_shape(
        &mut self,
        series: usize,
        supplier: Option<&mut (dyn DrawingSupplier + '_)>,
    ) -> MarkerShape {
        if let Some(shape) = self.legend_shape.get(series) {
            return *shape;
        }
        if let Some(shape) = self.default_legend_shape {
            return shape;
        }
        self.lookup_series_shape(series, supplier)
    }

    /// Set or unset the legend shape override for a series.
    pub fn set_series_legend_shape(
        &mut self,
        series: usize,
        shape: Option<MarkerShape>,
        notify: bool,
    ) {
        self.legend_shape.set(series, shape);
        self.maybe_fire(notify);
    }

    /// Set (or clear) the legend-wide default shape.
    pub fn set_default_legend_shape(&mut self, shape: Option<MarkerShape>, notify: bool) {
        self.default_legend_shape = shape;
        self.maybe_fire(notify);
    }

    /// Resolve the legend text font for a series.
    #[must_use]
    pub fn lookup_legend_text_font(&self, series: usize) -> FontSpec {
        self.legend_text_font.lookup_no_populate(series)
    }

    /// Set or unset the legend text font override for a series.
    pub fn set_series_legend_text_font(
        &mut self,
        series: usize,
        font: Option<FontSpec>,
        notify: bool,
    ) {
        self.legend_text_font.set_series(series, font);
        self.maybe_fire(notify);
    }

    /// Set the default legend text font.
    pub fn set_default_legend_text_font(&mut self, font: FontSpec, notify: bool) {
        self.legend_text_font.set_default(font);
        self.maybe_fire(notify);
    }

    /// Resolve the legend text paint for a series.
    #[must_use]
    pub fn lookup_legend_text_paint(&self, series: usize) -> Rgba {
        self.legend_text_paint.lookup_no_populate(series)
    }

    /// Set or unset the legend text paint override for a series.
    pub fn set_series_legend_text_paint(
        &mut self,
        series: usize,
        paint: Option<Rgba>,
        notify: bool,
    ) {
        self.legend_text_paint.set_series(series, paint);
        self.maybe_fire(notify);
    }

    /// Set the default legend text paint.
    pub fn set_default_legend_text_paint(&mut self, paint: Rgba, notify: bool) {
        self.legend_text_paint.set_default(paint);
        self.maybe_fire(notify);
    }
}

/// Equality compares style state only; registered listeners are transient
/// and excluded, matching the clone/copy semantics of chart styles.
impl PartialEq for SeriesRenderer {
    fn eq(&self, other: &Self) -> bool {
        self.paint == other.paint
            && self.fill_paint == other.fill_paint
            && self.outline_paint == other.outline_paint
            && self.stroke == other.stroke
            && self.outline_stroke == other.outline_stroke
            && self.shape == other.shape
            && self.item_labels_visible == other.item_labels_visible
            && self.item_label_font == other.item_label_font
            && self.item_label_paint == other.item_label_paint
            && self.positive_label_position == other.positive_label_position
            && self.negative_label_position == other.negative_label_position
            && self.series_visible == other.series_visible
            && self.series_visible_in_legend == other.series_visible_in_legend
            && self.create_entities == other.create_entities
            && self.legend_shape == other.legend_shape
            && self.default_legend_shape == other.default_legend_shape
            && self.legend_text_font == other.legend_text_font
            && self.legend_text_paint == other.legend_text_paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::supplier::DefaultDrawingSupplier;
    use std::cell::Cell;

    struct CountingListener {
        count: Cell<u32>,
    }

    impl ChangeListener for CountingListener {
        fn chart_changed(&self, _event: &ChangeEvent) {
            self.count.set(self.count.get() + 1);
        }
    }

    fn renderer_with_counter() -> (SeriesRenderer, Rc<CountingListener>) {
        let renderer = SeriesRenderer::new();
        let listener = Rc::new(CountingListener {
            count: Cell::new(0),
        });
        renderer.add_listener(listener.clone());
        (renderer, listener)
    }

    /// Supplier double that counts how often each "next" is requested.
    #[derive(Default)]
    struct CountingSupplier {
        paint_calls: usize,
        palette: Vec<Rgba>,
    }

    impl DrawingSupplier for CountingSupplier {
        fn next_paint(&mut self) -> Rgba {
            let v = self.palette[self.paint_calls % self.palette.len()];
            self.paint_calls += 1;
            v
        }
        fn next_fill_paint(&mut self) -> Rgba {
            Rgba::WHITE
        }
        fn next_outline_paint(&mut self) -> Rgba {
            Rgba::BLACK
        }
        fn next_stroke(&mut self) -> Stroke {
            Stroke::default()
        }
        fn next_outline_stroke(&mut self) -> Stroke {
            Stroke::default()
        }
        fn next_shape(&mut self) -> MarkerShape {
            MarkerShape::Circle
        }
    }

    #[test]
    fn test_lookup_defaults_without_supplier() {
        let mut renderer = SeriesRenderer::new();
        assert_eq!(renderer.lookup_series_paint(0, None), DEFAULT_PAINT);
        assert_eq!(renderer.lookup_series_paint(5, None), DEFAULT_PAINT);
        assert_eq!(
            renderer.lookup_series_outline_paint(0, None),
            DEFAULT_OUTLINE_PAINT
        );
        assert_eq!(renderer.lookup_series_stroke(0, None), Stroke::default());
        assert_eq!(renderer.lookup_series_shape(0, None), MarkerShape::Square);
    }

    #[test]
    fn test_override_wins_until_cleared() {
        let mut renderer = SeriesRenderer::new();
        renderer.set_series_paint(1, Some(Rgba::RED), false);
        assert_eq!(renderer.lookup_series_paint(1, None), Rgba::RED);

        renderer.clear_series_paints(false);
        assert_eq!(renderer.lookup_series_paint(1, None), DEFAULT_PAINT);
    }

    #[test]
    fn test_auto_populate_advances_supplier_exactly_once_per_series() {
        let mut renderer = SeriesRenderer::new();
        let mut supplier = CountingSupplier {
            paint_calls: 0,
            palette: vec![Rgba::RED, Rgba::GREEN],
        };

        assert_eq!(renderer.lookup_series_paint(0, Some(&mut supplier)), Rgba::RED);
        assert_eq!(
            renderer.lookup_series_paint(1, Some(&mut supplier)),
            Rgba::GREEN
        );
        // cached, supplier not advanced again
        assert_eq!(renderer.lookup_series_paint(0, Some(&mut supplier)), Rgba::RED);
        assert_eq!(supplier.paint_calls, 2);
    }

    #[test]
    fn test_auto_populate_fill_does_not_notify() {
        let (mut renderer, listener) = renderer_with_counter();
        let mut supplier = DefaultDrawingSupplier::new();
        let _ = renderer.lookup_series_paint(0, Some(&mut supplier));
        let _ = renderer.lookup_series_shape(0, Some(&mut supplier));
        assert_eq!(listener.count.get(), 0);
    }

    #[test]
    fn test_setters_fire_exactly_one_event() {
        let (mut renderer, listener) = renderer_with_counter();
        renderer.set_series_paint(0, Some(Rgba::RED), true);
        assert_eq!(listener.count.get(), 1);
        renderer.set_default_stroke(Stroke::solid(2.0), true);
        assert_eq!(listener.count.get(), 2);
        renderer.set_series_visible(3, Some(false), true);
        assert_eq!(listener.count.get(), 3);
    }

    #[test]
    fn test_notify_false_is_silent() {
        let (mut renderer, listener) = renderer_with_counter();
        renderer.set_series_paint(0, Some(Rgba::RED), false);
        renderer.set_default_fill_paint(Rgba::WHITE, false);
        renderer.clear_series_shapes(false);
        assert_eq!(listener.count.get(), 0);
    }

    #[test]
    fn test_set_auto_populate_never_notifies() {
        let (mut renderer, listener) = renderer_with_counter();
        renderer.set_auto_populate_series_paint(false);
        renderer.set_auto_populate_series_stroke(false);
        renderer.set_auto_populate_series_shape(false);
        assert_eq!(listener.count.get(), 0);
    }

    #[test]
    fn test_tri_state_visibility() {
        let mut renderer = SeriesRenderer::new();
        assert!(renderer.is_series_visible(0));

        renderer.set_series_visible(0, Some(false), false);
        assert!(!renderer.is_series_visible(0));

        // unsetting restores the default
        renderer.set_series_visible(0, None, false);
        assert!(renderer.is_series_visible(0));

        renderer.set_default_series_visible(false, false);
        assert!(!renderer.is_series_visible(7));
    }

    #[test]
    fn test_legend_shape_fallback_chain() {
        let mut renderer = SeriesRenderer::new();

        // no legend override, no legend default: falls through to the
        // series shape lookup (here: the shape default, supplier absent)
        assert_eq!(renderer.lookup_legend_shape(0, None), MarkerShape::Square);

        renderer.set_default_legend_shape(Some(MarkerShape::Diamond), false);
        assert_eq!(renderer.lookup_legend_shape(0, None), MarkerShape::Diamond);

        renderer.set_series_legend_shape(0, Some(MarkerShape::Cross), false);
        assert_eq!(renderer.lookup_legend_shape(0, None), MarkerShape::Cross);
    }

    #[test]
    fn test_item_label_lookups() {
        let mut renderer = SeriesRenderer::new();
        assert!(!renderer.is_item_labels_visible(0));
        assert_eq!(renderer.lookup_item_label_paint(0), Rgba::BLACK);
        assert_eq!(
            renderer.lookup_positive_label_position(0),
            LabelPlacement::Above
        );
        assert_eq!(
            renderer.lookup_negative_label_position(0),
            LabelPlacement::Below
        );

        renderer.set_series_positive_label_position(0, Some(LabelPlacement::Center), false);
        assert_eq!(
            renderer.lookup_positive_label_position(0),
            LabelPlacement::Center
        );
    }

    #[test]
    fn test_legend_text_defaults() {
        let (mut renderer, listener) = renderer_with_counter();
        assert_eq!(renderer.lookup_legend_text_paint(0), Rgba::BLACK);
        assert_eq!(renderer.lookup_legend_text_font(0), FontSpec::default());

        renderer.set_default_legend_text_paint(Rgba::GRAY, true);
        renderer.set_default_legend_text_font(FontSpec::bold("Serif", 12.0), true);
        assert_eq!(renderer.lookup_legend_text_paint(3), Rgba::GRAY);
        assert_eq!(
            renderer.lookup_legend_text_font(3),
            FontSpec::bold("Serif", 12.0)
        );
        assert_eq!(listener.count.get(), 2);

        // a per-series override still beats the new default
        renderer.set_series_legend_text_paint(0, Some(Rgba::RED), false);
        assert_eq!(renderer.lookup_legend_text_paint(0), Rgba::RED);
    }

    #[test]
    fn test_equality_ignores_listeners() {
        let (a, _listener) = renderer_with_counter();
        let b = SeriesRenderer::new();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_sees_style_differences() {
        let mut a = SeriesRenderer::new();
        let b = SeriesRenderer::new();
        a.set_series_paint(0, Some(Rgba::RED), false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_auto_populated_values_affect_equality() {
        // a cache fill is indistinguishable from an explicit override
        let mut a = SeriesRenderer::new();
        let b = SeriesRenderer::new();
        let mut supplier = DefaultDrawingSupplier::new();
        let _ = a.lookup_series_paint(0, Some(&mut supplier));
        assert_ne!(a, b);
    }
}
