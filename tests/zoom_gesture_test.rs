//! End-to-end gesture scenarios: press/drag/release sequences against a live
//! plot, checking the committed axis ranges and the change events raised.

// Allow common test patterns
#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use interchart::prelude::*;

struct CountingListener {
    count: Cell<u32>,
}

impl CountingListener {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            count: Cell::new(0),
        })
    }
}

impl ChangeListener for CountingListener {
    fn chart_changed(&self, _event: &ChangeEvent) {
        self.count.set(self.count.get() + 1);
    }
}

fn plot() -> XyPlot {
    XyPlot::new(
        Range::new(0.0, 100.0).unwrap(),
        Range::new(0.0, 50.0).unwrap(),
    )
}

fn render_info() -> RenderInfo {
    RenderInfo {
        data_area: Some(Rect::new(10.0, 10.0, 200.0, 100.0)),
        ..RenderInfo::default()
    }
}

fn event(x: f64, y: f64) -> MouseEvent {
    MouseEvent::new(Point::new(x, y), MouseButton::Left, Modifiers::empty())
}

fn drag_gesture(
    controller: &mut InteractionController,
    plot: &mut XyPlot,
    info: &RenderInfo,
    from: (f64, f64),
    to: (f64, f64),
) -> GestureOutcome {
    controller.mouse_pressed(info, &event(from.0, from.1));
    controller.mouse_dragged(plot, info, &event(to.0, to.1));
    controller.mouse_released(plot, info, &event(to.0, to.1))
}

#[test]
fn drag_at_threshold_commits_but_one_pixel_short_does_not() {
    let mut plot = plot();
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    // nine pixels of horizontal travel: one short of the trigger distance
    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 50.0), (59.0, 51.0));
    assert_eq!(outcome, GestureOutcome::SelectionDiscarded);
    assert_eq!(plot.domain_range().lower(), 0.0);
    assert_eq!(plot.domain_range().upper(), 100.0);

    // exactly the trigger distance commits
    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 50.0), (60.0, 51.0));
    assert_eq!(outcome, GestureOutcome::ZoomCommitted);
    assert!(plot.domain_range().lower() > 0.0);
}

#[test]
fn small_diagonal_drag_is_discarded_without_events() {
    let mut plot = plot();
    let listener = CountingListener::new();
    plot.add_listener(listener.clone());
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 50.0), (45.0, 48.0));
    assert_eq!(outcome, GestureOutcome::SelectionDiscarded);
    assert_eq!(plot.domain_range().lower(), 0.0);
    assert_eq!(plot.range_range().upper(), 50.0);
    assert_eq!(listener.count.get(), 0);
}

#[test]
fn down_right_drag_zooms_both_axes_with_one_event() {
    let mut plot = plot();
    let listener = CountingListener::new();
    plot.add_listener(listener.clone());
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 50.0), (150.0, 90.0));
    assert_eq!(outcome, GestureOutcome::ZoomCommitted);

    // horizontal fractions measured from the area's left edge (x: 10..210)
    assert_relative_eq!(plot.domain_range().lower(), 20.0);
    assert_relative_eq!(plot.domain_range().upper(), 70.0);
    // vertical fractions measured from the area's bottom edge (y: 10..110)
    assert_relative_eq!(plot.range_range().lower(), 10.0);
    assert_relative_eq!(plot.range_range().upper(), 30.0);

    assert_eq!(
        listener.count.get(),
        1,
        "a two-axis zoom must coalesce into a single change event"
    );
}

#[test]
fn up_left_drag_restores_auto_bounds() {
    let mut plot = plot();
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    drag_gesture(&mut controller, &mut plot, &info, (50.0, 50.0), (150.0, 90.0));
    assert!(plot.domain_range().lower() > 0.0);

    let listener = CountingListener::new();
    plot.add_listener(listener.clone());
    let outcome = drag_gesture(&mut controller, &mut plot, &info, (150.0, 90.0), (40.0, 40.0));
    assert_eq!(outcome, GestureOutcome::AutoBoundsRestored);
    assert_eq!(plot.domain_range().lower(), 0.0);
    assert_eq!(plot.domain_range().upper(), 100.0);
    assert_eq!(plot.range_range().lower(), 0.0);
    assert_eq!(plot.range_range().upper(), 50.0);
    assert_eq!(listener.count.get(), 1);
}

#[test]
fn horizontal_only_plot_ignores_vertical_travel() {
    let mut plot = plot();
    plot.set_range_zoomable(false);
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    // plenty of vertical travel but almost none horizontally
    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 20.0), (54.0, 100.0));
    assert_eq!(outcome, GestureOutcome::SelectionDiscarded);

    // horizontal travel commits and leaves the range axis alone
    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 20.0), (150.0, 22.0));
    assert_eq!(outcome, GestureOutcome::ZoomCommitted);
    assert_relative_eq!(plot.domain_range().lower(), 20.0);
    assert_eq!(plot.range_range().lower(), 0.0);
    assert_eq!(plot.range_range().upper(), 50.0);
}

#[test]
fn vertical_only_plot_ignores_horizontal_travel() {
    let mut plot = plot();
    plot.set_domain_zoomable(false);
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 20.0), (180.0, 24.0));
    assert_eq!(outcome, GestureOutcome::SelectionDiscarded);

    let outcome = drag_gesture(&mut controller, &mut plot, &info, (50.0, 20.0), (52.0, 90.0));
    assert_eq!(outcome, GestureOutcome::ZoomCommitted);
    assert_eq!(plot.domain_range().lower(), 0.0);
    assert_eq!(plot.domain_range().upper(), 100.0);
    // selection y: 20..90 inside area y: 10..110, measured from the bottom
    assert_relative_eq!(plot.range_range().lower(), 10.0);
    assert_relative_eq!(plot.range_range().upper(), 45.0);
}

#[test]
fn pan_gesture_shifts_view_and_release_ends_it() {
    let mut plot = plot();
    let listener = CountingListener::new();
    plot.add_listener(listener.clone());
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    let grab = MouseEvent::new(Point::new(100.0, 60.0), MouseButton::Left, Modifiers::CTRL);
    assert_eq!(
        controller.mouse_pressed(&info, &grab),
        GestureOutcome::PanStarted
    );

    let step = MouseEvent::new(Point::new(140.0, 60.0), MouseButton::Left, Modifiers::CTRL);
    assert_eq!(
        controller.mouse_dragged(&mut plot, &info, &step),
        GestureOutcome::Panned
    );
    // dragging right by 20% of the data-area width shifts the domain left
    assert_relative_eq!(plot.domain_range().lower(), -20.0);
    assert_relative_eq!(plot.domain_range().upper(), 80.0);
    assert_eq!(listener.count.get(), 1, "each pan step raises one event");

    assert_eq!(
        controller.mouse_released(&mut plot, &info, &step),
        GestureOutcome::PanEnded
    );
    assert!(!controller.is_panning());
}

#[test]
fn gestures_without_render_info_are_silent_noops() {
    let mut plot = plot();
    let listener = CountingListener::new();
    plot.add_listener(listener.clone());
    let empty = RenderInfo::default();
    let mut controller = InteractionController::attach(&plot);

    assert_eq!(
        controller.mouse_pressed(&empty, &event(50.0, 50.0)),
        GestureOutcome::Ignored
    );
    assert_eq!(
        controller.mouse_dragged(&mut plot, &empty, &event(150.0, 90.0)),
        GestureOutcome::Ignored
    );
    assert_eq!(
        controller.mouse_released(&mut plot, &empty, &event(150.0, 90.0)),
        GestureOutcome::Ignored
    );
    assert_eq!(listener.count.get(), 0);
}

#[test]
fn gesture_respects_panel_scaling() {
    let mut plot = plot();
    let info = render_info();
    let mut controller = InteractionController::attach(&plot);

    // panel twice as large as the maximum draw size: everything doubles
    let bounds = DrawBounds::new(Size::new(50.0, 50.0), Size::new(105.0, 55.0)).unwrap();
    controller
        .mapper_mut()
        .rescale(Size::new(210.0, 110.0), &bounds);
    assert_eq!(controller.mapper().scale_x(), 2.0);
    assert_eq!(controller.mapper().scale_y(), 2.0);

    // the logical data area (10,10,200,100) covers (20,20,400,200) on screen
    let outcome = drag_gesture(
        &mut controller,
        &mut plot,
        &info,
        (100.0, 100.0),
        (300.0, 180.0),
    );
    assert_eq!(outcome, GestureOutcome::ZoomCommitted);
    assert_relative_eq!(plot.domain_range().lower(), 20.0);
    assert_relative_eq!(plot.domain_range().upper(), 70.0);
    assert_relative_eq!(plot.range_range().lower(), 10.0);
    assert_relative_eq!(plot.range_range().upper(), 30.0);
}
