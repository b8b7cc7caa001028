use crate::*;

use periodic_scroll::{PeriodicScrollOptions, PeriodicityMode, Point, ScrollHost, Size};

fn controller(mode: PeriodicityMode) -> Controller<&'static str> {
    Controller::new(
        Size::new(200.0, 200.0),
        PeriodicScrollOptions::new(mode, Size::new(300.0, 400.0)),
    )
    .unwrap()
}

#[test]
fn memory_host_clamps_and_flags_notifications() {
    let mut host = MemoryHost::new(Size::new(100.0, 100.0));
    host.set_content_size(Size::new(300.0, 150.0));
    assert_eq!(host.max_offset(), Point::new(200.0, 50.0));
    assert!(!host.take_pending_notification());

    host.scroll_by(250.0, -10.0);
    assert_eq!(host.content_offset(), Point::new(200.0, 0.0));
    assert!(host.take_pending_notification());
    assert!(!host.take_pending_notification());

    host.set_scroll_notifications_suppressed(true);
    host.set_content_offset(Point::new(10.0, 10.0));
    host.set_scroll_notifications_suppressed(false);
    assert!(!host.take_pending_notification());

    // No movement, no notification.
    host.scroll_by(0.0, 0.0);
    assert!(!host.take_pending_notification());
}

#[test]
fn memory_host_reclamps_on_viewport_change() {
    let mut host = MemoryHost::new(Size::new(100.0, 100.0));
    host.set_content_size(Size::new(300.0, 300.0));
    host.set_content_offset(Point::new(200.0, 200.0));
    host.take_pending_notification();
    host.set_viewport_size(Size::new(250.0, 250.0));
    assert_eq!(host.content_offset(), Point::new(50.0, 50.0));
    assert!(host.take_pending_notification());
}

#[test]
fn controller_starts_centered() {
    let c = controller(PeriodicityMode::Both);
    assert_eq!(c.offset(), Point::new(300.0, 400.0));
    assert_eq!(c.view().host().content_size(), Size::new(900.0, 1200.0));
}

#[test]
fn dragging_loops_endlessly_along_periodic_axis() {
    let mut c = controller(PeriodicityMode::Horizontal);
    for _ in 0..100 {
        c.on_drag(25.0, 0.0);
    }
    // 2500 units travelled: 8 full periods plus 100.
    assert_eq!(c.view().logical_offset().x, 100.0);
    assert_eq!(c.view().wrap_count(), 8);

    for _ in 0..100 {
        c.on_drag(-25.0, 0.0);
    }
    assert_eq!(c.view().logical_offset().x, 0.0);
}

#[test]
fn non_periodic_axis_hits_the_edge() {
    let mut c = controller(PeriodicityMode::Horizontal);
    for _ in 0..50 {
        c.on_drag(0.0, 25.0);
    }
    // Vertical content is 400 tall in a 200 viewport.
    assert_eq!(c.offset().y, 200.0);
    assert_eq!(c.view().wrap_count(), 0);
}

#[test]
fn none_mode_behaves_like_a_plain_scroll_view() {
    let mut c = controller(PeriodicityMode::None);
    for _ in 0..20 {
        c.on_drag(-25.0, 25.0);
    }
    assert_eq!(c.offset(), Point::new(0.0, 200.0));
    assert_eq!(c.view().wrap_count(), 0);
}

#[test]
fn drag_event_reports_continuous_delta() {
    let mut c = controller(PeriodicityMode::Vertical);
    for _ in 0..3 {
        c.on_drag(0.0, 100.0);
    }
    // 400 → 700 is still inside [400, 800); the next drag crosses the end.
    let ev = c.on_drag(0.0, 100.0).unwrap();
    assert_eq!(ev.delta, Point::new(0.0, 100.0));
    assert_eq!(ev.offset.y, 400.0);
    assert_eq!(ev.wrap.y, -1);
}

#[test]
fn tween_scrolls_through_wraps() {
    let mut c = controller(PeriodicityMode::Horizontal);
    c.start_scroll_by(800.0, 0.0, 0, 8, Easing::Linear);
    assert!(c.is_animating());

    let mut events = 0;
    for now_ms in 0..=8u64 {
        if c.tick(now_ms).is_some() {
            events += 1;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(events, 8);
    assert_eq!(c.offset().x, 500.0);
    assert_eq!(c.view().wrap_count(), 2);
    assert!(c.tick(9).is_none());
}

#[test]
fn delayed_tick_keeps_the_full_distance() {
    let mut c = controller(PeriodicityMode::Horizontal);
    c.start_scroll_by(800.0, 0.0, 0, 1000, Easing::Linear);
    assert!(c.tick(0).is_none());

    // A single frame covers the whole tween, far more than one buffer (period 300 - viewport 200).
    let ev = c.tick(1000).unwrap();
    assert!(!c.is_animating());
    assert_eq!(c.view().logical_offset().x, 200.0);
    assert_eq!(c.view().wrap_count(), 2);
    assert_eq!(ev.offset.x, 500.0);
}

#[test]
fn large_drag_wraps_both_axes_without_losing_distance() {
    let mut c = controller(PeriodicityMode::Both);
    c.on_drag(-800.0, 1000.0);
    // -800 mod 300 and 1000 mod 400.
    assert_eq!(c.view().logical_offset(), Point::new(100.0, 200.0));
}

#[test]
fn retarget_extends_an_active_tween() {
    let mut c = controller(PeriodicityMode::Horizontal);
    assert!(!c.retarget_scroll_by(10.0, 0.0, 0, 10));

    c.start_scroll_by(100.0, 0.0, 0, 100, Easing::Linear);
    c.tick(50);
    assert_eq!(c.view().logical_offset().x, 50.0);

    assert!(c.retarget_scroll_by(200.0, 0.0, 50, 100));
    c.tick(100);
    assert_eq!(c.view().logical_offset().x, 175.0);
    assert!(c.is_animating());

    c.tick(150);
    assert!(!c.is_animating());
    // 300 in total: exactly one period.
    assert_eq!(c.view().logical_offset().x, 0.0);
    assert_eq!(c.view().wrap_count(), 1);
}

#[test]
fn drag_cancels_tween() {
    let mut c = controller(PeriodicityMode::Both);
    c.start_scroll_by(0.0, 1000.0, 0, 100, Easing::SmoothStep);
    c.tick(10);
    c.on_drag(5.0, 0.0);
    assert!(!c.is_animating());
    assert!(c.tick(20).is_none());
}

#[test]
fn resize_retiles_and_keeps_position() {
    let mut c = controller(PeriodicityMode::Both);
    c.on_drag(50.0, 20.0);
    assert!(c.on_resize(Size::new(150.0, 150.0)));
    assert_eq!(c.view().logical_offset(), Point::new(50.0, 20.0));
    assert!(!c.on_resize(Size::new(150.0, 150.0)));
}

#[test]
fn set_periodicity_recenters() {
    let mut c = controller(PeriodicityMode::Both);
    c.view_mut().content_surface_mut().add_child("tile");
    c.on_drag(120.0, 40.0);
    c.set_periodicity(PeriodicityMode::Vertical);
    assert_eq!(c.offset(), Point::new(0.0, 400.0));
    assert_eq!(c.view().content_surface().children(), ["tile"]);
}

#[test]
fn tween_samples_easings() {
    let t = Tween::new(0.0, -100.0, 10, 20, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(20), -50.0);
    assert_eq!(t.sample(40), -100.0);
    assert!(t.is_done(30));

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}
