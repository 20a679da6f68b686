use super::*;
use cardsnap_geometry::Orientation;
use cardsnap_pager::{DecideAfterSettle, FrameClock, ScrollHost};
use std::time::Duration;

#[test]
fn portrait_phone_resolves_reference_geometry() {
    let host = FakeScrollHost::portrait_phone(5);
    let geometry = host.geometry();
    assert!((geometry.item_width - 300.0).abs() < 1e-3);
    assert!((geometry.viewport_width - 375.0).abs() < 1e-3);
    assert!((geometry.content_width - 1560.0).abs() < 1e-2);
    assert!((geometry.max_scroll_offset() - 1185.0).abs() < 1e-2);
}

#[test]
fn drag_is_clamped_to_scrollable_range() {
    let mut host = FakeScrollHost::portrait_phone(5);
    host.drag_by(-50.0);
    assert_eq!(host.offset(), 0.0);
    host.drag_by(5000.0);
    assert!((host.offset() - 1185.0).abs() < 1e-2);
}

#[test]
fn rotate_changes_geometry_and_clamps_offset() {
    let mut host = FakeScrollHost::portrait_phone(2);
    assert_eq!(host.state().orientation, Orientation::Portrait);
    host.scroll_to(1000.0);
    let portrait_max = host.geometry().max_scroll_offset();
    assert!((host.offset() - portrait_max).abs() < 1e-3);

    host.rotate();
    assert_eq!(host.state().orientation, Orientation::Landscape);
    let geometry = host.geometry();
    assert!((geometry.viewport_width - 812.0).abs() < 1e-3);
    assert!(host.offset() <= geometry.max_scroll_offset());
}

#[test]
fn set_offset_records_and_moves() {
    let mut host = FakeScrollHost::portrait_phone(5);
    host.set_offset(282.5, true);
    host.pin_offset(140.0);
    assert_eq!(host.offset(), 282.5);
    assert_eq!(
        host.last_request(),
        Some(ScrollRequest {
            offset: 282.5,
            animated: true
        })
    );
    assert_eq!(host.pinned_offsets(), &[140.0]);

    host.clear_records();
    assert!(host.requests().is_empty());
    assert!(host.pinned_offsets().is_empty());
}

#[test]
fn manual_clock_advances_only_on_request() {
    let clock = ManualClock::new();
    assert_eq!(clock.now_nanos(), 0);
    clock.advance(Duration::from_millis(50));
    assert_eq!(clock.now_nanos(), 50_000_000);
    clock.advance_frame();
    assert_eq!(clock.now(), 50_000_000 + clock::FRAME_NANOS);
}

#[test]
fn swipe_and_pump_drive_a_full_gesture() {
    let mut pager = SnapController::<DecideAfterSettle>::new();
    let mut host = FakeScrollHost::portrait_phone(5);
    let clock = ManualClock::new();

    assert_eq!(swipe(&mut pager, &mut host, 40.0, 1.5), 0);
    assert!(pager.on_drag_end(clock.now()));
    assert_eq!(pump_frames(&mut pager, &mut host, &clock, 10), Some(1));
    assert!((host.offset() - 282.5).abs() < 1e-2);
}
