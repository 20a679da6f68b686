//! Testing utilities for cardsnap
//!
//! [`FakeScrollHost`] stands in for a real scroll container: it resolves its
//! geometry from a [`HostState`](cardsnap_geometry::HostState) on every call,
//! records every programmatic scroll, and can be rotated or resized
//! mid-gesture. [`ManualClock`] hands out deterministic frame timestamps.

mod clock;
mod host;

pub use clock::ManualClock;
pub use host::{FakeScrollHost, ScrollRequest};

use cardsnap_geometry::Velocity;
use cardsnap_pager::{ReleasePolicy, SnapController};

/// Runs one complete drag: begin, move by `dx`, release with `velocity_x`.
///
/// Returns what the release reported. The host is left wherever the
/// controller scrolled it.
pub fn swipe<P: ReleasePolicy>(
    pager: &mut SnapController<P>,
    host: &mut FakeScrollHost,
    dx: f32,
    velocity_x: f32,
) -> usize {
    pager.on_drag_begin(host);
    host.drag_by(dx);
    pager.on_scroll(host);
    pager.on_drag_release(host, Velocity::new(velocity_x, 0.0))
}

/// Ticks frames at ~60 FPS until the controller reports a settle correction
/// or `max_frames` elapse.
pub fn pump_frames<P: ReleasePolicy>(
    pager: &mut SnapController<P>,
    host: &mut FakeScrollHost,
    clock: &ManualClock,
    max_frames: usize,
) -> Option<usize> {
    for _ in 0..max_frames {
        clock.advance_frame();
        if let Some(page) = pager.on_frame_at(host, clock) {
            return Some(page);
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
