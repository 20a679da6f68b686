//! Snap-to-page controller.
//!
//! The host forwards its drag lifecycle and frame ticks; the controller reads
//! fresh geometry from the host on every call and writes back target offsets.
//!
//! ```text
//! drag begin ──► on_drag_begin     (commit the card under the finger)
//! release    ──► on_drag_release   (at-release: decide + snap now)
//! drag end   ──► on_drag_end       (after-settle: arm the settle timer)
//! frame tick ──► on_frame          (after-settle: decide + snap when due)
//! ```

use crate::clock::FrameClock;
use crate::config::{ConfigError, SnapConfig};
use crate::index::current_index;
use crate::offset::resolve_offset;
use crate::policy::{DecideAtRelease, ReleaseInput, ReleasePolicy};
use crate::timer::SettleTimer;
use crate::ScrollHost;
use cardsnap_geometry::{CarouselGeometry, Velocity};
use std::marker::PhantomData;

/// Paging state owned by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PagingState {
    /// Committed card: set at drag begin and after every snap.
    pub last_index: usize,
    /// Release velocity waiting for the settle correction.
    pub pending_velocity: Option<Velocity>,
}

/// Paging controller for a single carousel.
///
/// `P` fixes the release policy for the controller's lifetime; see
/// [`DecideAtRelease`] (default) and
/// [`DecideAfterSettle`](crate::DecideAfterSettle).
#[derive(Debug)]
pub struct SnapController<P: ReleasePolicy = DecideAtRelease> {
    config: SnapConfig,
    state: PagingState,
    settle: SettleTimer,
    _policy: PhantomData<P>,
}

impl<P: ReleasePolicy> Default for SnapController<P> {
    fn default() -> Self {
        Self {
            config: SnapConfig::default(),
            state: PagingState::default(),
            settle: SettleTimer::new(),
            _policy: PhantomData,
        }
    }
}

impl<P: ReleasePolicy> SnapController<P> {
    /// Controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SnapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn paging_state(&self) -> PagingState {
        self.state
    }

    /// Committed page, e.g. for a page indicator.
    pub fn current_page(&self) -> usize {
        self.state.last_index
    }

    /// Whether a settle correction is waiting for its deadline.
    pub fn is_settling(&self) -> bool {
        self.settle.is_pending()
    }

    /// Card occupying the most of the viewport right now.
    ///
    /// Returns 0 for an empty or not yet laid-out carousel.
    pub fn current_index<H: ScrollHost + ?Sized>(&self, host: &H) -> usize {
        let geometry = live_geometry(host);
        let frames = host.item_frames();
        current_index(
            self.config.index_strategy,
            &geometry,
            host.current_offset(),
            &host.viewport_rect(),
            frames.as_deref(),
        )
    }

    /// Scroll offset that snaps card `index` into place under the current layout.
    pub fn resolve_offset<H: ScrollHost + ?Sized>(&self, host: &H, index: usize) -> f32 {
        resolve_offset(&live_geometry(host), index, self.config.alignment)
    }

    /// Start of a drag: commits the card under the finger.
    ///
    /// Any settle correction still waiting from the previous gesture is
    /// dropped so it cannot fight the new one.
    pub fn on_drag_begin<H: ScrollHost + ?Sized>(&mut self, host: &H) {
        if self.cancel_pending() {
            log::debug!("snap[{}]: new drag cancelled pending settle", P::NAME);
        }
        self.state.last_index = self.current_index(host);
        log::trace!(
            "snap[{}]: drag began on card {}",
            P::NAME,
            self.state.last_index
        );
    }

    /// Finger lifted with `velocity`.
    ///
    /// At-release policies decide and scroll immediately and return the new
    /// page. After-settle policies stash the velocity for
    /// [`on_drag_end`](Self::on_drag_end) and return the page that stays
    /// committed until the correction runs.
    pub fn on_drag_release<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        velocity: Velocity,
    ) -> usize {
        let velocity = velocity.sanitized();

        if P::PINS_RELEASE_OFFSET {
            let offset = host.current_offset();
            host.pin_offset(offset);
        }

        if P::DEFERS_DECISION {
            self.state.pending_velocity = Some(velocity);
            let geometry = host.geometry();
            self.state.last_index = geometry.clamp_index(self.state.last_index);
            return self.state.last_index;
        }

        let target = self.decide(&*host, velocity.x);
        self.commit(host, target)
    }

    /// Drag finished. Arms the settle timer when a release velocity is pending.
    ///
    /// Returns whether a correction was scheduled.
    pub fn on_drag_end(&mut self, now_nanos: u64) -> bool {
        if !P::DEFERS_DECISION || self.state.pending_velocity.is_none() {
            return false;
        }
        self.settle.schedule(now_nanos, self.config.settle_delay);
        log::trace!(
            "snap[{}]: settle correction armed for {:?}",
            P::NAME,
            self.settle.deadline_nanos()
        );
        true
    }

    /// [`on_drag_end`](Self::on_drag_end) for hosts without a frame timestamp.
    pub fn on_drag_end_at<C: FrameClock + ?Sized>(&mut self, clock: &C) -> bool {
        self.on_drag_end(clock.now_nanos())
    }

    /// Frame tick. Runs the settle correction once its deadline is reached.
    ///
    /// Returns the committed page when a correction ran on this frame.
    pub fn on_frame<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        now_nanos: u64,
    ) -> Option<usize> {
        if !self.settle.fire_if_due(now_nanos) {
            return None;
        }
        let velocity = self.state.pending_velocity.take().unwrap_or_default();
        let target = self.decide(&*host, velocity.x);
        Some(self.commit(host, target))
    }

    /// [`on_frame`](Self::on_frame) reading the time from `clock`.
    pub fn on_frame_at<H: ScrollHost + ?Sized, C: FrameClock + ?Sized>(
        &mut self,
        host: &mut H,
        clock: &C,
    ) -> Option<usize> {
        self.on_frame(host, clock.now_nanos())
    }

    /// Continuous scroll update: the card a live indicator should show.
    pub fn on_scroll<H: ScrollHost + ?Sized>(&self, host: &H) -> usize {
        let index = self.current_index(host);
        log::trace!(
            "snap[{}]: offset {:.1} shows card {}",
            P::NAME,
            host.current_offset(),
            index
        );
        index
    }

    /// Programmatic page change, e.g. from a page indicator tap.
    pub fn scroll_to_page<H: ScrollHost + ?Sized>(&mut self, host: &mut H, index: usize) -> usize {
        self.cancel_pending();
        self.commit(host, index)
    }

    /// Drops the settle timer and any stashed velocity.
    ///
    /// Returns whether anything was pending. Hosts call this on teardown.
    pub fn cancel_pending(&mut self) -> bool {
        let had_timer = self.settle.cancel();
        let had_velocity = self.state.pending_velocity.take().is_some();
        had_timer || had_velocity
    }

    fn decide<H: ScrollHost + ?Sized>(&self, host: &H, velocity_x: f32) -> usize {
        let input = ReleaseInput {
            last_index: self.state.last_index,
            observed_index: self.current_index(host),
            velocity_x,
            threshold: self.config.velocity_threshold,
            item_count: host.geometry().item_count,
        };
        let target = P::decide(&input);
        log::debug!(
            "snap[{}]: last {} observed {} velocity {:.2} -> card {}",
            P::NAME,
            input.last_index,
            input.observed_index,
            input.velocity_x,
            target
        );
        target
    }

    fn commit<H: ScrollHost + ?Sized>(&mut self, host: &mut H, target: usize) -> usize {
        let geometry = live_geometry(&*host);
        let target = geometry.clamp_index(target);
        let offset = resolve_offset(&geometry, target, self.config.alignment);
        self.state.last_index = target;
        host.set_offset(offset, self.config.animate);
        target
    }
}

/// Geometry with the container's live viewport and content widths.
fn live_geometry<H: ScrollHost + ?Sized>(host: &H) -> CarouselGeometry {
    let mut geometry = host.geometry();
    geometry.viewport_width = host.viewport_rect().width;
    geometry.content_width = host.content_size().width;
    geometry
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
