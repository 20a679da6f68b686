//! Release policies: how a drag release turns into a target card.
//!
//! A controller is bound to exactly one policy through its type parameter,
//! so the decision rule cannot change while a carousel is alive.

use std::fmt::Debug;

/// Everything a policy needs to pick a target card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseInput {
    /// Card committed when the drag began.
    pub last_index: usize,
    /// Card covering the most of the viewport at decision time.
    pub observed_index: usize,
    /// Horizontal release velocity; positive scrolls toward later cards.
    pub velocity_x: f32,
    pub threshold: f32,
    pub item_count: usize,
}

impl ReleaseInput {
    fn last_valid(&self) -> usize {
        self.item_count.saturating_sub(1)
    }

    fn is_forward_swipe(&self) -> bool {
        self.velocity_x > self.threshold
    }

    fn is_backward_swipe(&self) -> bool {
        self.velocity_x < -self.threshold
    }
}

pub trait ReleasePolicy: Debug + Default {
    /// Short name used in log lines.
    const NAME: &'static str;

    /// Whether the container's inertial deceleration is cancelled at release.
    const PINS_RELEASE_OFFSET: bool;

    /// Whether the decision waits for the settle timer instead of happening
    /// at release.
    const DEFERS_DECISION: bool;

    /// Picks the target card. The result is clamped to `[0, item_count - 1]`.
    fn decide(input: &ReleaseInput) -> usize;
}

/// Decides at the moment the finger lifts.
///
/// A decisive swipe moves exactly one card from where the drag began;
/// anything slower snaps to the card that covers the most of the viewport.
/// The container's own deceleration is pinned so only the snap scroll moves
/// the content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecideAtRelease;

impl ReleasePolicy for DecideAtRelease {
    const NAME: &'static str = "at-release";
    const PINS_RELEASE_OFFSET: bool = true;
    const DEFERS_DECISION: bool = false;

    fn decide(input: &ReleaseInput) -> usize {
        let last = input.last_index.min(input.last_valid());
        let target = if input.is_forward_swipe() {
            last + 1
        } else if input.is_backward_swipe() {
            last.saturating_sub(1)
        } else {
            input.observed_index
        };
        target.min(input.last_valid())
    }
}

/// Lets the container decelerate, then corrects once it has settled.
///
/// If a decisive swipe settled back on the card the drag began on, the
/// carousel is nudged one card in the swipe direction; otherwise the settled
/// card is accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecideAfterSettle;

impl ReleasePolicy for DecideAfterSettle {
    const NAME: &'static str = "after-settle";
    const PINS_RELEASE_OFFSET: bool = false;
    const DEFERS_DECISION: bool = true;

    fn decide(input: &ReleaseInput) -> usize {
        let settled = input.observed_index.min(input.last_valid());
        let stayed = settled == input.last_index;
        let target = if stayed && input.is_forward_swipe() {
            settled + 1
        } else if stayed && input.is_backward_swipe() {
            settled.saturating_sub(1)
        } else {
            settled
        };
        target.min(input.last_valid())
    }
}
