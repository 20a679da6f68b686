//! Shared paging constants.
//!
//! Velocities are in offset units per millisecond, the unit scroll containers
//! report at drag release.

use std::time::Duration;

/// Release velocity below which a drag counts as "no decisive swipe".
///
/// Under this value the carousel snaps to whichever card covers the most of
/// the viewport; above it the carousel moves one page in the swipe direction.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.8;

/// Delay between drag end and the settle correction of the
/// decide-after-settle policy.
///
/// Long enough for the container to finish its own settle pass, short enough
/// that the correction reads as part of the same gesture.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Upper bound accepted for the settle delay.
pub const MAX_SETTLE_DELAY: Duration = Duration::from_secs(1);
