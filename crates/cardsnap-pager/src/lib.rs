//! Snap-to-page paging for horizontally scrolling card carousels.
//!
//! [`SnapController`] is a plain stateful object the host calls into from its
//! gesture and frame callbacks. It never caches layout: every decision reads
//! the host's current [`CarouselGeometry`](cardsnap_geometry::CarouselGeometry),
//! so a rotation in the middle of a drag resolves against the new layout.
//!
//! ```ignore
//! let mut pager = SnapController::<DecideAtRelease>::new();
//! pager.on_drag_begin(&host);
//! // ... finger moves, host scrolls ...
//! let page = pager.on_drag_release(&mut host, Velocity::new(1.6, 0.0));
//! ```

mod clock;
mod config;
pub mod constants;
mod controller;
mod host;
mod index;
mod offset;
mod policy;
mod timer;

pub use clock::{FrameClock, MonotonicClock};
pub use config::{ConfigError, IndexStrategy, SnapAlignment, SnapConfig};
pub use controller::{PagingState, SnapController};
pub use host::ScrollHost;
pub use index::{centered_index, current_index, intersection_max_index};
pub use offset::resolve_offset;
pub use policy::{DecideAfterSettle, DecideAtRelease, ReleaseInput, ReleasePolicy};
pub use timer::SettleTimer;

pub use cardsnap_geometry as geometry;

pub mod prelude {
    pub use crate::config::{IndexStrategy, SnapAlignment, SnapConfig};
    pub use crate::controller::SnapController;
    pub use crate::host::ScrollHost;
    pub use crate::policy::{DecideAfterSettle, DecideAtRelease};
    pub use cardsnap_geometry::prelude::*;
}
