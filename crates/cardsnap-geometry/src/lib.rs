//! Pure math/data for cardsnap carousels
//!
//! This crate contains the geometry primitives, the orientation model and the
//! layout policy that turns a host viewport into card metrics.

mod carousel;
mod geometry;
mod layout;
mod orientation;

pub use carousel::*;
pub use geometry::*;
pub use layout::*;
pub use orientation::*;

pub mod prelude {
    pub use crate::carousel::{CarouselGeometry, ItemFrames};
    pub use crate::geometry::{Rect, Size, Velocity};
    pub use crate::layout::{CarouselLayout, HostState, LayoutError};
    pub use crate::orientation::Orientation;
}
