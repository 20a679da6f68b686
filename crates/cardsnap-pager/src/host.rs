//! The contract between the snap controller and the scroll container hosting it.

use cardsnap_geometry::{CarouselGeometry, ItemFrames, Rect, Size};

/// Scroll container the controller reads layout from and writes offsets to.
///
/// Every getter is called fresh for each computation. Implementations should
/// return what is true *now*: after a rotation the very next call has to see
/// the new metrics.
pub trait ScrollHost {
    /// Current carousel metrics.
    fn geometry(&self) -> CarouselGeometry;

    /// Current horizontal scroll offset.
    fn current_offset(&self) -> f32;

    /// Visible region in content coordinates.
    fn viewport_rect(&self) -> Rect {
        self.geometry().viewport_at(self.current_offset())
    }

    fn content_size(&self) -> Size {
        self.geometry().content_size()
    }

    /// Frames of the laid-out cards in content coordinates, in index order.
    ///
    /// `None` means the container has not laid anything out yet.
    fn item_frames(&self) -> Option<ItemFrames> {
        self.geometry().item_frames()
    }

    /// Programmatic scroll. Returns immediately; animation is the host's business.
    fn set_offset(&mut self, x: f32, animated: bool);

    /// Replaces the container's own deceleration target with `x`, so the
    /// content stops where the finger lifted.
    fn pin_offset(&mut self, x: f32);
}

