//! Layout metrics of a single-row card carousel.

use crate::{Rect, Size};
use smallvec::SmallVec;

/// Item frames for a carousel. Small carousels stay on the stack.
pub type ItemFrames = SmallVec<[Rect; 8]>;

/// Snapshot of the metrics a snap decision is computed against.
///
/// Hosts hand out a fresh snapshot on every call; nothing here is meant to be
/// cached across an orientation change.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CarouselGeometry {
    pub item_width: f32,
    pub item_height: f32,
    pub item_spacing: f32,
    pub left_inset: f32,
    pub right_inset: f32,
    pub viewport_width: f32,
    pub content_width: f32,
    pub item_count: usize,
}

impl CarouselGeometry {
    /// Distance between the leading edges of two adjacent cards.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_spacing
    }

    /// Largest valid scroll offset, never negative.
    pub fn max_scroll_offset(&self) -> f32 {
        let max = self.content_width - self.viewport_width;
        if max.is_finite() {
            max.max(0.0)
        } else {
            0.0
        }
    }

    /// Clamps `index` into `[0, item_count - 1]`; empty carousels clamp to 0.
    #[inline]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.item_count.saturating_sub(1))
    }

    /// Content width implied by the card metrics alone.
    pub fn natural_content_width(&self) -> f32 {
        let insets = self.left_inset + self.right_inset;
        if self.item_count == 0 {
            return insets;
        }
        let count = self.item_count as f32;
        insets + count * self.item_width + (count - 1.0) * self.item_spacing
    }

    /// Whether the metrics can be used for index math at all.
    ///
    /// An unlaid-out host reports zero-width cards; a broken one reports
    /// non-finite values. Both are treated as "no layout attributes".
    pub fn is_laid_out(&self) -> bool {
        self.item_count > 0
            && self.item_width > 0.0
            && self.stride() > 0.0
            && self.item_width.is_finite()
            && self.item_spacing.is_finite()
            && self.left_inset.is_finite()
            && self.viewport_width.is_finite()
    }

    /// Frame of the card at `index` in content coordinates.
    pub fn item_frame(&self, index: usize) -> Rect {
        Rect::new(
            self.left_inset + index as f32 * self.stride(),
            0.0,
            self.item_width,
            self.item_height,
        )
    }

    /// Frames of every card, or `None` when the carousel is not laid out.
    pub fn item_frames(&self) -> Option<ItemFrames> {
        if !self.is_laid_out() {
            return None;
        }
        Some((0..self.item_count).map(|i| self.item_frame(i)).collect())
    }

    /// Visible region at `offset`, in content coordinates.
    pub fn viewport_at(&self, offset: f32) -> Rect {
        Rect::new(offset, 0.0, self.viewport_width, self.item_height)
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.item_height)
    }
}
