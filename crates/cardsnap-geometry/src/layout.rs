//! Orientation-aware layout policy.
//!
//! [`CarouselLayout::resolve`] is a pure function from the host's current
//! state to [`CarouselGeometry`]. Hosts call it on every geometry request, so
//! a rotation is picked up by the next computation without any constraint
//! bookkeeping.

use crate::{CarouselGeometry, Orientation, Size};
use std::fmt;

/// Card width as a fraction of the carousel width.
pub const DEFAULT_ITEM_WIDTH_FRACTION: f32 = 0.8;

/// Card width fractions at or below this leave room for two whole cards in the
/// viewport, and a page no longer has one card that dominates it.
pub const MIN_ITEM_WIDTH_FRACTION: f32 = 0.5;

/// Carousel height as a fraction of the orientation's reference side
/// (a 0.562 aspect card, scaled by the card width fraction).
pub const DEFAULT_HEIGHT_FRACTION: f32 = 0.8 * 0.562;

/// Gap between adjacent cards in logical pixels.
pub const DEFAULT_ITEM_SPACING: f32 = 10.0;

/// Leading and trailing section inset in logical pixels.
pub const DEFAULT_SECTION_INSET: f32 = 10.0;

/// What the host knows about its screen at the moment of the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostState {
    /// Size of the area the carousel spans (safe area of the screen).
    pub viewport: Size,
    pub orientation: Orientation,
    pub item_count: usize,
}

impl HostState {
    /// Host state whose orientation is derived from the viewport aspect.
    pub fn new(viewport: Size, item_count: usize) -> Self {
        Self {
            viewport,
            orientation: Orientation::from_size(viewport),
            item_count,
        }
    }

    /// The same screen after a rotation: sides swapped, orientation flipped.
    pub fn rotated(&self) -> Self {
        Self {
            viewport: Size::new(self.viewport.height, self.viewport.width),
            orientation: self.orientation.flipped(),
            item_count: self.item_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A fraction was outside `(0, 1]` or not finite.
    FractionOutOfRange { field: &'static str, value: f32 },
    /// A length was negative or not finite.
    InvalidLength { field: &'static str, value: f32 },
    /// Cards narrow enough that more than one fits the viewport whole.
    ItemWidthTooNarrow { value: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::FractionOutOfRange { field, value } => {
                write!(f, "{field} must be in (0, 1], got {value}")
            }
            LayoutError::InvalidLength { field, value } => {
                write!(f, "{field} must be a finite non-negative length, got {value}")
            }
            LayoutError::ItemWidthTooNarrow { value } => write!(
                f,
                "item_width_fraction must exceed {MIN_ITEM_WIDTH_FRACTION}, got {value}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Sizing rules for the carousel row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    pub item_width_fraction: f32,
    pub height_fraction: f32,
    pub item_spacing: f32,
    pub left_inset: f32,
    pub right_inset: f32,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            item_width_fraction: DEFAULT_ITEM_WIDTH_FRACTION,
            height_fraction: DEFAULT_HEIGHT_FRACTION,
            item_spacing: DEFAULT_ITEM_SPACING,
            left_inset: DEFAULT_SECTION_INSET,
            right_inset: DEFAULT_SECTION_INSET,
        }
    }
}

impl CarouselLayout {
    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_insets(mut self, left: f32, right: f32) -> Self {
        self.left_inset = left;
        self.right_inset = right;
        self
    }

    pub fn with_item_width_fraction(mut self, fraction: f32) -> Self {
        self.item_width_fraction = fraction;
        self
    }

    pub fn with_height_fraction(mut self, fraction: f32) -> Self {
        self.height_fraction = fraction;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_fraction("item_width_fraction", self.item_width_fraction)?;
        if self.item_width_fraction <= MIN_ITEM_WIDTH_FRACTION {
            return Err(LayoutError::ItemWidthTooNarrow {
                value: self.item_width_fraction,
            });
        }
        check_fraction("height_fraction", self.height_fraction)?;
        check_length("item_spacing", self.item_spacing)?;
        check_length("left_inset", self.left_inset)?;
        check_length("right_inset", self.right_inset)?;
        Ok(())
    }

    /// Computes the carousel metrics for the host's current state.
    pub fn resolve(&self, state: &HostState) -> CarouselGeometry {
        let viewport = sanitize_viewport(state.viewport);
        let item_width = viewport.width * self.item_width_fraction;
        let item_height = state.orientation.reference_side(viewport) * self.height_fraction;

        let mut geometry = CarouselGeometry {
            item_width,
            item_height,
            item_spacing: self.item_spacing,
            left_inset: self.left_inset,
            right_inset: self.right_inset,
            viewport_width: viewport.width,
            content_width: 0.0,
            item_count: state.item_count,
        };
        geometry.content_width = geometry.natural_content_width();
        geometry
    }
}

fn check_fraction(field: &'static str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(LayoutError::FractionOutOfRange { field, value })
    }
}

fn check_length(field: &'static str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidLength { field, value })
    }
}

fn sanitize_viewport(viewport: Size) -> Size {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if valid(viewport.width) && valid(viewport.height) {
        return viewport;
    }
    log::warn!(
        "carousel: unusable viewport {}x{}, treating as not laid out",
        viewport.width,
        viewport.height
    );
    Size::ZERO
}
