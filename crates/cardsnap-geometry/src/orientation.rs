use crate::Size;

/// Device orientation the carousel is laid out for.
///
/// Orientation decides which side of the screen the carousel height is
/// measured against: the width in portrait, the height in landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Taller than wide.
    #[default]
    Portrait,

    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Derives the orientation from a viewport size. Square counts as portrait.
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Returns the other orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// The side of `size` the carousel height scales with.
    #[inline]
    pub fn reference_side(self, size: Size) -> f32 {
        match self {
            Orientation::Portrait => size.width,
            Orientation::Landscape => size.height,
        }
    }
}
