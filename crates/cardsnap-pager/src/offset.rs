//! Target-offset resolution for a snapped card.

use crate::config::SnapAlignment;
use cardsnap_geometry::CarouselGeometry;

/// Scroll offset that brings card `index` into place.
///
/// Leading: `index * stride`. Centered: the card's frame is centered in the
/// viewport. Either way the result is clamped to `[0, max_scroll_offset]`,
/// so the first and last card never overscroll. Empty or degenerate geometry
/// resolves to 0.
pub fn resolve_offset(geometry: &CarouselGeometry, index: usize, alignment: SnapAlignment) -> f32 {
    if !geometry.is_laid_out() {
        return 0.0;
    }
    let index = geometry.clamp_index(index) as f32;
    let leading = index * geometry.stride();
    let x = match alignment {
        SnapAlignment::Leading => leading,
        SnapAlignment::Centered => {
            geometry.left_inset + leading - (geometry.viewport_width - geometry.item_width) / 2.0
        }
    };
    if !x.is_finite() {
        return 0.0;
    }
    x.clamp(0.0, geometry.max_scroll_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> CarouselGeometry {
        CarouselGeometry {
            item_width: 300.0,
            item_height: 168.6,
            item_spacing: 10.0,
            left_inset: 10.0,
            right_inset: 10.0,
            viewport_width: 375.0,
            content_width: 1560.0,
            item_count: 5,
        }
    }

    #[test]
    fn leading_offsets_step_by_stride() {
        let geometry = phone();
        assert_eq!(resolve_offset(&geometry, 0, SnapAlignment::Leading), 0.0);
        assert_eq!(resolve_offset(&geometry, 1, SnapAlignment::Leading), 310.0);
        assert_eq!(resolve_offset(&geometry, 3, SnapAlignment::Leading), 930.0);
        // 1240 would overscroll past the last card.
        assert_eq!(resolve_offset(&geometry, 4, SnapAlignment::Leading), 1185.0);
    }

    #[test]
    fn centered_offsets_center_the_card() {
        let geometry = phone();
        assert_eq!(resolve_offset(&geometry, 0, SnapAlignment::Centered), 0.0);
        // Card 1 spans [320, 620]; centered in a 375 viewport starts at 282.5.
        assert_eq!(resolve_offset(&geometry, 1, SnapAlignment::Centered), 282.5);
        assert_eq!(resolve_offset(&geometry, 4, SnapAlignment::Centered), 1185.0);
    }

    #[test]
    fn out_of_range_index_resolves_to_last_card() {
        let geometry = phone();
        assert_eq!(
            resolve_offset(&geometry, 99, SnapAlignment::Leading),
            resolve_offset(&geometry, 4, SnapAlignment::Leading)
        );
    }

    #[test]
    fn degenerate_geometry_resolves_to_zero() {
        let empty = CarouselGeometry {
            item_count: 0,
            ..phone()
        };
        assert_eq!(resolve_offset(&empty, 0, SnapAlignment::Centered), 0.0);

        let content_narrower_than_viewport = CarouselGeometry {
            content_width: 200.0,
            ..phone()
        };
        assert_eq!(
            resolve_offset(&content_narrower_than_viewport, 3, SnapAlignment::Leading),
            0.0
        );
    }
}
