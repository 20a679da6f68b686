//! Current-card resolution from a continuous scroll offset.

use crate::config::IndexStrategy;
use cardsnap_geometry::{CarouselGeometry, Rect};

/// Overlap widths closer than this are a tie. Frames built from `x + i * stride`
/// pick up rounding noise well below it.
const OVERLAP_TIE_TOLERANCE: f32 = 1e-3;

/// Index of the card covering the most of `viewport`, first wins ties.
///
/// Returns `None` when no frame overlaps the viewport by a positive width,
/// which includes the empty and not-yet-laid-out cases.
pub fn intersection_max_index(viewport: &Rect, frames: &[Rect]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, frame) in frames.iter().enumerate() {
        let visible = viewport.intersection(frame).map_or(0.0, |r| r.width);
        if visible.is_nan() || visible <= 0.0 {
            continue;
        }
        match best {
            Some((_, width)) if visible <= width + OVERLAP_TIE_TOLERANCE => {}
            _ => best = Some((index, visible)),
        }
    }
    best.map(|(index, _)| index)
}

/// Index whose card center is nearest the viewport center, for evenly spaced cards.
///
/// `round((offset + (viewport - item)/2 - (left + right)/2) / stride)`,
/// clamped to the valid range. Degenerate geometry yields 0.
pub fn centered_index(geometry: &CarouselGeometry, offset: f32) -> usize {
    if !geometry.is_laid_out() || !offset.is_finite() {
        return 0;
    }
    let centering = (geometry.viewport_width - geometry.item_width) / 2.0;
    let insets = (geometry.left_inset + geometry.right_inset) / 2.0;
    let raw = ((offset + centering - insets) / geometry.stride()).round();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    geometry.clamp_index(raw as usize)
}

/// Resolves the current card with the chosen strategy.
///
/// `frames` are the host's laid-out item frames; `None` falls back to 0, as
/// does an empty carousel. With intersection-max, an offset so far out that
/// nothing is visible falls back to the arithmetic rule instead of jumping to 0.
pub fn current_index(
    strategy: IndexStrategy,
    geometry: &CarouselGeometry,
    offset: f32,
    viewport: &Rect,
    frames: Option<&[Rect]>,
) -> usize {
    if geometry.item_count == 0 {
        return 0;
    }
    let index = match strategy {
        IndexStrategy::ArithmeticCentering => centered_index(geometry, offset),
        IndexStrategy::IntersectionMax => {
            let Some(frames) = frames.filter(|frames| !frames.is_empty()) else {
                return 0;
            };
            intersection_max_index(viewport, frames)
                .unwrap_or_else(|| centered_index(geometry, offset))
        }
    };
    geometry.clamp_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(count: usize) -> CarouselGeometry {
        CarouselGeometry {
            item_width: 300.0,
            item_height: 168.6,
            item_spacing: 10.0,
            left_inset: 10.0,
            right_inset: 10.0,
            viewport_width: 375.0,
            content_width: 20.0 + count as f32 * 310.0 - 10.0,
            item_count: count,
        }
    }

    fn intersection_index(geometry: &CarouselGeometry, offset: f32) -> usize {
        let frames = geometry.item_frames();
        current_index(
            IndexStrategy::IntersectionMax,
            geometry,
            offset,
            &geometry.viewport_at(offset),
            frames.as_deref(),
        )
    }

    #[test]
    fn picks_card_with_widest_overlap() {
        let geometry = phone(5);
        // Viewport [400, 775]: card 1 [320, 620] shows 220, card 2 [630, 930] shows 145.
        assert_eq!(intersection_index(&geometry, 400.0), 1);
        // Viewport [500, 875]: card 1 shows 120, card 2 shows 245.
        assert_eq!(intersection_index(&geometry, 500.0), 2);
    }

    #[test]
    fn ties_go_to_the_lower_index() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 10.0);
        let frames = [
            Rect::new(-50.0, 0.0, 100.0, 10.0),
            Rect::new(50.0, 0.0, 100.0, 10.0),
        ];
        assert_eq!(intersection_max_index(&viewport, &frames), Some(0));
    }

    #[test]
    fn rounding_noise_does_not_break_ties() {
        // Three whole cards in view; later frames are a few ulps wider.
        let viewport = Rect::new(0.0, 0.0, 375.0, 10.0);
        let frames = [
            Rect::new(10.0, 0.0, 112.5, 10.0),
            Rect::new(132.5, 0.0, 112.500_01, 10.0),
            Rect::new(255.0, 0.0, 112.500_02, 10.0),
        ];
        assert_eq!(intersection_max_index(&viewport, &frames), Some(0));
    }

    #[test]
    fn missing_frames_resolve_to_zero() {
        let geometry = phone(5);
        let viewport = geometry.viewport_at(900.0);
        assert_eq!(
            current_index(IndexStrategy::IntersectionMax, &geometry, 900.0, &viewport, None),
            0
        );
        assert_eq!(
            current_index(
                IndexStrategy::IntersectionMax,
                &geometry,
                900.0,
                &viewport,
                Some(&[][..])
            ),
            0
        );
    }

    #[test]
    fn empty_carousel_is_index_zero() {
        let geometry = phone(0);
        assert_eq!(intersection_index(&geometry, 250.0), 0);
        assert_eq!(centered_index(&geometry, 250.0), 0);
    }

    #[test]
    fn offsets_far_outside_content_clamp() {
        let geometry = phone(5);
        assert_eq!(intersection_index(&geometry, 1.0e6), 4);
        assert_eq!(intersection_index(&geometry, -1.0e6), 0);
        assert_eq!(centered_index(&geometry, 1.0e6), 4);
        assert_eq!(centered_index(&geometry, -1.0e6), 0);
        assert_eq!(centered_index(&geometry, f32::NAN), 0);
    }

    #[test]
    fn strategies_agree_on_uniform_layout() {
        let geometry = phone(7);
        let max = geometry.max_scroll_offset();
        let mut offset = -200.0;
        while offset <= max + 200.0 {
            // Skip the exact midpoints where the two rules legitimately tie-break differently.
            let arithmetic = centered_index(&geometry, offset);
            let intersection = intersection_index(&geometry, offset);
            let centering = offset + (375.0 - 300.0) / 2.0 - 10.0;
            let fraction = (centering / 310.0).fract().abs();
            if (fraction - 0.5).abs() > 0.01 {
                assert_eq!(
                    arithmetic, intersection,
                    "strategies disagree at offset {offset}"
                );
            }
            offset += 7.5;
        }
    }
}
