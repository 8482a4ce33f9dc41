//! Mapping touch positions back to wedges.
//!
//! The mapping only looks at the angle around the center, so every point gets
//! a wedge, including points in the center hole or outside the rim. The exact
//! center has no meaningful angle; `atan2(0, 0)` is zero there, which selects
//! the first wedge.

use std::f32::consts::TAU;

use crate::layout::{Point, Size};
use crate::palette::{WedgeIndex, WEDGE_COUNT};
use crate::wedge::{polar, WedgeSpan};

/// Angle of `position` around the center of a `size` area, in `[0, 2π)`.
pub fn touch_angle(position: Point, size: Size) -> f32 {
    let center = size.center();
    let angle = (position.y - center.y).atan2(position.x - center.x);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Wedge containing `angle` (radians in `[0, 2π]`).
///
/// The result is clamped to the last wedge so that rounding up to exactly
/// `2π` cannot produce an index past the palette.
pub fn wedge_for_angle(angle: f32) -> WedgeIndex {
    let raw = (WEDGE_COUNT as f32 * angle / TAU).floor();
    // Negative and NaN inputs saturate to zero in the cast
    WedgeIndex::clamped(raw as usize)
}

/// Wedge under `position`, in coordinates local to a `size` wheel.
pub fn hit_test(position: Point, size: Size) -> WedgeIndex {
    let angle = touch_angle(position, size);
    let index = wedge_for_angle(angle);
    log::debug!(
        "Hit test at ({:.1}, {:.1}): angle {:.3} rad -> wedge {}",
        position.x,
        position.y,
        angle,
        index
    );
    index
}

/// Angle through the middle of wedge `index`
pub fn wedge_mid_angle(index: WedgeIndex) -> f32 {
    WedgeSpan::of(index).mid()
}

/// Point `distance` away from the center of a `size` area at `angle`
pub fn point_at_angle(angle: f32, distance: f32, size: Size) -> Point {
    polar(size.center(), distance, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::square(250.0);

    #[test]
    fn test_angle_scenarios() {
        let near = point_at_angle(0.3, 80.0, SIZE);
        assert_eq!(hit_test(near, SIZE).get(), 0);
        let next = point_at_angle(0.6, 80.0, SIZE);
        assert_eq!(hit_test(next, SIZE).get(), 1);
    }

    #[test]
    fn test_mid_angle_round_trip() {
        for index in WedgeIndex::all() {
            for distance in [30.0, 80.0, 118.0, 200.0] {
                let p = point_at_angle(wedge_mid_angle(index), distance, SIZE);
                assert_eq!(hit_test(p, SIZE), index, "distance {}", distance);
            }
        }
    }

    #[test]
    fn test_screen_directions() {
        // y grows downwards, so "below center" is a quarter turn
        let right = Point::new(200.0, 125.0);
        let below = Point::new(125.0, 200.0);
        let left = Point::new(50.0, 125.0);
        let above = Point::new(125.0, 50.0);
        assert!((touch_angle(right, SIZE) - 0.0).abs() < 1e-6);
        assert!((touch_angle(below, SIZE) - TAU / 4.0).abs() < 1e-6);
        assert!((touch_angle(left, SIZE) - TAU / 2.0).abs() < 1e-6);
        assert!((touch_angle(above, SIZE) - 3.0 * TAU / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_test_is_total_over_bounding_box() {
        let mut y = 0.0;
        while y < SIZE.height {
            let mut x = 0.0;
            while x < SIZE.width {
                let index = hit_test(Point::new(x, y), SIZE);
                assert!(index.get() < WEDGE_COUNT);
                x += 3.7;
            }
            y += 3.7;
        }
    }

    #[test]
    fn test_full_turn_clamps_to_last_wedge() {
        assert_eq!(wedge_for_angle(TAU).get(), WEDGE_COUNT - 1);
        assert_eq!(wedge_for_angle(TAU - 1e-7).get(), WEDGE_COUNT - 1);
    }

    #[test]
    fn test_degenerate_angles_select_first_wedge() {
        assert_eq!(wedge_for_angle(0.0), WedgeIndex::FIRST);
        assert_eq!(wedge_for_angle(-0.0), WedgeIndex::FIRST);
        assert_eq!(wedge_for_angle(f32::NAN), WedgeIndex::FIRST);
        // Exact center
        assert_eq!(hit_test(SIZE.center(), SIZE), WedgeIndex::FIRST);
    }

    #[test]
    fn test_non_square_bounds_use_own_center() {
        let size = Size::new(300.0, 100.0);
        let p = Point::new(150.0, 90.0); // straight below the center
        assert_eq!(hit_test(p, size), wedge_for_angle(TAU / 4.0));
    }
}
