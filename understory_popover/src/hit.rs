// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: child first, then the whole outer rectangle.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

/// One entry produced by a popover hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopoverHit {
    /// The child claimed the point; carries the point in child coordinates.
    Child(Point),
    /// The popover itself was hit; carries the point in popover coordinates.
    Popover(Point),
}

/// Sink for hit test entries, innermost first.
pub trait HitCollector {
    /// Record a hit.
    fn add(&mut self, hit: PopoverHit);
}

impl HitCollector for Vec<PopoverHit> {
    fn add(&mut self, hit: PopoverHit) {
        self.push(hit);
    }
}

/// Hit test a popover of `size` whose child sits at `content_offset`.
///
/// The point is first translated into child space and offered to `child_hit`. If the
/// child claims it, a [`PopoverHit::Child`] entry is recorded followed by a
/// [`PopoverHit::Popover`] entry. Otherwise the original point is tested against the
/// full outer rectangle, so padding and the arrow area stay hit-testable even where
/// nothing is painted.
///
/// Returns `true` if anything was hit.
pub fn hit_test(
    point: Point,
    size: Size,
    content_offset: Vec2,
    child_hit: impl FnOnce(Point) -> bool,
    result: &mut dyn HitCollector,
) -> bool {
    let child_point = point - content_offset;
    if child_hit(child_point) {
        result.add(PopoverHit::Child(child_point));
        result.add(PopoverHit::Popover(point));
        return true;
    }
    if size.to_rect().contains(point) {
        result.add(PopoverHit::Popover(point));
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Rect;

    const SIZE: Size = Size::new(200.0, 100.0);
    const OFFSET: Vec2 = Vec2::new(20.0, 16.0);

    fn child_rect(pt: Point) -> bool {
        Rect::new(0.0, 0.0, 100.0, 50.0).contains(pt)
    }

    #[test]
    fn child_hit_is_reported_innermost_first() {
        let mut hits = Vec::new();
        assert!(hit_test(
            Point::new(30.0, 30.0),
            SIZE,
            OFFSET,
            child_rect,
            &mut hits
        ));
        assert_eq!(
            hits,
            vec![
                PopoverHit::Child(Point::new(10.0, 14.0)),
                PopoverHit::Popover(Point::new(30.0, 30.0)),
            ]
        );
    }

    #[test]
    fn padding_region_hits_popover() {
        let mut hits = Vec::new();
        // Inside the outer bounds, outside the child.
        assert!(hit_test(
            Point::new(150.0, 90.0),
            SIZE,
            OFFSET,
            child_rect,
            &mut hits
        ));
        assert_eq!(hits, vec![PopoverHit::Popover(Point::new(150.0, 90.0))]);
    }

    #[test]
    fn arrow_margin_hits_even_without_paint() {
        let mut hits = Vec::new();
        // Top-left corner: arrow reservation, never painted unless the arrow is there.
        assert!(hit_test(Point::ZERO, SIZE, OFFSET, |_| false, &mut hits));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn outside_misses() {
        let mut hits = Vec::new();
        for pt in [
            Point::new(-1.0, 50.0),
            Point::new(200.0, 50.0),
            Point::new(50.0, 100.0),
        ] {
            assert!(!hit_test(pt, SIZE, OFFSET, child_rect, &mut hits), "{pt:?}");
        }
        assert!(hits.is_empty());
    }

    #[test]
    fn child_may_claim_points_outside_bounds() {
        // Children with overflowing content are asked first.
        let mut hits = Vec::new();
        assert!(hit_test(
            Point::new(500.0, 500.0),
            SIZE,
            OFFSET,
            |_| true,
            &mut hits
        ));
        assert!(matches!(hits[0], PopoverHit::Child(_)));
    }
}
