// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout reservation: space kept free for the arrow and padding around the child.

use kurbo::{Insets, Size, Vec2};

/// Box constraints passed down to the popover and on to its child.
///
/// Sizes are in logical units. `max` may be infinite; `min` is expected to be finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// Smallest allowed size.
    pub min: Size,
    /// Largest allowed size.
    pub max: Size,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Constraints {
    /// No lower bound and no upper bound.
    pub const UNBOUNDED: Self = Self {
        min: Size::ZERO,
        max: Size::new(f64::INFINITY, f64::INFINITY),
    };

    /// Create constraints from explicit bounds.
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that only allow exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints from zero up to `max`.
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// The size closest to `size` that satisfies these constraints.
    ///
    /// `min` wins over `max` if the two conflict.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max.width).max(self.min.width),
            size.height.min(self.max.height).max(self.min.height),
        )
    }

    /// Clamp both bounds of `self` into the range allowed by `outer`.
    pub fn enforce(&self, outer: &Self) -> Self {
        let clamp_w = |v: f64| v.min(outer.max.width).max(outer.min.width);
        let clamp_h = |v: f64| v.min(outer.max.height).max(outer.min.height);
        Self {
            min: Size::new(clamp_w(self.min.width), clamp_h(self.min.height)),
            max: Size::new(clamp_w(self.max.width), clamp_h(self.max.height)),
        }
    }
}

/// Space reserved around the child for padding and the arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reservation {
    /// Padding between the body edge and the child.
    pub padding: Insets,
    /// Arrow length, reserved on all four sides.
    pub arrow_length: f64,
}

impl Reservation {
    /// Create a reservation; a missing padding is treated as zero.
    pub fn new(padding: Option<Insets>, arrow_length: f64) -> Self {
        Self {
            padding: padding.unwrap_or(Insets::ZERO),
            arrow_length,
        }
    }

    /// Total width and height unavailable to the child.
    pub fn reserved(&self) -> Size {
        Size::new(
            self.padding.x_value() + 2.0 * self.arrow_length,
            self.padding.y_value() + 2.0 * self.arrow_length,
        )
    }

    /// Where the child's origin sits relative to the popover's origin.
    pub fn content_offset(&self) -> Vec2 {
        Vec2::new(
            self.padding.x0 + self.arrow_length,
            self.padding.y0 + self.arrow_length,
        )
    }

    /// Constraints for the child, given the popover's incoming constraints and the screen size.
    ///
    /// The available space is the lesser of the screen and the incoming maximum, minus
    /// the reserved space, floored at zero; the result is then clamped back into
    /// `outer`'s own range.
    pub fn child_constraints(&self, outer: &Constraints, screen: Size) -> Constraints {
        let reserved = self.reserved();
        let available = Size::new(
            (screen.width.min(outer.max.width) - reserved.width).max(0.0),
            (screen.height.min(outer.max.height) - reserved.height).max(0.0),
        );
        Constraints::loose(available).enforce(outer)
    }

    /// Final popover size for a child that laid itself out at `child`.
    pub fn final_size(&self, outer: &Constraints, child: Size) -> Size {
        outer.constrain(child + self.reserved())
    }
}

/// Result of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoverLayout {
    /// Outer size of the popover, arrow area included.
    pub size: Size,
    /// Size the child chose.
    pub child_size: Size,
    /// Constraints the child was laid out with.
    pub child_constraints: Constraints,
    /// Child origin relative to the popover origin.
    pub content_offset: Vec2,
}

impl PopoverLayout {
    /// Run a layout pass, calling `layout_child` exactly once with the child constraints.
    pub fn compute(
        reservation: &Reservation,
        outer: &Constraints,
        screen: Size,
        layout_child: impl FnOnce(Constraints) -> Size,
    ) -> Self {
        let child_constraints = reservation.child_constraints(outer, screen);
        let child_size = layout_child(child_constraints);
        let size = reservation.final_size(outer, child_size);
        log::trace!(
            "popover layout: outer {outer:?}, child {child_size:?} in {child_constraints:?} -> {size:?}"
        );
        Self {
            size,
            child_size,
            child_constraints,
            content_offset: reservation.content_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded() -> Reservation {
        Reservation::new(Some(Insets::new(8.0, 4.0, 6.0, 2.0)), 12.0)
    }

    #[test]
    fn reserved_counts_arrow_twice() {
        assert_eq!(padded().reserved(), Size::new(38.0, 30.0));
        assert_eq!(
            Reservation::new(None, 12.0).reserved(),
            Size::new(24.0, 24.0)
        );
    }

    #[test]
    fn content_offset_is_leading_padding_plus_arrow() {
        assert_eq!(padded().content_offset(), Vec2::new(20.0, 16.0));
    }

    #[test]
    fn width_identity_when_unbounded() {
        let r = padded();
        let child = Size::new(120.0, 40.0);
        let size = r.final_size(&Constraints::UNBOUNDED, child);
        assert_eq!(size.width, child.width + 2.0 * 12.0 + r.padding.x_value());
        assert_eq!(size.height, child.height + 2.0 * 12.0 + r.padding.y_value());
    }

    #[test]
    fn child_limited_by_screen() {
        let r = padded();
        let c = r.child_constraints(&Constraints::UNBOUNDED, Size::new(400.0, 300.0));
        assert_eq!(c, Constraints::loose(Size::new(362.0, 270.0)));
    }

    #[test]
    fn child_limited_by_outer_max() {
        let r = padded();
        let outer = Constraints::loose(Size::new(100.0, 1000.0));
        let c = r.child_constraints(&outer, Size::new(400.0, 300.0));
        assert_eq!(c.max, Size::new(62.0, 270.0));
        assert_eq!(c.min, Size::ZERO);
    }

    #[test]
    fn child_constraints_never_negative() {
        let r = padded();
        let c = r.child_constraints(&Constraints::UNBOUNDED, Size::new(10.0, 10.0));
        assert_eq!(c, Constraints::loose(Size::ZERO));
    }

    #[test]
    fn outer_minimum_reapplied() {
        let r = padded();
        let outer = Constraints::new(Size::new(50.0, 0.0), Size::new(500.0, 500.0));
        let c = r.child_constraints(&outer, Size::new(1000.0, 1000.0));
        assert_eq!(c.min, Size::new(50.0, 0.0));
        assert_eq!(c.max, Size::new(462.0, 470.0));
    }

    #[test]
    fn final_size_respects_outer_bounds() {
        let r = padded();
        let outer = Constraints::new(Size::new(100.0, 100.0), Size::new(150.0, 150.0));
        assert_eq!(
            r.final_size(&outer, Size::new(10.0, 10.0)),
            Size::new(100.0, 100.0)
        );
        assert_eq!(
            r.final_size(&outer, Size::new(300.0, 300.0)),
            Size::new(150.0, 150.0)
        );
    }

    #[test]
    fn compute_runs_child_once() {
        let r = padded();
        let mut calls = 0;
        let layout = PopoverLayout::compute(
            &r,
            &Constraints::UNBOUNDED,
            Size::new(800.0, 600.0),
            |c| {
                calls += 1;
                c.constrain(Size::new(100.0, 50.0))
            },
        );
        assert_eq!(calls, 1);
        assert_eq!(layout.child_size, Size::new(100.0, 50.0));
        assert_eq!(layout.size, Size::new(138.0, 80.0));
        assert_eq!(layout.content_offset, Vec2::new(20.0, 16.0));
    }

    #[test]
    fn constraints_helpers() {
        let tight = Constraints::tight(Size::new(10.0, 20.0));
        assert_eq!(tight.constrain(Size::new(99.0, 0.0)), Size::new(10.0, 20.0));
        let loose = Constraints::loose(Size::new(30.0, 30.0));
        assert_eq!(loose.constrain(Size::new(5.0, 99.0)), Size::new(5.0, 30.0));
        let outer = Constraints::new(Size::new(10.0, 10.0), Size::new(20.0, 40.0));
        let enforced = loose.enforce(&outer);
        assert_eq!(enforced.min, Size::new(10.0, 10.0));
        assert_eq!(enforced.max, Size::new(20.0, 30.0));
    }
}
