// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow placement: which edge the arrow leaves from and where along that edge it sits.
//!
//! Everything here is a pure function of its inputs. All coordinates are in the
//! popover's local space, with the popover occupying `(0, 0)..size`.

use kurbo::{Point, Rect, Size};

/// Edge of the popover the arrow points out of.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ArrowDirection {
    /// Arrow leaves the top edge and points up.
    Up,
    /// Arrow leaves the bottom edge and points down.
    Down,
    /// Arrow leaves the left edge and points left.
    Left,
    /// Arrow leaves the right edge and points right.
    Right,
}

impl ArrowDirection {
    /// Returns `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
    ///
    /// Vertical arrows slide along the x axis; horizontal arrows slide along the y axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Length of the edge the arrow slides along for a popover of `size`.
    pub const fn edge_extent(self, size: Size) -> f64 {
        if self.is_vertical() {
            size.width
        } else {
            size.height
        }
    }
}

/// How the far end of the arrow's travel range is computed.
///
/// The near bound is always [`ArrowShape::min_focal`]. The far bound differs:
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum EdgeClearance {
    /// Reproduces the long-standing behavior, where the two axes use different far bounds.
    ///
    /// - Vertical arrows: `width - border_radius - 1.5 * base_width`, capped at the
    ///   symmetric bound so the arrow never runs into the far corner.
    /// - Horizontal arrows: `height - border_radius - base_width / 2 - length`.
    #[default]
    Compat,
    /// Mirrors the near bound on both axes: `extent - min_focal`.
    Symmetric,
}

/// Arrow and corner dimensions that drive placement and path construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowShape {
    /// Corner radius of the popover body.
    pub border_radius: f64,
    /// Width of the arrow where it meets the body.
    pub base_width: f64,
    /// Distance from the body edge to the arrow tip.
    pub length: f64,
    /// Far-bound policy for the arrow center.
    pub clearance: EdgeClearance,
}

impl ArrowShape {
    /// Smallest allowed arrow center along any edge.
    ///
    /// Keeps the near side of the arrow base clear of the corner radius.
    pub fn min_focal(&self) -> f64 {
        self.border_radius + self.base_width / 2.0 + self.length
    }

    /// Largest allowed arrow center along the edge used by `direction`.
    pub fn max_focal(&self, direction: ArrowDirection, size: Size) -> f64 {
        let extent = direction.edge_extent(size);
        match self.clearance {
            EdgeClearance::Compat if direction.is_vertical() => {
                (extent - self.border_radius - self.base_width * 1.5)
                    .min(extent - self.min_focal())
            }
            EdgeClearance::Compat => {
                extent - self.border_radius - self.base_width / 2.0 - self.length
            }
            EdgeClearance::Symmetric => extent - self.min_focal(),
        }
    }

    /// Inclusive `(min, max)` travel range of the arrow center.
    ///
    /// The range may be inverted (`min > max`) when the popover is too small to fit
    /// the arrow between its corners; [`arrow_center`] handles that case.
    pub fn focal_range(&self, direction: ArrowDirection, size: Size) -> (f64, f64) {
        (self.min_focal(), self.max_focal(direction, size))
    }
}

/// Choose the edge the arrow leaves from.
///
/// When `focal.x` lies within the horizontal span of `popover` (edges included), or
/// horizontal arrows are not allowed, the arrow is vertical: [`ArrowDirection::Up`]
/// if the focal point is above the top edge, [`ArrowDirection::Down`] otherwise.
/// Otherwise the arrow is horizontal and points toward the side the focal point is on.
pub fn arrow_direction(popover: Rect, focal: Point, allow_horizontal: bool) -> ArrowDirection {
    let within_span = focal.x >= popover.x0 && focal.x <= popover.x1;
    if within_span || !allow_horizontal {
        if focal.y < popover.y0 {
            ArrowDirection::Up
        } else {
            ArrowDirection::Down
        }
    } else if focal.x < popover.x0 {
        ArrowDirection::Left
    } else {
        ArrowDirection::Right
    }
}

/// Position of the arrow center along the edge used by `direction`.
///
/// Vertical arrows track `focal.x`, horizontal arrows track `focal.y`; the value is
/// clamped into [`ArrowShape::focal_range`]. If that range is inverted the center is
/// pinned to the middle of the edge.
pub fn arrow_center(direction: ArrowDirection, focal: Point, size: Size, shape: &ArrowShape) -> f64 {
    let desired = if direction.is_vertical() {
        focal.x
    } else {
        focal.y
    };
    let (min, max) = shape.focal_range(direction, size);
    if min > max {
        let mid = direction.edge_extent(size) / 2.0;
        log::debug!(
            "arrow range [{min}, {max}] is inverted for {direction:?} on {size:?}; pinning center to {mid}"
        );
        return mid;
    }
    desired.clamp(min, max)
}

/// Resolved arrow direction and center for one paint pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowPlacement {
    /// Edge the arrow leaves from.
    pub direction: ArrowDirection,
    /// Arrow center along that edge, in local coordinates.
    pub center: f64,
}

impl ArrowPlacement {
    /// Placement used when there is no focal point: pointing down from the middle of
    /// the bottom edge.
    pub fn fallback(size: Size) -> Self {
        Self {
            direction: ArrowDirection::Down,
            center: size.width / 2.0,
        }
    }

    /// Resolve a placement for a popover of `size` and a focal point in local coordinates.
    ///
    /// A missing focal point yields [`ArrowPlacement::fallback`]. The result never
    /// depends on any earlier placement.
    pub fn resolve(
        focal: Option<Point>,
        size: Size,
        shape: &ArrowShape,
        allow_horizontal: bool,
    ) -> Self {
        let Some(focal) = focal else {
            log::debug!("no focal point; using fallback arrow placement");
            return Self::fallback(size);
        };
        let direction = arrow_direction(size.to_rect(), focal, allow_horizontal);
        Self {
            direction,
            center: arrow_center(direction, focal, size, shape),
        }
    }
}
