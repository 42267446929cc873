// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border path construction: a rounded rectangle with the arrow spliced into one edge.
//!
//! The arrow is not a separate subpath. The outline is walked clockwise from the
//! top-left corner and the three arrow points are inserted while walking the edge
//! the arrow leaves from, so fills and shadows treat body and arrow as one region.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Rect, Size, Vec2};

use crate::geometry::{ArrowDirection, ArrowPlacement, ArrowShape};

/// Tolerance used when flattening corner arcs into cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// The popover body: the local bounds inset by the arrow length on every side.
///
/// The inset is symmetric so the arrow can flip to any edge without a relayout.
pub fn content_rect(size: Size, shape: &ArrowShape) -> Rect {
    let l = shape.length;
    Rect::new(l, l, size.width - l, size.height - l)
}

/// The three points of the arrow, listed in clockwise outline order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowTriangle {
    /// First base corner reached while walking the edge.
    pub base_start: Point,
    /// Arrow tip, `length` outside the body.
    pub apex: Point,
    /// Second base corner reached while walking the edge.
    pub base_end: Point,
}

impl ArrowTriangle {
    /// Triangle for `direction`, centered at `center` on the matching edge of `body`.
    pub fn new(direction: ArrowDirection, center: f64, body: Rect, shape: &ArrowShape) -> Self {
        let half = shape.base_width / 2.0;
        match direction {
            ArrowDirection::Up => Self::up(center, half, body.y0, shape.length),
            ArrowDirection::Right => Self::right(center, half, body.x1, shape.length),
            ArrowDirection::Down => Self::down(center, half, body.y1, shape.length),
            ArrowDirection::Left => Self::left(center, half, body.x0, shape.length),
        }
    }

    // The top edge is walked left to right.
    fn up(cx: f64, half: f64, top: f64, length: f64) -> Self {
        Self {
            base_start: Point::new(cx - half, top),
            apex: Point::new(cx, top - length),
            base_end: Point::new(cx + half, top),
        }
    }

    // The right edge is walked top to bottom.
    fn right(cy: f64, half: f64, right: f64, length: f64) -> Self {
        Self {
            base_start: Point::new(right, cy - half),
            apex: Point::new(right + length, cy),
            base_end: Point::new(right, cy + half),
        }
    }

    // The bottom edge is walked right to left.
    fn down(cx: f64, half: f64, bottom: f64, length: f64) -> Self {
        Self {
            base_start: Point::new(cx + half, bottom),
            apex: Point::new(cx, bottom + length),
            base_end: Point::new(cx - half, bottom),
        }
    }

    // The left edge is walked bottom to top.
    fn left(cy: f64, half: f64, left: f64, length: f64) -> Self {
        Self {
            base_start: Point::new(left, cy + half),
            apex: Point::new(left - length, cy),
            base_end: Point::new(left, cy - half),
        }
    }
}

/// Build the combined body + arrow outline for one paint pass.
///
/// The corner radius is limited to half the shorter side of the body so that very
/// small popovers still produce a closed, non-self-intersecting outline.
pub fn border_path(placement: ArrowPlacement, size: Size, shape: &ArrowShape) -> BezPath {
    let body = content_rect(size, shape);
    let r = shape
        .border_radius
        .min(body.width() / 2.0)
        .min(body.height() / 2.0)
        .max(0.0);
    let arrow = ArrowTriangle::new(placement.direction, placement.center, body, shape);

    let mut path = BezPath::new();
    path.move_to((body.x0 + r, body.y0));

    if placement.direction == ArrowDirection::Up {
        splice(&mut path, arrow);
    }
    path.line_to((body.x1 - r, body.y0));
    corner(&mut path, Point::new(body.x1 - r, body.y0 + r), r, -FRAC_PI_2);

    if placement.direction == ArrowDirection::Right {
        splice(&mut path, arrow);
    }
    path.line_to((body.x1, body.y1 - r));
    corner(&mut path, Point::new(body.x1 - r, body.y1 - r), r, 0.0);

    if placement.direction == ArrowDirection::Down {
        splice(&mut path, arrow);
    }
    path.line_to((body.x0 + r, body.y1));
    corner(&mut path, Point::new(body.x0 + r, body.y1 - r), r, FRAC_PI_2);

    if placement.direction == ArrowDirection::Left {
        splice(&mut path, arrow);
    }
    path.line_to((body.x0, body.y0 + r));
    corner(&mut path, Point::new(body.x0 + r, body.y0 + r), r, PI);

    path.close_path();
    path
}

fn splice(path: &mut BezPath, arrow: ArrowTriangle) {
    path.line_to(arrow.base_start);
    path.line_to(arrow.apex);
    path.line_to(arrow.base_end);
}

/// Append a clockwise quarter arc starting at `start_angle`.
fn corner(path: &mut BezPath, center: Point, r: f64, start_angle: f64) {
    if r <= 0.0 {
        return;
    }
    let arc = Arc {
        center,
        radii: Vec2::new(r, r),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}
