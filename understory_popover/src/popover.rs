// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing popover component.

use kurbo::{Affine, Insets, Point, Size};
use peniko::Color;

use crate::config::{ConfigError, Dirty, PopoverConfig, check_dimension, same_color};
use crate::geometry::{ArrowPlacement, EdgeClearance};
use crate::hit::{HitCollector, hit_test};
use crate::layout::{Constraints, PopoverLayout};
use crate::paint::{PaintPass, PaintSurface};

/// The single child hosted inside a popover.
pub trait PopoverChild {
    /// Lay out within `constraints` and return the chosen size.
    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Paint in child-local coordinates; the popover has already applied the content offset.
    fn paint(&self, surface: &mut dyn PaintSurface);

    /// Whether `point`, in child-local coordinates, hits the child.
    fn hit_test(&self, point: Point) -> bool;
}

/// A popover with an arrow pointing at a focal point.
///
/// Setters only store values that differ from the current ones and record the
/// resulting [`Dirty`] flags; hosts poll [`Popover::dirty`] or drain them with
/// [`Popover::take_dirty`] to decide whether to call [`Popover::layout`] and
/// [`Popover::paint`] again.
#[derive(Clone, Debug)]
pub struct Popover {
    config: PopoverConfig,
    focal_point: Option<Point>,
    dirty: Dirty,
    layout: Option<PopoverLayout>,
}

impl Popover {
    /// Create a popover.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`PopoverConfig::validate`].
    pub fn new(config: PopoverConfig) -> Self {
        expect_valid(config.validate());
        Self {
            config,
            focal_point: None,
            dirty: Dirty::GEOMETRY,
            layout: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Current focal point in the shared space.
    pub fn focal_point(&self) -> Option<Point> {
        self.focal_point
    }

    /// Result of the most recent layout pass.
    pub fn last_layout(&self) -> Option<&PopoverLayout> {
        self.layout.as_ref()
    }

    /// Pending work.
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    /// Return and clear the pending work.
    pub fn take_dirty(&mut self) -> Dirty {
        core::mem::replace(&mut self.dirty, Dirty::empty())
    }

    /// Replace the whole configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`PopoverConfig::validate`].
    pub fn set_config(&mut self, config: PopoverConfig) {
        expect_valid(config.validate());
        let dirty = self.config.diff(&config);
        if !dirty.is_empty() {
            self.config = config;
            self.dirty |= dirty;
        }
    }

    /// Update the focal point.
    pub fn set_focal_point(&mut self, focal_point: Option<Point>) {
        if self.focal_point != focal_point {
            self.focal_point = focal_point;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the corner radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    pub fn set_border_radius(&mut self, radius: f64) {
        expect_valid(check_dimension("border_radius", radius));
        if self.config.border_radius != radius {
            self.config.border_radius = radius;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the arrow base width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative or not finite.
    pub fn set_arrow_base_width(&mut self, width: f64) {
        expect_valid(check_dimension("arrow_base_width", width));
        if self.config.arrow_base_width != width {
            self.config.arrow_base_width = width;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the arrow length.
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative or not finite.
    pub fn set_arrow_length(&mut self, length: f64) {
        expect_valid(check_dimension("arrow_length", length));
        if self.config.arrow_length != length {
            self.config.arrow_length = length;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Allow or forbid arrows on the left and right edges.
    pub fn set_allow_horizontal_arrow(&mut self, allow: bool) {
        if self.config.allow_horizontal_arrow != allow {
            self.config.allow_horizontal_arrow = allow;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the far-bound policy for the arrow center.
    pub fn set_edge_clearance(&mut self, clearance: EdgeClearance) {
        if self.config.edge_clearance != clearance {
            self.config.edge_clearance = clearance;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the padding around the child.
    pub fn set_padding(&mut self, padding: Option<Insets>) {
        if self.config.padding != padding {
            self.config.padding = padding;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the screen size.
    pub fn set_screen_size(&mut self, size: Size) {
        if self.config.screen_size != size {
            self.config.screen_size = size;
            self.dirty |= Dirty::GEOMETRY;
        }
    }

    /// Update the background color.
    pub fn set_background_color(&mut self, color: Color) {
        if !same_color(self.config.background_color, color) {
            self.config.background_color = color;
            self.dirty |= Dirty::PAINT;
        }
    }

    /// Update the shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        if !same_color(self.config.shadow_color, color) {
            self.config.shadow_color = color;
            self.dirty |= Dirty::PAINT;
        }
    }

    /// Update the shadow elevation.
    ///
    /// # Panics
    ///
    /// Panics if `elevation` is negative or not finite.
    pub fn set_elevation(&mut self, elevation: f64) {
        expect_valid(check_dimension("elevation", elevation));
        if self.config.elevation != elevation {
            self.config.elevation = elevation;
            self.dirty |= Dirty::PAINT;
        }
    }

    /// Toggle the debug overlay.
    pub fn set_show_debug_paint(&mut self, show: bool) {
        if self.config.show_debug_paint != show {
            self.config.show_debug_paint = show;
            self.dirty |= Dirty::PAINT;
        }
    }

    /// Lay out the popover and its child within `constraints`.
    ///
    /// Clears [`Dirty::LAYOUT`] and returns the popover's size.
    pub fn layout(&mut self, constraints: Constraints, child: &mut dyn PopoverChild) -> Size {
        let layout = PopoverLayout::compute(
            &self.config.reservation(),
            &constraints,
            self.config.screen_size,
            |c| child.layout(c),
        );
        self.layout = Some(layout);
        self.dirty.remove(Dirty::LAYOUT);
        self.dirty.insert(Dirty::PAINT);
        layout.size
    }

    /// Paint the popover and its child.
    ///
    /// `global_to_local` maps the shared space the focal point lives in to this
    /// popover's local space. Clears [`Dirty::PAINT`] and returns the arrow placement
    /// used, or `None` if [`Popover::layout`] has not run yet.
    ///
    /// Painting uses the size and content offset of the last layout. If
    /// [`Dirty::LAYOUT`] is still pending, that layout may be stale; the flag is left
    /// set so the host can lay out before the next frame.
    pub fn paint(
        &mut self,
        surface: &mut dyn PaintSurface,
        global_to_local: Affine,
        child: &dyn PopoverChild,
    ) -> Option<ArrowPlacement> {
        let Some(layout) = self.layout else {
            log::warn!("popover painted before layout; skipping");
            return None;
        };
        if self.dirty.contains(Dirty::LAYOUT) {
            log::debug!("popover painted with layout pending; using the last laid-out size");
        }
        let pass = PaintPass {
            config: &self.config,
            size: layout.size,
            content_offset: layout.content_offset,
            focal_point: self.focal_point,
            global_to_local,
        };
        let placement = pass.paint(surface, |s| child.paint(s));
        self.dirty.remove(Dirty::PAINT);
        Some(placement)
    }

    /// Hit test a point in popover-local coordinates.
    ///
    /// Returns `false` if [`Popover::layout`] has not run yet.
    pub fn hit_test(
        &self,
        point: Point,
        child: &dyn PopoverChild,
        result: &mut dyn HitCollector,
    ) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        hit_test(
            point,
            layout.size,
            layout.content_offset,
            |p| child.hit_test(p),
            result,
        )
    }
}

#[track_caller]
fn expect_valid(result: Result<(), ConfigError>) {
    if let Err(err) = result {
        panic!("invalid popover configuration: {err}");
    }
}
