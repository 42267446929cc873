// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint sequencing over a host-provided drawing surface.

use kurbo::{Affine, BezPath, Circle, Point, Shape, Size, Vec2};
use peniko::Color;

use crate::config::PopoverConfig;
use crate::geometry::ArrowPlacement;
use crate::path::border_path;

/// Outline color of the debug bounds rectangle.
pub const DEBUG_BOUNDS_COLOR: Color = Color::from_rgba8(0xff, 0x00, 0xff, 0xff);
/// Fill color of the debug focal point marker.
pub const DEBUG_FOCAL_COLOR: Color = Color::from_rgba8(0xff, 0x00, 0x00, 0xff);
/// Radius of the debug focal point marker.
pub const DEBUG_FOCAL_RADIUS: f64 = 4.0;

/// Drawing capabilities the host renderer provides.
///
/// All geometry is given in the surface's current local space.
pub trait PaintSurface {
    /// Fill `path` with a solid color.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke `path` with a solid color and line width.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Cast a shadow beneath `path`.
    ///
    /// `translucent` is `true` when the shape drawn on top will not fully cover the
    /// shadow, which some renderers handle differently.
    fn cast_shadow(&mut self, path: &BezPath, color: Color, elevation: f64, translucent: bool);

    /// Translate subsequent drawing by `offset` until the matching [`pop_offset`](Self::pop_offset).
    fn push_offset(&mut self, offset: Vec2);

    /// Undo the most recent [`push_offset`](Self::push_offset).
    fn pop_offset(&mut self);
}

/// Inputs to a single paint pass.
#[derive(Clone, Copy, Debug)]
pub struct PaintPass<'a> {
    /// Configuration snapshot for this pass.
    pub config: &'a PopoverConfig,
    /// Laid-out outer size.
    pub size: Size,
    /// Child origin relative to the popover origin.
    pub content_offset: Vec2,
    /// Focal point in the shared (global) space, if known.
    pub focal_point: Option<Point>,
    /// Transform from the shared space into the popover's local space.
    pub global_to_local: Affine,
}

impl PaintPass<'_> {
    /// Focal point in local coordinates, if there is one.
    pub fn local_focal_point(&self) -> Option<Point> {
        self.focal_point.map(|p| self.global_to_local * p)
    }

    /// Paint the popover and its child, returning the arrow placement used.
    ///
    /// Order is fixed: shadow, fill, child, then the debug overlay.
    pub fn paint(
        &self,
        surface: &mut dyn PaintSurface,
        paint_child: impl FnOnce(&mut dyn PaintSurface),
    ) -> ArrowPlacement {
        let config = self.config;
        let focal = self.local_focal_point();
        let shape = config.arrow_shape();
        let placement =
            ArrowPlacement::resolve(focal, self.size, &shape, config.allow_horizontal_arrow);
        let path = border_path(placement, self.size, &shape);
        log::trace!("popover paint: {placement:?} at size {:?}", self.size);

        if config.elevation > 0.0 {
            surface.cast_shadow(
                &path,
                config.shadow_color,
                config.elevation,
                config.is_translucent(),
            );
        }
        surface.fill_path(&path, config.background_color);

        surface.push_offset(self.content_offset);
        paint_child(surface);
        surface.pop_offset();

        if config.show_debug_paint {
            let bounds = self.size.to_rect().to_path(0.1);
            surface.stroke_path(&bounds, DEBUG_BOUNDS_COLOR, 1.0);
            if let Some(focal) = focal {
                let marker = Circle::new(focal, DEBUG_FOCAL_RADIUS).to_path(0.1);
                surface.fill_path(&marker, DEBUG_FOCAL_COLOR);
            }
        }
        placement
    }
}
