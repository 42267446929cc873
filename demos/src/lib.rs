// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.

use kurbo::{BezPath, Point, Shape, Size, Vec2};
use peniko::Color;
use understory_popover::{Constraints, PaintSurface, PopoverChild};

/// A [`PaintSurface`] that logs every call instead of drawing.
#[derive(Debug, Default)]
pub struct LogSurface {
    offset: Vec2,
    stack: Vec<Vec2>,
}

impl PaintSurface for LogSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        let bounds = path.bounding_box() + self.offset;
        log::info!("fill   {bounds:?} with {:?}", color.components);
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let bounds = path.bounding_box() + self.offset;
        log::info!("stroke {bounds:?} width {width} with {:?}", color.components);
    }

    fn cast_shadow(&mut self, path: &BezPath, _color: Color, elevation: f64, translucent: bool) {
        let bounds = path.bounding_box() + self.offset;
        log::info!("shadow {bounds:?} elevation {elevation} translucent {translucent}");
    }

    fn push_offset(&mut self, offset: Vec2) {
        self.stack.push(self.offset);
        self.offset += offset;
    }

    fn pop_offset(&mut self) {
        self.offset = self.stack.pop().unwrap_or(Vec2::ZERO);
    }
}

/// A fixed-size child standing in for a row of toolbar buttons.
#[derive(Clone, Copy, Debug)]
pub struct Toolbar {
    /// Preferred size, kept across layouts.
    pub size: Size,
    laid_out: Size,
}

impl Toolbar {
    /// A toolbar that would like to be `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            laid_out: Size::ZERO,
        }
    }

    /// Size chosen by the last layout.
    pub fn laid_out(&self) -> Size {
        self.laid_out
    }
}

impl PopoverChild for Toolbar {
    fn layout(&mut self, constraints: Constraints) -> Size {
        self.laid_out = constraints.constrain(self.size);
        self.laid_out
    }

    fn paint(&self, surface: &mut dyn PaintSurface) {
        let path = self.laid_out.to_rect().to_path(0.1);
        surface.fill_path(&path, Color::from_rgba8(0x30, 0x30, 0x30, 0xff));
    }

    fn hit_test(&self, point: Point) -> bool {
        self.laid_out.to_rect().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_regrows_after_tight_layout() {
        let mut toolbar = Toolbar::new(Size::new(160.0, 40.0));

        let squeezed = toolbar.layout(Constraints::tight(Size::new(50.0, 20.0)));
        assert_eq!(squeezed, Size::new(50.0, 20.0));
        assert!(!toolbar.hit_test(Point::new(100.0, 10.0)));

        let relaxed = toolbar.layout(Constraints::UNBOUNDED);
        assert_eq!(relaxed, Size::new(160.0, 40.0));
        assert_eq!(toolbar.size, Size::new(160.0, 40.0));
        assert!(toolbar.hit_test(Point::new(100.0, 10.0)));
    }
}
