// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover following a focal point as content scrolls underneath it.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example popover_follow`

use kurbo::{Affine, Insets, Point, Size};
use understory_demos::{LogSurface, Toolbar};
use understory_popover::{Constraints, Dirty, Popover, PopoverConfig, PopoverHit};

fn main() {
    env_logger::init();

    let mut popover = Popover::new(PopoverConfig {
        padding: Some(Insets::uniform(6.0)),
        screen_size: Size::new(800.0, 600.0),
        show_debug_paint: true,
        ..PopoverConfig::default()
    });
    let mut toolbar = Toolbar::new(Size::new(160.0, 40.0));

    // The popover sits at a fixed place on screen.
    let origin = Point::new(320.0, 200.0);
    let to_local = Affine::translate(-origin.to_vec2());
    let mut surface = LogSurface::default();

    // Scroll the selection from above the popover, past its right side, to below it.
    let focal_points = [
        None,
        Some(Point::new(400.0, 120.0)),
        Some(Point::new(650.0, 230.0)),
        Some(Point::new(360.0, 400.0)),
    ];

    for focal in focal_points {
        popover.set_focal_point(focal);
        let dirty = popover.take_dirty();
        if dirty.contains(Dirty::LAYOUT) {
            let size = popover.layout(Constraints::UNBOUNDED, &mut toolbar);
            println!("layout -> {size:?}");
        }
        if let Some(placement) = popover.paint(&mut surface, to_local, &toolbar) {
            println!("focal {focal:?} -> {placement:?}");
        }
    }

    let mut hits: Vec<PopoverHit> = Vec::new();
    popover.hit_test(Point::new(4.0, 4.0), &toolbar, &mut hits);
    println!("hit at arrow margin: {hits:?}");
}
