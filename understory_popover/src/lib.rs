// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: geometry and paint sequencing for popovers with a pointing arrow.
//!
//! A popover is a rounded rectangle with an arrow that points at a *focal point*, for
//! example the selection a toolbar acts on. The focal point can move every frame (while
//! scrolling, say) without anything else changing, so the arrow is re-placed on every
//! paint pass while layout only reruns when geometry-affecting configuration changes.
//!
//! This crate is renderer-agnostic. It produces [`kurbo`] paths and decisions; drawing
//! goes through the [`PaintSurface`] trait that the host implements.
//!
//! ## Pieces
//!
//! - [`ArrowPlacement::resolve`], [`arrow_direction`], [`arrow_center`]: which edge the
//!   arrow leaves from and where along it, clamped clear of the rounded corners.
//!   Without a focal point the arrow points down from the middle of the bottom edge.
//! - [`border_path`]: the body and arrow as a single closed [`kurbo::BezPath`].
//! - [`Reservation`] / [`PopoverLayout`]: space kept for the arrow (on all four sides,
//!   so the arrow can flip edges without a relayout) and padding, child constraints,
//!   content offset, and final size.
//! - [`PaintPass`]: shadow, fill, child, debug overlay, in that order.
//! - [`hit_test`]: child first, then the whole outer rectangle.
//! - [`Popover`]: the stateful component hosts talk to. Its setters only record
//!   [`Dirty`] flags when a value actually changes.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_popover::{ArrowDirection, ArrowPlacement, PopoverConfig, border_path};
//!
//! let config = PopoverConfig::default();
//! let shape = config.arrow_shape();
//! let size = Size::new(200.0, 100.0);
//!
//! // Focal point above the popover, within its horizontal span.
//! let placement = ArrowPlacement::resolve(Some(Point::new(100.0, -50.0)), size, &shape, true);
//! assert_eq!(placement.direction, ArrowDirection::Up);
//! assert_eq!(placement.center, 100.0);
//!
//! // No focal point yet: fall back to pointing down from the middle.
//! let fallback = ArrowPlacement::resolve(None, size, &shape, true);
//! assert_eq!(fallback.direction, ArrowDirection::Down);
//!
//! let path = border_path(placement, size, &shape);
//! assert!(!path.elements().is_empty());
//! ```
//!
//! ## Degenerate sizes
//!
//! When a popover is too small for the arrow to fit between its corners, the arrow's
//! travel range inverts; the arrow center is then pinned to the middle of the edge.
//! The corner radius used for the outline is limited to half the shorter body side.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod hit;
mod layout;
mod paint;
mod path;
mod popover;

pub use config::{ConfigError, Dirty, PopoverConfig};
pub use geometry::{
    ArrowDirection, ArrowPlacement, ArrowShape, EdgeClearance, arrow_center, arrow_direction,
};
pub use hit::{HitCollector, PopoverHit, hit_test};
pub use layout::{Constraints, PopoverLayout, Reservation};
pub use paint::{
    DEBUG_BOUNDS_COLOR, DEBUG_FOCAL_COLOR, DEBUG_FOCAL_RADIUS, PaintPass, PaintSurface,
};
pub use path::{ArrowTriangle, border_path, content_rect};
pub use popover::{Popover, PopoverChild};
