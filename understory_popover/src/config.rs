// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover configuration, validation, and change classification.

use kurbo::{Insets, Size};
use peniko::Color;

use crate::geometry::{ArrowShape, EdgeClearance};
use crate::layout::Reservation;

bitflags::bitflags! {
    /// Work a configuration change requires from the host.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        /// Layout must run again (and paint after it).
        const LAYOUT = 0b0000_0001;
        /// Paint must run again.
        const PAINT  = 0b0000_0010;
    }
}

impl Dirty {
    /// Flags raised by a geometry-affecting change.
    pub const GEOMETRY: Self = Self::LAYOUT.union(Self::PAINT);
}

/// Reasons a [`PopoverConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A dimension was negative, infinite, or NaN.
    #[error("`{field}` must be finite and >= 0, got {value}")]
    InvalidDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The screen size had a negative or NaN component.
    #[error("screen size must be >= 0 on both axes, got {width}x{height}")]
    InvalidScreenSize {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// A padding inset was negative, infinite, or NaN.
    #[error("padding insets must be finite and >= 0, got {0:?}")]
    InvalidPadding(Insets),
}

/// Everything the popover needs besides its child and focal point.
///
/// Use struct update syntax over [`PopoverConfig::default`] and check the result with
/// [`PopoverConfig::validate`], or hand it to [`Popover::new`](crate::Popover::new),
/// which asserts validity.
#[derive(Clone, Copy, Debug)]
pub struct PopoverConfig {
    /// Corner radius of the body.
    pub border_radius: f64,
    /// Width of the arrow where it meets the body.
    pub arrow_base_width: f64,
    /// Distance from the body edge to the arrow tip.
    pub arrow_length: f64,
    /// Whether the arrow may leave the left or right edge.
    pub allow_horizontal_arrow: bool,
    /// Far-bound policy for the arrow center.
    pub edge_clearance: EdgeClearance,
    /// Space between the body edge and the child.
    pub padding: Option<Insets>,
    /// Size of the display; the popover never asks for more.
    ///
    /// Infinite by default, which leaves the incoming constraints in charge.
    pub screen_size: Size,
    /// Fill color of the body and arrow.
    pub background_color: Color,
    /// Shadow elevation; `0.0` disables the shadow.
    pub elevation: f64,
    /// Color of the shadow.
    pub shadow_color: Color,
    /// Draw the outer bounds and the focal point on top of everything.
    pub show_debug_paint: bool,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            border_radius: 12.0,
            arrow_base_width: 18.0,
            arrow_length: 12.0,
            allow_horizontal_arrow: true,
            edge_clearance: EdgeClearance::Compat,
            padding: None,
            screen_size: Size::new(f64::INFINITY, f64::INFINITY),
            background_color: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
            elevation: 8.0,
            shadow_color: Color::from_rgba8(0x00, 0x00, 0x00, 0xff),
            show_debug_paint: false,
        }
    }
}

impl PopoverConfig {
    /// Check the construction preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("border_radius", self.border_radius)?;
        check_dimension("arrow_base_width", self.arrow_base_width)?;
        check_dimension("arrow_length", self.arrow_length)?;
        check_dimension("elevation", self.elevation)?;
        let screen = self.screen_size;
        if !(screen.width >= 0.0 && screen.height >= 0.0) {
            return Err(ConfigError::InvalidScreenSize {
                width: screen.width,
                height: screen.height,
            });
        }
        if let Some(p) = self.padding
            && ![p.x0, p.y0, p.x1, p.y1]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
        {
            return Err(ConfigError::InvalidPadding(p));
        }
        Ok(())
    }

    /// Arrow dimensions used for placement and path construction.
    pub fn arrow_shape(&self) -> ArrowShape {
        ArrowShape {
            border_radius: self.border_radius,
            base_width: self.arrow_base_width,
            length: self.arrow_length,
            clearance: self.edge_clearance,
        }
    }

    /// Layout reservation for the current padding and arrow length.
    pub fn reservation(&self) -> Reservation {
        Reservation::new(self.padding, self.arrow_length)
    }

    /// Whether the shadow should be rendered as if the background lets light through.
    pub fn is_translucent(&self) -> bool {
        self.background_color.components[3] < 1.0
    }

    /// Classify what changes between `self` and `next`.
    ///
    /// Geometry-affecting fields yield [`Dirty::GEOMETRY`]; purely visual fields yield
    /// [`Dirty::PAINT`]. Identical configurations yield an empty set.
    pub fn diff(&self, next: &Self) -> Dirty {
        let mut dirty = Dirty::empty();
        if self.border_radius != next.border_radius
            || self.arrow_base_width != next.arrow_base_width
            || self.arrow_length != next.arrow_length
            || self.allow_horizontal_arrow != next.allow_horizontal_arrow
            || self.edge_clearance != next.edge_clearance
            || self.padding != next.padding
            || self.screen_size != next.screen_size
        {
            dirty |= Dirty::GEOMETRY;
        }
        if !same_color(self.background_color, next.background_color)
            || !same_color(self.shadow_color, next.shadow_color)
            || self.elevation != next.elevation
            || self.show_debug_paint != next.show_debug_paint
        {
            dirty |= Dirty::PAINT;
        }
        dirty
    }
}

pub(crate) fn check_dimension(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}

pub(crate) fn same_color(a: Color, b: Color) -> bool {
    a.components == b.components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PopoverConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_dimensions_rejected() {
        let config = PopoverConfig {
            elevation: -1.0,
            ..PopoverConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimension {
                field: "elevation",
                value: -1.0,
            })
        );

        let config = PopoverConfig {
            arrow_length: -0.5,
            ..PopoverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension {
                field: "arrow_length",
                ..
            })
        ));

        let config = PopoverConfig {
            border_radius: f64::NAN,
            ..PopoverConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_padding_and_screen_rejected() {
        let config = PopoverConfig {
            padding: Some(Insets::new(1.0, -2.0, 0.0, 0.0)),
            ..PopoverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPadding(_))
        ));

        let config = PopoverConfig {
            screen_size: Size::new(-1.0, 10.0),
            ..PopoverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScreenSize { .. })
        ));
    }

    #[test]
    fn diff_identical_is_empty() {
        let a = PopoverConfig::default();
        assert!(a.diff(&a).is_empty());
    }

    #[test]
    fn diff_classifies_geometry_and_visuals() {
        let base = PopoverConfig::default();

        let geometry = [
            PopoverConfig {
                border_radius: 4.0,
                ..base
            },
            PopoverConfig {
                arrow_length: 6.0,
                ..base
            },
            PopoverConfig {
                padding: Some(Insets::uniform(8.0)),
                ..base
            },
            PopoverConfig {
                allow_horizontal_arrow: false,
                ..base
            },
            PopoverConfig {
                screen_size: Size::new(1024.0, 768.0),
                ..base
            },
        ];
        for next in geometry {
            assert_eq!(base.diff(&next), Dirty::GEOMETRY, "{next:?}");
        }

        let visual = [
            PopoverConfig {
                background_color: Color::from_rgba8(0x20, 0x20, 0x20, 0xff),
                ..base
            },
            PopoverConfig {
                elevation: 2.0,
                ..base
            },
            PopoverConfig {
                show_debug_paint: true,
                ..base
            },
        ];
        for next in visual {
            assert_eq!(base.diff(&next), Dirty::PAINT, "{next:?}");
        }
    }

    #[test]
    fn translucency_follows_alpha() {
        let opaque = PopoverConfig::default();
        assert!(!opaque.is_translucent());
        let see_through = PopoverConfig {
            background_color: Color::from_rgba8(0xff, 0xff, 0xff, 0x80),
            ..opaque
        };
        assert!(see_through.is_translucent());
    }

    #[test]
    fn error_message_names_field() {
        let err = ConfigError::InvalidDimension {
            field: "elevation",
            value: -3.0,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "`elevation` must be finite and >= 0, got -3"
        );
    }
}
