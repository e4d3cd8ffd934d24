//! Shape kinds and the rounded-rectangle primitive every avatar is built from.
//!
//! Both supported kinds are drawn as rounded rectangles; they only differ in
//! how the corner radius is derived. [`ShapeKind`] is the single place where
//! that difference lives:
//!
//! - [`ShapeKind::corner_radius`] for the visible base shape
//! - [`ShapeKind::mask_corner_radius`] for the enlarged shape subtracted from it

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::geometry::{Bounds, Point, Size};

/// Smallest corner radius a squircle is rendered with.
pub const MIN_SQUIRCLE_CORNER_RADIUS: f32 = 8.0;

/// The outline of an avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A true circle: the corner radius is half the side length.
    #[default]
    Circle,
    /// A rounded square whose corner radius scales with its size.
    Squircle,
}

impl ShapeKind {
    /// All shape kinds, in the order they are offered to users.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Squircle];

    /// Returns the lowercase name used in parameters and configuration.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Squircle => "squircle",
        }
    }

    /// Corner radius of the base shape with the given side length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::shape::ShapeKind;
    /// assert_eq!(ShapeKind::Circle.corner_radius(64.0), 32.0);
    /// assert_eq!(ShapeKind::Squircle.corner_radius(50.0), 16.0);
    /// ```
    pub fn corner_radius(self, size: f32) -> f32 {
        match self {
            ShapeKind::Circle => size / 2.0,
            ShapeKind::Squircle => squircle_corner_radius(size),
        }
    }

    /// Corner radius of the shape subtracted from the base shape.
    ///
    /// The subtracted shape is `gap` larger on every side, so its rounding is
    /// grown by `gap` as well.
    pub fn mask_corner_radius(self, size: f32, gap: f32) -> f32 {
        match self {
            ShapeKind::Circle => (size + gap * 2.0) / 2.0,
            ShapeKind::Squircle => squircle_corner_radius(size) + gap,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shape `{s}`, expected `circle` or `squircle`"))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Corner radius for a squircle of the given size.
///
/// A third of the size rounded up, then down to the nearest even integer,
/// and never below [`MIN_SQUIRCLE_CORNER_RADIUS`].
pub fn squircle_corner_radius(size: f32) -> f32 {
    let mut radius = (size / 3.0).ceil();
    if radius % 2.0 != 0.0 {
        radius -= 1.0;
    }
    radius.max(MIN_SQUIRCLE_CORNER_RADIUS)
}

/// A single rounded rectangle positioned in its avatar's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePrimitive {
    kind: ShapeKind,
    position: Point,
    size: f32,
    corner_radius: f32,
}

impl ShapePrimitive {
    pub fn new(kind: ShapeKind, position: Point, size: f32, corner_radius: f32) -> Self {
        Self {
            kind,
            position,
            size,
            corner_radius,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Top-left corner relative to the avatar frame
    pub fn position(&self) -> Point {
        self.position
    }

    /// Side length of the square frame
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, Size::square(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squircle_corner_radius_rounds_down_to_even() {
        // ceil(50 / 3) = 17
        assert_eq!(squircle_corner_radius(50.0), 16.0);
        // ceil(64 / 3) = 22
        assert_eq!(squircle_corner_radius(64.0), 22.0);
        assert_eq!(squircle_corner_radius(96.0), 32.0);
    }

    #[test]
    fn test_squircle_corner_radius_minimum() {
        assert_eq!(squircle_corner_radius(16.0), 8.0);
        assert_eq!(squircle_corner_radius(1.0), 8.0);
        assert_eq!(squircle_corner_radius(24.0), 8.0);
        assert_eq!(squircle_corner_radius(30.0), 10.0);
    }

    #[test]
    fn test_circle_radii() {
        assert_eq!(ShapeKind::Circle.corner_radius(40.0), 20.0);
        assert_eq!(ShapeKind::Circle.mask_corner_radius(40.0, 4.0), 24.0);
    }

    #[test]
    fn test_squircle_mask_radius_adds_gap() {
        assert_eq!(ShapeKind::Squircle.corner_radius(40.0), 14.0);
        assert_eq!(ShapeKind::Squircle.mask_corner_radius(40.0, 4.0), 18.0);
    }

    #[test]
    fn test_shape_kind_from_str() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("Squircle".parse::<ShapeKind>(), Ok(ShapeKind::Squircle));
        assert_eq!(" circle ".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_shape_kind_display_round_trips() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_shape_primitive_bounds() {
        let bite = ShapePrimitive::new(ShapeKind::Circle, Point::new(38.4, -8.0), 80.0, 40.0);
        let bounds = bite.bounds();
        assert_eq!(bounds.min_y(), -8.0);
        assert_eq!(bounds.max_y(), 72.0);
        assert_eq!(bounds.width(), 80.0);
        assert_eq!(bite.kind(), ShapeKind::Circle);
        assert_eq!(bite.corner_radius(), 40.0);
    }
}
