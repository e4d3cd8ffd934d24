//! Geometric primitives for avatar placement.
//!
//! Coordinates follow the SVG convention: `x` grows to the right, `y` grows
//! downwards, and every position names the **top-left** corner of a frame.

/// A position or offset on the canvas.
///
/// # Examples
///
/// ```
/// # use avatar_pile_core::geometry::Point;
/// let bite = Point::new(38.4, -8.0);
/// let moved = bite.add_point(Point::new(46.4, 0.0));
/// assert!((moved.x() - 84.8).abs() < 0.001);
/// assert_eq!(moved.y(), -8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true for the origin
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Avatar frames are always square
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Grows the size by `padding` on every side.
    pub fn padded(self, padding: f32) -> Self {
        Self::new(self.width + padding * 2.0, self.height + padding * 2.0)
    }
}

/// An axis-aligned rectangle stored as its extreme coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min: top_left,
            max: Point::new(top_left.x + size.width, top_left.y + size.height),
        }
    }

    pub fn min_x(self) -> f32 {
        self.min.x
    }

    pub fn min_y(self) -> f32 {
        self.min.y
    }

    pub fn max_x(self) -> f32 {
        self.max.x
    }

    pub fn max_y(self) -> f32 {
        self.max.y
    }

    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Top-left corner
    pub fn min_point(self) -> Point {
        self.min
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use avatar_pile_core::geometry::{Bounds, Point, Size};
    /// let first = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::square(64.0));
    /// let second = Bounds::new_from_top_left(Point::new(46.4, 0.0), Size::square(64.0));
    ///
    /// let row = first.merge(&second);
    /// assert_eq!(row.min_x(), 0.0);
    /// assert_eq!(row.height(), 64.0);
    /// assert!((row.width() - 110.4).abs() < 0.001);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Moves the bounds by `offset` without resizing them.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min: self.min.add_point(offset),
            max: self.max.add_point(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let origin = Point::new(38.4, -8.0);
        let offset = Point::new(1.6, 8.0);

        let sum = origin.add_point(offset);
        assert!((sum.x() - 40.0).abs() < 0.001);
        assert_eq!(sum.y(), 0.0);
        assert!((sum.sub_point(offset).x() - 38.4).abs() < 0.001);

        assert!(Point::default().is_zero());
        assert!(!Point::new(0.0, -8.0).is_zero());
    }

    #[test]
    fn test_size_padded() {
        assert_eq!(Size::square(64.0).padded(16.0), Size::square(96.0));
        assert_eq!(Size::new(156.8, 64.0).padded(0.0), Size::new(156.8, 64.0));
    }

    #[test]
    fn test_bite_bounds_extend_above_frame() {
        let bite = Bounds::new_from_top_left(Point::new(38.4, -8.0), Size::square(80.0));
        assert_eq!(bite.min_point(), Point::new(38.4, -8.0));
        assert!((bite.max_x() - 118.4).abs() < 0.001);
        assert_eq!(bite.max_y(), 72.0);
        assert_eq!(bite.to_size(), Size::square(80.0));
    }

    #[test]
    fn test_merge_overlapping_frames() {
        let first = Bounds::new_from_top_left(Point::default(), Size::square(40.0));
        let second = Bounds::new_from_top_left(Point::new(28.0, 0.0), Size::square(40.0));

        let merged = first.merge(&second);
        assert_eq!(merged.min_point(), Point::default());
        assert_eq!(merged.to_size(), Size::new(68.0, 40.0));
    }

    #[test]
    fn test_translate() {
        let frame = Bounds::new_from_top_left(Point::default(), Size::new(50.0, 30.0));
        let moved = frame.translate(Point::new(16.0, 16.0));
        assert_eq!(moved.min_point(), Point::new(16.0, 16.0));
        assert_eq!(moved.to_size(), frame.to_size());
    }
}
