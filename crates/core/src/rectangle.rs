use crate::{Point, Size, Vector};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// A rectangle at the origin with no size.
    pub const ZERO: Self = Self::new(Point::ORIGIN, Size::ZERO);

    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] with its top-left corner at the origin
    /// and with the provided [`Size`].
    pub const fn with_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates the smallest [`Rectangle`] containing both points.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);

        Self {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    /// Returns the top-left [`Point`] of the [`Rectangle`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the bottom-left [`Point`] of the [`Rectangle`].
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.height)
    }

    /// Returns the bottom-right [`Point`] of the [`Rectangle`].
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Returns true if the [`Rectangle`] covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    ///
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    /// Computes the union with the given [`Rectangle`].
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);

        let lower_right_x = (self.x + self.width).max(other.x + other.width);
        let lower_right_y = (self.y + self.height).max(other.y + other.height);

        Self {
            x,
            y,
            width: lower_right_x - x,
            height: lower_right_y - y,
        }
    }
}

impl std::ops::Add<Vector> for Rectangle {
    type Output = Self;

    fn add(self, translation: Vector) -> Self {
        Self {
            x: self.x + translation.x,
            y: self.y + translation.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_spans_both() {
        let a = Rectangle::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rectangle::new(Point::new(5.0, -5.0), Size::new(20.0, 5.0));

        assert_eq!(
            a.union(&b),
            Rectangle::new(Point::new(0.0, -5.0), Size::new(25.0, 15.0))
        );
    }

    #[test]
    fn test_contains_excludes_far_edges() {
        let rectangle = Rectangle::with_size(Size::new(10.0, 10.0));

        assert!(rectangle.contains(Point::ORIGIN));
        assert!(rectangle.contains(Point::new(9.9, 9.9)));
        assert!(!rectangle.contains(Point::new(10.0, 5.0)));
        assert!(!rectangle.contains(Point::new(5.0, -0.1)));
    }
}
