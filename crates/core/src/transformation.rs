use crate::{Point, Rectangle, Vector};

use glam::{Affine2, Vec2};
use std::ops::Mul;

/// A 2D transformation made of a translation and a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation(Affine2);

impl Transformation {
    /// A [`Transformation`] that preserves whatever is transformed.
    pub const IDENTITY: Self = Self(Affine2::IDENTITY);

    /// Creates a new [`Transformation`] that translates by the given vector.
    pub fn translate(translation: Vector) -> Self {
        Self(Affine2::from_translation(Vec2::new(
            translation.x,
            translation.y,
        )))
    }

    /// Creates a new [`Transformation`] that scales uniformly by the given
    /// factor.
    pub fn scale(scaling: f32) -> Self {
        Self(Affine2::from_scale(Vec2::splat(scaling)))
    }

    /// Returns the inverse of the [`Transformation`].
    ///
    /// A degenerate transformation (zero scale) has no inverse; the identity is
    /// returned instead and a warning is logged.
    #[must_use]
    pub fn inverse(self) -> Self {
        if self.scale_factor() == 0.0 {
            log::warn!("Transformation: cannot invert a zero scale");
            return Self::IDENTITY;
        }

        Self(self.0.inverse())
    }

    /// Returns the scale factor of the [`Transformation`].
    pub fn scale_factor(self) -> f32 {
        self.0.matrix2.x_axis.length()
    }

    /// Returns the translation of the [`Transformation`].
    pub fn translation(self) -> Vector {
        Vector::new(self.0.translation.x, self.0.translation.y)
    }

    /// Applies the [`Transformation`] to a [`Point`].
    pub fn transform_point(self, point: Point) -> Point {
        let transformed = self.0.transform_point2(Vec2::new(point.x, point.y));

        Point::new(transformed.x, transformed.y)
    }

    /// Applies the [`Transformation`] to a [`Rectangle`], returning the
    /// bounds of the transformed corners.
    pub fn transform_rectangle(self, rectangle: Rectangle) -> Rectangle {
        let a = self.transform_point(rectangle.position());
        let b = self.transform_point(rectangle.bottom_right());

        Rectangle::from_corners(a, b)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transformation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}
