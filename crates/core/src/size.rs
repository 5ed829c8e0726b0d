use crate::Vector;

/// An amount of space in 2 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Returns the component-wise maximum of two sizes.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Expands this [`Size`] by the given amount on every side of each axis.
    ///
    /// A margin of `(2, 3)` adds `4` to the width and `6` to the height.
    #[must_use]
    pub fn expand(self, margin: Vector) -> Self {
        Size {
            width: self.width + margin.x * 2.0,
            height: self.height + margin.y * 2.0,
        }
    }
}

impl From<[f32; 2]> for Size {
    fn from([width, height]: [f32; 2]) -> Self {
        Size { width, height }
    }
}

impl std::ops::Mul<f32> for Size {
    type Output = Size;

    fn mul(self, scale: f32) -> Self::Output {
        Size {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}
