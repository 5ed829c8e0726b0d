//! Align and position nodes.

/// Alignment on the axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align at the start of the axis.
    Start,

    /// Align at the center of the axis.
    Center,

    /// Align at the end of the axis.
    End,
}

impl Alignment {
    /// Returns the offset that places content of `length` inside an axis of
    /// `available` length.
    ///
    /// Content larger than the axis starts at the origin.
    pub fn offset(self, available: f32, length: f32) -> f32 {
        let free = (available - length).max(0.0);

        match self {
            Self::Start => 0.0,
            Self::Center => free / 2.0,
            Self::End => free,
        }
    }
}

impl From<Horizontal> for Alignment {
    fn from(horizontal: Horizontal) -> Self {
        match horizontal {
            Horizontal::Left => Self::Start,
            Horizontal::Center => Self::Center,
            Horizontal::Right => Self::End,
        }
    }
}

impl From<Vertical> for Alignment {
    fn from(vertical: Vertical) -> Self {
        match vertical {
            Vertical::Top => Self::Start,
            Vertical::Center => Self::Center,
            Vertical::Bottom => Self::End,
        }
    }
}

/// The horizontal [`Alignment`] of some resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    /// Align left
    #[default]
    Left,

    /// Horizontally centered
    Center,

    /// Align right
    Right,
}

impl From<Alignment> for Horizontal {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Right,
        }
    }
}

/// The vertical [`Alignment`] of some resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    /// Align top
    Top,

    /// Vertically centered
    #[default]
    Center,

    /// Align bottom
    Bottom,
}

impl From<Alignment> for Vertical {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Top,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_distributes_free_space() {
        assert_eq!(Alignment::from(Horizontal::Left).offset(100.0, 40.0), 0.0);
        assert_eq!(Alignment::from(Horizontal::Center).offset(100.0, 40.0), 30.0);
        assert_eq!(Alignment::from(Horizontal::Right).offset(100.0, 40.0), 60.0);
    }

    #[test]
    fn test_offset_never_negative() {
        assert_eq!(Alignment::End.offset(10.0, 40.0), 0.0);
    }
}
