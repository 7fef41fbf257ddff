//! Displacements between points and their quarter-turn rotations.

use std::fmt::{self, Display};

use crate::Point;

/// The displacement from one [`Point`] to another.
///
/// Components are stored as `i64` so that the difference of any two `i32`
/// points is representable exactly.
///
/// # Examples
///
/// ```
/// use squares_core::{Offset, Point, Turn};
///
/// let d = Offset::between(Point::new(1, 1), Point::new(4, 2));
/// assert_eq!(d, Offset::new(3, 1));
/// assert_eq!(d.rotated(Turn::CounterClockwise), Offset::new(-1, 3));
/// assert_eq!(d.rotated(Turn::Clockwise), Offset::new(1, -3));
/// assert_eq!(d.length_squared(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    dx: i64,
    dy: i64,
}

impl Offset {
    /// The zero displacement.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates an offset from its components.
    #[must_use]
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Returns the offset that moves `from` onto `to`.
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(
            i64::from(to.x()) - i64::from(from.x()),
            i64::from(to.y()) - i64::from(from.y()),
        )
    }

    /// Returns the horizontal component.
    #[must_use]
    pub const fn dx(self) -> i64 {
        self.dx
    }

    /// Returns the vertical component.
    #[must_use]
    pub const fn dy(self) -> i64 {
        self.dy
    }

    /// Returns `true` if this offset does not move a point.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Returns this offset rotated by a quarter turn.
    ///
    /// The rotated offset has the same length and is perpendicular to the
    /// original one.
    #[must_use]
    pub const fn rotated(self, turn: Turn) -> Self {
        match turn {
            Turn::CounterClockwise => Self::new(-self.dy, self.dx),
            Turn::Clockwise => Self::new(self.dy, -self.dx),
        }
    }

    /// Returns the squared length of this offset.
    #[must_use]
    pub fn length_squared(self) -> u128 {
        let dx = u128::from(self.dx.unsigned_abs());
        let dy = u128::from(self.dy.unsigned_abs());
        dx * dx + dy * dy
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> i128 {
        i128::from(self.dx) * i128::from(other.dx) + i128::from(self.dy) * i128::from(other.dy)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

/// A quarter turn in either direction.
///
/// Every edge of a square has the rest of the square on exactly one of its two
/// sides; the two turns select which side to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Rotation by +90°: `(dx, dy)` becomes `(-dy, dx)`.
    CounterClockwise,
    /// Rotation by -90°: `(dx, dy)` becomes `(dy, -dx)`.
    Clockwise,
}

impl Turn {
    /// Both turns, counter-clockwise first.
    pub const ALL: [Self; 2] = [Self::CounterClockwise, Self::Clockwise];

    /// Returns the turn in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}
