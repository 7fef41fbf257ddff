//! Integer points on the plane.

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use crate::Offset;

/// A point with integer coordinates.
///
/// Points are identified by value: two points with the same `(x, y)` are the
/// same point, regardless of where they came from. Ordering is by `x`, then
/// by `y`, which is the order used for the canonical corners of a
/// [`Square`](crate::Square).
///
/// # Examples
///
/// ```
/// use squares_core::Point;
///
/// let p = Point::new(3, -4);
/// assert_eq!(p.x(), 3);
/// assert_eq!(p.y(), -4);
/// assert_eq!(p.to_string(), "(3, -4)");
///
/// let q: Point = "3, -4".parse()?;
/// assert_eq!(p, q);
/// # Ok::<(), squares_core::ParsePointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Translates this point by `offset`.
    ///
    /// Returns `None` if the translated point does not fit in the coordinate
    /// range. Such a point can never be a member of any point set, so callers
    /// treat it as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use squares_core::{Offset, Point};
    ///
    /// let p = Point::new(1, 2);
    /// assert_eq!(p.checked_add(Offset::new(-3, 4)), Some(Point::new(-2, 6)));
    /// assert_eq!(Point::new(i32::MAX, 0).checked_add(Offset::new(1, 0)), None);
    /// ```
    #[must_use]
    pub fn checked_add(self, offset: Offset) -> Option<Self> {
        let x = i32::try_from(i64::from(self.x) + offset.dx()).ok()?;
        let y = i32::try_from(i64::from(self.y) + offset.dy()).ok()?;
        Some(Self::new(x, y))
    }

    /// Returns the offset that moves this point onto `other`.
    #[must_use]
    pub fn offset_to(self, other: Self) -> Offset {
        Offset::between(self, other)
    }

    /// Returns the squared euclidean distance to `other`.
    ///
    /// Exact for every pair of points; no rounding is involved.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u128 {
        self.offset_to(other).length_squared()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Error returned when parsing a [`Point`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePointError {
    /// The input contained no coordinates.
    #[display("empty point")]
    Empty,
    /// Only the x coordinate was present.
    #[display("missing y coordinate")]
    MissingCoordinate,
    /// More than two coordinates were present.
    #[display("unexpected trailing input after y coordinate")]
    TrailingInput,
    /// An opening parenthesis had no matching closing one, or vice versa.
    #[display("unbalanced parenthesis")]
    UnbalancedParenthesis,
    /// A coordinate was not a valid integer.
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(ParseIntError),
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses a point written as `x,y`, `x y` or `(x, y)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = match (s.strip_prefix('('), s.ends_with(')')) {
            (Some(inner), true) => inner.strip_suffix(')').unwrap_or(inner),
            (None, false) => s,
            _ => return Err(ParsePointError::UnbalancedParenthesis),
        };

        let parts = if s.contains(',') {
            s.split(',').map(str::trim).collect::<Vec<_>>()
        } else {
            s.split_whitespace().collect()
        };
        let (x, y) = match parts.as_slice() {
            [] | ["", ..] => return Err(ParsePointError::Empty),
            [_] | [_, ""] => return Err(ParsePointError::MissingCoordinate),
            [x, y] => (*x, *y),
            _ => return Err(ParsePointError::TrailingInput),
        };

        let x = x.parse().map_err(ParsePointError::InvalidCoordinate)?;
        let y = y.parse().map_err(ParsePointError::InvalidCoordinate)?;
        Ok(Self::new(x, y))
    }
}
