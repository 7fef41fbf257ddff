//! Squares with integer corners.

use std::fmt::{self, Display};

use crate::{Edge, Offset, Point};

/// A square whose four corners are integer points.
///
/// The corners are kept in canonical order (sorted by `x`, then `y`), so
/// equality, hashing and ordering depend only on the set of corners. Two
/// squares built from the same four points, labeled in any order, are equal.
///
/// Axis-aligned and rotated squares are represented the same way.
///
/// # Examples
///
/// ```
/// use squares_core::{Point, Square};
///
/// let a = Square::try_from_corners([
///     Point::new(1, 1),
///     Point::new(0, 0),
///     Point::new(1, 0),
///     Point::new(0, 1),
/// ])?;
/// let b = Square::try_from_corners([
///     Point::new(0, 1),
///     Point::new(1, 0),
///     Point::new(1, 1),
///     Point::new(0, 0),
/// ])?;
/// assert_eq!(a, b);
/// assert_eq!(a.corners()[0], Point::new(0, 0));
/// assert!(a.is_axis_aligned());
/// assert_eq!(a.area(), 1);
/// # Ok::<(), squares_core::SquareError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SquareRepr", into = "SquareRepr")
)]
pub struct Square {
    corners: [Point; 4],
}

/// Error returned when four points do not form a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SquareError {
    /// The same point was given more than once.
    #[display("duplicate corner {_0}")]
    DuplicateCorner(#[error(not(source))] Point),
    /// The points are distinct but are not the corners of a square.
    #[display("points are not the corners of a square")]
    NotASquare,
}

impl Square {
    /// Builds the square on `edge` whose other two corners are `far`.
    ///
    /// `far` must be the result of [`Edge::far_corners`] for the same edge.
    pub(crate) fn from_edge(edge: &Edge, far: [Point; 2]) -> Self {
        Self::from_unsorted([edge.start(), edge.end(), far[0], far[1]])
    }

    fn from_unsorted(mut corners: [Point; 4]) -> Self {
        corners.sort_unstable();
        Self { corners }
    }

    /// Creates a square from four corners given in any order.
    ///
    /// The geometry is checked exactly: the four sides must have the same
    /// non-zero length and both diagonals must be twice as long (squared).
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::DuplicateCorner`] if a point appears twice, and
    /// [`SquareError::NotASquare`] if the points form some other shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use squares_core::{Point, Square, SquareError};
    ///
    /// // A square rotated by 45°.
    /// let square = Square::try_from_corners([
    ///     Point::new(0, 1),
    ///     Point::new(1, 0),
    ///     Point::new(2, 1),
    ///     Point::new(1, 2),
    /// ])?;
    /// assert!(!square.is_axis_aligned());
    /// assert_eq!(square.side_length_squared(), 2);
    ///
    /// // A rhombus is rejected.
    /// let err = Square::try_from_corners([
    ///     Point::new(0, 0),
    ///     Point::new(2, 1),
    ///     Point::new(4, 0),
    ///     Point::new(2, -1),
    /// ]);
    /// assert_eq!(err, Err(SquareError::NotASquare));
    /// # Ok::<(), SquareError>(())
    /// ```
    pub fn try_from_corners(corners: [Point; 4]) -> Result<Self, SquareError> {
        let square = Self::from_unsorted(corners);
        let c = &square.corners;
        if let Some(w) = c.windows(2).find(|w| w[0] == w[1]) {
            return Err(SquareError::DuplicateCorner(w[0]));
        }

        let mut distances = [
            c[0].distance_squared(c[1]),
            c[0].distance_squared(c[2]),
            c[0].distance_squared(c[3]),
            c[1].distance_squared(c[2]),
            c[1].distance_squared(c[3]),
            c[2].distance_squared(c[3]),
        ];
        distances.sort_unstable();
        let [s0, s1, s2, s3, d0, d1] = distances;
        let side = s0;
        let is_square = side > 0
            && s1 == side
            && s2 == side
            && s3 == side
            && d0 == d1
            && d0 == side * 2;
        if !is_square {
            return Err(SquareError::NotASquare);
        }
        Ok(square)
    }

    /// Returns the corners in canonical order (sorted by `x`, then `y`).
    #[must_use]
    pub const fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Returns `true` if `point` is one of the corners.
    #[must_use]
    pub fn contains_corner(&self, point: Point) -> bool {
        self.corners.binary_search(&point).is_ok()
    }

    /// Returns the offset from the first canonical corner to its nearest
    /// neighbor, which is always a side of the square.
    fn side(&self) -> Offset {
        let origin = self.corners[0];
        self.corners[1..]
            .iter()
            .map(|&corner| origin.offset_to(corner))
            .min_by_key(|offset| offset.length_squared())
            .unwrap_or(Offset::ZERO)
    }

    /// Returns the squared side length.
    #[must_use]
    pub fn side_length_squared(&self) -> u128 {
        self.side().length_squared()
    }

    /// Returns the area, which equals the squared side length.
    #[must_use]
    pub fn area(&self) -> u128 {
        self.side_length_squared()
    }

    /// Returns `true` if the sides are parallel to the coordinate axes.
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        let side = self.side();
        side.dx() == 0 || side.dy() == 0
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.corners;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

impl TryFrom<[Point; 4]> for Square {
    type Error = SquareError;

    fn try_from(corners: [Point; 4]) -> Result<Self, Self::Error> {
        Self::try_from_corners(corners)
    }
}

impl From<Square> for [Point; 4] {
    fn from(square: Square) -> Self {
        square.corners
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SquareRepr {
    corners: [Point; 4],
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = SquareError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Self::try_from_corners(repr.corners)
    }
}

#[cfg(feature = "serde")]
impl From<Square> for SquareRepr {
    fn from(square: Square) -> Self {
        Self {
            corners: square.corners,
        }
    }
}
