//! Exact square detection over integer point sets.
//!
//! Given an unordered collection of [`Point`]s, this crate reports every
//! distinct square, axis-aligned or rotated, whose four corners all belong to
//! the collection.
//!
//! # Overview
//!
//! - [`find_squares`] / [`count_squares`]: one-call entry points
//! - [`SquareFinder`]: configurable search (sequential or parallel)
//! - [`FinderStats`]: counters describing what a search did
//! - [`SquareSet`]: the de-duplicated result
//! - [`testing`]: a fluent harness for asserting search results
//!
//! # Algorithm
//!
//! Enumerating corner quadruples is O(n⁴). Instead, every unordered pair of
//! distinct points is taken as one side of a candidate square. Rotating the
//! side's offset by a quarter turn in each direction yields the two squares
//! that can sit on it; a square exists when both far corners are members of
//! a hash-based [`PointIndex`]. This is O(n²) pairs times O(1) expected-time
//! lookups.
//!
//! Each square is rediscovered once per side. Squares are stored with their
//! corners in canonical order, so the result set absorbs the rediscoveries.
//!
//! Everything is integer arithmetic; there are no tolerances. Collinear
//! inputs produce nothing because no perpendicular offset lands back on the
//! line.
//!
//! [`Point`]: squares_core::Point
//! [`PointIndex`]: squares_core::PointIndex
//!
//! # Examples
//!
//! ```
//! use squares_core::Point;
//! use squares_finder::find_squares;
//!
//! // A unit square and a rotated square, plus a stray point.
//! let points = [
//!     (0, 0), (1, 0), (0, 1), (1, 1),
//!     (5, 6), (6, 5), (7, 6), (6, 7),
//!     (-7, 9),
//! ]
//! .map(Point::from);
//!
//! let squares = find_squares(points);
//! assert_eq!(squares.len(), 2);
//! assert_eq!(squares.iter().filter(|s| s.is_axis_aligned()).count(), 1);
//! ```

use squares_core::Point;

pub use self::{
    finder::{FinderStats, SquareFinder},
    square_set::SquareSet,
};

mod finder;
pub mod square_set;
pub mod testing;

/// Returns every distinct square whose corners all belong to `points`.
///
/// Runs a sequential [`SquareFinder`]. Duplicate points count once, and the
/// result does not depend on the input order. An empty input gives an empty
/// set.
///
/// # Examples
///
/// ```
/// use squares_core::Point;
/// use squares_finder::find_squares;
///
/// let squares = find_squares([(0, 0), (1, 0), (0, 1), (1, 1)].map(Point::from));
/// assert_eq!(squares.len(), 1);
///
/// assert!(find_squares(Vec::<Point>::new()).is_empty());
/// ```
pub fn find_squares<I>(points: I) -> SquareSet
where
    I: IntoIterator<Item = Point>,
{
    SquareFinder::new().find(points)
}

/// Returns the number of distinct squares whose corners all belong to
/// `points`.
///
/// # Examples
///
/// ```
/// use squares_core::Point;
/// use squares_finder::count_squares;
///
/// let lattice = (0..3).flat_map(|x| (0..3).map(move |y| Point::new(x, y)));
/// // Four unit squares, one 2x2 square, one rotated square.
/// assert_eq!(count_squares(lattice), 6);
/// ```
pub fn count_squares<I>(points: I) -> usize
where
    I: IntoIterator<Item = Point>,
{
    SquareFinder::new().count(points)
}
