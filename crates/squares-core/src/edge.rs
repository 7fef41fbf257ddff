//! Candidate square edges.

use crate::{Offset, Point, Turn};

/// A segment between two distinct points, considered as one side of a
/// candidate square.
///
/// The remaining two corners of a square on this edge are found by moving
/// both endpoints by the edge's offset rotated a quarter turn. Each turn
/// gives the square on one side of the edge.
///
/// # Examples
///
/// ```
/// use squares_core::{Edge, Point, Turn};
///
/// let edge = Edge::new(Point::new(0, 0), Point::new(1, 0)).unwrap();
/// assert_eq!(
///     edge.far_corners(Turn::CounterClockwise),
///     Some([Point::new(0, 1), Point::new(1, 1)])
/// );
/// assert_eq!(
///     edge.far_corners(Turn::Clockwise),
///     Some([Point::new(0, -1), Point::new(1, -1)])
/// );
///
/// // Coincident points do not form an edge.
/// assert!(Edge::new(Point::new(2, 2), Point::new(2, 2)).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    start: Point,
    end: Point,
    offset: Offset,
}

impl Edge {
    /// Creates an edge from `start` to `end`.
    ///
    /// Returns `None` if the two points coincide.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Option<Self> {
        let offset = Offset::between(start, end);
        if offset.is_zero() {
            return None;
        }
        Some(Self { start, end, offset })
    }

    /// Returns the start point.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Returns the offset from start to end.
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the two corners that complete a square on the `turn` side of
    /// this edge, as `[start + r, end + r]` where `r` is the rotated offset.
    ///
    /// Returns `None` if either corner falls outside the coordinate range.
    #[must_use]
    pub fn far_corners(&self, turn: Turn) -> Option<[Point; 2]> {
        let r = self.offset.rotated(turn);
        Some([self.start.checked_add(r)?, self.end.checked_add(r)?])
    }
}
