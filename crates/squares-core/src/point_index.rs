//! Membership index over a point snapshot.

use std::collections::HashSet;

use crate::{Edge, Point, Square, Turn};

/// A read-only membership index built from a snapshot of points.
///
/// Duplicate input entries collapse to one logical point. The index keeps its
/// own copy of the distinct coordinates in first-seen order, so it holds no
/// reference to the caller's collection.
///
/// # Examples
///
/// ```
/// use squares_core::{Edge, Point, PointIndex, Turn};
///
/// let index: PointIndex = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// assert_eq!(index.len(), 4);
/// assert_eq!(index.duplicates(), 1);
/// assert!(index.contains(Point::new(1, 1)));
///
/// let edge = Edge::new(Point::new(0, 0), Point::new(1, 0)).unwrap();
/// assert!(index.complete_square(&edge, Turn::CounterClockwise).is_some());
/// assert!(index.complete_square(&edge, Turn::Clockwise).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointIndex {
    members: HashSet<Point>,
    points: Vec<Point>,
    duplicates: usize,
}

impl PointIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point, returning `false` if it was already present.
    pub fn insert(&mut self, point: Point) -> bool {
        if self.members.insert(point) {
            self.points.push(point);
            true
        } else {
            self.duplicates += 1;
            false
        }
    }

    /// Returns the number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the index holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if `point` is a member.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(&point)
    }

    /// Returns the distinct points in the order they were first inserted.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns how many inserted entries repeated an earlier point.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Completes the square on the `turn` side of `edge`, if both of its far
    /// corners are members.
    ///
    /// The endpoints of `edge` are assumed to be members already.
    #[must_use]
    pub fn complete_square(&self, edge: &Edge, turn: Turn) -> Option<Square> {
        let far = edge.far_corners(turn)?;
        if far.iter().all(|&corner| self.contains(corner)) {
            Some(Square::from_edge(edge, far))
        } else {
            None
        }
    }
}

impl FromIterator<Point> for PointIndex {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl Extend<Point> for PointIndex {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.members.reserve(lower);
        self.points.reserve(lower);
        for point in iter {
            self.insert(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_and_duplicates() {
        let index: PointIndex = [(2, 2), (0, 0), (2, 2), (1, 1), (0, 0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(
            index.points(),
            &[Point::new(2, 2), Point::new(0, 0), Point::new(1, 1)]
        );
        assert_eq!(index.len(), 3);
        assert_eq!(index.duplicates(), 2);
        assert!(!index.contains(Point::new(2, 0)));
    }

    #[test]
    fn test_empty() {
        let index = PointIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.duplicates(), 0);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut index = PointIndex::new();
        assert!(index.insert(Point::new(5, 5)));
        assert!(!index.insert(Point::new(5, 5)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_complete_square_needs_both_corners() {
        let mut index: PointIndex = [(0, 0), (1, 0), (0, 1)].into_iter().map(Point::from).collect();
        let edge = Edge::new(Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(index.complete_square(&edge, Turn::CounterClockwise), None);

        index.insert(Point::new(1, 1));
        let square = index.complete_square(&edge, Turn::CounterClockwise).unwrap();
        assert_eq!(
            square.corners(),
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_complete_square_out_of_range() {
        let index: PointIndex = [(i32::MAX, 0), (i32::MAX, 1)]
            .into_iter()
            .map(Point::from)
            .collect();
        let edge = Edge::new(Point::new(i32::MAX, 0), Point::new(i32::MAX, 1)).unwrap();
        assert_eq!(index.complete_square(&edge, Turn::Clockwise), None);
        assert_eq!(index.complete_square(&edge, Turn::CounterClockwise), None);
    }
}
