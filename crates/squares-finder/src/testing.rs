//! Test utilities for square searches.
//!
//! This module provides [`FinderTester`], a testing harness that runs both the
//! sequential and the parallel [`SquareFinder`] on a point set and offers
//! fluent assertions on the result.
//!
//! # Example
//!
//! ```
//! use squares_finder::testing::FinderTester;
//!
//! FinderTester::from_picture(
//!     "
//!     .##
//!     .##
//!     #..
//!     ",
//! )
//! .assert_count(1)
//! .assert_square([(1, 1), (2, 1), (1, 2), (2, 2)]);
//! ```

use squares_core::{Point, Square, parse_points};

use crate::{SquareFinder, SquareSet};

/// A test harness for verifying square searches.
///
/// Construction runs the search immediately, once sequentially and once in
/// parallel, and asserts that both agree. It also checks that every reported
/// square is geometrically valid and made of input points.
///
/// # Method Chaining
///
/// All assertion methods return `self`, enabling fluent method chaining for
/// readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct FinderTester {
    points: Vec<Point>,
    squares: SquareSet,
}

impl FinderTester {
    /// Runs the search on `points`.
    ///
    /// # Panics
    ///
    /// Panics if the sequential and parallel searches disagree, or if any
    /// reported square is invalid.
    #[track_caller]
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter().collect::<Vec<_>>();
        let squares = SquareFinder::new().find(points.iter().copied());
        let parallel = SquareFinder::parallel().find(points.iter().copied());
        assert_eq!(
            squares, parallel,
            "sequential and parallel searches disagree for {points:?}"
        );

        for square in &squares {
            let corners = *square.corners();
            assert_eq!(
                Square::try_from_corners(corners),
                Ok(*square),
                "reported square {square} is not valid"
            );
            for corner in corners {
                assert!(
                    points.contains(&corner),
                    "reported square {square} uses {corner}, which is not an input point"
                );
            }
        }

        Self { points, squares }
    }

    /// Runs the search on coordinate pairs.
    #[track_caller]
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self::new(coords.into_iter().map(Point::from))
    }

    /// Runs the search on a point list in the format accepted by
    /// [`parse_points`].
    ///
    /// # Panics
    ///
    /// Panics if the list cannot be parsed.
    #[track_caller]
    pub fn from_list(s: &str) -> Self {
        let points = parse_points(s).unwrap();
        Self::new(points)
    }

    /// Runs the search on points drawn as a picture.
    ///
    /// - `#` marks a point
    /// - `.` or `_` marks an empty cell
    /// - Whitespace inside a row is ignored
    ///
    /// Blank lines are skipped. The first column is `x = 0` and the bottom
    /// row is `y = 0`.
    ///
    /// # Panics
    ///
    /// Panics on any other character.
    #[track_caller]
    pub fn from_picture(s: &str) -> Self {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        let mut points = vec![];
        for (row, line) in rows.iter().enumerate() {
            let y = i32::try_from(rows.len() - 1 - row).unwrap();
            let cells = line.chars().filter(|c| !c.is_whitespace());
            for (x, cell) in cells.enumerate() {
                match cell {
                    '#' => points.push(Point::new(i32::try_from(x).unwrap(), y)),
                    '.' | '_' => {}
                    _ => panic!("unexpected character {cell:?} in picture row {row}"),
                }
            }
        }
        Self::new(points)
    }

    /// Returns the input points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the squares found.
    #[must_use]
    pub fn squares(&self) -> &SquareSet {
        &self.squares
    }

    /// Asserts that exactly `expected` squares were found.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    pub fn assert_count(self, expected: usize) -> Self {
        assert_eq!(
            self.squares.len(),
            expected,
            "expected {expected} squares, found {:?}",
            self.squares.to_sorted_vec()
        );
        self
    }

    /// Asserts that no square was found.
    ///
    /// # Panics
    ///
    /// Panics if any square was found.
    #[track_caller]
    pub fn assert_empty(self) -> Self {
        self.assert_count(0)
    }

    /// Asserts that the square with the given corners was found.
    ///
    /// Corners may be listed in any order.
    ///
    /// # Panics
    ///
    /// Panics if the corners do not form a square or the square was not found.
    #[track_caller]
    pub fn assert_square(self, corners: [(i32, i32); 4]) -> Self {
        let square = Self::square(corners);
        assert!(
            self.squares.contains(&square),
            "expected {square} among {:?}",
            self.squares.to_sorted_vec()
        );
        self
    }

    /// Asserts that the square with the given corners was not found.
    ///
    /// # Panics
    ///
    /// Panics if the corners do not form a square or the square was found.
    #[track_caller]
    pub fn assert_no_square(self, corners: [(i32, i32); 4]) -> Self {
        let square = Self::square(corners);
        assert!(!self.squares.contains(&square), "did not expect {square}");
        self
    }

    #[track_caller]
    fn square(corners: [(i32, i32); 4]) -> Square {
        match Square::try_from_corners(corners.map(Point::from)) {
            Ok(square) => square,
            Err(e) => panic!("{corners:?} is not a square: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list() {
        FinderTester::from_list(
            "
            # a square rotated by 45 degrees
            0 1
            1 0
            2 1
            1 2
            ",
        )
        .assert_count(1);
    }

    #[test]
    fn test_from_picture_coordinates() {
        let tester = FinderTester::from_picture(
            "
            #_.
            ..#
            ",
        );
        assert_eq!(tester.points(), &[Point::new(0, 1), Point::new(2, 0)]);
        assert!(tester.squares().is_empty());
    }

    #[test]
    #[should_panic(expected = "expected 2 squares")]
    fn test_assert_count_failure() {
        FinderTester::from_coords([(0, 0), (1, 0), (0, 1), (1, 1)]).assert_count(2);
    }

    #[test]
    #[should_panic(expected = "is not a square")]
    fn test_assert_square_rejects_non_square() {
        FinderTester::from_coords([(0, 0)]).assert_square([(0, 0), (2, 0), (0, 1), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "unexpected character")]
    fn test_from_picture_rejects_unknown_cell() {
        let _ = FinderTester::from_picture("#x#");
    }
}
