//! Property tests for the square finder.

use std::collections::HashSet;

use proptest::prelude::*;
use squares_core::{Point, Square};
use squares_finder::{SquareFinder, SquareSet, find_squares};

/// Points on a small grid, so that random sets contain plenty of squares.
fn dense_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-4_i32..=4, -4_i32..=4).prop_map(Point::from), 0..max_len)
}

/// Checks every quadruple of distinct points.
fn brute_force(points: &[Point]) -> SquareSet {
    let distinct = points
        .iter()
        .copied()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let n = distinct.len();
    let mut squares = SquareSet::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    let corners = [distinct[a], distinct[b], distinct[c], distinct[d]];
                    if let Ok(square) = Square::try_from_corners(corners) {
                        squares.insert(square);
                    }
                }
            }
        }
    }
    squares
}

proptest! {
    #[test]
    fn prop_matches_brute_force(points in dense_points(16)) {
        prop_assert_eq!(find_squares(points.iter().copied()), brute_force(&points));
    }

    #[test]
    fn prop_parallel_matches_sequential(points in dense_points(40)) {
        let sequential = SquareFinder::new().find(points.iter().copied());
        let parallel = SquareFinder::parallel().find(points);
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn prop_idempotent(points in dense_points(30)) {
        let first = find_squares(points.iter().copied());
        let second = find_squares(points);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_permutation_invariant(
        (points, shuffled) in dense_points(30)
            .prop_flat_map(|points| (Just(points.clone()), Just(points).prop_shuffle()))
    ) {
        prop_assert_eq!(find_squares(points), find_squares(shuffled));
    }

    #[test]
    fn prop_duplicates_do_not_matter(
        points in dense_points(30),
        repeats in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let mut with_duplicates = points.clone();
        if !points.is_empty() {
            with_duplicates.extend(repeats.iter().map(|i| points[i.index(points.len())]));
        }
        prop_assert_eq!(find_squares(points), find_squares(with_duplicates));
    }

    #[test]
    fn prop_reported_squares_are_valid(points in dense_points(30)) {
        let members = points.iter().copied().collect::<HashSet<_>>();
        let squares = find_squares(points);
        let sorted = squares.to_sorted_vec();
        prop_assert_eq!(sorted.len(), squares.len());
        for square in sorted {
            prop_assert_eq!(Square::try_from_corners(*square.corners()), Ok(square));
            for corner in square.corners() {
                prop_assert!(members.contains(corner));
            }
        }
    }

    #[test]
    fn prop_fewer_than_four_points_is_empty(
        points in prop::collection::vec(any::<(i32, i32)>().prop_map(Point::from), 0..4)
    ) {
        prop_assert!(find_squares(points).is_empty());
    }

    #[test]
    fn prop_translated_square_is_found(
        x in -1_000_000_000_i32..1_000_000_000,
        y in -1_000_000_000_i32..1_000_000_000,
        dx in -1000_i32..1000,
        dy in -1000_i32..1000,
    ) {
        prop_assume!(dx != 0 || dy != 0);
        let a = Point::new(x, y);
        let b = Point::new(x + dx, y + dy);
        let c = Point::new(x + dx - dy, y + dy + dx);
        let d = Point::new(x - dy, y + dx);
        let squares = find_squares([a, b, c, d]);
        prop_assert_eq!(squares.len(), 1);
        let expected = Square::try_from_corners([a, b, c, d]).unwrap();
        prop_assert!(squares.contains(&expected));
    }

    #[test]
    fn prop_collinear_points_form_no_squares(
        start in (-1000_i32..1000, -1000_i32..1000),
        step in (-50_i32..50, -50_i32..50),
        len in 0_i32..30,
    ) {
        let points = (0..len).map(|i| Point::new(start.0 + i * step.0, start.1 + i * step.1));
        prop_assert!(find_squares(points).is_empty());
    }
}
