//! Core data structures for square detection.
//!
//! This crate provides the exact, integer-only geometry used to find squares
//! in a set of points. The search itself lives in `squares-finder`; this crate
//! only knows how to describe points, edges and squares and how to look
//! points up.
//!
//! # Overview
//!
//! 1. **Geometry** - Integer points and the vectors between them
//!    - [`point`]: [`Point`], an `(x, y)` pair identified by value
//!    - [`offset`]: [`Offset`] displacements and quarter [`Turn`]s
//!    - [`edge`]: [`Edge`], a candidate side of a square
//!
//! 2. **Squares** - Canonical, de-duplicatable squares
//!    - [`square`]: [`Square`], four corners stored in sorted order
//!
//! 3. **Lookup** - Membership tests over a snapshot
//!    - [`point_index`]: [`PointIndex`], a hash-based membership index
//!
//! 4. **Input** - Reading point lists
//!    - [`point_list`]: [`parse_points`] for line-oriented text
//!
//! All arithmetic is exact. Offsets are computed in a wider integer type, so
//! coordinates anywhere in the `i32` range are handled without overflow.
//!
//! # Examples
//!
//! ```
//! use squares_core::{Edge, Point, PointIndex, Turn};
//!
//! let index: PointIndex = [(0, 1), (1, 0), (2, 1), (1, 2)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let edge = Edge::new(Point::new(0, 1), Point::new(1, 0)).unwrap();
//! let square = index.complete_square(&edge, Turn::CounterClockwise).unwrap();
//! assert!(!square.is_axis_aligned());
//! assert_eq!(square.area(), 2);
//! ```

pub mod edge;
pub mod offset;
pub mod point;
pub mod point_index;
pub mod point_list;
pub mod square;

// Re-export commonly used types
pub use self::{
    edge::Edge,
    offset::{Offset, Turn},
    point::{ParsePointError, Point},
    point_index::PointIndex,
    point_list::{ParsePointsError, parse_points},
    square::{Square, SquareError},
};
