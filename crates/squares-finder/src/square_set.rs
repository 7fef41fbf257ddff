//! De-duplicated collections of squares.

use std::collections::{HashSet, hash_set};

use squares_core::Square;

/// A set of distinct squares.
///
/// Each square appears at most once no matter how many times it was
/// discovered. Equality is set equality, so two results compare equal
/// regardless of the order in which their squares were found.
///
/// # Examples
///
/// ```
/// use squares_core::{Point, Square};
/// use squares_finder::SquareSet;
///
/// let square = Square::try_from_corners([
///     Point::new(0, 0),
///     Point::new(1, 0),
///     Point::new(0, 1),
///     Point::new(1, 1),
/// ])?;
///
/// let mut set = SquareSet::new();
/// assert!(set.insert(square));
/// assert!(!set.insert(square));
/// assert_eq!(set.len(), 1);
/// # Ok::<(), squares_core::SquareError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquareSet {
    squares: HashSet<Square>,
}

impl SquareSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns `true` if the set holds no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns `true` if `square` is in the set.
    #[must_use]
    pub fn contains(&self, square: &Square) -> bool {
        self.squares.contains(square)
    }

    /// Adds a square, returning `false` if it was already present.
    pub fn insert(&mut self, square: Square) -> bool {
        self.squares.insert(square)
    }

    /// Iterates over the squares in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.squares.iter(),
        }
    }

    /// Returns the squares sorted by their canonical corners.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Square> {
        let mut squares = self.squares.iter().copied().collect::<Vec<_>>();
        squares.sort_unstable();
        squares
    }
}

/// Iterator over the squares of a [`SquareSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, Square>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a Square;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = hash_set::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}

impl Extend<Square> for SquareSet {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        self.squares.extend(iter);
    }
}
