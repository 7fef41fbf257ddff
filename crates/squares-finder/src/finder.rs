use std::ops::AddAssign;

use rayon::prelude::*;
use squares_core::{Edge, Point, PointIndex, Turn};

use crate::SquareSet;

/// Statistics collected during a square search.
///
/// Counters accumulate across calls to [`SquareFinder::find_with_stats`], so
/// a single value can summarize several searches.
///
/// # Examples
///
/// ```
/// use squares_core::Point;
/// use squares_finder::{FinderStats, SquareFinder};
///
/// let points = [(0, 0), (1, 0), (0, 1), (1, 1), (1, 1)].map(Point::from);
///
/// let finder = SquareFinder::new();
/// let mut stats = FinderStats::new();
/// let squares = finder.find_with_stats(points, &mut stats);
///
/// assert_eq!(squares.len(), 1);
/// assert_eq!(stats.input_points(), 5);
/// assert_eq!(stats.distinct_points(), 4);
/// assert_eq!(stats.duplicate_points(), 1);
/// assert_eq!(stats.pairs_examined(), 6);
/// // Found once from each of the four sides.
/// assert_eq!(stats.completions(), 4);
/// assert_eq!(stats.rediscoveries(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderStats {
    input_points: usize,
    distinct_points: usize,
    pairs_examined: usize,
    completions: usize,
    squares: usize,
}

impl FinderStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many points were supplied, duplicates included.
    #[must_use]
    pub fn input_points(&self) -> usize {
        self.input_points
    }

    /// Returns how many distinct points were indexed.
    #[must_use]
    pub fn distinct_points(&self) -> usize {
        self.distinct_points
    }

    /// Returns how many supplied points repeated an earlier one.
    #[must_use]
    pub fn duplicate_points(&self) -> usize {
        self.input_points - self.distinct_points
    }

    /// Returns how many unordered point pairs were tested as edges.
    #[must_use]
    pub fn pairs_examined(&self) -> usize {
        self.pairs_examined
    }

    /// Returns how many edge/turn combinations completed a square,
    /// counting every rediscovery of the same square.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Returns how many distinct squares were reported.
    #[must_use]
    pub fn squares(&self) -> usize {
        self.squares
    }

    /// Returns how many completions were absorbed as duplicates.
    #[must_use]
    pub fn rediscoveries(&self) -> usize {
        self.completions - self.squares
    }
}

impl AddAssign for FinderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.input_points += rhs.input_points;
        self.distinct_points += rhs.distinct_points;
        self.pairs_examined += rhs.pairs_examined;
        self.completions += rhs.completions;
        self.squares += rhs.squares;
    }
}

/// Finds every square whose four corners belong to a point set.
///
/// Each unordered pair of distinct points is treated as a candidate edge. The
/// two squares that could sit on that edge, one per [`Turn`], are completed
/// by rotating the edge a quarter turn and looking the far corners up in a
/// [`PointIndex`]. A square is rediscovered once from each of its sides, and
/// the resulting [`SquareSet`] keeps it only once.
///
/// The search is O(n²) in the number of distinct points with O(n) extra
/// memory for the index, plus the result.
///
/// By default the search runs on the calling thread. [`SquareFinder::parallel`]
/// spreads the outer loop over the rayon thread pool; the result is the same.
///
/// # Examples
///
/// ```
/// use squares_core::Point;
/// use squares_finder::SquareFinder;
///
/// let points = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)].map(Point::from);
///
/// let squares = SquareFinder::new().find(points);
/// assert_eq!(squares.len(), 2);
///
/// let parallel = SquareFinder::parallel().find(points);
/// assert_eq!(squares, parallel);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareFinder {
    parallel: bool,
}

impl SquareFinder {
    /// Creates a finder that searches on the calling thread.
    #[must_use]
    pub const fn new() -> Self {
        Self { parallel: false }
    }

    /// Creates a finder that searches on the rayon thread pool.
    #[must_use]
    pub const fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Enables or disables the parallel search.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns `true` if the search runs on the rayon thread pool.
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Returns every distinct square formed by `points`.
    ///
    /// Duplicate points are treated as one point. The input order does not
    /// affect the result.
    pub fn find<I>(&self, points: I) -> SquareSet
    where
        I: IntoIterator<Item = Point>,
    {
        let mut stats = FinderStats::new();
        self.find_with_stats(points, &mut stats)
    }

    /// Returns the number of distinct squares formed by `points`.
    pub fn count<I>(&self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        self.find(points).len()
    }

    /// Returns every distinct square formed by `points`, adding search
    /// counters to `stats`.
    pub fn find_with_stats<I>(&self, points: I, stats: &mut FinderStats) -> SquareSet
    where
        I: IntoIterator<Item = Point>,
    {
        let index = points.into_iter().collect::<PointIndex>();
        self.find_in_index(&index, stats)
    }

    /// Returns every distinct square formed by the points of `index`, adding
    /// search counters to `stats`.
    ///
    /// Points the index dropped as duplicates still count as input points, so
    /// an index built up from several sources reports them all.
    ///
    /// # Examples
    ///
    /// ```
    /// use squares_core::{Point, PointIndex};
    /// use squares_finder::{FinderStats, SquareFinder};
    ///
    /// let mut index = PointIndex::new();
    /// index.extend([(0, 0), (1, 0), (0, 1)].map(Point::from));
    /// index.extend([(1, 0), (1, 1)].map(Point::from));
    ///
    /// let mut stats = FinderStats::new();
    /// let squares = SquareFinder::new().find_in_index(&index, &mut stats);
    /// assert_eq!(squares.len(), 1);
    /// assert_eq!(stats.input_points(), 5);
    /// assert_eq!(stats.duplicate_points(), 1);
    /// ```
    pub fn find_in_index(&self, index: &PointIndex, stats: &mut FinderStats) -> SquareSet {
        log::debug!(
            "indexed {} distinct points ({} duplicates dropped)",
            index.len(),
            index.duplicates()
        );

        let scan = if self.parallel {
            (0..index.len())
                .into_par_iter()
                .fold(Scan::default, |mut scan, i| {
                    scan.edges_from(index, i);
                    scan
                })
                .reduce(Scan::default, Scan::merge)
        } else {
            let mut scan = Scan::default();
            for i in 0..index.len() {
                scan.edges_from(index, i);
            }
            scan
        };

        let Scan {
            squares,
            pairs_examined,
            completions,
        } = scan;
        log::debug!(
            "found {} squares from {pairs_examined} pairs ({completions} completions)",
            squares.len()
        );

        *stats += FinderStats {
            input_points: index.len() + index.duplicates(),
            distinct_points: index.len(),
            pairs_examined,
            completions,
            squares: squares.len(),
        };
        squares
    }
}

/// Partial search state; one per worker in the parallel search.
#[derive(Debug, Default)]
struct Scan {
    squares: SquareSet,
    pairs_examined: usize,
    completions: usize,
}

impl Scan {
    /// Tests every edge from the `i`-th point to a later point.
    fn edges_from(&mut self, index: &PointIndex, i: usize) {
        let points = index.points();
        let start = points[i];
        for &end in &points[i + 1..] {
            self.pairs_examined += 1;
            let Some(edge) = Edge::new(start, end) else {
                continue;
            };
            for turn in Turn::ALL {
                if let Some(square) = index.complete_square(&edge, turn) {
                    self.completions += 1;
                    self.squares.insert(square);
                }
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        if self.squares.len() < other.squares.len() {
            return other.merge(self);
        }
        self.squares.extend(other.squares);
        self.pairs_examined += other.pairs_examined;
        self.completions += other.completions;
        self
    }
}
