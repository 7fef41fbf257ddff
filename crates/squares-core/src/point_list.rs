//! Line-oriented point lists.

use crate::{ParsePointError, Point};

/// Error returned by [`parse_points`], pointing at the offending line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {source}")]
pub struct ParsePointsError {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong on that line.
    pub source: ParsePointError,
}

/// Parses a list of points, one per line.
///
/// Blank lines are skipped and `#` starts a comment that runs to the end of
/// the line. Each remaining line is parsed with the [`Point`] `FromStr`
/// implementation.
///
/// # Errors
///
/// Returns the first line that does not hold a valid point.
///
/// # Examples
///
/// ```
/// use squares_core::{Point, parse_points};
///
/// let points = parse_points(
///     "
///     0 0   # unit square
///     1,0
///     (0, 1)
///     1 1   # top right
///     ",
/// )?;
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[3], Point::new(1, 1));
/// # Ok::<(), squares_core::ParsePointsError>(())
/// ```
pub fn parse_points(s: &str) -> Result<Vec<Point>, ParsePointsError> {
    let mut points = vec![];
    for (i, line) in s.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);
        if content.trim().is_empty() {
            continue;
        }
        let point = content.parse().map_err(|source| ParsePointsError {
            line: i + 1,
            source,
        })?;
        points.push(point);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_points(""), Ok(vec![]));
        assert_eq!(parse_points("\n  \n# nothing here\n"), Ok(vec![]));
    }

    #[test]
    fn test_reports_line_number() {
        let err = parse_points("0 0\n\n1 1\n1 x\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(matches!(err.source, ParsePointError::InvalidCoordinate(_)));
        assert!(err.to_string().starts_with("line 4: invalid coordinate"));

        let err = parse_points("# header\n7\n").unwrap_err();
        assert_eq!(
            err,
            ParsePointsError {
                line: 2,
                source: ParsePointError::MissingCoordinate,
            }
        );
    }

    #[test]
    fn test_keeps_duplicates() {
        let points = parse_points("1 1\n1,1\n").unwrap();
        assert_eq!(points, [Point::new(1, 1), Point::new(1, 1)]);
    }
}
