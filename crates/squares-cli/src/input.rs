//! Reading and importing point snapshots.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use squares_core::{Point, PointIndex, parse_points};

use crate::{Format, error::CliError};

/// Where a point list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Maps command-line arguments to sources; `-` means standard input, and
    /// no arguments at all means standard input only.
    pub(crate) fn from_args(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read_to_string(&self) -> Result<String, CliError> {
        let result = match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            Self::File(path) => fs::read_to_string(path),
        };
        result.map_err(|source| CliError::Read {
            path: self.name(),
            source,
        })
    }
}

/// Parses the contents of one source.
fn parse(content: &str, format: Format, name: &str) -> Result<Vec<Point>, CliError> {
    match format {
        Format::Text => parse_points(content).map_err(|source| CliError::Parse {
            path: name.to_owned(),
            source,
        }),
        Format::Json => serde_json::from_str(content).map_err(|source| CliError::Json {
            path: name.to_owned(),
            source,
        }),
    }
}

/// Imports every point from `sources` into one snapshot.
///
/// Points repeated within or across sources are kept once.
pub(crate) fn import(sources: &[Source], format: Format) -> Result<PointIndex, CliError> {
    let mut index = PointIndex::new();
    for source in sources {
        let name = source.name();
        let content = source.read_to_string()?;
        let points = parse(&content, format, &name)?;
        let before = index.len();
        let read = points.len();
        index.extend(points);
        log::debug!("{name}: read {read} points, {} new", index.len() - before);
    }
    log::info!(
        "imported {} points ({} duplicates skipped)",
        index.len(),
        index.duplicates()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_sources_from_args() {
        assert_eq!(Source::from_args(&[]), [Source::Stdin]);
        assert_eq!(
            Source::from_args(&[PathBuf::from("a.txt"), PathBuf::from("-")]),
            [Source::File(PathBuf::from("a.txt")), Source::Stdin]
        );
    }

    #[test]
    fn test_parse_text() {
        let points = parse("0 0\n1,1 # note\n", Format::Text, "t").unwrap();
        assert_eq!(points, [Point::new(0, 0), Point::new(1, 1)]);

        let err = parse("0 0\nbad\n", Format::Text, "points.txt").unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().starts_with("points.txt: line 2:"));
    }

    #[test]
    fn test_parse_json() {
        let points = parse(r#"[{"x": 1, "y": -2}, {"x": 3, "y": 4}]"#, Format::Json, "j").unwrap();
        assert_eq!(points, [Point::new(1, -2), Point::new(3, 4)]);

        let err = parse(r#"[{"x": 1}]"#, Format::Json, "j").unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn test_import_deduplicates_across_files() {
        let dir = env::temp_dir().join(format!("squares-cli-import-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let first = dir.join("first.txt");
        let second = dir.join("second.txt");
        fs::write(&first, "0 0\n1 0\n0 0\n").unwrap();
        fs::write(&second, "1 0\n0 1\n1 1\n").unwrap();

        let index = import(&[Source::File(first), Source::File(second)], Format::Text).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(index.duplicates(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_import_missing_file() {
        let missing = env::temp_dir().join("squares-cli-does-not-exist.txt");
        let err = import(&[Source::File(missing)], Format::Text).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
