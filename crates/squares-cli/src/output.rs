//! Rendering search results.

use std::io::Write;

use squares_finder::{FinderStats, SquareSet};

use crate::{Format, error::CliError};

#[derive(Debug, serde::Serialize)]
struct CountReport {
    count: usize,
}

/// Writes every square, one per line or as a JSON array, in canonical order.
pub(crate) fn write_squares<W>(
    out: &mut W,
    squares: &SquareSet,
    format: Format,
) -> Result<(), CliError>
where
    W: Write,
{
    let squares = squares.to_sorted_vec();
    match format {
        Format::Text => {
            for square in &squares {
                writeln!(out, "{square}").map_err(CliError::Write)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &squares).map_err(CliError::Encode)?;
            writeln!(out).map_err(CliError::Write)?;
        }
    }
    Ok(())
}

/// Writes only the number of squares.
pub(crate) fn write_count<W>(out: &mut W, count: usize, format: Format) -> Result<(), CliError>
where
    W: Write,
{
    match format {
        Format::Text => writeln!(out, "{count}").map_err(CliError::Write),
        Format::Json => {
            serde_json::to_writer(&mut *out, &CountReport { count }).map_err(CliError::Encode)?;
            writeln!(out).map_err(CliError::Write)
        }
    }
}

/// Writes a human-readable summary of the search counters.
pub(crate) fn write_stats<W>(out: &mut W, stats: &FinderStats) -> Result<(), CliError>
where
    W: Write,
{
    let lines = [
        ("input points", stats.input_points()),
        ("distinct points", stats.distinct_points()),
        ("pairs examined", stats.pairs_examined()),
        ("completions", stats.completions()),
        ("rediscoveries", stats.rediscoveries()),
        ("squares", stats.squares()),
    ];
    writeln!(out, "Stats:").map_err(CliError::Write)?;
    for (name, value) in lines {
        writeln!(out, "  {name}: {value}").map_err(CliError::Write)?;
    }
    Ok(())
}
