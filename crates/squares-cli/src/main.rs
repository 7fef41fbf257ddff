//! Command-line front end for square detection.
//!
//! Reads one or more point snapshots, imports them into a single set of
//! distinct points, and prints every square whose corners are in the set.
//!
//! # Usage
//!
//! ```sh
//! squares points.txt
//! ```
//!
//! Several inputs are merged, and repeated points are kept once. `-` (or no
//! argument at all) reads standard input:
//!
//! ```sh
//! cat extra.txt | squares points.txt -
//! ```
//!
//! Text input has one point per line (`x y`, `x,y` or `(x, y)`), with `#`
//! comments. JSON input is an array of `{"x": .., "y": ..}` objects:
//!
//! ```sh
//! squares --input-format json --output-format json points.json
//! ```
//!
//! Print only the number of squares, search in parallel, and show counters:
//!
//! ```sh
//! RUST_LOG=info squares --count --parallel --stats points.txt
//! ```

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use squares_finder::{FinderStats, SquareFinder};

use crate::{error::CliError, input::Source};

mod error;
mod input;
mod output;

/// Serialization format for points and squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Point files to read. `-` reads standard input, which is also the default.
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Format of the input files.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    input_format: Format,

    /// Format of the output.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output_format: Format,

    /// Print only the number of squares.
    #[arg(short, long)]
    count: bool,

    /// Search on all available cores.
    #[arg(short, long)]
    parallel: bool,

    /// Print search counters to standard error.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(e) = run(&args, &mut out, &mut io::stderr()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Imports the inputs, searches them, and writes the result to `out`.
///
/// Counters go to `err` when `--stats` is given.
fn run<O, E>(args: &Args, out: &mut O, err: &mut E) -> Result<(), CliError>
where
    O: Write,
    E: Write,
{
    let sources = Source::from_args(&args.inputs);
    let index = input::import(&sources, args.input_format)?;

    let finder = SquareFinder::new().with_parallel(args.parallel);
    let mut stats = FinderStats::new();
    let squares = finder.find_in_index(&index, &mut stats);
    log::info!("found {} squares", squares.len());

    if args.count {
        output::write_count(out, squares.len(), args.output_format)?;
    } else {
        output::write_squares(out, &squares, args.output_format)?;
    }
    out.flush().map_err(CliError::Write)?;

    if args.stats {
        output::write_stats(err, &stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use clap::CommandFactory as _;

    use super::*;

    fn run_to_strings(args: &[&str]) -> (String, String) {
        let args = Args::try_parse_from(args.iter().copied()).unwrap();
        let mut out = vec![];
        let mut err = vec![];
        run(&args, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["squares"]).unwrap();
        assert!(args.inputs.is_empty());
        assert_eq!(args.input_format, Format::Text);
        assert_eq!(args.output_format, Format::Text);
        assert!(!args.count && !args.parallel && !args.stats);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "squares",
            "--input-format",
            "json",
            "--output-format",
            "json",
            "-c",
            "-p",
            "--stats",
            "a.json",
            "-",
        ])
        .unwrap();
        assert_eq!(args.inputs, [PathBuf::from("a.json"), PathBuf::from("-")]);
        assert_eq!(args.input_format, Format::Json);
        assert_eq!(args.output_format, Format::Json);
        assert!(args.count && args.parallel && args.stats);

        assert!(Args::try_parse_from(["squares", "--input-format", "xml"]).is_err());
    }

    #[test]
    fn test_stats_count_repeated_input_points() {
        let dir = env::temp_dir().join(format!("squares-cli-run-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("points.txt");
        fs::write(&path, "0 0\n1 0\n0 1\n1 1\n0 0\n1 1\n").unwrap();
        let path = path.to_str().unwrap();

        let (out, err) = run_to_strings(&["squares", "--stats", path]);
        assert_eq!(out, "[(0, 0), (0, 1), (1, 0), (1, 1)]\n");
        assert!(err.starts_with("Stats:\n"));
        assert!(err.contains("  input points: 6\n"));
        assert!(err.contains("  distinct points: 4\n"));
        assert!(err.contains("  squares: 1\n"));

        let (out, err) = run_to_strings(&["squares", "-c", "-p", path]);
        assert_eq!(out, "1\n");
        assert!(err.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }
}
