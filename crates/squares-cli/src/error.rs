//! Errors reported by the command-line tool.

use std::io;

use squares_core::ParsePointsError;

/// Any failure that ends a `squares` run.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum CliError {
    #[display("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[display("{path}: {source}")]
    Parse {
        path: String,
        source: ParsePointsError,
    },
    #[display("{path}: invalid JSON point list: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[display("failed to write output: {_0}")]
    Write(io::Error),
    #[display("failed to encode output: {_0}")]
    Encode(serde_json::Error),
}
