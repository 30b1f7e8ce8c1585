use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal conditions of a `bstrings` run. Every variant ends the process with
/// a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Encode(#[from] bstrings::Error),
    #[error("cannot read '{}': {source}", .path.display())]
    UnreadableFile { path: PathBuf, source: io::Error },
    #[error("failed to read standard input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
