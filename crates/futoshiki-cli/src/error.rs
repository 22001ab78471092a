use std::{io, path::PathBuf};

use futoshiki_core::PuzzleParseError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to write output: {_0}")]
    Write(#[from] io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(#[from] PuzzleParseError),
}
