use clap::ValueEnum;
use futoshiki_core::{PuzzleDefinition, PuzzleParseError};

/// Sample puzzles bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BuiltinPuzzle {
    /// Givens in the left column and bottom row.
    One,
    /// Givens in the lower right.
    Two,
}

impl BuiltinPuzzle {
    pub(crate) fn source(self) -> &'static str {
        match self {
            Self::One => include_str!("../puzzles/one.txt"),
            Self::Two => include_str!("../puzzles/two.txt"),
        }
    }

    pub(crate) fn definition(self) -> Result<PuzzleDefinition, PuzzleParseError> {
        self.source().parse()
    }
}
