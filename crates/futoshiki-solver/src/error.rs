use futoshiki_core::{CandidateSet, Cell, ConsistencyError, Line};

/// A contradiction detected while propagating candidates.
///
/// Either variant means the puzzle, as seeded, has no consistent solution
/// reachable from the current board. Both are terminal for a solve.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// The board reached an inconsistent state.
    #[display("inconsistency detected: {_0}")]
    Inconsistent(#[from] ConsistencyError),
    /// More than one value can only be placed at the same cell of a line.
    #[display("{cell} is the only place in {line} for each of {candidates}")]
    AmbiguousUniqueChoice {
        /// The cell holding the values.
        cell: Cell,
        /// The row or column that was scanned.
        line: Line,
        /// The values found nowhere else on the line.
        candidates: CandidateSet,
    },
}

impl SolverError {
    /// Returns the cell the contradiction was detected at, if there is one.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Self::Inconsistent(err) => err.cell(),
            Self::AmbiguousUniqueChoice { cell, .. } => Some(*cell),
        }
    }
}
