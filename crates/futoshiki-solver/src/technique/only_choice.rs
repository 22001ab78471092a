use futoshiki_core::{Board, Cell, ConsistencyError, Line, RuleSet};

use super::BoxedTechnique;
use crate::{SolverError, technique::Technique};

const NAME: &str = "only choice";

/// A technique that places values which fit in only one cell of a line.
///
/// Cells are visited in row-major order. For each cell, the candidates that
/// no other cell of its row can take are computed; if there is exactly one,
/// the cell is collapsed to it. The same check then runs against the cell's
/// column, using the possibly collapsed cell.
///
/// Two or more such values at the same cell cannot all be placed, which is
/// reported as [`SolverError::AmbiguousUniqueChoice`]. A cell with no
/// candidates is reported as [`ConsistencyError::EmptyCandidateSet`].
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, CandidateSet, Cell, RuleSet};
/// use futoshiki_solver::technique::{OnlyChoice, Technique};
///
/// let mut board = Board::new(3);
/// board.set(Cell::new(0, 1), CandidateSet::from_iter([1, 2]));
/// board.set(Cell::new(0, 2), CandidateSet::from_iter([1, 2]));
///
/// OnlyChoice::new().apply(&mut board, &RuleSet::new())?;
/// assert_eq!(board.value_at(Cell::new(0, 0)), Some(3));
/// # Ok::<(), futoshiki_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice;

impl OnlyChoice {
    /// Creates a new `OnlyChoice` technique.
    #[must_use]
    pub const fn new() -> Self {
        OnlyChoice
    }

    fn apply_line(board: &mut Board, cell: Cell, line: Line) -> Result<bool, SolverError> {
        let candidates = board.get(cell);
        if candidates.is_empty() {
            return Err(ConsistencyError::EmptyCandidateSet { cell }.into());
        }
        let unique = candidates - board.line_candidates(line, cell);
        match unique.len() {
            0 => Ok(false),
            1 => Ok(board.narrow(cell, unique)),
            _ => Err(SolverError::AmbiguousUniqueChoice {
                cell,
                line,
                candidates: unique,
            }),
        }
    }
}

impl Technique for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
        let mut changed = false;
        for cell in board.cells() {
            changed |= Self::apply_line(board, cell, cell.row_line())?;
            changed |= Self::apply_line(board, cell, cell.column_line())?;
        }
        Ok(changed)
    }
}
