use futoshiki_core::{Board, Line, RuleSet};

use super::BoxedTechnique;
use crate::{SolverError, technique::Technique};

const NAME: &str = "row elimination";

/// A technique that removes the values of solved cells from the rest of their
/// row.
///
/// For every row, the values of its solved cells are collected first; each
/// unsolved cell of the row then loses those values. Solved cells are never
/// touched.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, CandidateSet, Cell, RuleSet};
/// use futoshiki_solver::technique::{RowElimination, Technique};
///
/// let mut board = Board::new(5);
/// board.seed(Cell::new(0, 0), 2);
///
/// let changed = RowElimination::new().apply(&mut board, &RuleSet::new())?;
/// assert!(changed);
/// assert_eq!(board.get(Cell::new(0, 3)), CandidateSet::from_iter([1, 3, 4, 5]));
/// # Ok::<(), futoshiki_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RowElimination;

impl RowElimination {
    /// Creates a new `RowElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        RowElimination
    }
}

impl Technique for RowElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
        let mut changed = false;
        for row in 0..board.dimension() {
            changed |= super::eliminate_solved_values(board, Line::Row { row })?;
        }
        Ok(changed)
    }
}
