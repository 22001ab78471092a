use futoshiki_core::{Board, Line, RuleSet};

use super::BoxedTechnique;
use crate::{SolverError, technique::Technique};

const NAME: &str = "column elimination";

/// A technique that removes the values of solved cells from the rest of their
/// column.
///
/// This is [`RowElimination`](super::RowElimination) along columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnElimination;

impl ColumnElimination {
    /// Creates a new `ColumnElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        ColumnElimination
    }
}

impl Technique for ColumnElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
        let mut changed = false;
        for col in 0..board.dimension() {
            changed |= super::eliminate_solved_values(board, Line::Column { col })?;
        }
        Ok(changed)
    }
}
