//! Candidate elimination strategies.
//!
//! Each strategy implements the [`Technique`] trait and narrows the candidate
//! sets of a [`Board`] in place. Strategies never add candidates, so every
//! application shrinks the board or leaves it unchanged.

use std::fmt::Debug;

use futoshiki_core::{Board, Line, RuleSet};

pub use self::{
    column_elimination::ColumnElimination, inequality_elimination::InequalityElimination,
    only_choice::OnlyChoice, row_elimination::RowElimination,
};
use crate::SolverError;

mod column_elimination;
mod inequality_elimination;
mod only_choice;
mod row_elimination;

/// Returns all available techniques.
///
/// The order is the one a propagation round applies them in: inequality
/// elimination, column elimination, row elimination, then only choice.
///
/// # Examples
///
/// ```
/// use futoshiki_solver::technique;
///
/// let names: Vec<_> = technique::all_techniques()
///     .iter()
///     .map(|t| t.name())
///     .collect();
/// assert_eq!(
///     names,
///     [
///         "inequality elimination",
///         "column elimination",
///         "row elimination",
///         "only choice"
///     ]
/// );
/// ```
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(InequalityElimination::new()),
        Box::new(ColumnElimination::new()),
        Box::new(RowElimination::new()),
        Box::new(OnlyChoice::new()),
    ]
}

/// A candidate elimination strategy.
///
/// Techniques are stateless; the same value can be applied to any number of
/// boards.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique to a board.
    ///
    /// # Arguments
    ///
    /// * `board` - The board to narrow
    /// * `rules` - The inequality rules of the puzzle
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one candidate set changed
    /// * `Ok(false)` - The board is unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if the technique detects a contradiction. The board
    /// may have been partially narrowed when that happens.
    fn apply(&self, board: &mut Board, rules: &RuleSet) -> Result<bool, SolverError>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Removes the values of the solved cells of `line` from its unsolved cells.
///
/// The solved values are collected before any cell is narrowed, so a cell
/// solved by this call only takes effect on the next call.
fn eliminate_solved_values(board: &mut Board, line: Line) -> Result<bool, SolverError> {
    let solved = board.solved_values(line)?;
    let mut changed = false;
    for cell in line.cells(board.dimension()) {
        if !board.is_cell_solved(cell)? {
            changed |= board.narrow(cell, board.get(cell) - solved);
        }
    }
    Ok(changed)
}
