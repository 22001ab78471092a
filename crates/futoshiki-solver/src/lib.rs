//! Candidate propagation solver for Futoshiki puzzles.
//!
//! The solver narrows the candidate sets of a [`Board`](futoshiki_core::Board)
//! with four elimination strategies, applied in rounds until the board is
//! solved, stops changing, or turns out to be contradictory:
//!
//! - [`technique::InequalityElimination`]: bounds both cells of every rule
//! - [`technique::ColumnElimination`]: removes solved values from their column
//! - [`technique::RowElimination`]: removes solved values from their row
//! - [`technique::OnlyChoice`]: places values that fit only one cell of a line
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Board, Cell, RuleSet};
//! use futoshiki_solver::SolveOutcome;
//!
//! let mut board = Board::new(3);
//! board.seed(Cell::new(0, 0), 1);
//! board.seed(Cell::new(1, 1), 1);
//!
//! let mut rules = RuleSet::new();
//! rules.add_rule(Cell::new(1, 0), Cell::new(0, 1));
//!
//! match futoshiki_solver::run(board, &rules) {
//!     SolveOutcome::Solved(board) => assert_eq!(board.value_at(Cell::new(2, 2)), Some(1)),
//!     outcome => panic!("unexpected outcome: {outcome:?}"),
//! }
//! ```

pub use self::{error::*, observer::*, propagation_solver::*};

mod error;
mod observer;
mod propagation_solver;
pub mod technique;

#[cfg(test)]
mod testing;
