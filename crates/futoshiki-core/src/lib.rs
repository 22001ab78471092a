//! Core data structures for Futoshiki puzzles.
//!
//! A Futoshiki puzzle is an N×N Latin square with extra strict inequalities
//! between pairs of cells. This crate provides the types shared by the solver
//! and the command line front end:
//!
//! - [`candidate_set`]: [`CandidateSet`], the values still possible for a cell
//! - [`cell`]: [`Cell`] coordinates and [`Line`]s (rows and columns)
//! - [`rule`]: inequality [`Rule`]s and the ordered [`RuleSet`]
//! - [`board`]: [`Board`], one candidate set per cell, with solved-state and
//!   consistency queries
//! - [`puzzle`]: [`PuzzleDefinition`], the givens and rules of a puzzle and
//!   its text format
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Board, CandidateSet, Cell, RuleSet};
//!
//! let mut board = Board::new(4);
//! board.seed(Cell::new(0, 0), 3);
//!
//! let mut rules = RuleSet::new();
//! rules.add_rule(Cell::new(0, 0), Cell::new(0, 1));
//!
//! assert_eq!(board.get(Cell::new(0, 0)), CandidateSet::from_elem(3));
//! assert_eq!(rules.applicable_rules(Cell::new(0, 1)).count(), 1);
//! assert!(!board.is_board_solved()?);
//! # Ok::<(), futoshiki_core::ConsistencyError>(())
//! ```

pub mod board;
pub mod candidate_set;
pub mod cell;
mod error;
pub mod puzzle;
pub mod rule;

pub use self::{
    board::Board,
    candidate_set::CandidateSet,
    cell::{Cell, Line, LineCells},
    error::ConsistencyError,
    puzzle::{PuzzleDefinition, PuzzleParseError, PuzzleParseErrorKind},
    rule::{Rule, RuleSet},
};
