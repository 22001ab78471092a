//! Board-wide candidate tracking.
//!
//! This module provides [`Board`], which holds one [`CandidateSet`] per cell
//! of an N×N Futoshiki grid.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Board, Cell, CandidateSet};
//!
//! let mut board = Board::new(5);
//! board.seed(Cell::new(0, 0), 2);
//!
//! assert!(board.is_cell_solved(Cell::new(0, 0))?);
//! assert!(!board.is_cell_solved(Cell::new(0, 1))?);
//! assert_eq!(board.row_candidates(0, 1), CandidateSet::full(5));
//! # Ok::<(), futoshiki_core::ConsistencyError>(())
//! ```

use std::{
    fmt::{self, Debug},
    ops::Index,
};

use crate::{CandidateSet, Cell, ConsistencyError, Line, RuleSet};

/// Candidate sets for every cell of an N×N board.
///
/// A fresh board allows every value `1..=N` in every cell. Solving only ever
/// removes candidates; a cell is *solved* once a single candidate remains.
///
/// Cells are stored row-major in a flat vector.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dimension: u8,
    cells: Vec<CandidateSet>,
}

impl Board {
    /// The largest supported dimension.
    pub const MAX_DIMENSION: u8 = CandidateSet::MAX_VALUE;

    /// Creates a board whose cells all hold the candidates `{1..=dimension}`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is not in the range `1..=MAX_DIMENSION`. The
    /// upper limit comes from the 16-bit candidate mask, so wider boards are
    /// not supported at all; parse puzzle text with
    /// [`PuzzleDefinition`](crate::PuzzleDefinition) to get an error instead.
    #[must_use]
    pub fn new(dimension: u8) -> Self {
        let full = CandidateSet::full(dimension);
        let len = usize::from(dimension) * usize::from(dimension);
        Self {
            dimension,
            cells: vec![full; len],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub const fn dimension(&self) -> u8 {
        self.dimension
    }

    #[track_caller]
    fn index_of(&self, cell: Cell) -> usize {
        assert!(
            cell.row() < self.dimension && cell.col() < self.dimension,
            "Cell {cell} is out of bounds for a {0}x{0} board",
            self.dimension
        );
        usize::from(cell.row()) * usize::from(self.dimension) + usize::from(cell.col())
    }

    /// Returns `true` if the cell lies on the board.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.dimension && cell.col() < self.dimension
    }

    /// Returns the candidates of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> CandidateSet {
        self.cells[self.index_of(cell)]
    }

    /// Replaces the candidates of a cell.
    ///
    /// While solving, callers must only ever pass a subset of the current
    /// candidates.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn set(&mut self, cell: Cell, candidates: CandidateSet) {
        let index = self.index_of(cell);
        self.cells[index] = candidates;
    }

    /// Narrows the candidates of a cell to `candidates`.
    ///
    /// Returns `true` if the cell changed.
    ///
    /// This is how elimination strategies write to the board; the new set must
    /// be a subset of the current one.
    pub fn narrow(&mut self, cell: Cell, candidates: CandidateSet) -> bool {
        let index = self.index_of(cell);
        let current = &mut self.cells[index];
        debug_assert!(
            candidates.is_subset(*current),
            "narrowing {cell} from {current:?} to {candidates:?} would add candidates"
        );
        if *current == candidates {
            return false;
        }
        *current = candidates;
        true
    }

    /// Sets a cell to the single candidate `value` (an initial clue).
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or `value` is not in `1..=N`.
    pub fn seed(&mut self, cell: Cell, value: u8) {
        assert!(
            (1..=self.dimension).contains(&value),
            "Value must be between 1 and {}, got {value}",
            self.dimension
        );
        self.set(cell, CandidateSet::from_elem(value));
    }

    /// Returns the solved value of a cell, or `None` if it is not solved.
    #[must_use]
    pub fn value_at(&self, cell: Cell) -> Option<u8> {
        self.get(cell).as_single()
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Cell::new(row, col)))
    }

    /// Returns all rows followed by all columns of the board.
    pub fn lines(&self) -> impl Iterator<Item = Line> + use<> {
        Line::all(self.dimension)
    }

    /// Returns the union of the candidates on a line, skipping one cell.
    #[must_use]
    pub fn line_candidates(&self, line: Line, excluding: Cell) -> CandidateSet {
        line.cells(self.dimension)
            .filter(|&cell| cell != excluding)
            .fold(CandidateSet::EMPTY, |acc, cell| acc | self.get(cell))
    }

    /// Returns the union of the candidates in a row, skipping one column.
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_core::{Board, Cell, CandidateSet};
    ///
    /// let mut board = Board::new(3);
    /// board.seed(Cell::new(0, 0), 1);
    /// board.seed(Cell::new(0, 1), 2);
    ///
    /// assert_eq!(board.row_candidates(0, 2), CandidateSet::from_iter([1, 2]));
    /// ```
    #[must_use]
    pub fn row_candidates(&self, row: u8, excluding_col: u8) -> CandidateSet {
        self.line_candidates(Line::Row { row }, Cell::new(row, excluding_col))
    }

    /// Returns the union of the candidates in a column, skipping one row.
    #[must_use]
    pub fn column_candidates(&self, col: u8, excluding_row: u8) -> CandidateSet {
        self.line_candidates(Line::Column { col }, Cell::new(excluding_row, col))
    }

    /// Returns the union of the values of solved cells on a line.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::EmptyCandidateSet`] if a cell on the line
    /// has no candidates.
    pub fn solved_values(&self, line: Line) -> Result<CandidateSet, ConsistencyError> {
        let mut solved = CandidateSet::EMPTY;
        for cell in line.cells(self.dimension) {
            if self.is_cell_solved(cell)? {
                solved |= self.get(cell);
            }
        }
        Ok(solved)
    }

    /// Returns `true` if exactly one candidate remains at the cell.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::EmptyCandidateSet`] if the cell has no
    /// candidates; an empty cell is never reported as merely unsolved.
    pub fn is_cell_solved(&self, cell: Cell) -> Result<bool, ConsistencyError> {
        match self.get(cell).len() {
            0 => Err(ConsistencyError::EmptyCandidateSet { cell }),
            len => Ok(len == 1),
        }
    }

    /// Returns `true` if every cell is solved.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::EmptyCandidateSet`] for the first empty
    /// cell in row-major order, even if an unsolved cell precedes it.
    pub fn is_board_solved(&self) -> Result<bool, ConsistencyError> {
        let mut solved = true;
        for cell in self.cells() {
            solved &= self.is_cell_solved(cell)?;
        }
        Ok(solved)
    }

    /// Checks that the board has no visible contradiction.
    ///
    /// The board is consistent if:
    ///
    /// - every cell has at least one candidate
    /// - no value is solved twice in the same row or column
    /// - every rule whose endpoints are both solved holds
    ///
    /// Unlike [`is_board_solved`](Self::is_board_solved), this does not require
    /// all cells to be solved.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn check_consistency(&self, rules: &RuleSet) -> Result<(), ConsistencyError> {
        for cell in self.cells() {
            self.is_cell_solved(cell)?;
        }
        for line in self.lines() {
            let mut seen = CandidateSet::EMPTY;
            for cell in line.cells(self.dimension) {
                if let Some(value) = self.value_at(cell)
                    && !seen.insert(value)
                {
                    return Err(ConsistencyError::DuplicateValue { line, value });
                }
            }
        }
        for &rule in rules {
            if let (Some(lower), Some(upper)) =
                (self.value_at(rule.lower()), self.value_at(rule.upper()))
                && !rule.is_satisfied_by(lower, upper)
            {
                return Err(ConsistencyError::RuleViolated { rule });
            }
        }
        Ok(())
    }
}

impl Index<Cell> for Board {
    type Output = CandidateSet;

    fn index(&self, cell: Cell) -> &CandidateSet {
        &self.cells[self.index_of(cell)]
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = usize::from(self.dimension);
        let mut list = f.debug_list();
        for row in self.cells.chunks(dimension) {
            list.entry(&row);
        }
        list.finish()
    }
}
