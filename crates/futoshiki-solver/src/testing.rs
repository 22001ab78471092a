//! Test utilities for technique implementations.
//!
//! This module provides [`TechniqueTester`], a testing harness for verifying
//! that elimination strategies narrow the board as expected.
//!
//! # Example
//!
//! ```ignore
//! TechniqueTester::from_puzzle(
//!     "
//!     2 . .
//!     . . .
//!     . . .
//!     (0, 1) < (0, 2)
//!     ",
//! )
//! .apply_once(&RowElimination::new())
//! .assert_removed_exact(Cell::new(0, 1), [2]);
//! ```

use futoshiki_core::{Board, CandidateSet, Cell, PuzzleDefinition, Rule, RuleSet};

use crate::{SolverError, technique::Technique};

/// A test harness for verifying technique implementations.
///
/// `TechniqueTester` tracks the initial and current state of a board,
/// allowing you to apply techniques and assert that they produce the expected
/// changes.
///
/// Every application also checks that the technique only removed candidates
/// and that its return value matches whether the board changed.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: Board,
    current: Board,
    rules: RuleSet,
}

impl TechniqueTester {
    /// Creates a new tester from an initial board with no rules.
    pub fn new(initial: Board) -> Self {
        let current = initial.clone();
        Self {
            initial,
            current,
            rules: RuleSet::new(),
        }
    }

    /// Creates a new tester from a puzzle in the text format of
    /// [`PuzzleDefinition`].
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    pub fn from_puzzle(s: &str) -> Self {
        let puzzle: PuzzleDefinition = s.parse().unwrap();
        let (board, rules) = puzzle.build();
        Self {
            rules,
            ..Self::new(board)
        }
    }

    /// Appends rules to the ones the techniques see.
    #[must_use]
    pub fn with_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        for rule in rules {
            let rule = rule.into();
            self.rules.add_rule(rule.lower(), rule.upper());
        }
        self
    }

    /// Applies the technique once and returns self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.apply_checked(technique);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while self.apply_checked(technique) {}
        self
    }

    /// Applies the technique once, expecting it to fail, and returns the error.
    ///
    /// # Panics
    ///
    /// Panics if the technique succeeds.
    #[track_caller]
    pub fn apply_err<T>(mut self, technique: &T) -> SolverError
    where
        T: Technique,
    {
        let before = self.current.clone();
        let result = technique.apply(&mut self.current, &self.rules);
        Self::assert_only_shrunk(technique, &before, &self.current);
        match result {
            Ok(changed) => panic!(
                "Expected {} to fail, but it returned Ok({changed}) with board {:?}",
                technique.name(),
                self.current
            ),
            Err(err) => err,
        }
    }

    #[track_caller]
    fn apply_checked<T>(&mut self, technique: &T) -> bool
    where
        T: Technique,
    {
        let name = technique.name();
        let before = self.current.clone();
        let changed = technique.apply(&mut self.current, &self.rules).unwrap();
        Self::assert_only_shrunk(technique, &before, &self.current);
        assert_eq!(
            changed,
            before != self.current,
            "Expected {name} to report changed={} (before: {before:?}, after: {:?})",
            before != self.current,
            self.current
        );
        changed
    }

    #[track_caller]
    fn assert_only_shrunk<T>(technique: &T, before: &Board, after: &Board)
    where
        T: Technique,
    {
        let name = technique.name();
        for cell in before.cells() {
            let (old, new) = (before.get(cell), after.get(cell));
            assert!(
                new.is_subset(old),
                "Expected {name} to only remove candidates, but {cell} went from {old} to {new}"
            );
        }
    }

    /// Asserts that a cell was placed (solved) with the given value.
    ///
    /// This verifies that:
    /// - The cell was initially unsolved (had multiple candidates)
    /// - The cell is now solved (has exactly one candidate)
    /// - That candidate is the expected value
    ///
    /// # Panics
    ///
    /// Panics if the cell was not placed as expected.
    #[track_caller]
    pub fn assert_placed(self, cell: Cell, value: u8) -> Self {
        let initial = self.initial.get(cell);
        let current = self.current.get(cell);

        assert!(
            initial.len() > 1,
            "Expected initial cell at {cell} to be unsolved (>1 candidates), but had {} candidates: {initial}",
            initial.len()
        );
        assert_eq!(
            current.as_single(),
            Some(value),
            "Expected cell at {cell} to be solved with {value}, but candidates are: {current}"
        );

        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// Other candidates may also have been removed; this method only checks
    /// that the specified ones are gone.
    ///
    /// # Panics
    ///
    /// Panics if any of the values were not initially present, or are still
    /// present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, cell: Cell, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let values = CandidateSet::from_iter(values);
        let initial = self.initial.get(cell);
        let current = self.current.get(cell);
        assert_eq!(
            initial & values,
            values,
            "Expected initial candidates at {cell} to include {values}, but initial candidates are: {initial}"
        );
        assert!(
            (current & values).is_empty(),
            "Expected all of {values} to be removed from {cell}, but {current} still contains some: {}",
            current & values
        );
        self
    }

    /// Asserts that exactly the specified candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates don't exactly match the specified set.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, cell: Cell, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let values = CandidateSet::from_iter(values);
        let initial = self.initial.get(cell);
        let current = self.current.get(cell);
        let removed = initial - current;
        assert_eq!(
            removed, values,
            "Expected exactly {values} to be removed from {cell}, but removed candidates are: {removed} (initial: {initial}, current: {current})"
        );
        self
    }

    /// Asserts that a cell currently holds exactly the given candidates.
    ///
    /// # Panics
    ///
    /// Panics if the candidates differ.
    #[track_caller]
    pub fn assert_candidates<C>(self, cell: Cell, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let values = CandidateSet::from_iter(values);
        let current = self.current.get(cell);
        assert_eq!(
            current, values,
            "Expected candidates at {cell} to be {values}, but they are {current}"
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.get(cell);
        let current = self.current.get(cell);
        assert_eq!(
            initial, current,
            "Expected no change at {cell}, but candidates changed from {initial} to {current}"
        );
        self
    }

    /// Asserts that no cell of the board has changed.
    ///
    /// # Panics
    ///
    /// Panics if any cell differs from the initial state.
    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        assert_eq!(
            self.initial, self.current,
            "Expected the board to be unchanged"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::BoxedTechnique;

    // Mock technique for testing that always returns false (no change)
    #[derive(Debug)]
    struct NoOpTechnique;

    impl Technique for NoOpTechnique {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(NoOpTechnique)
        }

        fn apply(&self, _board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
            Ok(false)
        }
    }

    // Mock technique that solves (0, 0) with 1 if it is not already solved
    #[derive(Debug)]
    struct Place1At00;

    impl Technique for Place1At00 {
        fn name(&self) -> &'static str {
            "place-1-at-00"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(Place1At00)
        }

        fn apply(&self, board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
            Ok(board.narrow(Cell::new(0, 0), CandidateSet::from_elem(1)))
        }
    }

    // Mock technique that adds a candidate back
    #[derive(Debug)]
    struct GrowingTechnique;

    impl Technique for GrowingTechnique {
        fn name(&self) -> &'static str {
            "growing"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(GrowingTechnique)
        }

        fn apply(&self, board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
            board.set(Cell::new(0, 0), CandidateSet::full(board.dimension()));
            Ok(true)
        }
    }

    // Mock technique that claims progress without changing anything
    #[derive(Debug)]
    struct LyingTechnique;

    impl Technique for LyingTechnique {
        fn name(&self) -> &'static str {
            "lying"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(LyingTechnique)
        }

        fn apply(&self, _board: &mut Board, _rules: &RuleSet) -> Result<bool, SolverError> {
            Ok(true)
        }
    }

    #[test]
    fn test_from_puzzle_reads_givens_and_rules() {
        let tester = TechniqueTester::from_puzzle(
            "
            . 2
            . .
            (1, 0) > (1, 1)
            ",
        );
        assert_eq!(tester.initial.value_at(Cell::new(0, 1)), Some(2));
        assert_eq!(tester.rules.len(), 1);
    }

    #[test]
    fn test_no_op_passes_unchanged_assertions() {
        TechniqueTester::new(Board::new(3))
            .apply_once(&NoOpTechnique)
            .assert_no_change(Cell::new(0, 0))
            .assert_unchanged();
    }

    #[test]
    fn test_assert_placed_succeeds() {
        TechniqueTester::new(Board::new(3))
            .apply_once(&Place1At00)
            .assert_placed(Cell::new(0, 0), 1)
            .assert_removed_exact(Cell::new(0, 0), [2, 3])
            .assert_removed_includes(Cell::new(0, 0), [3])
            .assert_candidates(Cell::new(0, 0), [1]);
    }

    #[test]
    fn test_apply_until_stuck_stops() {
        TechniqueTester::new(Board::new(3))
            .apply_until_stuck(&Place1At00)
            .assert_placed(Cell::new(0, 0), 1);
    }

    #[test]
    #[should_panic(expected = "to be solved with 2")]
    fn test_assert_placed_fails_on_wrong_value() {
        TechniqueTester::new(Board::new(3))
            .apply_once(&Place1At00)
            .assert_placed(Cell::new(0, 0), 2);
    }

    #[test]
    #[should_panic(expected = "Expected no change")]
    fn test_assert_no_change_fails_on_change() {
        TechniqueTester::new(Board::new(3))
            .apply_once(&Place1At00)
            .assert_no_change(Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "to only remove candidates")]
    fn test_growing_technique_is_rejected() {
        let mut board = Board::new(3);
        board.seed(Cell::new(0, 0), 2);
        let _ = TechniqueTester::new(board).apply_once(&GrowingTechnique);
    }

    #[test]
    #[should_panic(expected = "to report changed=false")]
    fn test_lying_technique_is_rejected() {
        let _ = TechniqueTester::new(Board::new(3)).apply_once(&LyingTechnique);
    }

    #[test]
    #[should_panic(expected = "Expected no-op to fail")]
    fn test_apply_err_fails_on_success() {
        let _ = TechniqueTester::new(Board::new(3)).apply_err(&NoOpTechnique);
    }
}
