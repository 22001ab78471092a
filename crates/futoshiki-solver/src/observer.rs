use futoshiki_core::{Board, RuleSet};

use crate::technique::Technique;

/// Read-only callbacks invoked while a [`PropagationSolver`] runs.
///
/// Observers see the board after each technique and after each completed
/// round, but only through shared references, so they cannot influence the
/// solve. All methods default to doing nothing; `()` is the no-op observer.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, Cell, RuleSet};
/// use futoshiki_solver::{PropagationSolver, SolveObserver};
///
/// #[derive(Default)]
/// struct RoundCounter(usize);
///
/// impl SolveObserver for RoundCounter {
///     fn on_round_finished(&mut self, _round: usize, _board: &Board, _rules: &RuleSet) {
///         self.0 += 1;
///     }
/// }
///
/// let solver = PropagationSolver::with_all_techniques();
/// let mut board = Board::new(3);
/// let mut stats = solver.new_stats();
/// let mut counter = RoundCounter::default();
///
/// solver.solve_with_stats(&mut board, &RuleSet::new(), &mut stats, &mut counter);
/// assert_eq!(counter.0, stats.rounds());
/// ```
///
/// [`PropagationSolver`]: crate::PropagationSolver
pub trait SolveObserver {
    /// Called after a technique has been applied without error.
    ///
    /// `changed` is what the technique reported.
    fn on_technique_applied(
        &mut self,
        technique: &dyn Technique,
        changed: bool,
        board: &Board,
        rules: &RuleSet,
    ) {
        let _ = (technique, changed, board, rules);
    }

    /// Called after every technique of a round has been applied.
    ///
    /// `round` is 1-based.
    fn on_round_finished(&mut self, round: usize, board: &Board, rules: &RuleSet) {
        let _ = (round, board, rules);
    }
}

impl SolveObserver for () {}

impl<O> SolveObserver for &mut O
where
    O: SolveObserver + ?Sized,
{
    fn on_technique_applied(
        &mut self,
        technique: &dyn Technique,
        changed: bool,
        board: &Board,
        rules: &RuleSet,
    ) {
        (**self).on_technique_applied(technique, changed, board, rules);
    }

    fn on_round_finished(&mut self, round: usize, board: &Board, rules: &RuleSet) {
        (**self).on_round_finished(round, board, rules);
    }
}
