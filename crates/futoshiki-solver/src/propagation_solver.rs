use futoshiki_core::{Board, RuleSet};

use crate::{
    SolveObserver, SolverError,
    technique::{self, BoxedTechnique},
};

/// Statistics collected during a propagation solve.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, RuleSet};
/// use futoshiki_solver::PropagationSolver;
///
/// let solver = PropagationSolver::with_all_techniques();
/// let mut board = Board::new(4);
///
/// let (_state, stats) = solver.solve(&mut board, &RuleSet::new());
/// assert_eq!(stats.rounds(), 1);
///
/// for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
///     println!("{}: changed the board in {count} rounds", technique.name());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStats {
    applications: Vec<usize>,
    rounds: usize,
}

impl SolverStats {
    /// Returns, per technique in solver order, the number of rounds in which
    /// it changed the board.
    ///
    /// Includes techniques that never changed anything with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns `true` if any technique changed the board at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.applications.iter().any(|&n| n > 0)
    }
}

/// The state of a solve.
///
/// A solve starts [`Unsolved`](Self::Unsolved); every other state is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveState {
    /// Propagation is still making progress.
    Unsolved,
    /// Every cell holds a single value and the board is consistent.
    Solved,
    /// A full round changed nothing and the board is not solved.
    Stalled,
    /// A contradiction was found.
    Contradicted(SolverError),
}

impl SolveState {
    /// Returns `true` if no further round will be run from this state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_unsolved()
    }
}

/// The result of [`PropagationSolver::run`], owning the final board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// The board is solved.
    Solved(Board),
    /// Propagation stopped making progress before the board was solved.
    Stalled(Board),
    /// A contradiction was found.
    Contradicted {
        /// What went wrong.
        error: SolverError,
        /// The board as it was when the contradiction was found.
        board: Board,
    },
}

impl SolveOutcome {
    /// Returns the final board.
    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            Self::Solved(board) | Self::Stalled(board) | Self::Contradicted { board, .. } => board,
        }
    }

    /// Consumes the outcome, returning the final board.
    #[must_use]
    pub fn into_board(self) -> Board {
        match self {
            Self::Solved(board) | Self::Stalled(board) | Self::Contradicted { board, .. } => board,
        }
    }

    /// Returns the contradiction, if one was found.
    #[must_use]
    pub fn error(&self) -> Option<&SolverError> {
        match self {
            Self::Contradicted { error, .. } => Some(error),
            Self::Solved(_) | Self::Stalled(_) => None,
        }
    }
}

/// A solver that narrows a board by repeated rounds of candidate elimination.
///
/// A round applies every technique once, in order. Rounds repeat until the
/// board is solved, a round makes no progress, or a technique finds a
/// contradiction. There is no search: a puzzle that needs guessing ends
/// [`Stalled`](SolveState::Stalled).
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, Cell, RuleSet};
/// use futoshiki_solver::{PropagationSolver, SolveState};
///
/// let mut board = Board::new(2);
/// board.seed(Cell::new(0, 0), 1);
///
/// let solver = PropagationSolver::with_all_techniques();
/// let (state, stats) = solver.solve(&mut board, &RuleSet::new());
///
/// assert_eq!(state, SolveState::Solved);
/// assert_eq!(board.value_at(Cell::new(1, 0)), Some(2));
/// println!("Solved in {} rounds", stats.rounds());
/// ```
///
/// # Round by round
///
/// ```
/// use futoshiki_core::{Board, Cell, RuleSet};
/// use futoshiki_solver::PropagationSolver;
///
/// let solver = PropagationSolver::with_all_techniques();
/// let mut board = Board::new(3);
/// board.seed(Cell::new(1, 1), 2);
/// let rules = RuleSet::new();
/// let mut stats = solver.new_stats();
///
/// while solver.round(&mut board, &rules, &mut stats, &mut ())? {
///     println!("Round {} made progress", stats.rounds());
///     if board.is_board_solved()? {
///         break;
///     }
/// }
/// # Ok::<(), futoshiki_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PropagationSolver {
    techniques: Vec<BoxedTechnique>,
}

impl PropagationSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Every round applies the techniques in the order they appear in the
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_solver::{
    ///     PropagationSolver,
    ///     technique::{BoxedTechnique, ColumnElimination, RowElimination},
    /// };
    ///
    /// let techniques: Vec<BoxedTechnique> = vec![
    ///     Box::new(RowElimination::new()),
    ///     Box::new(ColumnElimination::new()),
    /// ];
    /// let solver = PropagationSolver::new(techniques);
    /// assert_eq!(solver.techniques().len(), 2);
    /// ```
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with all available techniques, in the order
    /// defined by [`technique::all_techniques`].
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Creates a statistics object aligned with this solver's technique order.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats {
            applications: vec![0; self.techniques.len()],
            rounds: 0,
        }
    }

    /// Returns the configured techniques in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolverStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs one round: applies every technique once, in order.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one technique changed the board
    /// * `Ok(false)` - The board is unchanged
    ///
    /// # Errors
    ///
    /// Returns the first contradiction a technique reports. The remaining
    /// techniques of the round are skipped.
    pub fn round<O>(
        &self,
        board: &mut Board,
        rules: &RuleSet,
        stats: &mut SolverStats,
        observer: &mut O,
    ) -> Result<bool, SolverError>
    where
        O: SolveObserver + ?Sized,
    {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        stats.rounds += 1;

        let mut changed = false;
        for (i, technique) in self.techniques.iter().enumerate() {
            let applied = technique.apply(board, rules)?;
            if applied {
                log::trace!("round {}: {} changed the board", stats.rounds, technique.name());
                stats.applications[i] += 1;
                changed = true;
            }
            observer.on_technique_applied(technique.as_ref(), applied, board, rules);
        }
        observer.on_round_finished(stats.rounds, board, rules);
        Ok(changed)
    }

    /// Advances an unsolved board by one round and returns the new state.
    ///
    /// - A contradiction during the round gives
    ///   [`Contradicted`](SolveState::Contradicted).
    /// - A board whose cells are all solved afterwards is checked for
    ///   duplicate values and violated rules, giving
    ///   [`Solved`](SolveState::Solved) or
    ///   [`Contradicted`](SolveState::Contradicted).
    /// - Otherwise a round that changed nothing gives
    ///   [`Stalled`](SolveState::Stalled), and any other round gives
    ///   [`Unsolved`](SolveState::Unsolved).
    pub fn advance<O>(
        &self,
        board: &mut Board,
        rules: &RuleSet,
        stats: &mut SolverStats,
        observer: &mut O,
    ) -> SolveState
    where
        O: SolveObserver + ?Sized,
    {
        let state = self
            .try_advance(board, rules, stats, observer)
            .unwrap_or_else(SolveState::Contradicted);
        log::debug!("round {}: {state:?}", stats.rounds);
        state
    }

    fn try_advance<O>(
        &self,
        board: &mut Board,
        rules: &RuleSet,
        stats: &mut SolverStats,
        observer: &mut O,
    ) -> Result<SolveState, SolverError>
    where
        O: SolveObserver + ?Sized,
    {
        let changed = self.round(board, rules, stats, observer)?;
        if board.is_board_solved()? {
            board.check_consistency(rules)?;
            return Ok(SolveState::Solved);
        }
        Ok(if changed {
            SolveState::Unsolved
        } else {
            SolveState::Stalled
        })
    }

    /// Runs rounds until the board is solved, stalls, or is contradicted.
    ///
    /// At least one round is always run, even on a board that is already
    /// solved.
    pub fn solve(&self, board: &mut Board, rules: &RuleSet) -> (SolveState, SolverStats) {
        let mut stats = self.new_stats();
        let state = self.solve_with_stats(board, rules, &mut stats, &mut ());
        (state, stats)
    }

    /// Runs rounds until a terminal state, using the provided statistics
    /// object and reporting progress to `observer`.
    ///
    /// This is similar to [`solve`](Self::solve), but allows reusing an
    /// existing statistics object and watching the solve.
    pub fn solve_with_stats<O>(
        &self,
        board: &mut Board,
        rules: &RuleSet,
        stats: &mut SolverStats,
        observer: &mut O,
    ) -> SolveState
    where
        O: SolveObserver + ?Sized,
    {
        loop {
            let state = self.advance(board, rules, stats, observer);
            if state.is_terminal() {
                match &state {
                    SolveState::Contradicted(err) => {
                        log::debug!("contradiction after {} rounds: {err}", stats.rounds);
                    }
                    _ => log::debug!("{state:?} after {} rounds", stats.rounds),
                }
                return state;
            }
        }
    }

    /// Solves `board` and returns it inside the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_core::{Board, Cell, RuleSet};
    /// use futoshiki_solver::{PropagationSolver, SolveOutcome};
    ///
    /// let mut rules = RuleSet::new();
    /// rules.add_rule(Cell::new(0, 1), Cell::new(0, 0));
    ///
    /// let outcome = PropagationSolver::with_all_techniques().run(Board::new(2), &rules);
    /// let SolveOutcome::Solved(board) = outcome else {
    ///     panic!("expected a solution, got {outcome:?}");
    /// };
    /// assert_eq!(board.value_at(Cell::new(0, 0)), Some(2));
    /// ```
    #[must_use]
    pub fn run(&self, mut board: Board, rules: &RuleSet) -> SolveOutcome {
        match self.solve(&mut board, rules).0 {
            SolveState::Solved => SolveOutcome::Solved(board),
            SolveState::Contradicted(error) => SolveOutcome::Contradicted { error, board },
            SolveState::Stalled | SolveState::Unsolved => SolveOutcome::Stalled(board),
        }
    }
}

/// Solves `board` with all techniques.
///
/// Shorthand for [`PropagationSolver::with_all_techniques`] followed by
/// [`PropagationSolver::run`].
#[must_use]
pub fn run(board: Board, rules: &RuleSet) -> SolveOutcome {
    PropagationSolver::with_all_techniques().run(board, rules)
}
