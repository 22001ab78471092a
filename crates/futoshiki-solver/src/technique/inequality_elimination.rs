use futoshiki_core::{Board, CandidateSet, ConsistencyError, Rule, RuleSet};

use super::BoxedTechnique;
use crate::{SolverError, technique::Technique};

const NAME: &str = "inequality elimination";

/// A technique that narrows both endpoints of every inequality rule.
///
/// For a rule `lower < upper`, the lower cell cannot hold any value at or
/// above the largest candidate of the upper cell. Once the lower cell is
/// narrowed, the upper cell cannot hold any value at or below the smallest
/// remaining candidate of the lower cell.
///
/// Rules are processed in declaration order, and each rule sees the effect
/// of the rules before it.
///
/// # Examples
///
/// ```
/// use futoshiki_core::{Board, CandidateSet, Cell, RuleSet};
/// use futoshiki_solver::technique::{InequalityElimination, Technique};
///
/// let mut board = Board::new(5);
/// let mut rules = RuleSet::new();
/// rules.add_rule(Cell::new(0, 0), Cell::new(0, 1));
///
/// InequalityElimination::new().apply(&mut board, &rules)?;
/// assert_eq!(board.get(Cell::new(0, 0)), CandidateSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(board.get(Cell::new(0, 1)), CandidateSet::from_iter([2, 3, 4, 5]));
/// # Ok::<(), futoshiki_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct InequalityElimination;

impl InequalityElimination {
    /// Creates a new `InequalityElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        InequalityElimination
    }

    fn apply_rule(board: &mut Board, rule: Rule) -> Result<bool, SolverError> {
        let (lower, upper) = (rule.lower(), rule.upper());
        let empty = |cell| ConsistencyError::EmptyCandidateSet { cell };

        let lower_candidates = board.get(lower);
        if lower_candidates.is_empty() {
            return Err(empty(lower).into());
        }
        let max_upper = board.get(upper).max().ok_or(empty(upper))?;

        let narrowed_lower = lower_candidates & CandidateSet::below(max_upper);
        let mut changed = board.narrow(lower, narrowed_lower);
        let min_lower = narrowed_lower.min().ok_or(empty(lower))?;

        changed |= board.narrow(upper, board.get(upper) & CandidateSet::above(min_lower));
        Ok(changed)
    }
}

impl Technique for InequalityElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, rules: &RuleSet) -> Result<bool, SolverError> {
        let mut changed = false;
        for &rule in rules {
            changed |= Self::apply_rule(board, rule)?;
        }
        Ok(changed)
    }
}
