use crate::{Cell, Line, Rule};

/// A contradiction found in the candidate state of a board.
///
/// Any of these means no consistent assignment of values remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A cell has no candidates left.
    #[display("no candidates left at {cell}")]
    EmptyCandidateSet {
        /// The cell whose candidate set is empty.
        cell: Cell,
    },
    /// The same value is solved in two cells of one line.
    #[display("value {value} is solved more than once in {line}")]
    DuplicateValue {
        /// The line holding the duplicate.
        line: Line,
        /// The duplicated value.
        value: u8,
    },
    /// Both endpoints of a rule are solved but the inequality does not hold.
    #[display("rule {rule} is violated")]
    RuleViolated {
        /// The violated rule.
        rule: Rule,
    },
}

impl ConsistencyError {
    /// Returns the cell the contradiction was detected at.
    ///
    /// For a violated rule this is the rule's lower endpoint; a duplicate
    /// value has no single offending cell.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Self::EmptyCandidateSet { cell } => Some(*cell),
            Self::RuleViolated { rule } => Some(rule.lower()),
            Self::DuplicateValue { .. } => None,
        }
    }
}
