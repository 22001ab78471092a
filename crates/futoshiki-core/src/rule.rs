//! Inequality rules between cells.
//!
//! A [`Rule`] states that the value solved at one cell is strictly less than
//! the value solved at another. A [`RuleSet`] keeps the rules of a puzzle in
//! declaration order.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Cell, Rule, RuleSet};
//!
//! let mut rules = RuleSet::new();
//! rules.add_rule(Cell::new(0, 0), Cell::new(1, 0));
//! rules.add_rule(Cell::new(1, 1), Cell::new(1, 2));
//!
//! let touching: Vec<_> = rules.applicable_rules(Cell::new(1, 0)).collect();
//! assert_eq!(touching, [Rule::new(Cell::new(0, 0), Cell::new(1, 0))]);
//! ```

use std::{cmp::Ordering, slice};

use crate::Cell;

/// A strict inequality between two cells: `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{lower} < {upper}")]
pub struct Rule {
    lower: Cell,
    upper: Cell,
}

impl Rule {
    /// Creates a rule requiring the value at `lower` to be less than the
    /// value at `upper`.
    #[must_use]
    pub const fn new(lower: Cell, upper: Cell) -> Self {
        Self { lower, upper }
    }

    /// Returns the cell holding the smaller value.
    #[must_use]
    pub const fn lower(self) -> Cell {
        self.lower
    }

    /// Returns the cell holding the larger value.
    #[must_use]
    pub const fn upper(self) -> Cell {
        self.upper
    }

    /// Returns `true` if `cell` is either endpoint of the rule.
    #[must_use]
    pub fn touches(self, cell: Cell) -> bool {
        self.lower == cell || self.upper == cell
    }

    /// Returns `true` if the given endpoint values satisfy the rule.
    #[must_use]
    pub const fn is_satisfied_by(self, lower_value: u8, upper_value: u8) -> bool {
        lower_value < upper_value
    }
}

impl From<((u8, u8), (u8, u8))> for Rule {
    fn from((lower, upper): ((u8, u8), (u8, u8))) -> Self {
        Self::new(lower.into(), upper.into())
    }
}

/// The ordered inequality rules of a puzzle.
///
/// Rules are declared once before solving and never change afterwards.
/// Declaration order carries no meaning for the solution; it only fixes the
/// order in which queries report rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends the rule `lower < upper`.
    ///
    /// The caller guarantees that both cells lie on the board and differ.
    pub fn add_rule(&mut self, lower: Cell, upper: Cell) {
        debug_assert_ne!(lower, upper, "a rule must relate two distinct cells");
        self.rules.push(Rule::new(lower, upper));
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns an iterator over the rules in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the rules that have `cell` as either endpoint, in declaration
    /// order.
    pub fn applicable_rules(&self, cell: Cell) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied().filter(move |rule| rule.touches(cell))
    }

    /// Returns how a rule orders `a` relative to `b`, if any rule relates
    /// them.
    ///
    /// `Some(Ordering::Less)` means a rule requires `a < b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use futoshiki_core::{Cell, RuleSet};
    ///
    /// let (a, b) = (Cell::new(0, 0), Cell::new(0, 1));
    /// let mut rules = RuleSet::new();
    /// rules.add_rule(b, a);
    ///
    /// assert_eq!(rules.relation(a, b), Some(Ordering::Greater));
    /// assert_eq!(rules.relation(b, a), Some(Ordering::Less));
    /// assert_eq!(rules.relation(a, Cell::new(1, 0)), None);
    /// ```
    #[must_use]
    pub fn relation(&self, a: Cell, b: Cell) -> Option<Ordering> {
        self.applicable_rules(a).find_map(|rule| {
            if rule.lower == a && rule.upper == b {
                Some(Ordering::Less)
            } else if rule.lower == b && rule.upper == a {
                Some(Ordering::Greater)
            } else {
                None
            }
        })
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.add_rule(rule.lower, rule.upper);
        }
        rules
    }
}
