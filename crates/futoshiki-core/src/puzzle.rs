//! Puzzle definitions and their text format.
//!
//! A [`PuzzleDefinition`] is the immutable description of a puzzle: its
//! dimension, the given values and the inequality rules. It can be parsed from
//! and printed to a plain text format:
//!
//! ```text
//! # Lines starting with '#' and blank lines are ignored.
//! 2 . . . .
//! . . . . .
//! 4 . . . .
//! . . . . .
//! . . . 3 .
//! (0, 0) < (1, 0)
//! (2, 0) > (2, 1)
//! ```
//!
//! The grid comes first; the number of tokens in its first row fixes the
//! dimension. A digit is a given value and `.`, `_` or `0` is an empty cell.
//! Every line after the grid is a rule between two `(row, col)` cells, using
//! `<` or `>`.
//!
//! # Examples
//!
//! ```
//! use futoshiki_core::{Cell, PuzzleDefinition};
//!
//! let puzzle: PuzzleDefinition = "
//!     1 .
//!     . .
//!     (1, 0) > (1, 1)
//! "
//! .parse()?;
//!
//! let (board, rules) = puzzle.build();
//! assert_eq!(board.dimension(), 2);
//! assert_eq!(board.value_at(Cell::new(0, 0)), Some(1));
//! assert_eq!(rules.len(), 1);
//! # Ok::<(), futoshiki_core::PuzzleParseError>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{Board, Cell, RuleSet};

/// The givens and rules of a puzzle, independent of any solving state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    dimension: u8,
    givens: Vec<Option<u8>>,
    rules: RuleSet,
}

impl PuzzleDefinition {
    /// Creates a puzzle with no givens and no rules.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is not in the range `1..=Board::MAX_DIMENSION`.
    #[must_use]
    pub fn new(dimension: u8) -> Self {
        assert!(
            (1..=Board::MAX_DIMENSION).contains(&dimension),
            "Dimension must be between 1 and {}, got {dimension}",
            Board::MAX_DIMENSION
        );
        let len = usize::from(dimension) * usize::from(dimension);
        Self {
            dimension,
            givens: vec![None; len],
            rules: RuleSet::new(),
        }
    }

    /// Returns the dimension of the puzzle.
    #[must_use]
    pub const fn dimension(&self) -> u8 {
        self.dimension
    }

    fn index_of(&self, cell: Cell) -> usize {
        assert!(
            cell.row() < self.dimension && cell.col() < self.dimension,
            "Cell {cell} is out of bounds for a {0}x{0} puzzle",
            self.dimension
        );
        usize::from(cell.row()) * usize::from(self.dimension) + usize::from(cell.col())
    }

    /// Returns the given value at a cell, if any.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn given(&self, cell: Cell) -> Option<u8> {
        self.givens[self.index_of(cell)]
    }

    /// Sets the given value at a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or `value` is not in `1..=N`.
    pub fn set_given(&mut self, cell: Cell, value: u8) {
        assert!(
            (1..=self.dimension).contains(&value),
            "Value must be between 1 and {}, got {value}",
            self.dimension
        );
        let index = self.index_of(cell);
        self.givens[index] = Some(value);
    }

    /// Appends the rule `lower < upper`.
    pub fn add_rule(&mut self, lower: Cell, upper: Cell) {
        self.rules.add_rule(lower, upper);
    }

    /// Returns the rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Builds a fresh board seeded with the givens, together with the rules.
    #[must_use]
    pub fn build(&self) -> (Board, RuleSet) {
        let mut board = Board::new(self.dimension);
        for cell in board.cells() {
            if let Some(value) = self.given(cell) {
                board.seed(cell, value);
            }
        }
        (board, self.rules.clone())
    }
}

/// An error produced while parsing a [`PuzzleDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {kind}")]
pub struct PuzzleParseError {
    line: usize,
    kind: PuzzleParseErrorKind,
}

impl PuzzleParseError {
    fn new(line: usize, kind: PuzzleParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// Returns the 1-based line the error was found on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns what went wrong.
    #[must_use]
    pub fn kind(&self) -> &PuzzleParseErrorKind {
        &self.kind
    }
}

/// The reason a puzzle could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleParseErrorKind {
    /// The input has no grid rows.
    #[display("puzzle has no grid")]
    MissingGrid,
    /// The grid is wider than the largest supported board.
    #[display("grid is {dimension} cells wide, the maximum is {max}")]
    DimensionTooLarge {
        /// Width of the first grid row.
        dimension: usize,
        /// Largest supported dimension.
        max: u8,
    },
    /// A grid row has the wrong number of cells.
    #[display("expected {expected} cells in the row, found {found}")]
    RaggedRow {
        /// Width of the first grid row.
        expected: u8,
        /// Width of this row.
        found: usize,
    },
    /// The input ended, or rules began, before the grid was complete.
    #[display("grid has {found} rows, expected {expected}")]
    MissingRows {
        /// Number of rows required.
        expected: u8,
        /// Number of rows read.
        found: u8,
    },
    /// A grid token is neither a digit nor an empty marker.
    #[display("invalid cell token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// A given value is outside `1..=N`.
    #[display("value {value} is outside 1..={dimension}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Dimension of the grid.
        dimension: u8,
    },
    /// A rule line could not be read.
    #[display("malformed rule {text:?}")]
    MalformedRule {
        /// The rule line.
        text: String,
    },
    /// A rule names a cell outside the grid.
    #[display("cell {cell} is outside the {dimension}x{dimension} grid")]
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Dimension of the grid.
        dimension: u8,
    },
    /// A rule relates a cell to itself.
    #[display("rule relates {cell} to itself")]
    SelfRule {
        /// The repeated cell.
        cell: Cell,
    },
}

const EMPTY_TOKENS: [&str; 3] = [".", "_", "0"];

impl FromStr for PuzzleDefinition {
    type Err = PuzzleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut puzzle: Option<Self> = None;
        let mut rows_read = 0_u8;
        let mut last_line = 0;

        for (i, raw) in s.lines().enumerate() {
            let line_no = i + 1;
            last_line = line_no;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let is_rule = text.contains(['<', '>']);
            let grid_complete = puzzle.as_ref().is_some_and(|p| rows_read == p.dimension);

            if is_rule {
                let Some(p) = puzzle.as_mut() else {
                    return Err(PuzzleParseError::new(
                        line_no,
                        PuzzleParseErrorKind::MissingGrid,
                    ));
                };
                if !grid_complete {
                    return Err(PuzzleParseError::new(
                        line_no,
                        PuzzleParseErrorKind::MissingRows {
                            expected: p.dimension,
                            found: rows_read,
                        },
                    ));
                }
                let (lower, upper) = parse_rule(text, p.dimension)
                    .map_err(|kind| PuzzleParseError::new(line_no, kind))?;
                p.add_rule(lower, upper);
                continue;
            }

            let tokens: Vec<&str> = text.split_whitespace().collect();
            let p = match puzzle.as_mut() {
                Some(p) => p,
                None => {
                    let dimension = u8::try_from(tokens.len())
                        .ok()
                        .filter(|d| *d <= Board::MAX_DIMENSION)
                        .ok_or_else(|| {
                            PuzzleParseError::new(
                                line_no,
                                PuzzleParseErrorKind::DimensionTooLarge {
                                    dimension: tokens.len(),
                                    max: Board::MAX_DIMENSION,
                                },
                            )
                        })?;
                    puzzle.insert(Self::new(dimension))
                }
            };
            if grid_complete {
                return Err(PuzzleParseError::new(
                    line_no,
                    PuzzleParseErrorKind::MalformedRule {
                        text: text.to_owned(),
                    },
                ));
            }
            if tokens.len() != usize::from(p.dimension) {
                return Err(PuzzleParseError::new(
                    line_no,
                    PuzzleParseErrorKind::RaggedRow {
                        expected: p.dimension,
                        found: tokens.len(),
                    },
                ));
            }
            for (col, token) in (0..).zip(tokens) {
                if let Some(value) = parse_token(token, p.dimension)
                    .map_err(|kind| PuzzleParseError::new(line_no, kind))?
                {
                    p.set_given(Cell::new(rows_read, col), value);
                }
            }
            rows_read += 1;
        }

        let Some(puzzle) = puzzle else {
            return Err(PuzzleParseError::new(
                last_line,
                PuzzleParseErrorKind::MissingGrid,
            ));
        };
        if rows_read < puzzle.dimension {
            return Err(PuzzleParseError::new(
                last_line,
                PuzzleParseErrorKind::MissingRows {
                    expected: puzzle.dimension,
                    found: rows_read,
                },
            ));
        }
        Ok(puzzle)
    }
}

fn parse_token(token: &str, dimension: u8) -> Result<Option<u8>, PuzzleParseErrorKind> {
    if EMPTY_TOKENS.contains(&token) {
        return Ok(None);
    }
    let value: u8 = token
        .parse()
        .map_err(|_| PuzzleParseErrorKind::InvalidToken {
            token: token.to_owned(),
        })?;
    if !(1..=dimension).contains(&value) {
        return Err(PuzzleParseErrorKind::ValueOutOfRange { value, dimension });
    }
    Ok(Some(value))
}

fn parse_rule(text: &str, dimension: u8) -> Result<(Cell, Cell), PuzzleParseErrorKind> {
    let malformed = || PuzzleParseErrorKind::MalformedRule {
        text: text.to_owned(),
    };
    let (left, right, reversed) = if let Some((left, right)) = text.split_once('<') {
        (left, right, false)
    } else if let Some((left, right)) = text.split_once('>') {
        (left, right, true)
    } else {
        return Err(malformed());
    };
    let left = parse_cell(left, dimension)?.ok_or_else(malformed)?;
    let right = parse_cell(right, dimension)?.ok_or_else(malformed)?;
    if left == right {
        return Err(PuzzleParseErrorKind::SelfRule { cell: left });
    }
    Ok(if reversed { (right, left) } else { (left, right) })
}

fn parse_cell(text: &str, dimension: u8) -> Result<Option<Cell>, PuzzleParseErrorKind> {
    let text = text.trim();
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    let Some((row, col)) = inner.split_once(',') else {
        return Ok(None);
    };
    let (Ok(row), Ok(col)) = (row.trim().parse::<u8>(), col.trim().parse::<u8>()) else {
        return Ok(None);
    };
    let cell = Cell::new(row, col);
    if row >= dimension || col >= dimension {
        return Err(PuzzleParseErrorKind::CellOutOfBounds { cell, dimension });
    }
    Ok(Some(cell))
}

impl fmt::Display for PuzzleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.given(Cell::new(row, col)) {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
