//! Board coordinates and lines.

use std::iter::FusedIterator;

/// A cell coordinate on the board.
///
/// Rows and columns are zero-based; `(0, 0)` is the top-left cell.
///
/// # Examples
///
/// ```
/// use futoshiki_core::Cell;
///
/// let cell = Cell::new(1, 2);
/// assert_eq!(cell.row(), 1);
/// assert_eq!(cell.col(), 2);
/// assert_eq!(cell.to_string(), "(1, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell at the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row containing this cell.
    #[must_use]
    pub const fn row_line(self) -> Line {
        Line::Row { row: self.row }
    }

    /// Returns the column containing this cell.
    #[must_use]
    pub const fn column_line(self) -> Line {
        Line::Column { col: self.col }
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// A row or a column of the board.
///
/// Both kinds of line must hold every value exactly once in a solved board,
/// so row and column logic is written once against `Line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Line {
    /// A row identified by its index.
    #[display("row {row}")]
    Row {
        /// Row index.
        row: u8,
    },
    /// A column identified by its index.
    #[display("column {col}")]
    Column {
        /// Column index.
        col: u8,
    },
}

impl Line {
    /// Returns `true` if the cell lies on this line.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        match self {
            Line::Row { row } => cell.row == row,
            Line::Column { col } => cell.col == col,
        }
    }

    /// Returns the `i`-th cell along this line.
    #[must_use]
    pub const fn cell_at(self, i: u8) -> Cell {
        match self {
            Line::Row { row } => Cell::new(row, i),
            Line::Column { col } => Cell::new(i, col),
        }
    }

    /// Returns an iterator over the cells of this line on a board of the
    /// given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use futoshiki_core::{Cell, Line};
    ///
    /// let cells: Vec<_> = Line::Column { col: 1 }.cells(3).collect();
    /// assert_eq!(cells, [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]);
    /// ```
    #[must_use]
    pub fn cells(self, dimension: u8) -> LineCells {
        LineCells {
            line: self,
            range: 0..dimension,
        }
    }

    /// Returns all rows followed by all columns of a board of the given
    /// dimension.
    pub fn all(dimension: u8) -> impl Iterator<Item = Line> {
        (0..dimension)
            .map(|row| Line::Row { row })
            .chain((0..dimension).map(|col| Line::Column { col }))
    }
}

/// Iterator over the cells of a [`Line`].
#[derive(Debug, Clone)]
pub struct LineCells {
    line: Line,
    range: std::ops::Range<u8>,
}

impl Iterator for LineCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        self.range.next().map(|i| self.line.cell_at(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for LineCells {}

impl FusedIterator for LineCells {}
