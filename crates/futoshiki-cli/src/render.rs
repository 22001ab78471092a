//! ASCII rendering of boards.

use std::{
    cmp::Ordering,
    fmt,
    io::{self, Write},
    thread,
    time::Duration,
};

use futoshiki_core::{Board, Cell, RuleSet};
use futoshiki_solver::{SolveObserver, technique::Technique};

/// Displays a board with its rules as an ASCII grid.
///
/// Solved cells show their value and unsolved cells are blank. Rules between
/// horizontal neighbours are drawn as `<` or `>`; rules between vertical
/// neighbours as `^` (the upper cell is smaller) or `V` (the lower cell is
/// smaller).
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoardView<'a> {
    board: &'a Board,
    rules: &'a RuleSet,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(board: &'a Board, rules: &'a RuleSet) -> Self {
        Self { board, rules }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.board.dimension();

        f.write_str(" ")?;
        for _ in 0..dimension {
            f.write_str(" -  ")?;
        }
        writeln!(f)?;

        for row in 0..dimension {
            f.write_str("| ")?;
            for col in 0..dimension {
                let cell = Cell::new(row, col);
                match self.board.value_at(cell) {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_str(" ")?,
                }
                let glyph = match self.rules.relation(cell, Cell::new(row, col + 1)) {
                    Some(Ordering::Less) => " < ",
                    Some(Ordering::Greater) => " > ",
                    _ => " | ",
                };
                f.write_str(glyph)?;
            }

            f.write_str("\n ")?;
            for col in 0..dimension {
                let glyph = match self
                    .rules
                    .relation(Cell::new(row, col), Cell::new(row + 1, col))
                {
                    Some(Ordering::Less) => " ^  ",
                    Some(Ordering::Greater) => " V  ",
                    _ => "--- ",
                };
                f.write_str(glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Prints a frame for every round, or for every technique, while a solve
/// runs.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// returned by [`finish`](Self::finish); no frames are written after it.
#[derive(Debug)]
pub(crate) struct FrameRenderer<W> {
    writer: W,
    every_step: bool,
    delay: Duration,
    round: usize,
    error: Option<io::Error>,
}

impl<W> FrameRenderer<W>
where
    W: Write,
{
    pub(crate) fn new(writer: W, every_step: bool, delay: Duration) -> Self {
        Self {
            writer,
            every_step,
            delay,
            round: 0,
            error: None,
        }
    }

    pub(crate) fn frame(&mut self, title: fmt::Arguments<'_>, board: &Board, rules: &RuleSet) {
        if self.error.is_some() {
            return;
        }
        let view = BoardView::new(board, rules);
        if let Err(err) = write!(self.writer, "{title}:\n{view}\n").and_then(|()| self.writer.flush())
        {
            log::warn!("stopped rendering frames: {err}");
            self.error = Some(err);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    pub(crate) fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.writer),
        }
    }
}

impl<W> SolveObserver for FrameRenderer<W>
where
    W: Write,
{
    fn on_technique_applied(
        &mut self,
        technique: &dyn Technique,
        changed: bool,
        board: &Board,
        rules: &RuleSet,
    ) {
        if !self.every_step {
            return;
        }
        let round = self.round + 1;
        let note = if changed { "" } else { " (no change)" };
        self.frame(
            format_args!("round {round}, after {}{note}", technique.name()),
            board,
            rules,
        );
    }

    fn on_round_finished(&mut self, round: usize, board: &Board, rules: &RuleSet) {
        self.round = round;
        if !self.every_step {
            self.frame(format_args!("after round {round}"), board, rules);
        }
    }
}
