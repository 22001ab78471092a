//! Command line front end for the Futoshiki propagation solver.
//!
//! Reads a puzzle, solves it by candidate propagation, and prints the board
//! as it narrows.
//!
//! # Usage
//!
//! Solve a puzzle file, printing the board after every round:
//!
//! ```sh
//! cargo run -- crates/futoshiki-cli/puzzles/one.txt
//! ```
//!
//! Solve a bundled sample, animating every technique application:
//!
//! ```sh
//! cargo run -- --builtin two --every-step --delay-ms 300
//! ```
//!
//! Print only the final board:
//!
//! ```sh
//! cargo run -- --builtin one --quiet
//! ```
//!
//! The exit code is `0` when the puzzle is solved, `1` when propagation
//! stalls, and `2` on a contradiction or an input error. Set `RUST_LOG=debug`
//! to log every round.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
    time::Duration,
};

use clap::Parser;
use futoshiki_core::PuzzleDefinition;
use futoshiki_solver::{PropagationSolver, SolveState, SolverStats};

use self::{
    builtin::BuiltinPuzzle,
    error::CliError,
    render::{BoardView, FrameRenderer},
};

mod builtin;
mod error;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve. Without one, a bundled sample is solved.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<PathBuf>,

    /// Bundled sample puzzle to solve.
    #[arg(
        long,
        value_name = "NAME",
        value_enum,
        default_value_t = BuiltinPuzzle::One,
        conflicts_with = "puzzle"
    )]
    builtin: BuiltinPuzzle,

    /// Pause after every printed frame, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 0)]
    delay_ms: u64,

    /// Print a frame after every technique instead of after every round.
    #[arg(long, conflicts_with = "quiet")]
    every_step: bool,

    /// Print only the final board.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match solve(&args) {
        Ok(state) => process::exit(exit_code(&state)),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}

fn load_puzzle(args: &Args) -> Result<PuzzleDefinition, CliError> {
    let Some(path) = &args.puzzle else {
        log::info!("using builtin puzzle {:?}", args.builtin);
        return Ok(args.builtin.definition()?);
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(text.parse()?)
}

fn solve(args: &Args) -> Result<SolveState, CliError> {
    let puzzle = load_puzzle(args)?;
    let (mut board, rules) = puzzle.build();
    log::info!(
        "solving a {0}x{0} puzzle with {1} rules",
        board.dimension(),
        rules.len()
    );

    let solver = PropagationSolver::with_all_techniques();
    let mut stats = solver.new_stats();
    let stdout = io::stdout().lock();

    let (state, mut out) = if args.quiet {
        let state = solver.solve_with_stats(&mut board, &rules, &mut stats, &mut ());
        let mut out = stdout;
        write!(out, "{}", BoardView::new(&board, &rules))?;
        (state, out)
    } else {
        let delay = Duration::from_millis(args.delay_ms);
        let mut renderer = FrameRenderer::new(stdout, args.every_step, delay);
        renderer.frame(format_args!("initial board"), &board, &rules);
        let state = solver.solve_with_stats(&mut board, &rules, &mut stats, &mut renderer);
        (state, renderer.finish()?)
    };

    writeln!(out, "{}", summary(&state, &stats))?;
    print_stats(&mut out, &solver, &stats)?;
    out.flush()?;
    Ok(state)
}

fn summary(state: &SolveState, stats: &SolverStats) -> String {
    let rounds = stats.rounds();
    let unit = if rounds == 1 { "round" } else { "rounds" };
    match state {
        SolveState::Solved => format!("Solved after {rounds} {unit}."),
        SolveState::Stalled | SolveState::Unsolved => {
            format!("Stalled after {rounds} {unit}; the puzzle needs guessing.")
        }
        SolveState::Contradicted(err) => {
            format!("Contradiction after {rounds} {unit}: {err}")
        }
    }
}

fn print_stats<W>(out: &mut W, solver: &PropagationSolver, stats: &SolverStats) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "Stats:")?;
    for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
        writeln!(out, "  {}: {count}", technique.name())?;
    }
    writeln!(out, "  rounds: {}", stats.rounds())
}

fn exit_code(state: &SolveState) -> i32 {
    match state {
        SolveState::Solved => 0,
        SolveState::Stalled | SolveState::Unsolved => 1,
        SolveState::Contradicted(_) => 2,
    }
}
