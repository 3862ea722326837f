//! Command-line interface for the randomized greedy N-queens solver

use crate::algorithm::solver::Solver;
use crate::io::board::render_board;
use crate::io::error::Result;
use crate::io::progress::AttemptSpinner;
use crate::spatial::Cell;
use clap::Parser;

/// Command-line arguments for the solver
#[derive(Parser)]
#[command(name = "greedyqueens")]
#[command(
    author,
    version,
    about = "Place N non-attacking queens using a randomized greedy heuristic"
)]
pub struct Cli {
    /// Number of rows and columns of the board
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub size: i64,

    /// Random seed for reproducible solves
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Report the number of attempts taken
    #[arg(short, long)]
    pub attempts: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives the solver from CLI arguments and prints the finished board
pub struct SolveRunner {
    cli: Cli,
    progress: Option<AttemptSpinner>,
}

impl SolveRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(AttemptSpinner::new);
        Self { cli, progress }
    }

    /// Solve for the requested size and print the result
    ///
    /// # Errors
    ///
    /// Returns an error if the requested size is invalid or known to be
    /// unsolvable; the retry loop itself never fails.
    // Allow print for the user-facing solution output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let mut solver = match self.cli.seed {
            Some(seed) => Solver::with_seed(self.cli.size, seed)?,
            None => Solver::new(self.cli.size)?,
        };

        let placements = self.run_to_completion(&mut solver);

        if let Some(ref spinner) = self.progress {
            spinner.finish();
        }

        print!("{}", render_board(&placements, solver.size()));
        if self.cli.attempts {
            println!("Solved in {} attempt(s)", solver.attempts());
        }
        Ok(())
    }

    fn run_to_completion(&self, solver: &mut Solver) -> Vec<Cell> {
        loop {
            if let Some(placements) = solver.run_attempt() {
                return placements;
            }
            if let Some(ref spinner) = self.progress {
                spinner.record_attempt(solver.attempts());
            }
        }
    }
}
