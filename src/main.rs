//! CLI entry point for the randomized greedy N-queens solver

use clap::Parser;
use greedyqueens::io::cli::{Cli, SolveRunner};

fn main() -> greedyqueens::Result<()> {
    let cli = Cli::parse();
    let mut runner = SolveRunner::new(cli);
    runner.process()
}
