use crate::algorithm::cellset::CellSet;
use crate::algorithm::generator::generate_placements;
use crate::io::error::{Result, SolverError};
use crate::spatial::Cell;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Retry driver wrapping the random placement generator
///
/// Owns the board size, the random number generator, and an attempt counter.
/// Each attempt runs against a fresh full cell set; nothing survives from one
/// attempt to the next. There is deliberately no retry cap — for every size
/// the constructor accepts, a complete placement exists and the loop
/// eventually finds one.
pub struct Solver {
    size: usize,
    rng: StdRng,
    attempts: usize,
}

impl Solver {
    /// Create a solver with a random seed drawn from the process generator
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for `n <= 0` and `KnownUnsolvable` for
    /// `n` of 2 or 3, where no complete non-attacking placement exists and
    /// the retry loop would never terminate.
    pub fn new(n: i64) -> Result<Self> {
        let size = Self::validate(n)?;
        Ok(Self {
            size,
            rng: StdRng::from_rng(&mut rand::rng()),
            attempts: 0,
        })
    }

    /// Create a solver with a fixed seed for reproducible runs
    ///
    /// # Errors
    ///
    /// Rejects the same sizes as [`Solver::new`].
    pub fn with_seed(n: i64, seed: u64) -> Result<Self> {
        let size = Self::validate(n)?;
        Ok(Self {
            size,
            rng: StdRng::seed_from_u64(seed),
            attempts: 0,
        })
    }

    /// Board side length this solver was built for
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of attempts run so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Run a single attempt against a fresh cell set
    ///
    /// Returns the placement list when the attempt seats all `n` queens, or
    /// `None` when the greedy choices ran out of squares early. Incomplete
    /// attempts are expected and carry no state into the next one.
    pub fn run_attempt(&mut self) -> Option<Vec<Cell>> {
        self.attempts += 1;
        let mut cells = CellSet::full(self.size);
        let placements = generate_placements(&mut cells, &mut self.rng);
        (placements.len() == self.size).then_some(placements)
    }

    /// Retry attempts until one seats all `n` queens, then return its placements
    pub fn run(&mut self) -> Vec<Cell> {
        loop {
            if let Some(placements) = self.run_attempt() {
                return placements;
            }
        }
    }

    fn validate(n: i64) -> Result<usize> {
        if n <= 0 {
            return Err(SolverError::InvalidSize { size: n });
        }
        if n == 2 || n == 3 {
            return Err(SolverError::KnownUnsolvable { size: n });
        }
        Ok(n as usize)
    }
}

/// Solve the N-queens placement problem for an `n×n` board
///
/// Blocks until a complete solution is found and returns its cells in
/// placement order, each coordinate in `[0, n)` and no two cells sharing a
/// row, column, or diagonal.
///
/// # Errors
///
/// Returns `InvalidSize` for `n <= 0` and `KnownUnsolvable` for `n` of 2
/// or 3; see [`Solver::new`].
pub fn solve(n: i64) -> Result<Vec<Cell>> {
    Ok(Solver::new(n)?.run())
}
