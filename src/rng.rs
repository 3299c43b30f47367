//! Randomness used by the evolution loop.
//!
//! Every draw goes through [`RandomSource`], so a run is a pure function
//! of the stream it is handed. Production runs use `fastrand::Rng`; tests
//! can replay a fixed sequence with [`Scripted`].

pub trait RandomSource {
    /// Uniform draw in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// `amount` distinct indices from `0..len`, in draw order.
    ///
    /// Callers guarantee `amount <= len`.
    fn pick_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = i + self.below(len - i);
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}

impl RandomSource for fastrand::Rng {
    #[inline(always)]
    fn below(&mut self, bound: usize) -> usize {
        self.usize(0..bound)
    }
}

/// Replays a fixed list of draws, each reduced modulo the requested bound.
/// Wraps to the start when the list runs out; an empty list always yields 0.
#[derive(Debug, Clone)]
pub struct Scripted {
    draws: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// How many draws have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for Scripted {
    fn below(&mut self, bound: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % bound
    }
}

/// Builds the production source, seeded when a seed is given.
pub fn from_seed(seed: Option<u64>) -> fastrand::Rng {
    if let Some(s) = seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    }
}
