use super::Evolution;
use crate::board::{Chromosome, Gene, ScoredChromosome};
use crate::config::DuplicateCheck;
use crate::error::{QfResult, QueenForgeError};
use crate::rng::RandomSource;
use tracing::trace;

/// What one crossover call did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossoverOutcome {
    /// Split index shared by every pair in the call.
    pub point: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Single-point splice. Child A takes `p1[..point]` then `p2[point..]`,
/// child B the mirror image.
pub fn splice(p1: &[Gene], p2: &[Gene], point: usize) -> (Chromosome, Chromosome) {
    let mut a = Vec::with_capacity(p1.len());
    a.extend_from_slice(&p1[..point]);
    a.extend_from_slice(&p2[point..]);

    let mut b = Vec::with_capacity(p2.len());
    b.extend_from_slice(&p2[..point]);
    b.extend_from_slice(&p1[point..]);

    (a, b)
}

fn already_present(pool: &[ScoredChromosome], child: &[Gene], check: DuplicateCheck) -> bool {
    match check {
        DuplicateCheck::FirstGene => {
            let head = child.first();
            pool.iter().any(|m| m.genes().first() == head)
        }
        DuplicateCheck::FullBoard => pool.iter().any(|m| m.genes() == child),
    }
}

impl<R: RandomSource> Evolution<R> {
    /// Pairs the top `n_best` members (0&1, 2&3, ...) around one random
    /// point and appends the children that pass the duplicate check.
    ///
    /// Runs a selection pass first. An odd `n_best` leaves its last member
    /// unpaired.
    pub fn crossover(&mut self, n_best: usize) -> QfResult<CrossoverOutcome> {
        self.select();

        if n_best > self.population.len() {
            return Err(QueenForgeError::InsufficientPopulation {
                operation: "crossover",
                required: n_best,
                available: self.population.len(),
            });
        }

        let point = self.rng.below(self.queens);
        let mut outcome = CrossoverOutcome {
            point,
            ..Default::default()
        };

        for pair in 0..n_best / 2 {
            let (a, b) = {
                let members = self.population.members();
                splice(
                    members[2 * pair].genes(),
                    members[2 * pair + 1].genes(),
                    point,
                )
            };

            for child in [a, b] {
                let scored = ScoredChromosome::new(child);
                if already_present(self.population.members(), scored.genes(), self.duplicate_check)
                {
                    outcome.rejected += 1;
                } else {
                    self.population.push(scored);
                    outcome.accepted += 1;
                }
            }
        }

        trace!(
            "crossover at {}: {} accepted, {} rejected",
            point,
            outcome.accepted,
            outcome.rejected
        );
        Ok(outcome)
    }
}
