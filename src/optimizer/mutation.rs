use super::Evolution;
use crate::board::{Gene, ScoredChromosome};
use crate::config::{mutation_count, GeneWrap};
use crate::error::{QfResult, QueenForgeError};
use crate::rng::RandomSource;
use tracing::trace;

/// What one mutation call did to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    /// Column shared by every mutated board in the call.
    pub gene: usize,
    /// Pool indices that were copied, mutated and appended.
    pub indices: Vec<usize>,
}

/// Moves a queen one row down under the given wrap rule.
#[inline(always)]
pub fn step_gene(value: Gene, queens: usize, wrap: GeneWrap) -> Gene {
    match wrap {
        GeneWrap::Wrap => (value + 1) % queens,
        GeneWrap::Sentinel => {
            if value == queens {
                0
            } else {
                value + 1
            }
        }
    }
}

impl<R: RandomSource> Evolution<R> {
    /// Picks `floor(mut_rate * 100)` distinct members, bumps one shared
    /// column in a copy of each, and appends the re-scored copies.
    ///
    /// The originals stay in the pool untouched, so the pool grows by one
    /// entry per mutated member until the next selection pass.
    pub fn mutate(&mut self, mut_rate: f64) -> QfResult<MutationOutcome> {
        let amount = mutation_count(mut_rate);
        let available = self.population.len();

        if amount > available {
            return Err(QueenForgeError::InsufficientPopulation {
                operation: "mutation",
                required: amount,
                available,
            });
        }

        let indices = self.rng.pick_distinct(available, amount);
        let gene = self.rng.below(self.queens);

        for &idx in &indices {
            let Some(member) = self.population.get(idx) else {
                continue;
            };
            let mut genes = member.genes().to_vec();
            genes[gene] = step_gene(genes[gene], self.queens, self.gene_wrap);
            self.population.push(ScoredChromosome::new(genes));
        }

        trace!("mutated column {} on {} boards", gene, indices.len());
        Ok(MutationOutcome { gene, indices })
    }
}
