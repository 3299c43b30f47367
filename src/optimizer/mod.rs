pub mod crossover;
pub mod mutation;
pub mod runner;
pub mod selection;

pub use self::crossover::{splice, CrossoverOutcome};
pub use self::mutation::{step_gene, MutationOutcome};
pub use self::runner::{
    GenerationStats, OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback, Silent,
};
pub use self::selection::Population;

use crate::config::{DuplicateCheck, GeneWrap, PopulationParams};
use crate::rng::RandomSource;
use strum_macros::Display;
use tracing::debug;

/// Where the evolution context sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Seeded,
    Scored,
    Selected,
    Reproduced,
    Finalized,
}

/// Explicit state of one evolution run: settings, the pool, and the random
/// stream. Each phase borrows it mutably; nothing lives in globals.
pub struct Evolution<R: RandomSource> {
    pub queens: usize,
    pub max_population: usize,
    pub duplicate_check: DuplicateCheck,
    pub gene_wrap: GeneWrap,
    pub population: Population,
    pub rng: R,
    phase: Phase,
}

impl<R: RandomSource> Evolution<R> {
    /// Seeds `initial_size` random boards and scores them.
    pub fn new(params: &PopulationParams, mut rng: R) -> Self {
        let population = Population::seed(&mut rng, params.queens, params.initial_size);
        debug!(
            "{} -> {}: {} boards of {} queens",
            Phase::Seeded,
            Phase::Scored,
            population.len(),
            params.queens
        );

        Self {
            queens: params.queens,
            max_population: params.max_population,
            duplicate_check: params.duplicate_check,
            gene_wrap: params.gene_wrap,
            population,
            rng,
            phase: Phase::Scored,
        }
    }

    /// Wraps an existing pool. Used when the caller controls the boards.
    pub fn from_population(params: &PopulationParams, population: Population, rng: R) -> Self {
        Self {
            queens: params.queens,
            max_population: params.max_population,
            duplicate_check: params.duplicate_check,
            gene_wrap: params.gene_wrap,
            population,
            rng,
            phase: Phase::Scored,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sorts by fitness and clamps the pool to `max_population`.
    pub fn select(&mut self) {
        self.population.select(self.max_population);
        self.phase = Phase::Selected;
    }

    /// Last selection pass; the pool is ready to report.
    pub fn finalize(&mut self) {
        self.population.select(self.max_population);
        self.phase = Phase::Finalized;
        debug!("{}: {} boards kept", self.phase, self.population.len());
    }

    pub(crate) fn mark_reproduced(&mut self) {
        self.phase = Phase::Reproduced;
    }
}
