use crate::board::{Fitness, ScoredChromosome};
use crate::config::{Config, PopulationParams};
use crate::error::QfResult;
use crate::optimizer::{Evolution, Phase};
use crate::rng::{self, RandomSource};
use serde::Serialize;
use tracing::{debug, info};

pub struct OptimizationOptions {
    pub iterations: usize,
    pub n_best: usize,
    pub mut_rate: f64,
    /// Generations between `info` progress lines; 0 silences them.
    pub report_every: usize,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            iterations: cfg.run.iterations,
            n_best: cfg.run.n_best,
            mut_rate: cfg.run.mut_rate,
            report_every: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub best_fitness: Fitness,
    pub population: usize,
    pub offspring: usize,
    pub mutated: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub iterations: usize,
    /// Final pool, most fit first.
    pub population: Vec<ScoredChromosome>,
    /// First generation that ended with a solved board in the pool.
    pub first_solution_at: Option<usize>,
}

impl OptimizationResult {
    pub fn best(&self) -> Option<&ScoredChromosome> {
        self.population.first()
    }

    pub fn solutions(&self) -> impl Iterator<Item = &ScoredChromosome> {
        self.population.iter().filter(|m| m.is_solution())
    }
}

/// Receives a summary after every generation. Purely observational: the
/// loop always runs its full budget.
pub trait ProgressCallback {
    fn on_generation(&self, generation: usize, stats: &GenerationStats);
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_generation(&self, generation: usize, stats: &GenerationStats) {
        (**self).on_generation(generation, stats)
    }
}

/// Callback that does nothing.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_generation(&self, _generation: usize, _stats: &GenerationStats) {}
}

pub struct Optimizer {
    params: PopulationParams,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(params: PopulationParams, options: OptimizationOptions) -> Self {
        Self { params, options }
    }

    pub fn from_config(cfg: &Config) -> QfResult<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg.population.clone(), OptimizationOptions::from(cfg)))
    }

    /// Runs with `fastrand`, seeded when `seed` is given.
    pub fn run_seeded<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        callback: CB,
    ) -> QfResult<OptimizationResult> {
        self.run(rng::from_seed(seed), callback)
    }

    pub fn run<R: RandomSource, CB: ProgressCallback>(
        &self,
        rng: R,
        callback: CB,
    ) -> QfResult<OptimizationResult> {
        let opts = &self.options;

        // 1. Seed + score
        let mut evo = Evolution::new(&self.params, rng);

        // 2. Initial ranking
        evo.select();
        debug!("{}: {} boards ranked", evo.phase(), evo.population.len());

        let mut first_solution_at = None;

        // 3. Main loop, fixed budget
        for generation in 0..opts.iterations {
            let crossed = evo.crossover(opts.n_best)?;
            let mutated = evo.mutate(opts.mut_rate)?;
            evo.mark_reproduced();

            // appended children and mutants are unsorted until the next pass
            let best_fitness = evo
                .population
                .best()
                .map(|m| m.fitness())
                .unwrap_or(Fitness::MAX);

            if best_fitness == 0 && first_solution_at.is_none() {
                first_solution_at = Some(generation);
                info!("Solution found at generation {}", generation);
            }

            let stats = GenerationStats {
                best_fitness,
                population: evo.population.len(),
                offspring: crossed.accepted,
                mutated: mutated.indices.len(),
            };
            callback.on_generation(generation, &stats);

            if opts.report_every > 0 && generation % opts.report_every == 0 {
                info!(
                    "Gen {:5} | Best: {:3} | Pool: {:4} | +{} children, +{} mutants",
                    generation, stats.best_fitness, stats.population, stats.offspring, stats.mutated
                );
            }
        }

        // 4. Final ranking
        evo.finalize();
        debug_assert_eq!(evo.phase(), Phase::Finalized);

        Ok(OptimizationResult {
            iterations: opts.iterations,
            population: evo.population.into_members(),
            first_solution_at,
        })
    }
}
