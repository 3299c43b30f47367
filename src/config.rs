use crate::error::{QfResult, QueenForgeError};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub population: PopulationParams,
    #[command(flatten)]
    pub run: RunParams,
}

/// How crossover decides a child is already in the pool.
#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCheck {
    /// Reject when any member shares the child's first gene.
    #[default]
    FirstGene,
    /// Reject only an identical board.
    FullBoard,
}

/// What a mutation does to a gene at the top of the range.
#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GeneWrap {
    /// `(g + 1) % N`, genes never leave the board.
    #[default]
    Wrap,
    /// Reset to 0 only once the gene equals N, so N-1 steps up to N first.
    Sentinel,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct PopulationParams {
    /// Population cap restored by every selection pass
    #[arg(long, default_value_t = 100)]
    pub max_population: usize,
    /// Board size N
    #[arg(short = 'q', long, default_value_t = 8)]
    pub queens: usize,
    /// Number of random boards seeded at start
    #[arg(long, default_value_t = 32)]
    pub initial_size: usize,
    #[arg(long, value_enum, default_value_t = DuplicateCheck::FirstGene)]
    pub duplicate_check: DuplicateCheck,
    #[arg(long, value_enum, default_value_t = GeneWrap::Wrap)]
    pub gene_wrap: GeneWrap,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            max_population: 100,
            queens: 8,
            initial_size: 32,
            duplicate_check: DuplicateCheck::FirstGene,
            gene_wrap: GeneWrap::Wrap,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Generations to run; the loop never stops early
    #[arg(short = 'i', long, alias = "set-iterations", default_value_t = 1000)]
    pub iterations: usize,
    /// Top-ranked members paired for crossover
    #[arg(long, default_value_t = 32)]
    pub n_best: usize,
    /// floor(mut_rate * 100) members are mutated per generation
    #[arg(long, default_value_t = 0.05)]
    pub mut_rate: f64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            iterations: 1000,
            n_best: 32,
            mut_rate: 0.05,
        }
    }
}

impl RunParams {
    /// Number of members sampled by one mutation pass.
    pub fn mutation_count(&self) -> usize {
        mutation_count(self.mut_rate)
    }
}

pub fn mutation_count(mut_rate: f64) -> usize {
    (mut_rate * 100.0).floor() as usize
}

impl Config {
    pub fn validate(&self) -> QfResult<()> {
        let pop = &self.population;
        let run = &self.run;

        if pop.queens == 0 {
            return Err(QueenForgeError::Config("queens must be at least 1".into()));
        }
        if pop.max_population == 0 {
            return Err(QueenForgeError::Config(
                "max_population must be at least 1".into(),
            ));
        }
        if pop.initial_size == 0 {
            return Err(QueenForgeError::Config(
                "initial_size must be at least 1".into(),
            ));
        }
        if run.n_best % 2 != 0 {
            return Err(QueenForgeError::Config(format!(
                "n_best must be even, got {}",
                run.n_best
            )));
        }

        // Smallest population a generation can start from.
        let floor = pop.initial_size.min(pop.max_population);

        if run.n_best > floor {
            return Err(QueenForgeError::Config(format!(
                "n_best ({}) exceeds the selected population ({})",
                run.n_best, floor
            )));
        }
        if !run.mut_rate.is_finite() || run.mut_rate < 0.0 {
            return Err(QueenForgeError::Config(format!(
                "mut_rate must be a non-negative number, got {}",
                run.mut_rate
            )));
        }
        if run.mutation_count() > floor {
            return Err(QueenForgeError::Config(format!(
                "mut_rate {} samples {} members but the selected population holds {}",
                run.mut_rate,
                run.mutation_count(),
                floor
            )));
        }
        Ok(())
    }
}
