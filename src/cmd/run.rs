use crate::reports;
use clap::Args;
use queenforge::config::Config;
use queenforge::error::QfResult;
use queenforge::optimizer::{GenerationStats, Optimizer, ProgressCallback};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Only list the first K boards of the final population
    #[arg(short = 't', long)]
    pub top: Option<usize>,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_generation(&self, generation: usize, stats: &GenerationStats) {
        debug!(
            "gen {} best {} pool {}",
            generation, stats.best_fitness, stats.population
        );
    }
}

pub fn run(args: RunArgs) -> QfResult<()> {
    let optimizer = Optimizer::from_config(&args.config)?;

    info!(
        "♛ Evolving {} queens: pool {} (cap {}), {} generations",
        args.config.population.queens,
        args.config.population.initial_size,
        args.config.population.max_population,
        args.config.run.iterations
    );

    let result = optimizer.run_seeded(args.seed, CliLogger)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Iterations took {}", result.iterations);
    reports::print_population_table(&result.population, args.top);

    println!("Solutions in final population: {}", result.solutions().count());
    match result.first_solution_at {
        Some(g) => println!("First solved at generation: {}", g),
        None => println!("First solved at generation: never"),
    }

    if let Some(best) = result.best() {
        println!("Best fitness: {}", best.fitness());
        reports::print_board_grid("BEST", best.genes());
    }
    Ok(())
}
