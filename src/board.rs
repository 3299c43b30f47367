use crate::error::{QfResult, QueenForgeError};
use crate::fitness;
use crate::rng::RandomSource;
use serde::Serialize;

/// Row of the queen standing in one column.
pub type Gene = usize;

/// One candidate board: index = column, value = row.
pub type Chromosome = Vec<Gene>;

/// Number of attacking pairs. 0 means the board is solved.
pub type Fitness = u32;

/// A board paired with its cached conflict count.
///
/// The only constructor evaluates the genes, so the cached value always
/// matches the board it sits next to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredChromosome {
    genes: Chromosome,
    fitness: Fitness,
}

impl ScoredChromosome {
    pub fn new(genes: Chromosome) -> Self {
        let fitness = fitness::evaluate(&genes);
        Self { genes, fitness }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn is_solution(&self) -> bool {
        self.fitness == 0
    }

    pub fn into_genes(self) -> Chromosome {
        self.genes
    }
}

/// Draws `queens` rows independently and uniformly, repeats allowed.
pub fn random_board<R: RandomSource + ?Sized>(rng: &mut R, queens: usize) -> Chromosome {
    (0..queens).map(|_| rng.below(queens)).collect()
}

/// True when every queen sits on a row of the N×N board.
pub fn is_on_board(genes: &[Gene]) -> bool {
    let n = genes.len();
    genes.iter().all(|&row| row < n)
}

/// Parses a board written as `"1,3,0,2"` or `"1 3 0 2"`.
pub fn parse_board(text: &str, queens: usize) -> QfResult<Chromosome> {
    let genes = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Gene>()
                .map_err(|_| QueenForgeError::Parse(format!("'{}' is not a row number", s)))
        })
        .collect::<QfResult<Chromosome>>()?;

    if genes.len() != queens {
        return Err(QueenForgeError::Parse(format!(
            "expected {} rows, found {}",
            queens,
            genes.len()
        )));
    }

    if let Some(&bad) = genes.iter().find(|&&row| row >= queens) {
        return Err(QueenForgeError::Parse(format!(
            "row {} is outside 0..{}",
            bad, queens
        )));
    }

    Ok(genes)
}
