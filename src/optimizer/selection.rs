use crate::board::{random_board, ScoredChromosome};
use crate::rng::RandomSource;

/// Growable pool of scored boards.
///
/// Reproduction only ever appends; [`Population::select`] is the one place
/// the pool is sorted and cut back to its cap.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<ScoredChromosome>,
}

impl Population {
    pub fn seed<R: RandomSource + ?Sized>(rng: &mut R, queens: usize, initial_size: usize) -> Self {
        let members = (0..initial_size)
            .map(|_| ScoredChromosome::new(random_board(rng, queens)))
            .collect();
        Self { members }
    }

    pub fn from_members(members: Vec<ScoredChromosome>) -> Self {
        Self { members }
    }

    /// Stable ascending sort by fitness, then truncation to `max_population`.
    /// Members with equal fitness keep their relative order.
    pub fn select(&mut self, max_population: usize) {
        self.members.sort_by_key(|m| m.fitness());
        self.members.truncate(max_population);
    }

    pub fn push(&mut self, member: ScoredChromosome) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScoredChromosome> {
        self.members.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredChromosome> {
        self.members.iter()
    }

    pub fn members(&self) -> &[ScoredChromosome] {
        &self.members
    }

    pub fn into_members(self) -> Vec<ScoredChromosome> {
        self.members
    }

    /// Lowest-fitness member. Scans, so appended members count too.
    pub fn best(&self) -> Option<&ScoredChromosome> {
        self.members.iter().min_by_key(|m| m.fitness())
    }

    pub fn solutions(&self) -> impl Iterator<Item = &ScoredChromosome> {
        self.members.iter().filter(|m| m.is_solution())
    }

    pub fn is_sorted(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| w[0].fitness() <= w[1].fitness())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a ScoredChromosome;
    type IntoIter = std::slice::Iter<'a, ScoredChromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
