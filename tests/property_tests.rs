mod common;

use common::{attacks, pool};
use proptest::prelude::*;
use queenforge::config::{DuplicateCheck, GeneWrap, PopulationParams};
use queenforge::fitness::{conflicts, evaluate, max_conflicts};
use queenforge::optimizer::{splice, Evolution, Population};

// --- STRATEGIES ---

prop_compose! {
    fn arb_board()(n in 1usize..12)(genes in proptest::collection::vec(0..n, n)) -> Vec<usize> {
        genes
    }
}

prop_compose! {
    fn arb_parents()(n in 1usize..12)(
        p1 in proptest::collection::vec(0..n, n),
        p2 in proptest::collection::vec(0..n, n),
        point in 0..n
    ) -> (Vec<usize>, Vec<usize>, usize) {
        (p1, p2, point)
    }
}

prop_compose! {
    fn arb_pool()(n in 1usize..10)(
        boards in proptest::collection::vec(proptest::collection::vec(0..n, n), 1..60)
    ) -> Vec<Vec<usize>> {
        boards
    }
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_fitness_bounded(board in arb_board()) {
        let f = evaluate(&board);
        prop_assert!(f <= max_conflicts(board.len()));
        prop_assert_eq!(f as usize, conflicts(&board).len());
    }

    #[test]
    fn prop_zero_iff_no_attacks(board in arb_board()) {
        prop_assert_eq!(evaluate(&board) == 0, !attacks(&board));
    }

    #[test]
    fn prop_select_bounds_and_sorts(boards in arb_pool(), cap in 1usize..80) {
        let refs: Vec<&[usize]> = boards.iter().map(|b| b.as_slice()).collect();
        let mut p = pool(&refs);
        p.select(cap);
        prop_assert!(p.len() <= cap);
        prop_assert_eq!(p.len(), boards.len().min(cap));
        prop_assert!(p.is_sorted());

        let mut again = p.clone();
        again.select(cap);
        prop_assert_eq!(p.members(), again.members());
    }

    #[test]
    fn prop_splice_repartitions((p1, p2, point) in arb_parents()) {
        let (a, b) = splice(&p1, &p2, point);
        prop_assert_eq!(a.len(), p1.len());
        prop_assert_eq!(b.len(), p2.len());
        prop_assert_eq!(&a[..point], &p1[..point]);
        prop_assert_eq!(&a[point..], &p2[point..]);
        prop_assert_eq!(&b[..point], &p2[..point]);
        prop_assert_eq!(&b[point..], &p1[point..]);

        let children: Vec<usize> = a.iter().chain(b.iter()).copied().collect();
        let parents: Vec<usize> = p1.iter().chain(p2.iter()).copied().collect();
        prop_assert_eq!(sorted(children), sorted(parents));
    }

    #[test]
    fn prop_crossover_reproducible(seed in any::<u64>()) {
        let params = PopulationParams {
            duplicate_check: DuplicateCheck::FullBoard,
            ..Default::default()
        };
        let mut a = Evolution::new(&params, fastrand::Rng::with_seed(seed));
        let mut b = Evolution::new(&params, fastrand::Rng::with_seed(seed));
        let out_a = a.crossover(32).unwrap();
        let out_b = b.crossover(32).unwrap();
        prop_assert_eq!(out_a, out_b);
        prop_assert_eq!(a.population.members(), b.population.members());
    }

    #[test]
    fn prop_wrap_mutation_stays_on_board(seed in any::<u64>(), queens in 1usize..10) {
        let params = PopulationParams {
            queens,
            initial_size: 20,
            gene_wrap: GeneWrap::Wrap,
            ..Default::default()
        };
        let mut evo = Evolution::new(&params, fastrand::Rng::with_seed(seed));
        for _ in 0..10 {
            evo.mutate(0.2).unwrap();
        }
        for m in evo.population.iter() {
            prop_assert_eq!(m.genes().len(), queens);
            prop_assert!(m.genes().iter().all(|&g| g < queens));
            prop_assert_eq!(m.fitness(), evaluate(m.genes()));
        }
    }

    #[test]
    fn prop_sentinel_mutation_never_passes_n(seed in any::<u64>(), queens in 1usize..10) {
        let params = PopulationParams {
            queens,
            initial_size: 20,
            gene_wrap: GeneWrap::Sentinel,
            ..Default::default()
        };
        let mut evo = Evolution::new(&params, fastrand::Rng::with_seed(seed));
        for _ in 0..10 {
            evo.mutate(0.2).unwrap();
        }
        for m in evo.population.iter() {
            prop_assert_eq!(m.genes().len(), queens);
            prop_assert!(m.genes().iter().all(|&g| g <= queens));
        }
    }
}

#[test]
fn test_population_seed_shape() {
    let mut rng = fastrand::Rng::with_seed(8);
    let p = Population::seed(&mut rng, 8, 32);
    assert_eq!(p.len(), 32);
    assert!(p.iter().all(|m| m.genes().len() == 8));
}
