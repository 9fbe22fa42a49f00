//! Solver integration tests: fixed positions, determinism, table transparency.

use proptest::prelude::*;

use dou_solver::core::{Deal, Hand, Rank};
use dou_solver::moves::Move;
use dou_solver::search::{solve, Solver, SolverConfig};

fn hand(counts: &[(u8, u8)]) -> Hand {
    Hand::from_counts(counts).unwrap()
}

// =============================================================================
// Fixed Positions
// =============================================================================

#[test]
fn test_triple_against_pairs() {
    let a = hand(&[(3, 3), (4, 1), (5, 1)]);
    let b = hand(&[(6, 2), (7, 2), (8, 2)]);

    // Triple of 3s with a kicker cannot be answered; the last single goes out.
    assert!(solve(&a, &b, &Move::Pass));
    assert!(solve(&b, &a, &Move::Pass));
}

#[test]
fn test_fixture_is_stable_across_solvers() {
    let a = hand(&[(3, 3), (4, 1), (5, 1)]);
    let b = hand(&[(6, 2), (7, 2), (8, 2)]);

    let mut warm = Solver::default();
    let mut cold = Solver::new(SolverConfig::default().with_table(false));
    for _ in 0..3 {
        assert!(warm.solve(&a, &b, &Move::Pass));
        assert!(cold.solve(&a, &b, &Move::Pass));
    }
    assert!(cold.table().is_empty());
    assert!(!warm.table().is_empty());
}

#[test]
fn test_short_races() {
    assert!(solve(&hand(&[(3, 1), (5, 1)]), &hand(&[(4, 1)]), &Move::Pass));
    assert!(!solve(&hand(&[(3, 1), (4, 1)]), &hand(&[(5, 1)]), &Move::Pass));
    assert!(!solve(&hand(&[(3, 1)]), &hand(&[(4, 1)]), &Move::Single(Rank::FIVE)));
    assert!(solve(&hand(&[(16, 1), (17, 1)]), &hand(&[(3, 1)]), &Move::Pass));
}

#[test]
fn test_bomb_takes_the_lead() {
    // The only way through the opponent's 2 is to bomb it, then lead the 3.
    let mover = hand(&[(9, 4), (3, 1)]);
    let opponent = hand(&[(4, 1), (5, 1)]);
    assert!(solve(&mover, &opponent, &Move::Single(Rank::TWO)));
}

#[test]
fn test_opponent_out_is_loss() {
    assert!(!solve(&hand(&[(3, 4), (16, 1), (17, 1)]), &Hand::new(), &Move::Pass));
}

#[test]
fn test_hands_untouched() {
    let a = hand(&[(3, 3), (4, 3), (5, 1), (6, 1), (9, 2)]);
    let b = hand(&[(7, 2), (8, 2), (10, 1), (14, 1)]);
    let (a0, b0) = (a, b);

    let mut solver = Solver::default();
    solver.solve(&a, &b, &Move::Pass);

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// =============================================================================
// Determinism / Table Transparency
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_table_does_not_change_verdict(seed in any::<u64>(), first in 1usize..=5, second in 1usize..=5) {
        let deal = Deal::random(seed, first, second);

        let with_table = Solver::default().solve(&deal.first, &deal.second, &Move::Pass);
        let without = Solver::new(SolverConfig::default().with_table(false))
            .solve(&deal.first, &deal.second, &Move::Pass);

        prop_assert_eq!(with_table, without);
    }

    #[test]
    fn prop_shared_solver_matches_fresh(seed in any::<u64>()) {
        let deal = Deal::random(seed, 6, 6);
        let mut shared = Solver::default();

        let forward = shared.solve(&deal.first, &deal.second, &Move::Pass);
        let backward = shared.solve(&deal.second, &deal.first, &Move::Pass);

        prop_assert_eq!(forward, solve(&deal.first, &deal.second, &Move::Pass));
        prop_assert_eq!(backward, solve(&deal.second, &deal.first, &Move::Pass));
    }
}

#[test]
fn test_random_deals_deterministic() {
    for seed in 0..8 {
        let deal = Deal::random(seed, 7, 7);
        let first = solve(&deal.first, &deal.second, &Move::Pass);
        let second = solve(&deal.first, &deal.second, &Move::Pass);
        assert_eq!(first, second, "seed {}", seed);
    }
}
