// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! End-to-end properties of the whole solver family.

use rand::{SeedableRng, rngs::StdRng};
use rucksack_bnb::BoundStrategy;
use rucksack_model::{index::ItemIndex, instance::Instance, solution::Solution};
use rucksack_search::result::SolverResult;
use rucksack_solver::{KnapsackSolver, Strategy, cross_validate};
use std::time::{Duration, Instant};

type IntegerType = i64;

fn solve(strategy: Strategy, instance: &Instance<IntegerType>) -> (SolverResult<IntegerType>, u64) {
    let solver = KnapsackSolver::new(strategy);
    let mut best = Solution::for_instance(instance);
    let outcome = solver.solve(instance, &mut best);
    (*outcome.result(), outcome.statistics().nodes_explored)
}

#[test]
fn test_every_strategy_finds_seven_on_the_small_scenario() {
    let instance = Instance::<IntegerType>::from_items(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
    for strategy in Strategy::ALL {
        let (result, _) = solve(strategy, &instance);
        assert_eq!(result, SolverResult::Optimal(7), "strategy {strategy}");
    }
}

#[test]
fn test_every_strategy_finds_220_on_the_classic_scenario() {
    let instance = Instance::<IntegerType>::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
    for strategy in Strategy::ALL {
        let (result, _) = solve(strategy, &instance);
        assert_eq!(result, SolverResult::Optimal(220), "strategy {strategy}");
    }
}

#[test]
fn test_boundary_instances_yield_optimal_zero() {
    let boundaries = [
        Instance::<IntegerType>::from_items(&[], 10),
        Instance::<IntegerType>::from_items(&[(1, 5), (2, 9)], 0),
        Instance::<IntegerType>::from_items(&[(10, 100)], 5),
    ];
    for instance in &boundaries {
        for strategy in Strategy::ALL {
            let (result, _) = solve(strategy, instance);
            assert_eq!(result, SolverResult::Optimal(0), "strategy {strategy}");
        }
    }
}

#[test]
fn test_best_solutions_are_feasible_and_consistent() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..4 {
        let instance = Instance::<IntegerType>::random(14, &mut rng);
        for strategy in Strategy::ALL {
            let solver = KnapsackSolver::new(strategy);
            let mut best = Solution::for_instance(&instance);
            let outcome = solver.solve(&instance, &mut best);
            assert!(outcome.is_optimal());
            assert!(best.taken_weight(&instance) <= instance.capacity());
            assert_eq!(best.value(), outcome.best_value().unwrap());
            // Recomputing must reproduce the cached value.
            assert_eq!(best.compute_value(&instance), outcome.best_value().unwrap());
        }
    }
}

#[test]
fn test_node_counts_shrink_with_pruning_strength() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..4 {
        let instance = Instance::<IntegerType>::random(13, &mut rng);
        let (_, brute_force) = solve(Strategy::BruteForce, &instance);
        let (_, backtracking) = solve(Strategy::Backtracking, &instance);
        let (_, remaining_value) = solve(
            Strategy::BranchAndBound(BoundStrategy::RemainingValue),
            &instance,
        );
        let (_, residual_fit) = solve(
            Strategy::BranchAndBound(BoundStrategy::ResidualFit),
            &instance,
        );
        let (_, relaxation) = solve(
            Strategy::BranchAndBound(BoundStrategy::FractionalRelaxation),
            &instance,
        );

        assert!(backtracking <= brute_force);
        assert!(remaining_value <= backtracking);
        assert!(residual_fit <= remaining_value);
        assert!(relaxation <= remaining_value);
    }
}

#[test]
fn test_expired_budget_stays_below_the_oracle_optimum() {
    let mut rng = StdRng::seed_from_u64(61);
    let instance = Instance::<IntegerType>::random(64, &mut rng);

    let mut oracle_best = Solution::for_instance(&instance);
    let oracle = KnapsackSolver::new(Strategy::DynamicProgramming)
        .solve(&instance, &mut oracle_best);
    let optimum = oracle.best_value().unwrap();

    let solver = KnapsackSolver::with_time_limit(
        Strategy::BranchAndBound(BoundStrategy::RemainingValue),
        Duration::from_millis(10),
    );
    let mut best = Solution::for_instance(&instance);
    let start = Instant::now();
    let outcome = solver.solve(&instance, &mut best);
    let elapsed = start.elapsed();

    assert!(outcome.is_aborted());
    assert!(elapsed < Duration::from_secs(5), "overshoot: {elapsed:?}");
    match outcome.result() {
        SolverResult::Feasible(value) => {
            assert!(*value <= optimum);
            assert!(best.taken_weight(&instance) <= instance.capacity());
        }
        SolverResult::Unknown => assert!(!best.is_valid()),
        SolverResult::Optimal(_) => panic!("aborted run reported optimal"),
    }
}

#[test]
fn test_cross_validation_passes_on_random_instances() {
    let mut rng = StdRng::seed_from_u64(73);
    for _ in 0..3 {
        let instance = Instance::<IntegerType>::random(13, &mut rng);
        let reports = cross_validate(&instance, &Strategy::ALL, Duration::from_secs(30))
            .expect("strategies disagreed with the oracle");
        assert_eq!(reports.len(), Strategy::ALL.len());
        for report in &reports {
            assert!(report.outcome.is_optimal(), "strategy {}", report.strategy);
        }
    }
}

#[test]
fn test_ties_keep_a_valid_optimal_assignment() {
    // Items 1 and 2 are interchangeable; the optimum value 5 is unique but
    // its assignment is not. Whichever is reported must be consistent.
    let instance = Instance::<IntegerType>::from_items(&[(3, 5), (3, 5)], 3);
    for strategy in Strategy::ALL {
        let solver = KnapsackSolver::new(strategy);
        let mut best = Solution::for_instance(&instance);
        let outcome = solver.solve(&instance, &mut best);
        assert_eq!(outcome.best_value(), Some(5), "strategy {strategy}");
        let taken: Vec<ItemIndex> = best.taken_items().collect();
        assert_eq!(taken.len(), 1);
    }
}
