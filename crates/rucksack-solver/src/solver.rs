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

//! # Strategy Facade
//!
//! A single entry point over all solving engines. Callers pick a
//! [`Strategy`], the facade dispatches to the matching engine and returns
//! the engine's outcome unchanged. `cross_validate` runs a set of
//! strategies against the dynamic-programming oracle and reports the first
//! disagreement as a typed error, which is how the whole workspace checks
//! itself on arbitrary instances.

use rucksack_bnb::{
    BacktrackingSolver, BnbSolver, BoundStrategy, BruteForceSolver, bnb::DEFAULT_TIME_LIMIT,
};
use rucksack_dp::DpSolver;
use rucksack_model::{instance::Instance, solution::Solution};
use rucksack_search::{
    num::SolverNumeric,
    result::{SolverOutcome, SolverResult},
};
use std::time::Duration;

/// Selects the engine a [`KnapsackSolver`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full enumeration of all assignments.
    BruteForce,
    /// Take-first enumeration with a capacity guard.
    Backtracking,
    /// Branch and bound with the given pruning bound.
    BranchAndBound(BoundStrategy),
    /// Exact O(n * capacity) tabulation; ignores the time budget.
    DynamicProgramming,
}

impl Strategy {
    /// Every strategy, ordered from weakest to strongest pruning.
    pub const ALL: [Strategy; 6] = [
        Strategy::BruteForce,
        Strategy::Backtracking,
        Strategy::BranchAndBound(BoundStrategy::RemainingValue),
        Strategy::BranchAndBound(BoundStrategy::ResidualFit),
        Strategy::BranchAndBound(BoundStrategy::FractionalRelaxation),
        Strategy::DynamicProgramming,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::BruteForce => write!(f, "BruteForce"),
            Strategy::Backtracking => write!(f, "Backtracking"),
            Strategy::BranchAndBound(bound) => write!(f, "BranchAndBound({})", bound),
            Strategy::DynamicProgramming => write!(f, "DynamicProgramming"),
        }
    }
}

/// The facade over all engines: one strategy, one time budget, one `solve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolver<T> {
    strategy: Strategy,
    time_limit: Duration,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> KnapsackSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a solver for `strategy` with the default time limit.
    #[inline]
    pub fn new(strategy: Strategy) -> Self {
        Self::with_time_limit(strategy, DEFAULT_TIME_LIMIT)
    }

    /// Creates a solver for `strategy` with the given time limit. The
    /// dynamic-programming engine always runs to completion regardless.
    #[inline]
    pub fn with_time_limit(strategy: Strategy, time_limit: Duration) -> Self {
        Self {
            strategy,
            time_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the configured wall-clock budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Solves `instance` with the configured engine, writing the best
    /// assignment found into `best`.
    pub fn solve(&self, instance: &Instance<T>, best: &mut Solution<T>) -> SolverOutcome<T> {
        match self.strategy {
            Strategy::BruteForce => {
                BruteForceSolver::with_time_limit(self.time_limit).solve(instance, best)
            }
            Strategy::Backtracking => {
                BacktrackingSolver::with_time_limit(self.time_limit).solve(instance, best)
            }
            Strategy::BranchAndBound(bound) => {
                BnbSolver::with_time_limit(bound, self.time_limit).solve(instance, best)
            }
            Strategy::DynamicProgramming => DpSolver::new().solve(instance, best),
        }
    }
}

impl<T> std::fmt::Display for KnapsackSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KnapsackSolver(strategy: {}, time_limit: {:?})",
            self.strategy, self.time_limit
        )
    }
}

/// One strategy's result within a cross-validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport<T>
where
    T: SolverNumeric,
{
    pub strategy: Strategy,
    pub outcome: SolverOutcome<T>,
}

impl<T> std::fmt::Display for StrategyReport<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<40} {} in {:.2?}",
            self.strategy.to_string(),
            self.outcome,
            self.outcome.statistics().time_total
        )
    }
}

/// A disagreement between a strategy and the dynamic-programming oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossValidationError<T> {
    /// A strategy claimed optimality at a value other than the oracle's.
    OptimalValueMismatch {
        strategy: Strategy,
        expected: T,
        found: T,
    },
    /// An aborted strategy reported a feasible value above the optimum,
    /// which no feasible assignment can reach.
    FeasibleValueExceedsOptimum {
        strategy: Strategy,
        optimum: T,
        found: T,
    },
}

impl<T> std::fmt::Display for CrossValidationError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossValidationError::OptimalValueMismatch {
                strategy,
                expected,
                found,
            } => write!(
                f,
                "strategy {} proved optimality at {} but the oracle found {}",
                strategy, found, expected
            ),
            CrossValidationError::FeasibleValueExceedsOptimum {
                strategy,
                optimum,
                found,
            } => write!(
                f,
                "strategy {} reported feasible value {} above the optimum {}",
                strategy, found, optimum
            ),
        }
    }
}

impl<T> std::error::Error for CrossValidationError<T> where T: std::fmt::Display + std::fmt::Debug {}

/// Runs every strategy in `strategies` on `instance` and checks each
/// against the dynamic-programming oracle.
///
/// Optimal outcomes must match the oracle's value exactly; aborted outcomes
/// may fall short of it but never exceed it. On success the per-strategy
/// reports (with timings in their statistics) are returned in input order.
pub fn cross_validate<T>(
    instance: &Instance<T>,
    strategies: &[Strategy],
    time_limit: Duration,
) -> Result<Vec<StrategyReport<T>>, CrossValidationError<T>>
where
    T: SolverNumeric,
{
    let mut oracle_best = Solution::for_instance(instance);
    let oracle = DpSolver::new().solve(instance, &mut oracle_best);
    let optimum = match oracle.result() {
        SolverResult::Optimal(value) => *value,
        // The oracle always proves optimality.
        _ => unreachable!("dynamic-programming oracle returned a non-optimal result"),
    };

    let mut reports = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let solver = KnapsackSolver::with_time_limit(strategy, time_limit);
        let mut best = Solution::for_instance(instance);
        let outcome = solver.solve(instance, &mut best);
        match outcome.result() {
            SolverResult::Optimal(value) if *value != optimum => {
                return Err(CrossValidationError::OptimalValueMismatch {
                    strategy,
                    expected: optimum,
                    found: *value,
                });
            }
            SolverResult::Feasible(value) if *value > optimum => {
                return Err(CrossValidationError::FeasibleValueExceedsOptimum {
                    strategy,
                    optimum,
                    found: *value,
                });
            }
            _ => {}
        }
        reports.push(StrategyReport { strategy, outcome });
    }
    Ok(reports)
}
