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

//! Branch-and-bound solver for the 0/1 knapsack problem.
//!
//! The engine walks the binary take/skip tree in item order. At each item
//! the take branch is explored first whenever the item fits the residual
//! capacity; the skip branch is then explored only if the configured bound
//! admits that the undecided suffix could still beat the incumbent. Leaves
//! are evaluated through `Solution::compute_value` and improving leaves are
//! snapshotted into the caller's out-solution.
//!
//! All per-run state lives in a `SearchSession` created inside the solve
//! call: running weight/value sums, the scratch assignment, the incumbent
//! value, statistics, and the abort flag. The solver struct itself holds
//! only configuration, so one solver can serve any number of sequential
//! solve calls without cross-talk.
//!
//! Termination is cooperative: the monitor is polled at every node entry,
//! and a `Terminate` command unwinds the recursion without exploring
//! further children. The best solution found before the abort is preserved,
//! which makes the engine an anytime algorithm under a wall-clock budget.

use crate::bounds::{BoundState, BoundStrategy};
use rucksack_model::{index::ItemIndex, instance::Instance, solution::Solution};
use rucksack_search::{
    monitor::{
        composite::CompositeMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
        time_limit::TimeLimitMonitor,
    },
    num::SolverNumeric,
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::SearchStatistics,
};
use std::time::{Duration, Instant};

/// The default wall-clock budget of a solve call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// A branch-and-bound solver configured with a pruning bound and a
/// wall-clock budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbSolver<T> {
    strategy: BoundStrategy,
    time_limit: Duration,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new(BoundStrategy::default())
    }
}

impl<T> BnbSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a solver with the given bound and the default time limit.
    #[inline]
    pub fn new(strategy: BoundStrategy) -> Self {
        Self::with_time_limit(strategy, DEFAULT_TIME_LIMIT)
    }

    /// Creates a solver with the given bound and time limit.
    #[inline]
    pub fn with_time_limit(strategy: BoundStrategy, time_limit: Duration) -> Self {
        Self {
            strategy,
            time_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured bound strategy.
    #[inline]
    pub fn strategy(&self) -> BoundStrategy {
        self.strategy
    }

    /// Returns the configured wall-clock budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Solves `instance`, writing the best assignment found into `best`.
    ///
    /// `best` is reset first; on `Unknown` outcomes it stays empty with an
    /// invalid cached value.
    pub fn solve(&self, instance: &Instance<T>, best: &mut Solution<T>) -> SolverOutcome<T> {
        let monitor = TimeLimitMonitor::new(self.time_limit);
        self.solve_internal(instance, best, monitor)
    }

    /// Solves `instance` with an additional caller-supplied monitor,
    /// composed with the configured time limit.
    pub fn solve_with_monitor<'a, M>(
        &self,
        instance: &Instance<T>,
        best: &mut Solution<T>,
        monitor: M,
    ) -> SolverOutcome<T>
    where
        M: SearchMonitor<T> + 'a,
        T: 'a,
    {
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(monitor);
        composite.add_monitor(TimeLimitMonitor::new(self.time_limit));
        self.solve_internal(instance, best, composite)
    }

    fn solve_internal<M>(
        &self,
        instance: &Instance<T>,
        best: &mut Solution<T>,
        mut monitor: M,
    ) -> SolverOutcome<T>
    where
        M: SearchMonitor<T>,
    {
        best.reset();
        let start = Instant::now();
        monitor.on_enter_search(instance);

        let mut session = SearchSession {
            instance,
            bound: BoundState::for_strategy(self.strategy, instance),
            monitor: &mut monitor,
            statistics: SearchStatistics::default(),
            current: Solution::for_instance(instance),
            best,
            incumbent_value: Solution::<T>::INVALID_VALUE,
            taken_weight: T::zero(),
            taken_value: T::zero(),
            aborted: None,
        };
        session.explore(1);

        let SearchSession {
            mut statistics,
            incumbent_value,
            aborted,
            ..
        } = session;

        monitor.on_exit_search();
        statistics.set_total_time(start.elapsed());

        let (result, reason) = match aborted {
            // A completed search always reached at least one leaf: before
            // the first leaf the incumbent is -1 and no bound can prune
            // against it.
            None => (
                SolverResult::Optimal(incumbent_value),
                TerminationReason::OptimalityProven,
            ),
            Some(reason) => {
                let result = if incumbent_value == Solution::<T>::INVALID_VALUE {
                    SolverResult::Unknown
                } else {
                    SolverResult::Feasible(incumbent_value)
                };
                (result, TerminationReason::Aborted(reason))
            }
        };
        SolverOutcome::new(result, reason, statistics)
    }
}

impl<T> std::fmt::Display for BnbSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbSolver(bound: {}, time_limit: {:?})",
            self.strategy, self.time_limit
        )
    }
}

/// All state of one running solve call.
struct SearchSession<'a, T, M> {
    instance: &'a Instance<T>,
    bound: BoundState<T>,
    monitor: &'a mut M,
    statistics: SearchStatistics,
    current: Solution<T>,
    best: &'a mut Solution<T>,
    incumbent_value: T,
    taken_weight: T,
    taken_value: T,
    aborted: Option<String>,
}

impl<'a, T, M> SearchSession<'a, T, M>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    /// Recursively explores the subtree rooted at the decision over
    /// `item_id`. `item_id == item_count + 1` is a leaf.
    fn explore(&mut self, item_id: usize) {
        self.statistics.on_node_explored();
        self.statistics.on_depth_update(item_id as u64 - 1);
        self.monitor.on_step();
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.aborted = Some(reason);
            return;
        }

        if item_id > self.instance.item_count() {
            self.evaluate_leaf();
            return;
        }

        let item = ItemIndex::new(item_id);
        let weight = self.instance.weight(item);
        let residual = self.instance.capacity() - self.taken_weight;

        // Take branch first, whenever the item fits.
        if weight <= residual {
            self.current.take(item);
            self.taken_weight = self.taken_weight + weight;
            self.taken_value = self.taken_value + self.instance.value(item);
            self.explore(item_id + 1);
            self.taken_value = self.taken_value - self.instance.value(item);
            self.taken_weight = self.taken_weight - weight;
            self.current.release(item);
            if self.aborted.is_some() {
                return;
            }
        } else {
            self.statistics.on_pruning_capacity();
        }

        // Skip branch, guarded by the bound.
        if self.bound.should_prune_skip(
            self.instance,
            item,
            self.taken_value,
            residual,
            self.incumbent_value,
        ) {
            self.statistics.on_pruning_bound();
            return;
        }
        self.explore(item_id + 1);
    }

    fn evaluate_leaf(&mut self) {
        self.statistics.on_leaf_evaluated();
        let value = self.current.compute_value(self.instance);
        if value > self.incumbent_value {
            self.incumbent_value = value;
            self.best.copy_from(&self.current);
            self.statistics.on_solution_found();
            self.monitor.on_solution_found(self.best);
        }
    }
}
