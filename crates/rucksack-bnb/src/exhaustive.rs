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

//! Exhaustive take/skip engines without bound-based pruning.
//!
//! `BruteForceSolver` enumerates every one of the `2^n` subsets and defers
//! all feasibility checking to leaf evaluation. `BacktrackingSolver` walks
//! the same tree take-first but refuses to descend into take branches that
//! already exceed the capacity, so it visits a subset of the brute-force
//! tree. Both serve as correctness baselines for the branch-and-bound
//! engine and share its monitor and time-budget machinery.

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

use crate::bnb::DEFAULT_TIME_LIMIT;

/// Full enumeration of all `2^n` assignments.
///
/// The skip branch is explored first, so the all-empty leaf is the first
/// one evaluated and the engine has an incumbent almost immediately.
/// Infeasible leaves evaluate to the invalid sentinel and never displace
/// the incumbent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceSolver<T> {
    time_limit: Duration,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for BruteForceSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BruteForceSolver<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self::with_time_limit(DEFAULT_TIME_LIMIT)
    }

    #[inline]
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self {
            time_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured wall-clock budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Solves `instance`, writing the best assignment found into `best`.
    pub fn solve(&self, instance: &Instance<T>, best: &mut Solution<T>) -> SolverOutcome<T> {
        let monitor = TimeLimitMonitor::new(self.time_limit);
        solve_enumeration(instance, best, monitor, EnumerationMode::BruteForce)
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
        solve_enumeration(instance, best, composite, EnumerationMode::BruteForce)
    }
}

impl<T> std::fmt::Display for BruteForceSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BruteForceSolver(time_limit: {:?})", self.time_limit)
    }
}

/// Take-first enumeration with a capacity guard on the take branch.
///
/// Every leaf reached is feasible by construction; the guard prunes exactly
/// the subtrees brute force wastes on overweight assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackingSolver<T> {
    time_limit: Duration,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for BacktrackingSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BacktrackingSolver<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self::with_time_limit(DEFAULT_TIME_LIMIT)
    }

    #[inline]
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self {
            time_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured wall-clock budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Solves `instance`, writing the best assignment found into `best`.
    pub fn solve(&self, instance: &Instance<T>, best: &mut Solution<T>) -> SolverOutcome<T> {
        let monitor = TimeLimitMonitor::new(self.time_limit);
        solve_enumeration(instance, best, monitor, EnumerationMode::Backtracking)
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
        solve_enumeration(instance, best, composite, EnumerationMode::Backtracking)
    }
}

impl<T> std::fmt::Display for BacktrackingSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BacktrackingSolver(time_limit: {:?})", self.time_limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnumerationMode {
    BruteForce,
    Backtracking,
}

fn solve_enumeration<T, M>(
    instance: &Instance<T>,
    best: &mut Solution<T>,
    mut monitor: M,
    mode: EnumerationMode,
) -> SolverOutcome<T>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    best.reset();
    let start = Instant::now();
    monitor.on_enter_search(instance);

    let mut session = EnumerationSession {
        instance,
        monitor: &mut monitor,
        statistics: SearchStatistics::default(),
        current: Solution::for_instance(instance),
        best,
        incumbent_value: Solution::<T>::INVALID_VALUE,
        taken_weight: T::zero(),
        aborted: None,
    };
    match mode {
        EnumerationMode::BruteForce => session.enumerate_all(1),
        EnumerationMode::Backtracking => session.enumerate_feasible(1),
    }

    let EnumerationSession {
        mut statistics,
        incumbent_value,
        aborted,
        ..
    } = session;

    monitor.on_exit_search();
    statistics.set_total_time(start.elapsed());

    let (result, reason) = match aborted {
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

struct EnumerationSession<'a, T, M> {
    instance: &'a Instance<T>,
    monitor: &'a mut M,
    statistics: SearchStatistics,
    current: Solution<T>,
    best: &'a mut Solution<T>,
    incumbent_value: T,
    taken_weight: T,
    aborted: Option<String>,
}

impl<'a, T, M> EnumerationSession<'a, T, M>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    fn enter_node(&mut self, item_id: usize) -> bool {
        self.statistics.on_node_explored();
        self.statistics.on_depth_update(item_id as u64 - 1);
        self.monitor.on_step();
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.aborted = Some(reason);
            return false;
        }
        true
    }

    /// Brute force: skip first, then take, no feasibility checks until the
    /// leaf.
    fn enumerate_all(&mut self, item_id: usize) {
        if !self.enter_node(item_id) {
            return;
        }
        if item_id > self.instance.item_count() {
            self.evaluate_leaf();
            return;
        }
        let item = ItemIndex::new(item_id);

        self.enumerate_all(item_id + 1);
        if self.aborted.is_some() {
            return;
        }

        self.current.take(item);
        self.enumerate_all(item_id + 1);
        self.current.release(item);
    }

    /// Backtracking: take first when the item fits, then skip.
    fn enumerate_feasible(&mut self, item_id: usize) {
        if !self.enter_node(item_id) {
            return;
        }
        if item_id > self.instance.item_count() {
            self.evaluate_leaf();
            return;
        }
        let item = ItemIndex::new(item_id);
        let weight = self.instance.weight(item);

        if self.taken_weight + weight <= self.instance.capacity() {
            self.current.take(item);
            self.taken_weight = self.taken_weight + weight;
            self.enumerate_feasible(item_id + 1);
            self.taken_weight = self.taken_weight - weight;
            self.current.release(item);
            if self.aborted.is_some() {
                return;
            }
        } else {
            self.statistics.on_pruning_capacity();
        }

        self.enumerate_feasible(item_id + 1);
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
