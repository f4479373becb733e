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

use rucksack_model::{index::ItemIndex, instance::Instance, solution::Solution};
use rucksack_search::{
    num::SolverNumeric,
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::SearchStatistics,
};
use std::time::Instant;

/// Bottom-up tabulation over items and capacities.
///
/// `table[i][c]` holds the best value achievable with the first `i` items
/// under capacity `c`; the taken set is recovered by walking the table
/// backwards. Runs in O(n * capacity) time and space, always to completion:
/// this is the deterministic oracle the search engines are validated
/// against, and it carries no time budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DpSolver<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> DpSolver<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    /// Solves `instance` exactly, writing the optimal assignment into
    /// `best`. The outcome is always `Optimal`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity does not fit a `usize`; the tabulation is
    /// meant for the moderate capacities its O(n * capacity) memory can
    /// serve.
    pub fn solve(&self, instance: &Instance<T>, best: &mut Solution<T>) -> SolverOutcome<T> {
        let start = Instant::now();
        best.reset();

        let item_count = instance.item_count();
        let capacity = instance
            .capacity()
            .to_usize()
            .expect("called `DpSolver::solve` with a capacity that does not fit usize");
        let columns = capacity + 1;

        // Row i covers items 1..=i; row 0 is all zeros.
        let mut table = vec![T::zero(); (item_count + 1) * columns];
        for id in 1..=item_count {
            let item = ItemIndex::new(id);
            let weight = instance
                .weight(item)
                .to_usize()
                .expect("item weights are non-negative and bounded by the capacity type");
            let value = instance.value(item);
            let (previous, row) = table.split_at_mut(id * columns);
            let previous = &previous[(id - 1) * columns..];
            for c in 0..columns {
                let skip = previous[c];
                row[c] = if weight <= c {
                    skip.max(previous[c - weight].saturating_add(value))
                } else {
                    skip
                };
            }
        }

        // Walk the table backwards to recover the taken set.
        let mut c = capacity;
        for id in (1..=item_count).rev() {
            if table[id * columns + c] != table[(id - 1) * columns + c] {
                let item = ItemIndex::new(id);
                best.take(item);
                c -= instance
                    .weight(item)
                    .to_usize()
                    .expect("item weights are non-negative and bounded by the capacity type");
            }
        }
        let value = best.compute_value(instance);
        debug_assert_eq!(value, table[item_count * columns + capacity]);

        let mut statistics = SearchStatistics::default();
        statistics.on_solution_found();
        statistics.set_total_time(start.elapsed());
        SolverOutcome::new(
            SolverResult::Optimal(value),
            TerminationReason::OptimalityProven,
            statistics,
        )
    }
}

impl<T> std::fmt::Display for DpSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DpSolver")
    }
}
