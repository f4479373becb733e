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

//! Pruning bounds for the branch-and-bound engine.
//!
//! A bound answers one question at every skip decision: given the value
//! accumulated so far and the residual capacity, can the still-undecided
//! items possibly push the total strictly above the incumbent? Every bound
//! must be admissible (never underestimate the true best completion), or
//! pruning would cut off the optimum.
//!
//! The three bounds trade estimate tightness against per-node cost:
//!
//! - `RemainingValue`: the sum of all undecided item values. O(1) per
//!   check from a precomputed suffix array, loosest estimate.
//! - `ResidualFit`: the sum of undecided item values whose individual
//!   weight still fits the residual capacity. One suffix scan per check.
//! - `FractionalRelaxation`: the exact fractional-knapsack relaxation of
//!   the undecided suffix, greedy over a precomputed ratio-sorted order.
//!   Tightest estimate, never exceeds `RemainingValue`'s.
//!
//! The set of bounds is closed: engines match on `BoundState`, there is no
//! open trait to implement. Static dispatch keeps the check on the hot path
//! free of vtable indirection.

pub mod fractional;
pub mod remaining_value;
pub mod residual_fit;

use crate::bounds::{
    fractional::FractionalRelaxationBound, remaining_value::RemainingValueBound,
    residual_fit::ResidualFitBound,
};
use rucksack_model::{index::ItemIndex, instance::Instance};
use rucksack_search::num::SolverNumeric;

/// Selects which pruning bound a branch-and-bound solver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundStrategy {
    /// Sum of all undecided item values.
    RemainingValue,
    /// Sum of undecided item values that individually fit the residual
    /// capacity.
    ResidualFit,
    /// Exact fractional relaxation of the undecided suffix.
    #[default]
    FractionalRelaxation,
}

impl std::fmt::Display for BoundStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundStrategy::RemainingValue => write!(f, "RemainingValue"),
            BoundStrategy::ResidualFit => write!(f, "ResidualFit"),
            BoundStrategy::FractionalRelaxation => write!(f, "FractionalRelaxation"),
        }
    }
}

/// The per-solve state of the selected bound.
///
/// Built once per solve call from the instance; all variants are immutable
/// afterwards, so the recursion needs no enter/leave bookkeeping.
#[derive(Debug, Clone)]
pub enum BoundState<T> {
    RemainingValue(RemainingValueBound<T>),
    ResidualFit(ResidualFitBound<T>),
    FractionalRelaxation(FractionalRelaxationBound<T>),
}

impl<T> BoundState<T>
where
    T: SolverNumeric,
{
    /// Precomputes the bound state for `strategy` over `instance`.
    pub fn for_strategy(strategy: BoundStrategy, instance: &Instance<T>) -> Self {
        match strategy {
            BoundStrategy::RemainingValue => {
                BoundState::RemainingValue(RemainingValueBound::new(instance))
            }
            BoundStrategy::ResidualFit => BoundState::ResidualFit(ResidualFitBound::new()),
            BoundStrategy::FractionalRelaxation => {
                BoundState::FractionalRelaxation(FractionalRelaxationBound::new(instance))
            }
        }
    }

    /// Returns the strategy this state was built for.
    pub fn strategy(&self) -> BoundStrategy {
        match self {
            BoundState::RemainingValue(_) => BoundStrategy::RemainingValue,
            BoundState::ResidualFit(_) => BoundStrategy::ResidualFit,
            BoundState::FractionalRelaxation(_) => BoundStrategy::FractionalRelaxation,
        }
    }

    /// Decides whether the skip branch at `item` can be pruned.
    ///
    /// `taken_value` is the value accumulated on the path so far, `residual`
    /// the remaining capacity, and `incumbent_value` the best leaf value
    /// found so far (`-1` before the first leaf). The branch is pruned when
    /// even the bound's optimistic completion cannot strictly beat the
    /// incumbent.
    #[inline]
    pub fn should_prune_skip(
        &self,
        instance: &Instance<T>,
        item: ItemIndex,
        taken_value: T,
        residual: T,
        incumbent_value: T,
    ) -> bool {
        let estimate = match self {
            BoundState::RemainingValue(bound) => bound.estimate(item),
            BoundState::ResidualFit(bound) => bound.estimate(instance, item, residual),
            BoundState::FractionalRelaxation(bound) => bound.estimate(instance, item, residual),
        };
        taken_value.saturating_add(estimate) <= incumbent_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn instance() -> Instance<IntegerType> {
        Instance::from_items(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5)
    }

    #[test]
    fn test_for_strategy_builds_matching_variant() {
        let instance = instance();
        for strategy in [
            BoundStrategy::RemainingValue,
            BoundStrategy::ResidualFit,
            BoundStrategy::FractionalRelaxation,
        ] {
            let state = BoundState::for_strategy(strategy, &instance);
            assert_eq!(state.strategy(), strategy);
        }
    }

    #[test]
    fn test_default_strategy_is_fractional_relaxation() {
        assert_eq!(
            BoundStrategy::default(),
            BoundStrategy::FractionalRelaxation
        );
    }

    #[test]
    fn test_no_pruning_against_invalid_incumbent() {
        // Before the first leaf the incumbent is -1; even a zero estimate
        // (skip decision at the last item, nothing left) must not prune,
        // because taken_value >= 0 > -1.
        let instance = instance();
        for strategy in [
            BoundStrategy::RemainingValue,
            BoundStrategy::ResidualFit,
            BoundStrategy::FractionalRelaxation,
        ] {
            let state = BoundState::for_strategy(strategy, &instance);
            assert!(!state.should_prune_skip(&instance, ItemIndex::new(4), 0, 5, -1));
        }
    }

    #[test]
    fn test_prunes_when_estimate_cannot_beat_incumbent() {
        let instance = instance();
        let state = BoundState::for_strategy(BoundStrategy::RemainingValue, &instance);
        // Skipping item 4 leaves no undecided items: estimate 0. With an
        // incumbent of 7 and only 3 on the path, 3 + 0 <= 7 prunes.
        assert!(state.should_prune_skip(&instance, ItemIndex::new(4), 3, 3, 7));
    }

    #[test]
    fn test_fractional_estimate_never_exceeds_remaining_value_estimate() {
        let instance = instance();
        let loose = match BoundState::for_strategy(BoundStrategy::RemainingValue, &instance) {
            BoundState::RemainingValue(bound) => bound,
            _ => unreachable!(),
        };
        let tight = match BoundState::for_strategy(BoundStrategy::FractionalRelaxation, &instance) {
            BoundState::FractionalRelaxation(bound) => bound,
            _ => unreachable!(),
        };
        for item in instance.items() {
            for residual in 0..=instance.capacity() {
                assert!(tight.estimate(&instance, item, residual) <= loose.estimate(item));
            }
        }
    }
}
