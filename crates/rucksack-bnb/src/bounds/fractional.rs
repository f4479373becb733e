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

use rucksack_model::{index::ItemIndex, instance::Instance};
use rucksack_search::num::SolverNumeric;
use std::cmp::Ordering;

/// The tightest of the three bounds: the exact fractional-knapsack
/// relaxation of the undecided suffix under the residual capacity.
///
/// Items are sorted once, descending by value/weight ratio, with exact
/// integer cross-multiplication (no floating point) and the item id as
/// tie-break. Each estimate greedily fills the residual capacity along the
/// sorted order, skipping items already decided, and adds a floored
/// fractional share of the first item that does not fit whole. Flooring
/// keeps the estimate integral and still admissible: the true best integral
/// completion is at most the real-valued relaxation, hence at most its
/// floor.
///
/// The relaxation never exceeds the plain value sum of the same items, so
/// this estimate is pointwise at most `RemainingValueBound`'s.
#[derive(Debug, Clone)]
pub struct FractionalRelaxationBound<T> {
    /// All item ids, descending by value/weight ratio.
    order: Vec<ItemIndex>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> FractionalRelaxationBound<T>
where
    T: SolverNumeric,
{
    pub fn new(instance: &Instance<T>) -> Self {
        let mut order: Vec<ItemIndex> = instance.items().collect();
        order.sort_by(|&a, &b| {
            match ratio_cmp(
                instance.value(a),
                instance.weight(a),
                instance.value(b),
                instance.weight(b),
            ) {
                Ordering::Equal => a.get().cmp(&b.get()),
                ordering => ordering.reverse(),
            }
        });
        Self {
            order,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The fractional relaxation of the items after `item` under `residual`.
    pub fn estimate(&self, instance: &Instance<T>, item: ItemIndex, residual: T) -> T {
        let first_undecided = item.get() + 1;
        let mut room = residual;
        let mut estimate = T::zero();
        for &candidate in &self.order {
            if candidate.get() < first_undecided {
                continue;
            }
            let weight = instance.weight(candidate);
            let value = instance.value(candidate);
            if weight <= room {
                room = room - weight;
                estimate = estimate.saturating_add(value);
            } else {
                // First item that no longer fits whole: a floored fractional
                // share, then the greedy fill is exhausted. `weight > room
                // >= 0` here, so the division is safe.
                estimate = estimate.saturating_add(room * value / weight);
                break;
            }
        }
        estimate
    }
}

/// Compares `a_value / a_weight` against `b_value / b_weight` without
/// division. Cross products are taken in `i128`, which holds any product of
/// two signed primitive values.
fn ratio_cmp<T>(a_value: T, a_weight: T, b_value: T, b_weight: T) -> Ordering
where
    T: SolverNumeric,
{
    let lhs = widen(a_value) * widen(b_weight);
    let rhs = widen(b_value) * widen(a_weight);
    lhs.cmp(&rhs)
}

#[inline]
fn widen<T>(value: T) -> i128
where
    T: SolverNumeric,
{
    value.to_i128().expect("signed primitive fits i128")
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_order_is_descending_by_ratio() {
        // Ratios: item 1 = 60/10 = 6, item 2 = 100/20 = 5, item 3 = 120/30 = 4.
        let instance =
            Instance::<IntegerType>::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
        let bound = FractionalRelaxationBound::new(&instance);
        let ids: Vec<usize> = bound.order.iter().map(|item| item.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_break_by_item_id() {
        let instance = Instance::<IntegerType>::from_items(&[(2, 4), (1, 2), (3, 6)], 5);
        let bound = FractionalRelaxationBound::new(&instance);
        let ids: Vec<usize> = bound.order.iter().map(|item| item.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_estimate_fills_whole_items_then_fraction() {
        let instance =
            Instance::<IntegerType>::from_items(&[(1, 1), (10, 60), (20, 100), (30, 120)], 50);
        let bound = FractionalRelaxationBound::new(&instance);
        // After item 1 with residual 50: take items 2 and 3 whole (weight
        // 30, value 160), then 20/30 of item 4: floor(20 * 120 / 30) = 80.
        assert_eq!(bound.estimate(&instance, ItemIndex::new(1), 50), 240);
    }

    #[test]
    fn test_estimate_skips_decided_items() {
        let instance =
            Instance::<IntegerType>::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
        let bound = FractionalRelaxationBound::new(&instance);
        // After item 2 only item 3 is undecided: 30 <= 50 fits whole.
        assert_eq!(bound.estimate(&instance, ItemIndex::new(2), 50), 120);
    }

    #[test]
    fn test_estimate_with_zero_residual_is_zero_unless_weightless() {
        let instance =
            Instance::<IntegerType>::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
        let bound = FractionalRelaxationBound::new(&instance);
        assert_eq!(bound.estimate(&instance, ItemIndex::new(1), 0), 0);
    }

    #[test]
    fn test_zero_weight_items_sort_first_and_always_fit() {
        let instance = Instance::<IntegerType>::from_items(&[(5, 5), (0, 7)], 4);
        let bound = FractionalRelaxationBound::new(&instance);
        assert_eq!(bound.order[0], ItemIndex::new(2));
        // After item 1 with residual 4: item 2 weighs nothing, full value 7;
        // nothing else is undecided.
        assert_eq!(bound.estimate(&instance, ItemIndex::new(1), 4), 7);
    }

    #[test]
    fn test_ratio_cmp_is_exact_for_large_values() {
        let big = i64::MAX / 2;
        assert_eq!(ratio_cmp(big, 1i64, big - 1, 1i64), Ordering::Greater);
        assert_eq!(ratio_cmp(big, big, big, big), Ordering::Equal);
    }
}
