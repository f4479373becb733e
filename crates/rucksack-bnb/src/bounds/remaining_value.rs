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

/// The loosest admissible bound: the value sum of all undecided items,
/// ignoring capacity entirely.
///
/// `suffix_value[i]` holds the value sum of items `i..=n`, so the estimate
/// at a skip decision is a single array read.
#[derive(Debug, Clone)]
pub struct RemainingValueBound<T> {
    suffix_value: Vec<T>, // len = item_count + 2, suffix_value[n + 1] = 0
}

impl<T> RemainingValueBound<T>
where
    T: SolverNumeric,
{
    pub fn new(instance: &Instance<T>) -> Self {
        let item_count = instance.item_count();
        let mut suffix_value = vec![T::zero(); item_count + 2];
        for id in (1..=item_count).rev() {
            suffix_value[id] =
                suffix_value[id + 1].saturating_add(instance.value(ItemIndex::new(id)));
        }
        Self { suffix_value }
    }

    /// The value sum of the items after `item`, the ones still undecided
    /// once `item` is skipped.
    #[inline]
    pub fn estimate(&self, item: ItemIndex) -> T {
        self.suffix_value[item.get() + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_estimate_is_suffix_value_sum() {
        let instance =
            Instance::<IntegerType>::from_items(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
        let bound = RemainingValueBound::new(&instance);
        assert_eq!(bound.estimate(ItemIndex::new(1)), 4 + 5 + 6);
        assert_eq!(bound.estimate(ItemIndex::new(2)), 5 + 6);
        assert_eq!(bound.estimate(ItemIndex::new(3)), 6);
        assert_eq!(bound.estimate(ItemIndex::new(4)), 0);
    }

    #[test]
    fn test_estimate_on_empty_instance() {
        let instance = Instance::<IntegerType>::from_items(&[], 10);
        let bound = RemainingValueBound::new(&instance);
        assert_eq!(bound.suffix_value.len(), 2);
    }
}
