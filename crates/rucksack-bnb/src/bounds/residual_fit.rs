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

/// Tightens `RemainingValue` by dropping undecided items that individually
/// no longer fit the residual capacity.
///
/// An item whose weight equals the residual capacity still fits and must
/// count, otherwise the bound would underestimate and prune the optimum.
///
/// The estimate depends on the residual capacity, so it cannot be
/// precomputed; each check scans the undecided suffix once.
#[derive(Debug, Clone, Default)]
pub struct ResidualFitBound<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ResidualFitBound<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    /// The value sum of the items after `item` whose weight fits `residual`.
    pub fn estimate(&self, instance: &Instance<T>, item: ItemIndex, residual: T) -> T {
        let mut estimate = T::zero();
        for id in (item.get() + 1)..=instance.item_count() {
            let candidate = ItemIndex::new(id);
            if instance.weight(candidate) <= residual {
                estimate = estimate.saturating_add(instance.value(candidate));
            }
        }
        estimate
    }
}
