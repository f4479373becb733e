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

//! The immutable 0/1 knapsack problem instance.
//!
//! An `Instance` holds the item weights, item values, and the capacity. It is
//! created once (via `InstanceBuilder` or `Instance::random`) and is
//! read-only for the lifetime of every solve call. Items are 1-based; slot 0
//! of both arrays is reserved and zeroed.

use crate::index::ItemIndex;
use num_traits::{NumCast, PrimInt, Signed};
use rand::Rng;

/// An immutable 0/1 knapsack problem instance.
///
/// Weights and values are stored in separate flat vectors indexed directly
/// by `ItemIndex` (1-based, slot 0 zeroed). All accessors are O(1), pure
/// reads with no error paths: ids are in range by construction of the
/// search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance<T> {
    weights: Vec<T>, // len = item_count + 1, weights[0] = 0
    values: Vec<T>,  // len = item_count + 1, values[0] = 0
    capacity: T,
}

impl<T> Instance<T>
where
    T: PrimInt + Signed,
{
    /// Builds an instance directly from `(weight, value)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if any weight, value, or the capacity is negative.
    pub fn from_items(items: &[(T, T)], capacity: T) -> Self {
        let mut builder = InstanceBuilder::new(items.len());
        for (position, &(weight, value)) in items.iter().enumerate() {
            builder.set_item(ItemIndex::new(position + 1), weight, value);
        }
        builder.set_capacity(capacity);
        builder.build()
    }

    /// Generates a random instance: weights uniform in `1..=100`, each value
    /// equal to its weight plus 10, and capacity equal to half the total
    /// weight.
    pub fn random<R>(item_count: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut builder = InstanceBuilder::new(item_count);
        let mut weight_sum: i64 = 0;
        for id in 1..=item_count {
            let weight: i64 = rng.random_range(1..=100);
            weight_sum += weight;
            let w = <T as NumCast>::from(weight).expect("generated weight fits the value type");
            let v = <T as NumCast>::from(weight + 10).expect("generated value fits the value type");
            builder.set_item(ItemIndex::new(id), w, v);
        }
        let cap =
            <T as NumCast>::from(weight_sum / 2).expect("generated capacity fits the value type");
        builder.set_capacity(cap);
        builder.build()
    }

    /// Returns the number of items in this instance.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.weights.len() - 1
    }

    /// Returns the capacity of the knapsack.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the weight of the given item.
    #[inline]
    pub fn weight(&self, item: ItemIndex) -> T {
        debug_assert!(
            !item.is_zero() && item.get() <= self.item_count(),
            "called `Instance::weight` with item id out of range: valid ids are 1..={} but the id is {}",
            self.item_count(),
            item.get()
        );
        self.weights[item.get()]
    }

    /// Returns the value of the given item.
    #[inline]
    pub fn value(&self, item: ItemIndex) -> T {
        debug_assert!(
            !item.is_zero() && item.get() <= self.item_count(),
            "called `Instance::value` with item id out of range: valid ids are 1..={} but the id is {}",
            self.item_count(),
            item.get()
        );
        self.values[item.get()]
    }

    /// Returns the sum of all item values.
    #[inline]
    pub fn total_value(&self) -> T {
        self.values
            .iter()
            .fold(T::zero(), |acc, &v| acc.saturating_add(v))
    }

    /// Iterates over all item ids, `1..=item_count`.
    #[inline]
    pub fn items(&self) -> impl Iterator<Item = ItemIndex> {
        (1..=self.item_count()).map(ItemIndex::new)
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Number of items = {}, Capacity = {}",
            self.item_count(),
            self.capacity
        )?;
        write!(f, "Weights:")?;
        for item in self.items() {
            write!(f, " {}", self.weight(item))?;
        }
        writeln!(f)?;
        write!(f, "Values:")?;
        for item in self.items() {
            write!(f, " {}", self.value(item))?;
        }
        writeln!(f)
    }
}

/// A mutable builder for `Instance`.
///
/// The builder validates eagerly: negative weights, values, or capacities
/// are caller-side precondition violations and abort construction
/// immediately rather than surfacing inside a solver.
#[derive(Clone, Debug)]
pub struct InstanceBuilder<T> {
    weights: Vec<T>,
    values: Vec<T>,
    capacity: T,
}

impl<T> InstanceBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a builder for an instance with `item_count` items, all
    /// initially of zero weight and value, and zero capacity.
    pub fn new(item_count: usize) -> Self {
        Self {
            weights: vec![T::zero(); item_count + 1],
            values: vec![T::zero(); item_count + 1],
            capacity: T::zero(),
        }
    }

    /// Returns the number of items this builder configures.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.weights.len() - 1
    }

    /// Sets the weight and value of an item.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of range or if `weight` or `value` is
    /// negative.
    pub fn set_item(&mut self, item: ItemIndex, weight: T, value: T) -> &mut Self {
        assert!(
            !item.is_zero() && item.get() <= self.item_count(),
            "called `InstanceBuilder::set_item` with item id out of range: valid ids are 1..={} but the id is {}",
            self.item_count(),
            item.get()
        );
        assert!(
            weight >= T::zero(),
            "called `InstanceBuilder::set_item` with a negative weight"
        );
        assert!(
            value >= T::zero(),
            "called `InstanceBuilder::set_item` with a negative value"
        );
        self.weights[item.get()] = weight;
        self.values[item.get()] = value;
        self
    }

    /// Sets the knapsack capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is negative.
    pub fn set_capacity(&mut self, capacity: T) -> &mut Self {
        assert!(
            capacity >= T::zero(),
            "called `InstanceBuilder::set_capacity` with a negative capacity"
        );
        self.capacity = capacity;
        self
    }

    /// Finalizes the builder into an immutable `Instance`.
    pub fn build(self) -> Instance<T> {
        Instance {
            weights: self.weights,
            values: self.values,
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    type IntegerType = i64;

    #[test]
    fn test_from_items_exposes_one_based_accessors() {
        let instance =
            Instance::<IntegerType>::from_items(&[(2, 3), (3, 4), (4, 5), (5, 6)], 5);
        assert_eq!(instance.item_count(), 4);
        assert_eq!(instance.capacity(), 5);
        assert_eq!(instance.weight(ItemIndex::new(1)), 2);
        assert_eq!(instance.value(ItemIndex::new(1)), 3);
        assert_eq!(instance.weight(ItemIndex::new(4)), 5);
        assert_eq!(instance.value(ItemIndex::new(4)), 6);
    }

    #[test]
    fn test_total_value_sums_all_items() {
        let instance = Instance::<IntegerType>::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
        assert_eq!(instance.total_value(), 280);
    }

    #[test]
    fn test_items_iterates_one_through_item_count() {
        let instance = Instance::<IntegerType>::from_items(&[(1, 1), (2, 2)], 3);
        let ids: Vec<usize> = instance.items().map(|item| item.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_zero_item_instance_is_valid() {
        let instance = Instance::<IntegerType>::from_items(&[], 10);
        assert_eq!(instance.item_count(), 0);
        assert_eq!(instance.items().count(), 0);
        assert_eq!(instance.total_value(), 0);
    }

    #[test]
    fn test_random_instance_matches_generation_contract() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let instance = Instance::<IntegerType>::random(32, &mut rng);
        assert_eq!(instance.item_count(), 32);

        let mut weight_sum = 0;
        for item in instance.items() {
            let weight = instance.weight(item);
            assert!((1..=100).contains(&weight));
            assert_eq!(instance.value(item), weight + 10);
            weight_sum += weight;
        }
        assert_eq!(instance.capacity(), weight_sum / 2);
    }

    #[test]
    fn test_random_instances_are_reproducible_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = Instance::<IntegerType>::random(16, &mut rng_a);
        let b = Instance::<IntegerType>::random(16, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "negative weight")]
    fn test_builder_rejects_negative_weight() {
        let mut builder = InstanceBuilder::<IntegerType>::new(1);
        builder.set_item(ItemIndex::new(1), -1, 5);
    }

    #[test]
    #[should_panic(expected = "negative capacity")]
    fn test_builder_rejects_negative_capacity() {
        let mut builder = InstanceBuilder::<IntegerType>::new(1);
        builder.set_capacity(-3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_builder_rejects_item_id_zero() {
        let mut builder = InstanceBuilder::<IntegerType>::new(2);
        builder.set_item(ItemIndex::new(0), 1, 1);
    }

    #[test]
    fn test_display_lists_weights_and_values() {
        let instance = Instance::<IntegerType>::from_items(&[(2, 3), (3, 4)], 5);
        let rendered = format!("{}", instance);
        assert!(rendered.contains("Number of items = 2, Capacity = 5"));
        assert!(rendered.contains("Weights: 2 3"));
        assert!(rendered.contains("Values: 3 4"));
    }
}
