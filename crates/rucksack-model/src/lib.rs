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

//! # Rucksack Model
//!
//! **The core domain model for the rucksack 0/1 knapsack solvers.**
//!
//! This crate defines the data structures shared by every solving engine.
//! It is the data interchange layer between problem definition (user input)
//! and the search engines (`rucksack-bnb`, `rucksack-dp`).
//!
//! ## Architecture
//!
//! The crate separates construction from solving:
//!
//! * **`index`**: the strongly-typed `ItemIndex` (1-based) that prevents raw
//!   `usize` indexing slips.
//! * **`instance`**: the immutable `Instance` (optimized for solving) and the
//!   eagerly-validating `InstanceBuilder` (optimized for configuration),
//!   plus random instance generation.
//! * **`solution`**: the mutable take/skip assignment with its cached value
//!   and the `INVALID` sentinel.
//!
//! ## Design Philosophy
//!
//! 1. **1-based items**: item ids run `1..=item_count`; slot 0 of every
//!    array is reserved and zeroed so solvers never translate indices.
//! 2. **Memory layout**: weights and values live in separate flat vectors
//!    (structure of arrays) for cache locality in the search inner loop.
//! 3. **Fail-fast**: the builder validates inputs eagerly so the solvers
//!    never see a negative weight, value, or capacity.

pub mod index;
pub mod instance;
pub mod solution;
