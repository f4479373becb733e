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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the solving engines. `SolverNumeric` collects
//! the integer capabilities the knapsack solvers rely on into a single
//! alias, keeping generic signatures short and arithmetic semantics
//! consistent.
//!
//! ## Highlights
//!
//! - `PrimInt + Signed + FromPrimitive` for numeric fundamentals; the
//!   signedness carries the `-1` sentinel for invalid solution values.
//! - `MinusOne` and `Zero` constant traits for sentinel and accumulator
//!   initialization.
//! - `Send + Sync` so solver types stay thread-transferable even though
//!   search itself is single-threaded.
//!
//! Note: `i128` is intentionally excluded for performance reasons.

use num_traits::{FromPrimitive, PrimInt, Signed};
use rucksack_core::num::constants::{MinusOne, Zero};
use std::hash::Hash;

/// A trait alias for numeric types usable as knapsack weights and values.
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64`,
/// and `isize`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + MinusOne
    + Zero
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + MinusOne
        + Zero
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}
