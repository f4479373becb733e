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

//! # Rucksack BnB
//!
//! The exact take/skip search engines of the rucksack workspace:
//!
//! - [`exhaustive::BruteForceSolver`]: full enumeration of all `2^n`
//!   assignments, feasibility checked only at the leaves.
//! - [`exhaustive::BacktrackingSolver`]: take-first enumeration with a
//!   capacity guard on the take branch.
//! - [`bnb::BnbSolver`]: branch and bound with a configurable pruning
//!   bound ([`bounds::BoundStrategy`]).
//!
//! All engines walk the items in their given order, explore the take
//! branch before the skip branch (brute force excepted, which skips
//! first), keep the first-found optimum on ties, and honor a wall-clock
//! budget through the monitor machinery of `rucksack-search`.

pub mod bnb;
pub mod bounds;
pub mod exhaustive;

pub use bnb::BnbSolver;
pub use bounds::BoundStrategy;
pub use exhaustive::{BacktrackingSolver, BruteForceSolver};
