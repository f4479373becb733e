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

//! # Rucksack Solver
//!
//! The top-level facade of the rucksack workspace. Pick a [`Strategy`],
//! build a [`KnapsackSolver`], call `solve`; or run [`cross_validate`] to
//! pit every strategy against the dynamic-programming oracle.
//!
//! ```rust
//! use rucksack_model::{instance::Instance, solution::Solution};
//! use rucksack_solver::{KnapsackSolver, Strategy};
//! use rucksack_bnb::BoundStrategy;
//!
//! let instance: Instance<i64> =
//!     Instance::from_items(&[(10, 60), (20, 100), (30, 120)], 50);
//! let solver =
//!     KnapsackSolver::new(Strategy::BranchAndBound(BoundStrategy::FractionalRelaxation));
//! let mut best = Solution::for_instance(&instance);
//! let outcome = solver.solve(&instance, &mut best);
//! assert_eq!(outcome.best_value(), Some(220));
//! ```

pub mod solver;

pub use solver::{CrossValidationError, KnapsackSolver, Strategy, StrategyReport, cross_validate};
