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

//! Solver outcomes.
//!
//! The assignment itself travels through the caller-owned out-`Solution` of
//! each solve call; the outcome carries the best value found, why the search
//! stopped, and the statistics of the run. A knapsack search cannot prove
//! infeasibility (the empty subset is always feasible), so the result is
//! either a proven optimum, a best-effort feasible value after an abort, or
//! `Unknown` when the budget expired before any leaf was reached.

use crate::stats::SearchStatistics;
use num_traits::{PrimInt, Signed};

/// The qualitative result of one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// The search ran to completion; the value is proven optimal.
    Optimal(T),
    /// The search was cut short; the value is feasible but not proven
    /// optimal.
    Feasible(T),
    /// The search was cut short before reaching any feasible leaf.
    Unknown,
}

impl<T> SolverResult<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Returns the best value found, if any leaf was reached.
    #[inline]
    pub fn best_value(&self) -> Option<T> {
        match self {
            SolverResult::Optimal(value) | SolverResult::Feasible(value) => Some(*value),
            SolverResult::Unknown => None,
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(value) => write!(f, "Optimal(value={})", value),
            SolverResult::Feasible(value) => write!(f, "Feasible(value={})", value),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why a solve call stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted; the returned value is optimal.
    OptimalityProven,
    /// A monitor requested termination (time budget, external stop).
    /// The string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a solve call reports back besides the out-`Solution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed + Copy,
{
    result: SolverResult<T>,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed + Copy,
{
    #[inline]
    pub fn new(
        result: SolverResult<T>,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }

    /// Returns the best value found, if any leaf was reached.
    #[inline]
    pub fn best_value(&self) -> Option<T> {
        self.result.best_value()
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.reason)
    }
}
