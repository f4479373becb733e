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

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on the
//! search. It periodically checks elapsed time (using a bitmask-based step
//! filter) and requests termination once the configured `Duration` has been
//! exceeded.
//!
//! Exhaustive search over `2^n` subsets is compute-intensive; the time
//! budget turns every solver into an anytime algorithm that returns the
//! best solution found so far. The bitmask keeps the clock off the hot
//! path: `(steps & clock_check_mask) == 0` triggers a check, everything
//! else is a single wrapping increment.
//!
//! ## Usage
//!
//! ```rust
//! use rucksack_search::monitor::time_limit::TimeLimitMonitor;
//! use rucksack_search::monitor::search_monitor::{SearchMonitor, SearchCommand};
//! use std::time::Duration;
//!
//! let mut monitor = TimeLimitMonitor::<i64>::new(Duration::from_secs(5));
//! // In the search loop:
//! monitor.on_step();
//! match monitor.search_command() {
//!     SearchCommand::Continue => { /* keep searching */ }
//!     SearchCommand::Terminate(reason) => { /* stop: reason */ }
//! }
//! ```

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};
use rucksack_core::num::constants::MinusOne;
use rucksack_model::{instance::Instance, solution::Solution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    clock_check_mask: u64,
    steps: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// Default mask: check every 1,024 steps (2^10).
    /// 1024 - 1 = 1023 = 0x3FF
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured time budget.
    #[inline]
    pub fn time_limit(&self) -> std::time::Duration {
        self.time_limit
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: PrimInt + Signed + MinusOne,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>) {
        self.start_time = std::time::Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _solution: &Solution<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    type IntegerType = i64;

    #[test]
    fn test_terminates_after_limit_when_mask_condition_met() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_millis(10));
        monitor.start_time = Instant::now() - Duration::from_millis(50);
        monitor.steps = 0; // (0 & mask) == 0, clock check runs
        match monitor.search_command() {
            SearchCommand::Terminate(reason) => {
                assert!(reason.contains("time limit"), "unexpected reason: {reason}")
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_when_mask_condition_not_met_even_if_time_exceeded() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_millis(1));
        monitor.start_time = Instant::now() - Duration::from_millis(50);
        monitor.steps = 1; // 1 & 0x3FF != 0, clock check skipped
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_mask_zero_always_checks_the_clock() {
        let mut monitor =
            TimeLimitMonitor::<IntegerType>::with_clock_check_mask(Duration::from_millis(1), 0);
        monitor.start_time = Instant::now() - Duration::from_millis(50);
        monitor.steps = 12345;
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_continues_before_time_limit() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(3600));
        monitor.steps = 0;
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_on_step_wraps_at_u64_max() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(1));
        monitor.steps = u64::MAX;
        monitor.on_step();
        assert_eq!(monitor.steps, 0);
    }

    #[test]
    fn test_enter_search_resets_steps_and_clock() {
        let mut monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(1));
        monitor.steps = 99;
        let instance = Instance::<IntegerType>::from_items(&[(1, 1)], 1);
        monitor.on_enter_search(&instance);
        assert_eq!(monitor.steps, 0);
        assert!(monitor.start_time.elapsed() < Duration::from_secs(10));
    }
}
