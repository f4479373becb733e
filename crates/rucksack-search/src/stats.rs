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

use std::time::Duration;

/// Statistics collected during one solve call.
///
/// The node counter is the observable used to compare how aggressively the
/// different pruning bounds cut the tree: for a fixed instance and traversal
/// order, a tighter bound visits no more nodes than a looser one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total search-tree nodes visited (one per recursion entry).
    pub nodes_explored: u64,
    /// Leaf nodes evaluated against the incumbent.
    pub leaves_evaluated: u64,
    /// Take-branches skipped because the item did not fit the residual
    /// capacity.
    pub prunings_capacity: u64,
    /// Skip-branches pruned because the upper bound could not beat the
    /// incumbent.
    pub prunings_bound: u64,
    /// Improving solutions installed as the incumbent.
    pub solutions_found: u64,
    /// The deepest recursion level reached.
    pub max_depth: u64,
    /// Total wall-clock time spent in the solve call.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_evaluated(&mut self) {
        self.leaves_evaluated = self.leaves_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_capacity(&mut self) {
        self.prunings_capacity = self.prunings_capacity.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:      {}", self.nodes_explored)?;
        writeln!(f, "  Leaves evaluated:    {}", self.leaves_evaluated)?;
        writeln!(f, "  Prunings (capacity): {}", self.prunings_capacity)?;
        writeln!(f, "  Prunings (bound):    {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:     {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:   {}", self.max_depth)?;
        writeln!(f, "  Total time:          {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statistics_are_zeroed() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.leaves_evaluated, 0);
        assert_eq!(stats.prunings_capacity, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_leaf_evaluated();
        stats.on_pruning_bound();
        stats.on_pruning_capacity();
        stats.on_solution_found();
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.leaves_evaluated, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_capacity, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_depth_update_keeps_maximum() {
        let mut stats = SearchStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(7);
        stats.on_depth_update(5);
        assert_eq!(stats.max_depth, 7);
    }

    #[test]
    fn test_display_contains_all_counters() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.set_total_time(Duration::from_millis(12));
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Nodes explored:      1"));
        assert!(rendered.contains("Total time:"));
    }
}
