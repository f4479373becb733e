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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use rucksack_bnb::BoundStrategy;
use rucksack_model::{instance::Instance, solution::Solution};
use rucksack_solver::{KnapsackSolver, Strategy};
use std::hint::black_box;

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let sizes = [12usize, 16, 20];
    let instances: Vec<Instance<i64>> = sizes
        .iter()
        .map(|&size| Instance::random(size, &mut rng))
        .collect();

    let strategies = [
        Strategy::Backtracking,
        Strategy::BranchAndBound(BoundStrategy::RemainingValue),
        Strategy::BranchAndBound(BoundStrategy::ResidualFit),
        Strategy::BranchAndBound(BoundStrategy::FractionalRelaxation),
        Strategy::DynamicProgramming,
    ];

    let mut group = c.benchmark_group("strategies");
    for (size, instance) in sizes.iter().zip(&instances) {
        for strategy in strategies {
            let solver = KnapsackSolver::<i64>::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                instance,
                |b, instance| {
                    let mut best = Solution::for_instance(instance);
                    b.iter(|| {
                        let outcome = solver.solve(black_box(instance), &mut best);
                        black_box(outcome)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
