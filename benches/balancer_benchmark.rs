/*!
 * Load Balancer Benchmarks
 *
 * Cost of one pool-and-redistribute pass and of a full simulation run
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mpsched::core::types::ProcessHandle;
use mpsched::process::ProcessRecord;
use mpsched::scheduler::ReadyQueue;
use mpsched::simulation::rebalance;
use mpsched::{SchedulingAlgorithm, Simulation, SimulationConfig};

fn skewed_queues(total: usize, processors: usize) -> Vec<ReadyQueue> {
    let mut queues = vec![ReadyQueue::new(); processors];
    queues[0] = (0..total).map(ProcessHandle::new).collect();
    queues
}

fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");

    for total in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| {
                let mut queues = skewed_queues(total, 4);
                let mut refs: Vec<&mut ReadyQueue> = queues.iter_mut().collect();
                black_box(rebalance(&mut refs));
            });
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);

    for algorithm in SchedulingAlgorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.as_str()),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| {
                    let config = SimulationConfig::builder()
                        .with_processor(algorithm, 0.7)
                        .with_processor(algorithm, 0.3)
                        .build()
                        .unwrap();
                    let records = (0..500)
                        .map(|i| ProcessRecord::new(i, "bench", (i % 9 + 1) as i8, i % 31 + 1))
                        .collect();
                    black_box(Simulation::new(config, records).run().unwrap());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rebalance, bench_full_run);
criterion_main!(benches);
