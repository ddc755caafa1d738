/*!
 * Simulation Engine
 * Owns the registry and queues, spawns one runner thread per processor
 */

use super::config::SimulationConfig;
use super::report::{ProcessorReport, SimulationReport};
use super::runner::{ProcessorRunner, RunnerSummary};
use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::ProcessorId;
use crate::monitoring::AtomicProcessorStats;
use crate::process::{assign_processes, ProcessRecord, ProcessRegistry};
use crate::scheduler::{policy_for, PolicyConfig, ReadyQueue};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{error, info};

/// Processors still taking part in balancing
///
/// Lives behind the single balance lock; holding that lock is what
/// serializes balancing passes.
#[derive(Debug)]
pub struct Participants {
    active: Vec<bool>,
}

impl Participants {
    fn new(count: usize) -> Self {
        Self {
            active: vec![true; count],
        }
    }

    /// Active processor ids in ascending order
    pub fn members(&self) -> impl Iterator<Item = ProcessorId> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(id, &active)| active.then_some(id))
    }

    pub fn leave(&mut self, id: ProcessorId) {
        if let Some(slot) = self.active.get_mut(id) {
            *slot = false;
        }
    }
}

/// State shared by every runner thread
pub struct SharedState {
    registry: ProcessRegistry,
    queues: Vec<Mutex<ReadyQueue>>,
    balance: Mutex<Participants>,
    stats: Vec<AtomicProcessorStats>,
    policy: PolicyConfig,
}

impl SharedState {
    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn queue(&self, id: ProcessorId) -> &Mutex<ReadyQueue> {
        &self.queues[id]
    }

    pub fn stats(&self, id: ProcessorId) -> &AtomicProcessorStats {
        &self.stats[id]
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Take the global balance lock
    pub fn lock_participants(&self) -> MutexGuard<'_, Participants> {
        self.balance.lock()
    }
}

/// A configured simulation, ready to run
pub struct Simulation {
    config: SimulationConfig,
    shared: Arc<SharedState>,
    initial_sizes: Vec<usize>,
}

impl Simulation {
    /// Populate the registry and perform the initial contiguous assignment
    pub fn new(config: SimulationConfig, records: Vec<ProcessRecord>) -> Self {
        let registry = ProcessRegistry::new(records);
        let blocks = assign_processes(&registry, &config.loads());
        let initial_sizes = blocks.iter().map(Vec::len).collect();
        let queues = blocks
            .into_iter()
            .map(|block| Mutex::new(ReadyQueue::from(block)))
            .collect();
        let stats = (0..config.num_processors())
            .map(|_| AtomicProcessorStats::new())
            .collect();

        info!(
            processes = registry.len(),
            processors = config.num_processors(),
            policy = ?config.policy(),
            "Simulation initialized"
        );

        let shared = Arc::new(SharedState {
            registry,
            queues,
            balance: Mutex::new(Participants::new(config.num_processors())),
            stats,
            policy: *config.policy(),
        });

        Self {
            config,
            shared,
            initial_sizes,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProcessRegistry {
        self.shared.registry()
    }

    /// Current per-processor queue sizes
    pub fn queue_sizes(&self) -> Vec<usize> {
        self.shared.queues.iter().map(|q| q.lock().len()).collect()
    }

    /// Run every processor to termination and collect the report
    pub fn run(self) -> SimResult<SimulationReport> {
        let started = Instant::now();
        let mut handles = Vec::with_capacity(self.config.num_processors());

        for (id, spec) in self.config.processors().iter().enumerate() {
            let runner = ProcessorRunner::new(
                id,
                policy_for(spec.algorithm, self.config.policy()),
                Arc::clone(&self.shared),
            );
            let handle = thread::Builder::new()
                .name(format!("cpu-{}", id))
                .spawn(move || runner.run())
                .map_err(|source| SimulationError::SpawnFailed {
                    processor: id,
                    source,
                })?;
            handles.push((id, handle));
        }

        let mut summaries: Vec<RunnerSummary> = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            let summary = handle.join().map_err(|_| {
                error!(processor = id, "Runner thread panicked");
                SimulationError::RunnerPanicked(id)
            })?;
            summaries.push(summary);
        }

        let elapsed = started.elapsed();
        info!(elapsed_ms = elapsed.as_millis() as u64, "All processors terminated");
        Ok(self.report(summaries, elapsed))
    }

    fn report(&self, summaries: Vec<RunnerSummary>, elapsed: std::time::Duration) -> SimulationReport {
        let processors = summaries
            .into_iter()
            .map(|summary| {
                let spec = self.config.processors()[summary.processor];
                ProcessorReport {
                    id: summary.processor,
                    algorithm: spec.algorithm,
                    load: spec.load,
                    initially_assigned: self.initial_sizes[summary.processor],
                    stats: self.shared.stats(summary.processor).snapshot(),
                    completed: summary.completed,
                }
            })
            .collect();

        SimulationReport {
            policy: *self.config.policy(),
            processors,
            processes: self.shared.registry().snapshot(),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
