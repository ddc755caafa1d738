/*!
 * Shortest Job First
 * Non-preemptive; the whole queue is re-scanned on every step
 */

use super::queue::ReadyQueue;
use super::run_to_completion;
use super::traits::SchedulingPolicy;
use super::types::{SchedulingAlgorithm, StepOutcome, StepResult};
use crate::core::types::BurstUnits;
use crate::process::{Process, ProcessRegistry};
use tracing::info;

pub struct SjfPolicy {
    quantum: BurstUnits,
}

impl SjfPolicy {
    pub fn new(quantum: BurstUnits) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for SjfPolicy {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::ShortestJobFirst
    }

    fn step(&mut self, queue: &mut ReadyQueue, registry: &ProcessRegistry) -> StepOutcome {
        let index = queue
            .position_min_by_key(registry, Process::remaining_burst)
            .expect("SJF step on an empty queue");
        let handle = queue.remove(index).expect("selected index is in bounds");
        let process = &registry[handle];
        let burst = process.remaining_burst();

        let quanta = run_to_completion(process, self.quantum);

        info!(pid = process.id(), burst, quanta, "SJF completed process");
        StepOutcome {
            pid: process.id(),
            quanta,
            aging_passes: 0,
            result: StepResult::Completed,
        }
    }
}
