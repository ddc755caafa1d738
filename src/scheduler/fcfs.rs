/*!
 * First Come First Served
 * Run the head of the queue to completion
 */

use super::queue::ReadyQueue;
use super::run_to_completion;
use super::traits::SchedulingPolicy;
use super::types::{SchedulingAlgorithm, StepOutcome, StepResult};
use crate::core::types::BurstUnits;
use crate::process::ProcessRegistry;
use tracing::info;

pub struct FcfsPolicy {
    quantum: BurstUnits,
}

impl FcfsPolicy {
    pub fn new(quantum: BurstUnits) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for FcfsPolicy {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::FirstComeFirstServed
    }

    fn step(&mut self, queue: &mut ReadyQueue, registry: &ProcessRegistry) -> StepOutcome {
        let handle = queue.front().expect("FCFS step on an empty queue");
        let process = &registry[handle];

        let quanta = run_to_completion(process, self.quantum);
        queue.remove(0);

        info!(pid = process.id(), quanta, "FCFS completed process");
        StepOutcome {
            pid: process.id(),
            quanta,
            aging_passes: 0,
            result: StepResult::Completed,
        }
    }
}
