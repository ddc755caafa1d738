/*!
 * Scheduler Module
 * Ready queues and the four scheduling policies
 */

pub mod fcfs;
pub mod priority;
pub mod queue;
pub mod round_robin;
pub mod sjf;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::FcfsPolicy;
pub use priority::{AgingClock, PriorityPolicy};
pub use queue::ReadyQueue;
pub use round_robin::{RoundRobinPolicy, TurnCursor};
pub use sjf::SjfPolicy;
pub use traits::SchedulingPolicy;
pub use types::{PolicyConfig, SchedulingAlgorithm, StepOutcome, StepResult};

use crate::core::types::BurstUnits;
use crate::process::Process;

/// Build the policy instance a processor will own for its lifetime
pub fn policy_for(algorithm: SchedulingAlgorithm, config: &PolicyConfig) -> Box<dyn SchedulingPolicy> {
    match algorithm {
        SchedulingAlgorithm::Priority => {
            Box::new(PriorityPolicy::new(config.quantum, config.aging_threshold))
        }
        SchedulingAlgorithm::ShortestJobFirst => Box::new(SjfPolicy::new(config.quantum)),
        SchedulingAlgorithm::RoundRobin => {
            Box::new(RoundRobinPolicy::new(config.quantum, config.turn_limit))
        }
        SchedulingAlgorithm::FirstComeFirstServed => Box::new(FcfsPolicy::new(config.quantum)),
    }
}

/// Consume quanta until the burst is exhausted; returns the quanta used
pub(crate) fn run_to_completion(process: &Process, quantum: BurstUnits) -> u32 {
    let mut quanta = 0;
    while !process.is_finished() {
        process.consume(quantum);
        quanta += 1;
    }
    quanta
}
