/*!
 * Round Robin
 * Preemptive; one quantum for the head of the queue per step
 */

use super::queue::ReadyQueue;
use super::traits::SchedulingPolicy;
use super::types::{SchedulingAlgorithm, StepOutcome, StepResult};
use crate::core::types::{BurstUnits, ProcessHandle};
use crate::process::ProcessRegistry;
use tracing::{debug, info};

/// Consecutive quanta granted to the current head
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnCursor {
    holder: Option<ProcessHandle>,
    turns: u32,
}

impl TurnCursor {
    /// Follow the head; a different head (rotation, rebalance) restarts the count
    fn track(&mut self, head: ProcessHandle) {
        if self.holder != Some(head) {
            self.holder = Some(head);
            self.turns = 0;
        }
    }

    fn reset(&mut self) {
        self.holder = None;
        self.turns = 0;
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }
}

pub struct RoundRobinPolicy {
    quantum: BurstUnits,
    turn_limit: u32,
    cursor: TurnCursor,
}

impl RoundRobinPolicy {
    pub fn new(quantum: BurstUnits, turn_limit: u32) -> Self {
        Self {
            quantum,
            turn_limit,
            cursor: TurnCursor::default(),
        }
    }

    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }
}

impl SchedulingPolicy for RoundRobinPolicy {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::RoundRobin
    }

    fn step(&mut self, queue: &mut ReadyQueue, registry: &ProcessRegistry) -> StepOutcome {
        let handle = queue.front().expect("round robin step on an empty queue");
        let process = &registry[handle];
        self.cursor.track(handle);

        let mut quanta = 0;
        if !process.is_finished() && self.cursor.turns < self.turn_limit {
            let left = process.consume(self.quantum);
            self.cursor.turns += 1;
            quanta = 1;
            debug!(pid = process.id(), left, turn = self.cursor.turns, "Quantum granted");
        }

        let result = if process.is_finished() {
            queue.remove_handle(handle);
            self.cursor.reset();
            info!(pid = process.id(), "Round robin completed process");
            StepResult::Completed
        } else if self.cursor.turns >= self.turn_limit {
            queue.rotate_head_to_tail();
            self.cursor.reset();
            debug!(
                pid = process.id(),
                left = process.remaining_burst(),
                "Turn limit reached, requeued at tail"
            );
            StepResult::Preempted
        } else {
            StepResult::Continued
        };

        StepOutcome {
            pid: process.id(),
            quanta,
            aging_passes: 0,
            result,
        }
    }
}
