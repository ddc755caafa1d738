/*!
 * Processor Runner
 * Per-processor control loop: step the policy, rebalance on starvation
 *
 * Running -> Starved when the ready queue empties. A starved runner takes
 * the balance lock, rebalances, and re-checks its own queue before letting
 * go of the lock: work means Running again, no work means Terminated. A
 * terminated runner leaves the participant set in the same critical
 * section, so later passes never hand it work.
 */

use super::balancer::rebalance;
use super::engine::SharedState;
use crate::core::types::{Pid, ProcessorId};
use crate::monitoring::processor_span;
use crate::scheduler::{ReadyQueue, SchedulingAlgorithm, SchedulingPolicy, StepOutcome};
use parking_lot::MutexGuard;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Runner state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    Running,
    Starved,
    Terminated,
}

/// What a runner hands back when it terminates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSummary {
    pub processor: ProcessorId,
    /// Process ids in the order this processor completed them
    pub completed: Vec<Pid>,
}

pub struct ProcessorRunner {
    id: ProcessorId,
    algorithm: SchedulingAlgorithm,
    policy: Box<dyn SchedulingPolicy>,
    shared: Arc<SharedState>,
    state: ProcessorState,
    completed: Vec<Pid>,
}

impl ProcessorRunner {
    pub(crate) fn new(
        id: ProcessorId,
        policy: Box<dyn SchedulingPolicy>,
        shared: Arc<SharedState>,
    ) -> Self {
        Self {
            id,
            algorithm: policy.algorithm(),
            policy,
            shared,
            state: ProcessorState::Running,
            completed: Vec::new(),
        }
    }

    /// Drive the state machine until the processor terminates
    pub fn run(mut self) -> RunnerSummary {
        let span = processor_span(self.id, self.algorithm);
        let _entered = span.enter();
        info!("Processor started");

        loop {
            self.state = match self.state {
                ProcessorState::Running => self.run_step(),
                ProcessorState::Starved => self.balance(),
                ProcessorState::Terminated => break,
            };
        }

        info!(completed = self.completed.len(), "Processor terminated");
        RunnerSummary {
            processor: self.id,
            completed: self.completed,
        }
    }

    /// One policy step on the own queue; the queue lock is released before pacing
    fn run_step(&mut self) -> ProcessorState {
        let (outcome, remaining) = {
            let mut queue = self.shared.queue(self.id).lock();
            if queue.is_empty() {
                return ProcessorState::Starved;
            }
            let outcome = self.policy.step(&mut queue, self.shared.registry());
            (outcome, queue.len())
        };

        self.record(&outcome);
        self.pace(outcome.quanta);

        if remaining == 0 {
            debug!("Ready queue drained");
            ProcessorState::Starved
        } else {
            ProcessorState::Running
        }
    }

    fn record(&mut self, outcome: &StepOutcome) {
        self.shared.stats(self.id).record_step(outcome);
        if outcome.completed() {
            self.completed.push(outcome.pid);
        }
    }

    fn pace(&self, quanta: u32) {
        let pause = pacing_delay(self.shared.policy().step_delay, quanta);
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    /// Balance pass and post-balance recheck, atomic with respect to other balancers
    fn balance(&mut self) -> ProcessorState {
        let mut participants = self.shared.lock_participants();
        let members: Vec<ProcessorId> = participants.members().collect();

        let (outcome, own_len) = {
            // Ascending id order, the only order queue locks are ever nested in
            let mut guards: Vec<MutexGuard<'_, ReadyQueue>> = members
                .iter()
                .map(|&id| self.shared.queue(id).lock())
                .collect();
            let outcome = rebalance(&mut guards);
            let own_len = members
                .iter()
                .position(|&id| id == self.id)
                .map_or(0, |index| guards[index].len());
            (outcome, own_len)
        };

        self.shared.stats(self.id).record_balance(outcome.performed());

        if own_len > 0 {
            debug!(received = own_len, ?outcome, "Resuming with rebalanced work");
            ProcessorState::Running
        } else {
            participants.leave(self.id);
            debug!(?outcome, "No work available after balancing");
            ProcessorState::Terminated
        }
    }
}

/// Wall-clock pause for `quanta` executed quanta, saturating at `Duration::MAX`
fn pacing_delay(step_delay: Duration, quanta: u32) -> Duration {
    step_delay.checked_mul(quanta).unwrap_or(Duration::MAX)
}
