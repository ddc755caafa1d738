/*!
 * Priority Scheduling with Aging
 * Non-preemptive; lowest priority value runs first
 *
 * Every executed quantum advances an aging clock. When the clock reaches
 * the threshold, every process still in the queue with priority above the
 * floor moves one step closer to it. The running process stays queued until
 * it completes, so it ages along with the others.
 */

use super::queue::ReadyQueue;
use super::traits::SchedulingPolicy;
use super::types::{SchedulingAlgorithm, StepOutcome, StepResult};
use crate::core::limits::PRIORITY_FLOOR;
use crate::core::types::BurstUnits;
use crate::process::{Process, ProcessRegistry};
use tracing::{debug, info};

/// Elapsed logical time since the last aging pass, owned by one processor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgingClock {
    elapsed: BurstUnits,
    threshold: BurstUnits,
}

impl AgingClock {
    pub fn new(threshold: BurstUnits) -> Self {
        Self {
            elapsed: 0,
            threshold,
        }
    }

    /// Advance by `delta`; true when an aging pass is due
    pub fn advance(&mut self, delta: BurstUnits) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.threshold {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> BurstUnits {
        self.elapsed
    }
}

pub struct PriorityPolicy {
    quantum: BurstUnits,
    clock: AgingClock,
}

impl PriorityPolicy {
    pub fn new(quantum: BurstUnits, aging_threshold: BurstUnits) -> Self {
        Self {
            quantum,
            clock: AgingClock::new(aging_threshold),
        }
    }

    pub fn clock(&self) -> AgingClock {
        self.clock
    }

    fn age_queue(queue: &ReadyQueue, registry: &ProcessRegistry) -> usize {
        queue
            .iter()
            .filter(|&handle| registry[handle].age(PRIORITY_FLOOR))
            .count()
    }
}

impl SchedulingPolicy for PriorityPolicy {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::Priority
    }

    fn step(&mut self, queue: &mut ReadyQueue, registry: &ProcessRegistry) -> StepOutcome {
        let index = queue
            .position_min_by_key(registry, Process::priority)
            .expect("priority step on an empty queue");
        let handle = queue.get(index).expect("selected index is in bounds");
        let process = &registry[handle];
        let priority = process.priority();

        let mut quanta = 0;
        let mut aging_passes = 0;
        while !process.is_finished() {
            process.consume(self.quantum);
            quanta += 1;
            if self.clock.advance(self.quantum) {
                let aged = Self::age_queue(queue, registry);
                aging_passes += 1;
                debug!(running = process.id(), aged, "Aging pass");
            }
        }
        queue.remove_handle(handle);

        info!(
            pid = process.id(),
            priority,
            quanta,
            aging_passes,
            "Priority completed process"
        );
        StepOutcome {
            pid: process.id(),
            quanta,
            aging_passes,
            result: StepResult::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;

    #[test]
    fn test_lowest_value_first_with_index_tiebreak() {
        let registry = ProcessRegistry::new([
            ProcessRecord::new(1, "P1", 4, 2),
            ProcessRecord::new(2, "P2", 2, 2),
            ProcessRecord::new(3, "P3", 2, 2),
        ]);
        let mut queue: ReadyQueue = registry.handles().collect();
        // High threshold keeps aging out of the picture
        let mut policy = PriorityPolicy::new(2, 1_000);

        let order: Vec<_> = (0..3).map(|_| policy.step(&mut queue, &registry).pid).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_aging_reaches_every_queued_process_including_runner() {
        // threshold 10, quantum 2: one pass after 5 quanta
        let registry = ProcessRegistry::new([
            ProcessRecord::new(1, "runner", 3, 10),
            ProcessRecord::new(2, "waiting", 5, 4),
            ProcessRecord::new(3, "floor", 1, 4),
        ]);
        let mut queue: ReadyQueue = registry.handles().collect();
        let mut policy = PriorityPolicy::new(2, 10);

        let outcome = policy.step(&mut queue, &registry);
        assert_eq!(outcome.pid, 1);
        assert_eq!(outcome.quanta, 5);
        assert_eq!(outcome.aging_passes, 1);

        let priorities: Vec<_> = registry.iter().map(Process::priority).collect();
        assert_eq!(priorities, vec![2, 4, 1]);
    }

    #[test]
    fn test_aging_clock_carries_over_between_steps() {
        let registry = ProcessRegistry::new([
            ProcessRecord::new(1, "a", 1, 6),
            ProcessRecord::new(2, "b", 1, 6),
            ProcessRecord::new(3, "c", 7, 2),
        ]);
        let mut queue: ReadyQueue = registry.handles().collect();
        let mut policy = PriorityPolicy::new(2, 10);

        let first = policy.step(&mut queue, &registry);
        assert_eq!(first.aging_passes, 0);
        assert_eq!(policy.clock().elapsed(), 6);

        let second = policy.step(&mut queue, &registry);
        assert_eq!(second.aging_passes, 1);
        assert_eq!(registry[queue.front().unwrap()].priority(), 6);
    }

    #[test]
    fn test_aging_clock_resets_after_pass() {
        let mut clock = AgingClock::new(4);
        assert!(!clock.advance(2));
        assert!(clock.advance(2));
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_aging_clock_saturates_near_i32_max() {
        let mut clock = AgingClock::new(i32::MAX);
        assert!(!clock.advance(1 << 30));
        assert!(!clock.advance((1 << 30) - 2));
        assert_eq!(clock.elapsed(), i32::MAX - 1);
        assert!(clock.advance(1 << 30));
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_huge_quantum_and_threshold_do_not_overflow() {
        let registry = ProcessRegistry::new([ProcessRecord::new(1, "big", 3, i32::MAX)]);
        let mut queue: ReadyQueue = registry.handles().collect();
        let mut policy = PriorityPolicy::new(1 << 30, i32::MAX);

        let outcome = policy.step(&mut queue, &registry);
        assert_eq!(outcome.quanta, 2);
        assert_eq!(outcome.aging_passes, 1);
        assert!(queue.is_empty());
    }
}
