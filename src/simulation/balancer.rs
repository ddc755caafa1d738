/*!
 * Load Balancer
 * Pool every participating queue and hand the work back in contiguous blocks
 *
 * The caller must hold exclusive access to every queue passed in; the
 * engine does this by taking the global balance lock and then each
 * participant's queue lock in ascending processor order.
 */

use crate::core::types::ProcessHandle;
use crate::scheduler::ReadyQueue;
use std::ops::DerefMut;
use tracing::{debug, info};

/// Result of one balancing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome {
    /// Fewer handles than participants; queues left untouched
    Skipped { total: usize },
    /// Handles redistributed; `ideal` per queue, remainder to the last
    Redistributed { total: usize, ideal: usize },
}

impl BalanceOutcome {
    pub fn performed(&self) -> bool {
        matches!(self, Self::Redistributed { .. })
    }
}

/// Pool and redistribute the handles held by `queues`
///
/// Queue 0's remainder is pooled first, then queue 1's, and so on. Each
/// queue except the last receives `total / queues.len()` handles; the last
/// takes the rest. Every handle lands in exactly one queue.
pub fn rebalance<Q>(queues: &mut [Q]) -> BalanceOutcome
where
    Q: DerefMut<Target = ReadyQueue>,
{
    let participants = queues.len();
    let total: usize = queues.iter().map(|q| q.len()).sum();

    if participants == 0 || total < participants {
        debug!(total, participants, "Balancing skipped");
        return BalanceOutcome::Skipped { total };
    }

    let mut pool: Vec<ProcessHandle> = Vec::with_capacity(total);
    for queue in queues.iter_mut() {
        pool.extend(queue.drain());
    }

    let ideal = total / participants;
    let mut remaining = pool.into_iter();
    let last = participants - 1;
    for (index, queue) in queues.iter_mut().enumerate() {
        if index == last {
            queue.extend(remaining.by_ref());
        } else {
            queue.extend(remaining.by_ref().take(ideal));
        }
    }

    info!(total, participants, ideal, "Rebalanced ready queues");
    BalanceOutcome::Redistributed { total, ideal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn queue(slots: &[usize]) -> ReadyQueue {
        slots.iter().copied().map(ProcessHandle::new).collect()
    }

    fn sizes(queues: &[ReadyQueue]) -> Vec<usize> {
        queues.iter().map(ReadyQueue::len).collect()
    }

    fn balance(queues: &mut [ReadyQueue]) -> BalanceOutcome {
        let mut refs: Vec<&mut ReadyQueue> = queues.iter_mut().collect();
        rebalance(&mut refs)
    }

    #[test]
    fn test_pools_in_processor_order() {
        let mut queues = vec![queue(&[]), queue(&[0, 1, 2, 3]), queue(&[4, 5, 6])];
        let outcome = balance(&mut queues);
        assert_eq!(outcome, BalanceOutcome::Redistributed { total: 7, ideal: 2 });
        assert_eq!(queues[0], queue(&[0, 1]));
        assert_eq!(queues[1], queue(&[2, 3]));
        assert_eq!(queues[2], queue(&[4, 5, 6]));
    }

    #[test]
    fn test_skips_when_fewer_handles_than_processors() {
        let mut queues = vec![queue(&[]), queue(&[8]), queue(&[9])];
        let before = queues.clone();
        assert_eq!(balance(&mut queues), BalanceOutcome::Skipped { total: 2 });
        assert_eq!(queues, before);
    }

    #[test]
    fn test_second_pass_is_stable() {
        let mut queues = vec![queue(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), queue(&[]), queue(&[]), queue(&[9, 10])];
        balance(&mut queues);
        let first = sizes(&queues);
        balance(&mut queues);
        assert_eq!(sizes(&queues), first);
        assert_eq!(first, vec![2, 2, 2, 5]);
    }

    #[test]
    fn test_single_participant_keeps_its_work() {
        let mut queues = vec![queue(&[3, 1, 2])];
        assert!(balance(&mut queues).performed());
        assert_eq!(queues[0], queue(&[3, 1, 2]));
    }
}
