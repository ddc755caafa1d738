/*!
 * Load Balancer Property Tests
 * Conservation, idempotence and initial assignment over generated inputs
 */

use mpsched::core::types::ProcessHandle;
use mpsched::process::{assign_processes, quota_for, ProcessRecord, ProcessRegistry};
use mpsched::scheduler::ReadyQueue;
use mpsched::simulation::{rebalance, BalanceOutcome};
use proptest::prelude::*;
use std::collections::HashSet;

fn build_queues(sizes: &[usize]) -> Vec<ReadyQueue> {
    let mut next = 0;
    sizes
        .iter()
        .map(|&size| {
            let queue: ReadyQueue = (next..next + size).map(ProcessHandle::new).collect();
            next += size;
            queue
        })
        .collect()
}

fn balance(queues: &mut [ReadyQueue]) -> BalanceOutcome {
    let mut refs: Vec<&mut ReadyQueue> = queues.iter_mut().collect();
    rebalance(&mut refs)
}

fn contents(queues: &[ReadyQueue]) -> Vec<ProcessHandle> {
    queues.iter().flat_map(|q| q.iter()).collect()
}

proptest! {
    #[test]
    fn prop_balancer_never_loses_or_duplicates(sizes in prop::collection::vec(0usize..40, 1..5)) {
        let mut queues = build_queues(&sizes);
        let before: HashSet<_> = contents(&queues).into_iter().collect();
        let total: usize = sizes.iter().sum();

        let outcome = balance(&mut queues);
        let after = contents(&queues);

        prop_assert_eq!(after.len(), total);
        prop_assert_eq!(after.into_iter().collect::<HashSet<_>>(), before);
        prop_assert_eq!(outcome.performed(), total >= sizes.len());
    }

    #[test]
    fn prop_balancer_is_idempotent_on_sizes(sizes in prop::collection::vec(0usize..40, 1..5)) {
        let mut queues = build_queues(&sizes);
        balance(&mut queues);
        let first: Vec<_> = queues.iter().map(ReadyQueue::len).collect();
        balance(&mut queues);
        let second: Vec<_> = queues.iter().map(ReadyQueue::len).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_balanced_sizes_are_ideal_blocks(sizes in prop::collection::vec(0usize..40, 1..5)) {
        let total: usize = sizes.iter().sum();
        prop_assume!(total >= sizes.len());

        let mut queues = build_queues(&sizes);
        balance(&mut queues);

        let ideal = total / sizes.len();
        let (last, rest) = queues.split_last().unwrap();
        prop_assert!(rest.iter().all(|q| q.len() == ideal));
        prop_assert_eq!(last.len(), total - ideal * (sizes.len() - 1));
    }

    #[test]
    fn prop_initial_assignment_is_exactly_once(
        count in 0usize..200,
        weights in prop::collection::vec(1u32..10, 1..5),
    ) {
        let sum: u32 = weights.iter().sum();
        let loads: Vec<f64> = weights.iter().map(|&w| f64::from(w) / f64::from(sum)).collect();
        let registry: ProcessRegistry = (0..count)
            .map(|i| ProcessRecord::new(i as i32, "p", 1, 1))
            .collect();

        let blocks = assign_processes(&registry, &loads);
        let assigned: Vec<usize> = blocks.iter().flatten().map(|h| h.slot()).collect();

        // Contiguous walk of the registry, in order
        prop_assert_eq!(assigned, (0..count).collect::<Vec<_>>());
        // No block except the last exceeds its quota
        for (block, &load) in blocks.iter().zip(&loads).take(loads.len() - 1) {
            prop_assert!(block.len() <= quota_for(load, count));
        }
    }
}

#[test]
fn test_ten_processes_split_half_three_tenths_one_fifth() {
    let registry: ProcessRegistry = (0..10)
        .map(|i| ProcessRecord::new(i, "p", 1, 1))
        .collect();
    let blocks = assign_processes(&registry, &[0.5, 0.3, 0.2]);
    let slots: Vec<Vec<usize>> = blocks
        .iter()
        .map(|b| b.iter().map(|h| h.slot()).collect())
        .collect();
    assert_eq!(slots, vec![vec![0, 1, 2, 3, 4], vec![5, 6, 7], vec![8, 9]]);
}
