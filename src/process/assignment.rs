/*!
 * Initial Assignment
 * Partition the registry into contiguous per-processor blocks by load fraction
 */

use super::registry::ProcessRegistry;
use crate::core::types::ProcessHandle;
use tracing::{info, warn};

/// Number of processes a load fraction asks for out of `total`
#[inline]
pub fn quota_for(load: f64, total: usize) -> usize {
    (load * total as f64).round() as usize
}

/// Walk the registry once, filling processor 0's quota, then processor 1's, ...
///
/// Later processors get fewer than their quota when the registry runs out.
/// Processes left over after every quota is filled (rounding) are appended
/// to the last processor so that none is dropped.
pub fn assign_processes(registry: &ProcessRegistry, loads: &[f64]) -> Vec<Vec<ProcessHandle>> {
    let total = registry.len();
    let mut blocks = Vec::with_capacity(loads.len());
    let mut handles = registry.handles();

    for (processor, &load) in loads.iter().enumerate() {
        let quota = quota_for(load, total);
        let block: Vec<_> = handles.by_ref().take(quota).collect();
        info!(
            processor,
            quota,
            assigned = block.len(),
            "Initial assignment"
        );
        blocks.push(block);
    }

    let leftovers: Vec<_> = handles.collect();
    if !leftovers.is_empty() {
        if let Some(last) = blocks.last_mut() {
            warn!(
                count = leftovers.len(),
                "Rounded quotas left processes unassigned; appending them to the last processor"
            );
            last.extend(leftovers);
        }
    }

    blocks
}
