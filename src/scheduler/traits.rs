/*!
 * Scheduler Traits
 * Interface every scheduling policy implements
 */

use super::queue::ReadyQueue;
use super::types::{SchedulingAlgorithm, StepOutcome};
use crate::process::ProcessRegistry;

/// One scheduling algorithm bound to one processor
///
/// Policies are owned by their processor's runner thread, so any state they
/// carry between steps (aging clock, round robin cursor) is per-processor.
pub trait SchedulingPolicy: Send {
    /// Algorithm implemented by this policy
    fn algorithm(&self) -> SchedulingAlgorithm;

    /// Perform exactly one step on `queue`
    ///
    /// The queue must be non-empty; the runner checks before calling.
    fn step(&mut self, queue: &mut ReadyQueue, registry: &ProcessRegistry) -> StepOutcome;
}
