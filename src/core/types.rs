/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier as stored in the record file
pub type Pid = i32;

/// Scheduling priority (lower value is more urgent)
pub type Priority = i8;

/// Simulated work units
pub type BurstUnits = i32;

/// Dense processor index in `[0, num_processors)`
pub type ProcessorId = usize;

/// Stable slot index into the process registry
///
/// Ready queues hold handles, never copies, so every mutation of a process
/// is visible wherever its handle travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessHandle(usize);

impl ProcessHandle {
    #[inline]
    pub const fn new(slot: usize) -> Self {
        Self(slot)
    }

    #[inline(always)]
    pub const fn slot(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
