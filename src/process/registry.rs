/*!
 * Process Registry
 * Owns every process for the whole run; queues refer to slots by handle
 */

use super::types::{Process, ProcessRecord};
use crate::core::types::ProcessHandle;
use std::ops::Index;

/// Fixed collection of processes, populated once and never resized
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    slots: Vec<Process>,
}

impl ProcessRegistry {
    pub fn new(records: impl IntoIterator<Item = ProcessRecord>) -> Self {
        Self {
            slots: records.into_iter().map(Process::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up a slot; `None` for a handle from another registry
    pub fn get(&self, handle: ProcessHandle) -> Option<&Process> {
        self.slots.get(handle.slot())
    }

    /// Handles for every slot, in registry order
    pub fn handles(&self) -> impl Iterator<Item = ProcessHandle> + '_ {
        (0..self.slots.len()).map(ProcessHandle::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.slots.iter()
    }

    pub fn all_finished(&self) -> bool {
        self.slots.iter().all(Process::is_finished)
    }

    pub fn snapshot(&self) -> Vec<ProcessRecord> {
        self.slots.iter().map(Process::snapshot).collect()
    }
}

impl Index<ProcessHandle> for ProcessRegistry {
    type Output = Process;

    fn index(&self, handle: ProcessHandle) -> &Process {
        &self.slots[handle.slot()]
    }
}

impl FromIterator<ProcessRecord> for ProcessRegistry {
    fn from_iter<I: IntoIterator<Item = ProcessRecord>>(iter: I) -> Self {
        Self::new(iter)
    }
}
