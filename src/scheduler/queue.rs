/*!
 * Ready Queue
 * Ordered, non-owning handles into the process registry
 */

use crate::core::types::ProcessHandle;
use crate::process::{Process, ProcessRegistry};
use std::collections::VecDeque;

/// Work assigned to one processor; position 0 is the head
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    entries: VecDeque<ProcessHandle>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn front(&self) -> Option<ProcessHandle> {
        self.entries.front().copied()
    }

    pub fn get(&self, index: usize) -> Option<ProcessHandle> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcessHandle> + '_ {
        self.entries.iter().copied()
    }

    pub fn push_back(&mut self, handle: ProcessHandle) {
        self.entries.push_back(handle);
    }

    /// Remove by position, shifting later entries toward the head
    pub fn remove(&mut self, index: usize) -> Option<ProcessHandle> {
        self.entries.remove(index)
    }

    /// Remove by identity; position may have changed since selection
    pub fn remove_handle(&mut self, handle: ProcessHandle) -> bool {
        match self.entries.iter().position(|&h| h == handle) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Move the head to the tail
    pub fn rotate_head_to_tail(&mut self) {
        if let Some(head) = self.entries.pop_front() {
            self.entries.push_back(head);
        }
    }

    /// Index of the first entry with the smallest key (first occurrence wins ties)
    pub fn position_min_by_key<K, F>(&self, registry: &ProcessRegistry, mut key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(&Process) -> K,
    {
        let mut best: Option<(usize, K)> = None;
        for (index, handle) in self.entries.iter().enumerate() {
            let candidate = key(&registry[*handle]);
            let better = match &best {
                Some((_, current)) => candidate < *current,
                None => true,
            };
            if better {
                best = Some((index, candidate));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Take every handle out, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = ProcessHandle> + '_ {
        self.entries.drain(..)
    }

    pub fn extend(&mut self, handles: impl IntoIterator<Item = ProcessHandle>) {
        self.entries.extend(handles);
    }
}

impl From<Vec<ProcessHandle>> for ReadyQueue {
    fn from(handles: Vec<ProcessHandle>) -> Self {
        Self {
            entries: handles.into(),
        }
    }
}

impl FromIterator<ProcessHandle> for ReadyQueue {
    fn from_iter<I: IntoIterator<Item = ProcessHandle>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
