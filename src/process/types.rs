/*!
 * Process Types
 * Process records as loaded from disk and as held by the registry
 */

use crate::core::limits::NAME_LEN;
use crate::core::types::{BurstUnits, Pid, Priority};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::atomic::{AtomicI32, AtomicI8, Ordering};

/// Immutable snapshot of a process record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub priority: Priority,
    #[serde(serialize_with = "serialize_name")]
    pub name: [u8; NAME_LEN],
    pub id: Pid,
    pub status: u8,
    pub remaining_burst: BurstUnits,
    pub base_register: i32,
    pub limit_register: i64,
    pub file_count: i32,
}

impl ProcessRecord {
    /// Build a record with zeroed payload fields
    pub fn new(id: Pid, name: &str, priority: Priority, burst: BurstUnits) -> Self {
        Self {
            priority,
            name: encode_name(name),
            id,
            status: 1,
            remaining_burst: burst,
            base_register: 0,
            limit_register: 0,
            file_count: 0,
        }
    }

    /// Label up to the first NUL byte
    pub fn name(&self) -> Cow<'_, str> {
        decode_name(&self.name)
    }
}

fn serialize_name<S>(name: &[u8; NAME_LEN], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&decode_name(name))
}

/// Copy `name` into a fixed-width, NUL-padded field (truncating if longer)
pub fn encode_name(name: &str) -> [u8; NAME_LEN] {
    let mut field = [0u8; NAME_LEN];
    let bytes = name.as_bytes();
    let len = bytes.len().min(NAME_LEN);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

/// The field is not necessarily terminated, so stop at NUL or at the width
pub fn decode_name(field: &[u8; NAME_LEN]) -> Cow<'_, str> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
    String::from_utf8_lossy(&field[..end])
}

/// Registry slot for one process
///
/// Only `priority` and `remaining_burst` change during a run. They are
/// atomics so a handle can move between processor threads during
/// rebalancing without a data race. A slot is only ever mutated by the
/// thread whose queue currently holds its handle.
#[derive(Debug)]
pub struct Process {
    priority: AtomicI8,
    name: [u8; NAME_LEN],
    id: Pid,
    status: u8,
    remaining_burst: AtomicI32,
    base_register: i32,
    limit_register: i64,
    file_count: i32,
}

impl Process {
    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn name(&self) -> Cow<'_, str> {
        decode_name(&self.name)
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority.load(Ordering::Acquire)
    }

    #[inline]
    pub fn remaining_burst(&self) -> BurstUnits {
        self.remaining_burst.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_burst() <= 0
    }

    /// Consume one quantum; returns the burst left afterwards
    ///
    /// A finished process is left untouched.
    pub fn consume(&self, quantum: BurstUnits) -> BurstUnits {
        let current = self.remaining_burst();
        if current <= 0 {
            return current;
        }
        let next = current.saturating_sub(quantum);
        self.remaining_burst.store(next, Ordering::Release);
        next
    }

    /// Decrement priority by one unless already at `floor`; returns true if aged
    pub fn age(&self, floor: Priority) -> bool {
        let current = self.priority();
        if current > floor {
            self.priority.store(current - 1, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Snapshot the current state as a plain record
    pub fn snapshot(&self) -> ProcessRecord {
        ProcessRecord {
            priority: self.priority(),
            name: self.name,
            id: self.id,
            status: self.status,
            remaining_burst: self.remaining_burst(),
            base_register: self.base_register,
            limit_register: self.limit_register,
            file_count: self.file_count,
        }
    }
}

impl From<ProcessRecord> for Process {
    fn from(record: ProcessRecord) -> Self {
        Self {
            priority: AtomicI8::new(record.priority),
            name: record.name,
            id: record.id,
            status: record.status,
            remaining_burst: AtomicI32::new(record.remaining_burst),
            base_register: record.base_register,
            limit_register: record.limit_register,
            file_count: record.file_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip_stops_at_nul() {
        let record = ProcessRecord::new(1, "init", 3, 10);
        assert_eq!(record.name(), "init");
    }

    #[test]
    fn test_unterminated_name_uses_full_width() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        let field = encode_name(long);
        assert_eq!(decode_name(&field), &long[..NAME_LEN]);
    }

    #[test]
    fn test_consume_never_touches_finished_process() {
        let process = Process::from(ProcessRecord::new(1, "p", 3, 3));
        assert_eq!(process.consume(2), 1);
        assert_eq!(process.consume(2), -1);
        assert!(process.is_finished());
        assert_eq!(process.consume(2), -1);
    }

    #[test]
    fn test_age_respects_floor() {
        let process = Process::from(ProcessRecord::new(1, "p", 2, 3));
        assert!(process.age(1));
        assert_eq!(process.priority(), 1);
        assert!(!process.age(1));
        assert_eq!(process.priority(), 1);
    }
}
