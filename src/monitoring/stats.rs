/*!
 * Lock-Free Processor Statistics
 * Atomic counters updated from runner threads, snapshotted for the report
 */

use crate::scheduler::{StepOutcome, StepResult};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of one processor's counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorStats {
    pub steps: u64,
    pub quanta: u64,
    pub completions: u64,
    pub preemptions: u64,
    pub aging_passes: u64,
    pub balances_performed: u64,
    pub balances_skipped: u64,
}

/// Atomic processor statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing between processors
/// - Relaxed ordering; counters are only read after the runners are joined
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub struct AtomicProcessorStats {
    steps: AtomicU64,
    quanta: AtomicU64,
    completions: AtomicU64,
    preemptions: AtomicU64,
    aging_passes: AtomicU64,
    balances_performed: AtomicU64,
    balances_skipped: AtomicU64,
}

impl AtomicProcessorStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one policy step into the counters
    #[inline]
    pub fn record_step(&self, outcome: &StepOutcome) {
        self.steps.fetch_add(1, Ordering::Relaxed);
        self.quanta
            .fetch_add(u64::from(outcome.quanta), Ordering::Relaxed);
        self.aging_passes
            .fetch_add(u64::from(outcome.aging_passes), Ordering::Relaxed);
        match outcome.result {
            StepResult::Completed => {
                self.completions.fetch_add(1, Ordering::Relaxed);
            }
            StepResult::Preempted => {
                self.preemptions.fetch_add(1, Ordering::Relaxed);
            }
            StepResult::Continued => {}
        }
    }

    #[inline]
    pub fn record_balance(&self, performed: bool) {
        let counter = if performed {
            &self.balances_performed
        } else {
            &self.balances_skipped
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ProcessorStats {
        ProcessorStats {
            steps: self.steps.load(Ordering::Relaxed),
            quanta: self.quanta.load(Ordering::Relaxed),
            completions: self.completions.load(Ordering::Relaxed),
            preemptions: self.preemptions.load(Ordering::Relaxed),
            aging_passes: self.aging_passes.load(Ordering::Relaxed),
            balances_performed: self.balances_performed.load(Ordering::Relaxed),
            balances_skipped: self.balances_skipped.load(Ordering::Relaxed),
        }
    }
}
