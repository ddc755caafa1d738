/*!
 * Simulation Report
 * End-of-run summary, printable as text or serializable as JSON
 */

use crate::core::types::{Pid, ProcessorId};
use crate::monitoring::ProcessorStats;
use crate::process::ProcessRecord;
use crate::scheduler::{PolicyConfig, SchedulingAlgorithm};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessorReport {
    pub id: ProcessorId,
    pub algorithm: SchedulingAlgorithm,
    pub load: f64,
    pub initially_assigned: usize,
    pub stats: ProcessorStats,
    /// Process ids in completion order
    pub completed: Vec<Pid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub policy: PolicyConfig,
    pub processors: Vec<ProcessorReport>,
    /// Final registry state
    pub processes: Vec<ProcessRecord>,
    pub elapsed_ms: u64,
}

impl SimulationReport {
    pub fn total_completed(&self) -> usize {
        self.processors.iter().map(|p| p.completed.len()).sum()
    }

    /// True when every registry entry ended with its burst exhausted
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(|p| p.remaining_burst <= 0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Simulation finished in {} ms: {} of {} processes completed",
            self.elapsed_ms,
            self.total_completed(),
            self.processes.len()
        )?;
        for p in &self.processors {
            writeln!(
                f,
                "  cpu-{} {:<24} load {:.2} assigned {:>4} completed {:>4} quanta {:>6} preemptions {:>4} aging {:>4} balances {}/{}",
                p.id,
                p.algorithm.as_str(),
                p.load,
                p.initially_assigned,
                p.completed.len(),
                p.stats.quanta,
                p.stats.preemptions,
                p.stats.aging_passes,
                p.stats.balances_performed,
                p.stats.balances_performed + p.stats.balances_skipped,
            )?;
        }
        Ok(())
    }
}
