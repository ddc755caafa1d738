/*!
 * Scheduler Types
 * Algorithm selection, policy parameters and step outcomes
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_AGING_THRESHOLD, DEFAULT_QUANTUM, DEFAULT_STEP_DELAY, DEFAULT_TURN_LIMIT,
};
use crate::core::types::{BurstUnits, Pid};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Scheduling algorithm run by one processor
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingAlgorithm {
    /// Static priority with aging, non-preemptive
    Priority,
    /// Shortest remaining burst first, non-preemptive
    ShortestJobFirst,
    /// Head-of-queue time slicing with a turn limit
    RoundRobin,
    /// Arrival order, run to completion
    FirstComeFirstServed,
}

impl SchedulingAlgorithm {
    pub const ALL: [Self; 4] = [
        Self::Priority,
        Self::ShortestJobFirst,
        Self::RoundRobin,
        Self::FirstComeFirstServed,
    ];

    /// Map the numeric command-line id (1..=4)
    pub fn from_id(id: u8) -> Result<Self, ConfigError> {
        match id {
            1 => Ok(Self::Priority),
            2 => Ok(Self::ShortestJobFirst),
            3 => Ok(Self::RoundRobin),
            4 => Ok(Self::FirstComeFirstServed),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }

    pub const fn id(&self) -> u8 {
        match self {
            Self::Priority => 1,
            Self::ShortestJobFirst => 2,
            Self::RoundRobin => 3,
            Self::FirstComeFirstServed => 4,
        }
    }

    /// Parse from a numeric id or a name
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id);
        }
        match s.to_lowercase().as_str() {
            "priority" | "prio" => Ok(Self::Priority),
            "sjf" | "shortest_job_first" => Ok(Self::ShortestJobFirst),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "fcfs" | "first_come_first_served" => Ok(Self::FirstComeFirstServed),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::ShortestJobFirst => "shortest_job_first",
            Self::RoundRobin => "round_robin",
            Self::FirstComeFirstServed => "first_come_first_served",
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parameters shared by every policy instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyConfig {
    /// Work units consumed per tick
    pub quantum: BurstUnits,
    /// Round robin: consecutive quanta before the head is rotated
    pub turn_limit: u32,
    /// Priority: elapsed logical time between aging passes
    pub aging_threshold: BurstUnits,
    /// Pacing pause per executed quantum
    #[serde(serialize_with = "serialize_millis")]
    pub step_delay: Duration,
}

fn serialize_millis<S>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(delay.as_millis() as u64)
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantum <= 0 {
            return Err(ConfigError::InvalidQuantum(self.quantum));
        }
        if self.turn_limit == 0 {
            return Err(ConfigError::InvalidTurnLimit);
        }
        if self.aging_threshold <= 0 {
            return Err(ConfigError::InvalidAgingThreshold(self.aging_threshold));
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            turn_limit: DEFAULT_TURN_LIMIT,
            aging_threshold: DEFAULT_AGING_THRESHOLD,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

/// What happened to the selected process during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Burst exhausted; removed from the queue
    Completed,
    /// Round robin turn limit reached; moved to the tail
    Preempted,
    /// Round robin head keeps its place for another quantum
    Continued,
}

/// Record of one policy step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub pid: Pid,
    /// Quanta executed during this step (drives pacing and stats)
    pub quanta: u32,
    /// Aging passes fired during this step
    pub aging_passes: u32,
    pub result: StepResult,
}

impl StepOutcome {
    pub fn completed(&self) -> bool {
        self.result == StepResult::Completed
    }
}
