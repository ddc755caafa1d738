/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use crate::core::types::ProcessorId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, SimulationError>;

/// Startup configuration errors, reported before any processor starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Unknown scheduling algorithm id: {0}")]
    #[diagnostic(
        code(config::unknown_algorithm),
        help("Use 1 (priority), 2 (shortest job first), 3 (round robin) or 4 (first come first served).")
    )]
    UnknownAlgorithm(String),

    #[error("Invalid number '{value}' for {field}")]
    #[diagnostic(code(config::invalid_number), help("Supply a plain decimal number."))]
    InvalidNumber { field: String, value: String },

    #[error("Load fraction {load} for processor {processor} is out of range")]
    #[diagnostic(
        code(config::load_out_of_range),
        help("Each load fraction must lie between 0.1 and 1.0.")
    )]
    LoadOutOfRange { processor: ProcessorId, load: f64 },

    #[error("Load fractions sum to {0}, expected 1.0")]
    #[diagnostic(
        code(config::load_sum),
        help("Adjust the load fractions so that they add up to 1.0 (within 0.01).")
    )]
    LoadSum(f64),

    #[error("Too many processors: {count} (maximum {max})")]
    #[diagnostic(code(config::too_many_processors))]
    TooManyProcessors { count: usize, max: usize },

    #[error("At least one processor must be configured")]
    #[diagnostic(
        code(config::no_processors),
        help("Pass one <ALGORITHM> <LOAD> pair per processor.")
    )]
    NoProcessors,

    #[error("Processor arguments must come in <ALGORITHM> <LOAD> pairs, got {0} values")]
    #[diagnostic(code(config::unpaired_arguments))]
    UnpairedArguments(usize),

    #[error("Quantum must be positive, got {0}")]
    #[diagnostic(code(config::invalid_quantum))]
    InvalidQuantum(i32),

    #[error("Round robin turn limit must be positive")]
    #[diagnostic(code(config::invalid_turn_limit))]
    InvalidTurnLimit,

    #[error("Aging threshold must be positive, got {0}")]
    #[diagnostic(code(config::invalid_aging_threshold))]
    InvalidAgingThreshold(i32),
}

/// Record file errors, fatal at load time
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read process file {path}")]
    #[diagnostic(
        code(load::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Process file {path} holds {len} bytes, less than one {record_size}-byte record")]
    #[diagnostic(
        code(load::malformed_leading_record),
        help("The file must contain at least one complete process record.")
    )]
    MalformedLeadingRecord {
        path: PathBuf,
        len: usize,
        record_size: usize,
    },
}

/// Top-level simulation errors
#[derive(Error, Debug, Diagnostic)]
pub enum SimulationError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to spawn runner thread for processor {processor}")]
    #[diagnostic(code(simulation::spawn_failed))]
    SpawnFailed {
        processor: ProcessorId,
        #[source]
        source: std::io::Error,
    },

    #[error("Runner thread for processor {0} panicked")]
    #[diagnostic(code(simulation::runner_panicked))]
    RunnerPanicked(ProcessorId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_serialization() {
        let err = ConfigError::UnknownAlgorithm("7".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("unknown_algorithm"));
        let back: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_config_error_converts_to_simulation_error() {
        let err: SimulationError = ConfigError::NoProcessors.into();
        assert!(matches!(err, SimulationError::Config(ConfigError::NoProcessors)));
        assert_eq!(err.to_string(), "At least one processor must be configured");
    }
}
