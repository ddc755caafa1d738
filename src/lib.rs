/*!
 * Multiprocessor Scheduling Simulator
 * Scheduling engine exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::{ConfigError, LoadError, SimResult, SimulationError};
pub use monitoring::init_tracing;
pub use process::{load_records, ProcessRecord, ProcessRegistry};
pub use scheduler::{PolicyConfig, SchedulingAlgorithm};
pub use simulation::{Simulation, SimulationConfig, SimulationReport};
