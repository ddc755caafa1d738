/*!
 * Simulation Module
 * Configuration, load balancing, processor runners and the engine tying them together
 */

pub mod balancer;
pub mod config;
pub mod engine;
pub mod report;
pub mod runner;

pub use balancer::{rebalance, BalanceOutcome};
pub use config::{parse_processor_args, ProcessorSpec, SimulationConfig, SimulationConfigBuilder};
pub use engine::Simulation;
pub use report::{ProcessorReport, SimulationReport};
pub use runner::{ProcessorState, RunnerSummary};
