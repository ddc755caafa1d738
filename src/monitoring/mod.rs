/*!
 * Monitoring Module
 * Tracing setup and per-processor statistics
 */

pub mod stats;
pub mod tracer;

pub use stats::{AtomicProcessorStats, ProcessorStats};
pub use tracer::{init_tracing, processor_span};
