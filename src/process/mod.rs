/*!
 * Process Module
 * Process records, the owning registry, record loading and initial assignment
 */

pub mod assignment;
pub mod loader;
pub mod registry;
pub mod types;

pub use assignment::{assign_processes, quota_for};
pub use loader::{load_records, parse_records, write_dump};
pub use registry::ProcessRegistry;
pub use types::{Process, ProcessRecord};
