/*!
 * Simulation Limits
 * Compile-time defaults and bounds for configuration validation
 */

use std::time::Duration;

/// Maximum number of simulated processors
pub const MAX_PROCESSORS: usize = 4;

/// Smallest load fraction a single processor may be configured with
pub const MIN_LOAD_FRACTION: f64 = 0.1;

/// Allowed deviation of the summed load fractions from 1.0
pub const LOAD_SUM_TOLERANCE: f64 = 0.01;

/// Work units consumed by one scheduling tick
pub const DEFAULT_QUANTUM: i32 = 2;

/// Consecutive quanta a round robin head may receive before rotation
pub const DEFAULT_TURN_LIMIT: u32 = 5;

/// Elapsed logical time between two aging passes
pub const DEFAULT_AGING_THRESHOLD: i32 = 10;

/// Priorities never age below this value
pub const PRIORITY_FLOOR: i8 = 1;

/// Wall-clock pause per executed quantum (pacing only)
pub const DEFAULT_STEP_DELAY: Duration = Duration::ZERO;

/// Size of one on-disk process record in bytes
pub const RECORD_SIZE: usize = 1 + NAME_LEN + 4 + 1 + 4 + 4 + 8 + 4;

/// Width of the fixed process name field
pub const NAME_LEN: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size_matches_layout() {
        assert_eq!(RECORD_SIZE, 50);
    }
}
