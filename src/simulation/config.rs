/*!
 * Simulation Configuration
 * Builder and validation for processors and policy parameters
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{LOAD_SUM_TOLERANCE, MAX_PROCESSORS, MIN_LOAD_FRACTION};
use crate::core::types::BurstUnits;
use crate::scheduler::{PolicyConfig, SchedulingAlgorithm};
use std::time::Duration;

/// One processor's algorithm and initial load fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessorSpec {
    pub algorithm: SchedulingAlgorithm,
    pub load: f64,
}

impl ProcessorSpec {
    pub fn new(algorithm: SchedulingAlgorithm, load: f64) -> Self {
        Self { algorithm, load }
    }
}

/// Validated simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    processors: Vec<ProcessorSpec>,
    policy: PolicyConfig,
}

impl SimulationConfig {
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    pub fn processors(&self) -> &[ProcessorSpec] {
        &self.processors
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn num_processors(&self) -> usize {
        self.processors.len()
    }

    pub fn loads(&self) -> Vec<f64> {
        self.processors.iter().map(|p| p.load).collect()
    }
}

/// Builder for SimulationConfig
#[derive(Debug, Clone, Default)]
pub struct SimulationConfigBuilder {
    processors: Vec<ProcessorSpec>,
    policy: PolicyConfig,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a processor with its algorithm and load fraction
    pub fn with_processor(mut self, algorithm: SchedulingAlgorithm, load: f64) -> Self {
        self.processors.push(ProcessorSpec::new(algorithm, load));
        self
    }

    pub fn with_processors(mut self, specs: impl IntoIterator<Item = ProcessorSpec>) -> Self {
        self.processors.extend(specs);
        self
    }

    pub fn with_quantum(mut self, quantum: BurstUnits) -> Self {
        self.policy.quantum = quantum;
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.policy.turn_limit = turn_limit;
        self
    }

    pub fn with_aging_threshold(mut self, threshold: BurstUnits) -> Self {
        self.policy.aging_threshold = threshold;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.policy.step_delay = delay;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        if self.processors.is_empty() {
            return Err(ConfigError::NoProcessors);
        }
        if self.processors.len() > MAX_PROCESSORS {
            return Err(ConfigError::TooManyProcessors {
                count: self.processors.len(),
                max: MAX_PROCESSORS,
            });
        }

        for (processor, spec) in self.processors.iter().enumerate() {
            if !(MIN_LOAD_FRACTION..=1.0).contains(&spec.load) {
                return Err(ConfigError::LoadOutOfRange {
                    processor,
                    load: spec.load,
                });
            }
        }

        let sum: f64 = self.processors.iter().map(|p| p.load).sum();
        if (sum - 1.0).abs() > LOAD_SUM_TOLERANCE {
            return Err(ConfigError::LoadSum(sum));
        }

        self.policy.validate()?;

        Ok(SimulationConfig {
            processors: self.processors,
            policy: self.policy,
        })
    }
}

/// Parse `<ALGORITHM> <LOAD>` pairs as given on the command line
pub fn parse_processor_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<ProcessorSpec>, ConfigError> {
    if args.is_empty() {
        return Err(ConfigError::NoProcessors);
    }
    if args.len() % 2 != 0 {
        return Err(ConfigError::UnpairedArguments(args.len()));
    }

    args.chunks_exact(2)
        .map(|pair| {
            let algorithm = SchedulingAlgorithm::parse(pair[0].as_ref())?;
            let raw = pair[1].as_ref().trim();
            let load = raw
                .parse::<f64>()
                .ok()
                .filter(|load| load.is_finite())
                .ok_or_else(|| ConfigError::InvalidNumber {
                    field: "load".into(),
                    value: raw.to_string(),
                })?;
            Ok(ProcessorSpec::new(algorithm, load))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_accepts_valid_loads() {
        let config = SimulationConfig::builder()
            .with_processor(SchedulingAlgorithm::Priority, 0.5)
            .with_processor(SchedulingAlgorithm::RoundRobin, 0.3)
            .with_processor(SchedulingAlgorithm::FirstComeFirstServed, 0.2)
            .with_turn_limit(3)
            .build()
            .unwrap();
        assert_eq!(config.num_processors(), 3);
        assert_eq!(config.policy().turn_limit, 3);
        assert_eq!(config.loads(), vec![0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_load_sum_tolerance() {
        let ok = SimulationConfig::builder()
            .with_processor(SchedulingAlgorithm::Priority, 0.333)
            .with_processor(SchedulingAlgorithm::Priority, 0.333)
            .with_processor(SchedulingAlgorithm::Priority, 0.333)
            .build();
        assert!(ok.is_ok());

        let err = SimulationConfig::builder()
            .with_processor(SchedulingAlgorithm::Priority, 0.5)
            .with_processor(SchedulingAlgorithm::Priority, 0.4)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::LoadSum(_)));
    }

    #[test]
    fn test_load_below_minimum_rejected() {
        let err = SimulationConfig::builder()
            .with_processor(SchedulingAlgorithm::Priority, 0.95)
            .with_processor(SchedulingAlgorithm::Priority, 0.05)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::LoadOutOfRange {
                processor: 1,
                load: 0.05
            }
        );
    }

    #[test]
    fn test_processor_count_bounds() {
        assert_eq!(
            SimulationConfig::builder().build().unwrap_err(),
            ConfigError::NoProcessors
        );

        let err = SimulationConfig::builder()
            .with_processors(vec![ProcessorSpec::new(SchedulingAlgorithm::RoundRobin, 0.2); 5])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::TooManyProcessors { count: 5, max: 4 });
    }

    #[test]
    fn test_parse_processor_args() {
        let specs = parse_processor_args(&["1", "0.6", "3", "0.4"]).unwrap();
        assert_eq!(
            specs,
            vec![
                ProcessorSpec::new(SchedulingAlgorithm::Priority, 0.6),
                ProcessorSpec::new(SchedulingAlgorithm::RoundRobin, 0.4),
            ]
        );

        assert_eq!(
            parse_processor_args(&["1", "0.6", "3"]).unwrap_err(),
            ConfigError::UnpairedArguments(3)
        );
        assert!(matches!(
            parse_processor_args(&["9", "1.0"]).unwrap_err(),
            ConfigError::UnknownAlgorithm(_)
        ));
        assert!(matches!(
            parse_processor_args(&["2", "half"]).unwrap_err(),
            ConfigError::InvalidNumber { .. }
        ));
    }
}
