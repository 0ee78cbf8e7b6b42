use gpn_core::{errors::ErrorInfo, GpnError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing an annealing run.
///
/// Out-of-domain values are fatal: [`AnnealConfig::validate`] rejects them
/// before a single iteration executes, and no partial run is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Hard cap on search iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Starting temperature of the geometric cooling schedule.
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    /// Multiplicative temperature decay applied after every iteration.
    #[serde(default = "default_cooling_rate")]
    pub cooling_rate: f64,
    /// The run terminates once the temperature falls below this floor.
    #[serde(default = "default_temperature_floor")]
    pub temperature_floor: f64,
    /// Proposal attempts per iteration before the move generator reports a
    /// no-op round.
    #[serde(default = "default_max_move_attempts")]
    pub max_move_attempts: usize,
    /// Whether the energy oracle counts the zero-length self-paths.
    #[serde(default = "default_count_trivial")]
    pub count_trivial: bool,
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_initial_temperature() -> f64 {
    25_000.0
}

fn default_cooling_rate() -> f64 {
    0.999
}

fn default_temperature_floor() -> f64 {
    2.5
}

fn default_max_move_attempts() -> usize {
    100
}

fn default_count_trivial() -> bool {
    true
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            initial_temperature: default_initial_temperature(),
            cooling_rate: default_cooling_rate(),
            temperature_floor: default_temperature_floor(),
            max_move_attempts: default_max_move_attempts(),
            count_trivial: default_count_trivial(),
        }
    }
}

impl AnnealConfig {
    /// Checks every numeric parameter against its valid domain.
    pub fn validate(&self) -> Result<(), GpnError> {
        if self.max_iterations == 0 {
            return Err(config_error(
                "max-iterations",
                "iteration cap must be positive",
                self.max_iterations.to_string(),
            ));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(config_error(
                "initial-temperature",
                "initial temperature must be positive and finite",
                self.initial_temperature.to_string(),
            ));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(config_error(
                "cooling-rate",
                "cooling rate must lie strictly between 0 and 1",
                self.cooling_rate.to_string(),
            ));
        }
        if !self.temperature_floor.is_finite() || self.temperature_floor < 0.0 {
            return Err(config_error(
                "temperature-floor",
                "temperature floor must be non-negative and finite",
                self.temperature_floor.to_string(),
            ));
        }
        if self.max_move_attempts == 0 {
            return Err(config_error(
                "max-move-attempts",
                "move attempt budget must be positive",
                self.max_move_attempts.to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from YAML and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GpnError> {
        let config: AnnealConfig = serde_yaml::from_str(yaml)
            .map_err(|err| GpnError::Serde(ErrorInfo::new("config-yaml", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

fn config_error(code: &str, message: &str, value: String) -> GpnError {
    GpnError::Config(ErrorInfo::new(code, message).with_context("value", value))
}
