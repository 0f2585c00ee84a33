use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CHUNK_SIZE: usize = 50;
pub const DEFAULT_MAX_FORCE: f64 = 10.0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimizationConfig {
    /// Total number of steepest-descent iterations.
    pub total_steps: usize,
    /// Iterations per call into the minimizer; progress is reported between chunks.
    pub chunk_size: usize,
    pub step_size: f64,
    /// Per-atom force magnitude cap applied before each position update.
    pub max_force: f64,
    /// Optional TOML file overriding the built-in force field parameters.
    pub forcefield_path: Option<PathBuf>,
}

impl MinimizationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "chunk_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "step_size",
                reason: format!("must be a positive finite number, got {}", self.step_size),
            });
        }
        if !(self.max_force.is_finite() && self.max_force > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_force",
                reason: format!("must be a positive finite number, got {}", self.max_force),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MinimizationConfigBuilder {
    total_steps: Option<usize>,
    chunk_size: Option<usize>,
    step_size: Option<f64>,
    max_force: Option<f64>,
    forcefield_path: Option<PathBuf>,
}

impl MinimizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_steps(mut self, steps: usize) -> Self {
        self.total_steps = Some(steps);
        self
    }

    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn step_size(mut self, size: f64) -> Self {
        self.step_size = Some(size);
        self
    }

    pub fn max_force(mut self, force: f64) -> Self {
        self.max_force = Some(force);
        self
    }

    pub fn forcefield_path(mut self, path: PathBuf) -> Self {
        self.forcefield_path = Some(path);
        self
    }

    pub fn build(self) -> Result<MinimizationConfig, ConfigError> {
        let config = MinimizationConfig {
            total_steps: self
                .total_steps
                .ok_or(ConfigError::MissingParameter("total_steps"))?,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            step_size: self
                .step_size
                .ok_or(ConfigError::MissingParameter("step_size"))?,
            max_force: self.max_force.unwrap_or(DEFAULT_MAX_FORCE),
            forcefield_path: self.forcefield_path,
        };
        config.validate()?;
        Ok(config)
    }
}
