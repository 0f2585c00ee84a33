use crate::cli::MinimizeArgs;
use crate::error::{CliError, Result};
use molscope::engine::config::{self as core_config, MinimizationConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_STEPS: usize = 500;
pub const DEFAULT_STEP_SIZE: f64 = 0.005;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialMinimizationConfig {
    steps: Option<usize>,
    chunk_size: Option<usize>,
    step_size: Option<f64>,
    max_force: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialForcefieldConfig {
    parameters_path: Option<PathBuf>,
}

/// A configuration file where every value is optional.
///
/// ```toml
/// [minimization]
/// steps = 500
/// chunk-size = 50
/// step-size = 0.005
/// max-force = 10.0
///
/// [forcefield]
/// parameters-path = "params.toml"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    minimization: Option<PartialMinimizationConfig>,
    forcefield: Option<PartialForcefieldConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.resolve_relative_paths(path.parent().unwrap_or_else(|| Path::new("")));
        Ok(config)
    }

    /// Loads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    // Parameter paths in a config file are relative to the file itself.
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(path) = self
            .forcefield
            .as_mut()
            .and_then(|ff| ff.parameters_path.as_mut())
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Applies `--set` values, then explicit flags, then defaults, and validates.
    pub fn merge_with_cli(mut self, args: &MinimizeArgs) -> Result<core_config::MinimizationConfig> {
        self.apply_set_values(&args.set_values)?;

        let min_config = self.minimization.take().unwrap_or_default();
        let ff_config = self.forcefield.take().unwrap_or_default();

        let mut builder = MinimizationConfigBuilder::new()
            .total_steps(args.steps.or(min_config.steps).unwrap_or(DEFAULT_STEPS))
            .step_size(
                args.step_size
                    .or(min_config.step_size)
                    .unwrap_or(DEFAULT_STEP_SIZE),
            );
        if let Some(chunk_size) = args.chunk_size.or(min_config.chunk_size) {
            builder = builder.chunk_size(chunk_size);
        }
        if let Some(max_force) = args.max_force.or(min_config.max_force) {
            builder = builder.max_force(max_force);
        }

        let parameters = args.parameters.clone().or(ff_config.parameters_path);
        if let Some(path) = parameters {
            if !path.exists() {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Provided path does not exist: {}", path.display()),
                )));
            }
            builder = builder.forcefield_path(path);
        }

        Ok(builder.build()?)
    }

    fn minimization_mut(&mut self) -> &mut PartialMinimizationConfig {
        self.minimization.get_or_insert_with(Default::default)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            let int_value = || {
                value_str.parse::<usize>().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })
            };
            let float_value = || {
                value_str.parse::<f64>().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })
            };

            match key {
                "minimization.steps" => self.minimization_mut().steps = Some(int_value()?),
                "minimization.chunk-size" => {
                    self.minimization_mut().chunk_size = Some(int_value()?)
                }
                "minimization.step-size" => {
                    self.minimization_mut().step_size = Some(float_value()?)
                }
                "minimization.max-force" => {
                    self.minimization_mut().max_force = Some(float_value()?)
                }
                "forcefield.parameters-path" => {
                    self.forcefield
                        .get_or_insert_with(Default::default)
                        .parameters_path = Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
