use crate::lookup::LookupError;
use molscope::core::io::error::ParseError;
use molscope::core::measure::MeasurementError;
use molscope::engine::config::ConfigError;
use molscope::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Measurement failed: {0}")]
    Measurement(#[from] MeasurementError),

    #[error("Structure lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn parsing(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::FileParsing {
            path: path.into(),
            source: source.into(),
        }
    }
}
