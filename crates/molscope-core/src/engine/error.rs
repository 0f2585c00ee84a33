use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load force field parameters: {source}")]
    Parameters {
        #[from]
        source: ParamLoadError,
    },

    #[error("Atom {atom} has a non-finite position after {step} steps")]
    NonFinitePosition { atom: usize, step: usize },
}
