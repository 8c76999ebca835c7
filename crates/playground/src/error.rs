use std::{io, path::PathBuf};

use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur when running the playground pipelines.
///
/// The pipelines themselves never fail: absence is an `Option`. These errors
/// come from the surroundings, such as reading input or loading a config.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid date-time {input:?}: {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: jiff::Error,
    },

    #[error("no document found for symbol {0:?}")]
    Unresolved(String),
}
