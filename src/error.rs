//! Error type shared by the library

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("could not allocate storage for {bodies} bodies")]
    Allocation {
        bodies: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario yaml")]
    Yaml(#[from] serde_yaml::Error),
}
