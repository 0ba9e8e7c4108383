//! Portfolio content error types.

use thiserror::Error;

/// Errors raised while loading portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file could not be read.
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid TOML or misses required keys.
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
}
