use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a table configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read table config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("column '{header}' has no key")]
    MissingKey { header: String },

    #[error("column group '{header}' has no children")]
    EmptyGroup { header: String },
}
