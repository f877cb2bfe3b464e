use std::path::PathBuf;

use fn_table::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("story '{story}' failed: {source}")]
    Config {
        story: &'static str,
        #[source]
        source: ConfigError,
    },
}
