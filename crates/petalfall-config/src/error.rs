//! Error type for configuration and preference storage.

use std::path::PathBuf;

/// Everything that can go wrong while reading or writing petalfall files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable home directory, so there is nowhere to keep files.
    #[error("storage unavailable: no home directory")]
    Unavailable,

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preferences")]
    Serialize(#[from] toml::ser::Error),

    /// A stored value that is not the text of a boolean.
    #[error("invalid stored value {value:?} for {key}")]
    InvalidValue {
        key: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },
}
