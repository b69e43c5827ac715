use std::path::PathBuf;

use crate::validation::Report;

/// Errors that can occur while building, writing or reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The destination could not be written (permissions, missing directory, disk full).
    #[error("write failure at {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: router_fs::Error,
    },

    /// A value could not be represented as JSON.
    #[error("serialization failure: {0}")]
    SerializationFailure(#[source] serde_json::Error),

    /// An existing manifest could not be read.
    #[error("failed to read manifest at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: router_fs::Error,
    },

    /// An existing manifest is not valid manifest JSON.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest breaks one or more invariants and was not written.
    #[error("manifest failed validation:\n{0}")]
    Validation(Report),
}

pub type Result<T> = std::result::Result<T, Error>;
