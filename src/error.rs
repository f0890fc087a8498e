use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse the code registry. Ends the run before any download.
#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure for a single asset. Contained to that asset's iteration.
#[derive(Debug, Error, PartialEq)]
pub enum AssetFetchError {
    #[error("invalid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: &'static str },

    #[error("invalid url for code {code:?}: {reason}")]
    InvalidUrl { code: String, reason: String },

    #[error("HTTP status code: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// Fatal errors that stop the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    PrepareOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
