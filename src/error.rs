use std::path::PathBuf;

use thiserror::Error;

/// Errors reported on stderr; every one of them exits the process with
/// the failure code.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open {}: {}", path.display(), source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reference digest must be 64 hex characters, got {len}")]
    InvalidReferenceFormat { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
