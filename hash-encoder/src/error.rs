use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Algorithm;

/// Errors raised while preparing or running a hash request.
#[derive(Debug, Error)]
pub enum Error {
    /// The text source was empty or only whitespace.
    #[error("no input text to hash")]
    EmptyInput,

    /// An HMAC algorithm was selected without a usable key.
    #[error("a secret key is required for {0}")]
    MissingKey(Algorithm),

    /// The file exceeds the configured size limit.
    #[error("file is {size} bytes, larger than the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// The digest could not be written out.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The algorithm identifier is not in the catalog.
    #[error("unknown hash algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// The MAC implementation rejected the key.
    #[error("invalid HMAC key length")]
    InvalidKeyLength,

    /// The input file could not be inspected or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
