//! Defines custom error types for the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when reading, decoding, or writing a source file fails.
pub enum FixError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    Decode { path: PathBuf, offset: usize },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
