//! Error types for the Lynx encryption pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a Lynx boot loader.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file rejected before parsing.
    #[error("Input file '{path}' {reason}")]
    Input { path: PathBuf, reason: String },

    /// Container sync markers present but the structure is invalid.
    #[error("Container format error: {0}")]
    Format(String),

    /// Loader plaintext exceeds the hardware limit.
    #[error("Loader is {len} bytes, maximum is {max}")]
    SizeExceeded { len: usize, max: usize },

    /// Final accumulator nonzero: the boot ROM cannot reconstruct the
    /// loader unless the plaintext ends with a zero byte.
    #[error(
        "Final accumulator is {accumulator:#04x}, expected 0x00; the loader must end with a zero byte"
    )]
    Integrity { accumulator: u8 },
}
