//! Error types for ferrite-eq.

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a run. None of them are retried.
#[derive(Debug)]
pub enum NetError {
    /// A sample or config file could not be opened or read.
    Io(std::io::Error),
    /// A sample file whose size is not a whole number of complex64 records.
    TruncatedFile { path: PathBuf, len: u64 },
    /// A matrix that does not fit the fixed layer shapes.
    ShapeMismatch {
        what: String,
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Training data with no columns.
    EmptyDataset,
    /// A configuration file that does not parse.
    Config(String),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::TruncatedFile { path, len } => write!(
                f,
                "{}: size {len} is not a multiple of 8 bytes (complex64)",
                path.display()
            ),
            Self::ShapeMismatch { what, expected, got } => write!(
                f,
                "shape mismatch for {what}: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            Self::EmptyDataset => write!(f, "training set has no samples"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
