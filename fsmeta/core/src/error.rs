use std::io;

use thiserror::Error;

/// Why a stat call failed, reduced to the classes this component acts on.
///
/// `exists()` and `kind()` never surface these; anything that is not plain
/// absence folds into "not there" at the public boundary. The value is
/// retained on the snapshot for callers that need to tell the cases apart.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProbeError {
    /// Nothing is reachable at the path.
    #[error("entity not found")]
    NotFound,
    /// The entry (or a path component leading to it) is not accessible.
    #[error("permission denied")]
    PermissionDenied,
    /// The path string cannot be interpreted on this platform.
    #[error("invalid path")]
    InvalidPath,
    /// Any other raw error from the underlying stat call.
    #[error("io error")]
    Io,
}

impl From<io::Error> for ProbeError {
    fn from(io_error: io::Error) -> Self {
        match io_error.kind() {
            io::ErrorKind::NotFound => ProbeError::NotFound,
            // A trailing `x/` over a non-directory names nothing, same as
            // a missing entry.
            io::ErrorKind::NotADirectory => ProbeError::NotFound,
            io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied,
            io::ErrorKind::InvalidInput => ProbeError::InvalidPath,
            _ => ProbeError::Io,
        }
    }
}
