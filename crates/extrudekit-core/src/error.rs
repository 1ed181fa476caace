//! Error handling for ExtrudeKit
//!
//! Drawing operations are pure arithmetic and string building, so the only
//! failures that reach callers come from writing a finished program out.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ExtrudeKit
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the command log to its destination failed
    #[error("Failed to write G-code to {}: {source}", path.display())]
    Write {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_write_error_display() {
        let err = Error::Write {
            path: PathBuf::from("/readonly/out.gcode"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write G-code to /readonly/out.gcode: access denied"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
