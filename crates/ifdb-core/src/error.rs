//! Error types for the IFDB client
//!
//! Every failure in the library is an [`IfdbError`]. Errors split into two
//! groups: fatal ones that end the process, and recoverable ones that the
//! session reports to the user before carrying on.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all IFDB client operations
#[derive(Error, Debug)]
pub enum IfdbError {
    /// HTTP transport failed (cannot connect, timeout, broken body)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("Response failed with status code {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body is not the JSON we expected
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    /// Search query rejected before any request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Writing the downloaded file failed
    #[error("Failed to write {}: {source}", .path.display())]
    StoreError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input source reached end of file while a prompt was waiting
    #[error("Input closed before an answer was given")]
    InputClosed,

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl IfdbError {
    /// Whether this error must terminate the session immediately.
    ///
    /// Decode and storage failures are reported and the session ends
    /// normally; everything that breaks the transport or the terminal is
    /// fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            IfdbError::DecodeError(_) | IfdbError::StoreError { .. } | IfdbError::InvalidQuery(_)
        )
    }
}

/// Result type alias for IFDB operations
pub type Result<T> = std::result::Result<T, IfdbError>;
