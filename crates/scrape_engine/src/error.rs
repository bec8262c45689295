use thiserror::Error;

use crate::persist::PersistError;

/// Failure taxonomy for a single scrape run.
///
/// Every variant is fatal: errors propagate straight to the caller and the
/// process exits non-zero. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The input URL belongs to neither medium.com nor freedium.cfd.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure on the single request.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status code.
    #[error("server returned HTTP status {0}")]
    HttpStatus(u16),

    /// An element the extractor depends on is missing from the page.
    /// Signals that the upstream layout assumption no longer holds.
    #[error("page structure error: {0}")]
    Structure(String),

    /// Creating the output directory or writing an output file failed.
    #[error("io error: {0}")]
    Io(#[from] PersistError),
}
