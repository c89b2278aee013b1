//! Error types for the fwlog crate

use thiserror::Error;

/// Main error type for the fwlog crate
///
/// The logging helpers themselves are infallible; only subscriber
/// initialization can fail.
#[derive(Error, Debug)]
pub enum FwLogError {
    #[error("Logging initialization error: {0}")]
    InitError(String),
}
