//! # Error Types
//!
//! Top-level error type for gedval. Validation defects are never errors:
//! they are reported as findings. Errors only describe failures around a
//! run, such as malformed configuration or a caller asking for a hard
//! failure on a run that produced error findings.

use thiserror::Error;

/// Top-level error type for gedval.
#[derive(Error, Debug)]
pub enum GedvalError {
    /// Validator configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A validation run produced error findings and the caller asked
    /// for the run to be rejected.
    #[error("validation rejected: {0}")]
    Validation(String),
}
