//! Error types for timezone resolution and instant conversion.

use thiserror::Error;

/// Errors from resolving a timezone or converting a local civil time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The identifier is not a known IANA timezone.
    #[error("unknown timezone identifier: {0:?}")]
    InvalidTimezone(String),
    /// The instant cannot be represented.
    #[error("instant out of range: {0}")]
    OutOfRange(String),
}
