//! Error types for event search and the calendrical converter.

use panchangam_core::EngineError;
use panchangam_time::TimeError;
use thiserror::Error;

/// Errors from conjunction search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// An event time could not be represented as a civil UTC instant.
    #[error("unrepresentable instant: JD {0}")]
    UnrepresentableInstant(f64),
    /// A civil year has no representable March 1 00:00 UTC.
    #[error("civil year {0} out of range")]
    YearOutOfRange(i32),
}

/// Failure of a panchangam computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// The timezone identifier was not recognized.
    #[error("invalid timezone: {0:?}")]
    InvalidTimezone(String),
    /// Sun/Moon positions or a new moon could not be resolved for the instant.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// A non-finite value reached the pipeline. Always a defect.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidTimezone(id) => Self::InvalidTimezone(id),
            other => Self::EphemerisUnavailable(other.to_string()),
        }
    }
}

impl From<EngineError> for PanchangError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NonFinite { .. } => Self::InvariantViolation(e.to_string()),
            other => Self::EphemerisUnavailable(other.to_string()),
        }
    }
}

impl From<SearchError> for PanchangError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Engine(inner) => inner.into(),
            other => Self::EphemerisUnavailable(other.to_string()),
        }
    }
}
