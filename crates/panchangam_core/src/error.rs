//! Ephemeris engine errors.

use thiserror::Error;

use crate::Body;

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("epoch out of range: JD {jd_ut} (UT)")]
    EpochOutOfRange { jd_ut: f64 },
    /// A computed position was NaN or infinite. Indicates a defect, not bad input.
    #[error("non-finite {body:?} longitude at JD {jd_ut} (UT)")]
    NonFinite { body: Body, jd_ut: f64 },
}
