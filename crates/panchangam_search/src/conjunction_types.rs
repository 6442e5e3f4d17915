//! Types for the conjunction search engine.

use panchangam_core::Body;

/// Default bound on how far a search scans before giving up (~27 synodic months).
pub const DEFAULT_MAX_SCAN_DAYS: f64 = 800.0;

/// Largest accepted scan step. The Moon gains up to ~15°/day on the Sun, so
/// a week keeps each step well under half a lunation.
pub const MAX_STEP_SIZE_DAYS: f64 = 7.0;

/// Configuration for conjunction search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionConfig {
    /// Coarse scan step in days, in `(0, MAX_STEP_SIZE_DAYS]`.
    pub step_size_days: f64,
    /// Upper bound on bisection iterations.
    pub max_iterations: u32,
    /// Bisection stops once the bracket is narrower than this, in days.
    pub convergence_days: f64,
    /// Maximum span scanned from the start instant, in days.
    pub max_scan_days: f64,
}

impl ConjunctionConfig {
    /// Conjunction search with the given scan step.
    pub fn conjunction(step_size_days: f64) -> Self {
        Self {
            step_size_days,
            max_iterations: 50,
            convergence_days: 1e-6,
            max_scan_days: DEFAULT_MAX_SCAN_DAYS,
        }
    }

    /// Moon−Sun conjunction: half-day steps, scan bounded to a little over one lunation.
    pub fn new_moon() -> Self {
        Self {
            max_scan_days: 40.0,
            ..Self::conjunction(0.5)
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_size_days > 0.0) || !self.step_size_days.is_finite() {
            return Err("step_size_days must be positive");
        }
        if self.step_size_days > MAX_STEP_SIZE_DAYS {
            return Err("step_size_days must not exceed 7 days");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        if !(self.convergence_days > 0.0) {
            return Err("convergence_days must be positive");
        }
        if !(self.max_scan_days >= self.step_size_days) || !self.max_scan_days.is_finite() {
            return Err("max_scan_days must be at least one step");
        }
        Ok(())
    }
}

impl Default for ConjunctionConfig {
    fn default() -> Self {
        Self::new_moon()
    }
}

/// Search direction in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// A located conjunction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    /// Event instant, JD (UT).
    pub jd_ut: f64,
    /// Separation `lon1 - lon2` at the event, in (-180, 180].
    pub actual_separation_deg: f64,
    pub body1_longitude_deg: f64,
    pub body2_longitude_deg: f64,
    pub body1: Body,
    pub body2: Body,
}
