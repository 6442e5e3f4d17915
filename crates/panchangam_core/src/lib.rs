//! Analytic Sun/Moon ephemeris engine.
//!
//! This crate provides the [`Ephemeris`] seam the calendrical layer depends
//! on, and [`Engine`], an in-process implementation built on truncated
//! solar and lunar theories. Callers pass instants as Julian Dates in UT;
//! the engine converts to dynamical time internally.

pub mod error;
pub mod frame;
pub mod moon;
pub mod nutation;
pub mod precession;
pub mod sun;

use panchangam_time::{calendar_to_jd, jd_to_centuries, jd_ut_to_tt};
use tracing::debug;

pub use error::EngineError;
pub use frame::LongitudeFrame;
pub use moon::{lunar_arguments_deg, moon_apparent_longitude_deg, moon_true_longitude_deg};
pub use nutation::nutation_longitude_deg;
pub use precession::general_precession_longitude_deg;
pub use sun::{sun_apparent_longitude_deg, sun_true_longitude_deg};

/// Bodies the engine can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Longitudes are in degrees within `[0, 360)`, in whatever frame the
/// implementation documents. Implementations must be pure: the same
/// `(body, jd_ut)` always yields the same answer.
pub trait Ephemeris {
    fn tropical_longitude_deg(&self, body: Body, jd_ut: f64) -> Result<f64, EngineError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn tropical_longitude_deg(&self, body: Body, jd_ut: f64) -> Result<f64, EngineError> {
        (**self).tropical_longitude_deg(body, jd_ut)
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Earliest supported instant, JD (UT).
    pub jd_min: f64,
    /// Latest supported instant, JD (UT).
    pub jd_max: f64,
    /// Frame of reported longitudes.
    pub frame: LongitudeFrame,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jd_min: calendar_to_jd(1000, 1, 1.0),
            jd_max: calendar_to_jd(3000, 1, 1.0),
            frame: LongitudeFrame::default(),
        }
    }
}

impl EngineConfig {
    /// Range covering the given Gregorian years, `first` through `last` inclusive.
    pub fn for_years(first: i32, last: i32) -> Self {
        Self {
            jd_min: calendar_to_jd(first, 1, 1.0),
            jd_max: calendar_to_jd(last + 1, 1, 1.0),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.jd_min.is_finite() || !self.jd_max.is_finite() {
            return Err(EngineError::InvalidConfig("range bounds must be finite"));
        }
        if self.jd_max <= self.jd_min {
            return Err(EngineError::InvalidConfig("jd_max must be after jd_min"));
        }
        Ok(())
    }

    pub fn contains(&self, jd_ut: f64) -> bool {
        jd_ut >= self.jd_min && jd_ut <= self.jd_max
    }
}

/// Analytic ephemeris engine.
///
/// Reports geocentric longitudes in [`EngineConfig::frame`], the J2000
/// ecliptic by default. Holds only configuration; it is `Copy`, `Send` and `Sync` and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        debug!(
            jd_min = config.jd_min,
            jd_max = config.jd_max,
            frame = config.frame.as_str(),
            "ephemeris engine configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sun and Moon tropical longitudes at one instant, `(sun, moon)`.
    pub fn sun_moon_longitudes(&self, jd_ut: f64) -> Result<(f64, f64), EngineError> {
        Ok((
            self.tropical_longitude_deg(Body::Sun, jd_ut)?,
            self.tropical_longitude_deg(Body::Moon, jd_ut)?,
        ))
    }
}

impl Ephemeris for Engine {
    fn tropical_longitude_deg(&self, body: Body, jd_ut: f64) -> Result<f64, EngineError> {
        if !jd_ut.is_finite() || !self.config.contains(jd_ut) {
            return Err(EngineError::EpochOutOfRange { jd_ut });
        }
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
        let lon = self.config.frame.longitude_deg(body, t);
        if !lon.is_finite() {
            return Err(EngineError::NonFinite { body, jd_ut });
        }
        Ok(lon.rem_euclid(360.0))
    }
}
