//! Reference frame of reported longitudes.

use serde::{Deserialize, Serialize};

use crate::Body;
use crate::moon::{moon_apparent_longitude_deg, moon_true_longitude_deg};
use crate::precession::general_precession_longitude_deg;
use crate::sun::{sun_apparent_longitude_deg, sun_true_longitude_deg};

/// Ecliptic frame the engine reports longitudes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LongitudeFrame {
    /// Geometric longitude on the J2000.0 ecliptic and equinox. No nutation
    /// and no aberration.
    #[default]
    #[serde(rename = "j2000")]
    EclipticJ2000,
    /// Apparent longitude referred to the true equinox of date.
    #[serde(rename = "of-date")]
    ApparentOfDate,
}

impl LongitudeFrame {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EclipticJ2000 => "j2000",
            Self::ApparentOfDate => "of-date",
        }
    }

    /// Longitude of `body` in this frame, degrees (not normalized).
    ///
    /// `t` = Julian centuries of TT since J2000.0.
    pub fn longitude_deg(self, body: Body, t: f64) -> f64 {
        match self {
            Self::EclipticJ2000 => {
                let of_date = match body {
                    Body::Sun => sun_true_longitude_deg(t),
                    Body::Moon => moon_true_longitude_deg(t),
                };
                of_date - general_precession_longitude_deg(t)
            }
            Self::ApparentOfDate => match body {
                Body::Sun => sun_apparent_longitude_deg(t),
                Body::Moon => moon_apparent_longitude_deg(t),
            },
        }
    }
}
