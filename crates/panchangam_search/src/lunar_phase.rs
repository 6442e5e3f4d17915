//! New-moon (amavasya) search: Moon−Sun conjunctions.

use chrono::{DateTime, Utc};
use panchangam_core::{Body, Ephemeris};
use panchangam_time::jd_to_utc;
use serde::Serialize;
use tracing::debug;

use crate::conjunction::{next_conjunction, prev_conjunction};
use crate::conjunction_types::{ConjunctionConfig, ConjunctionEvent};
use crate::error::SearchError;

/// A geocentric new moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewMoonEvent {
    /// Instant of conjunction, JD (UT).
    pub jd_ut: f64,
    pub utc: DateTime<Utc>,
    /// Tropical longitude of the Sun at the conjunction.
    pub sun_longitude_deg: f64,
    /// Tropical longitude of the Moon at the conjunction.
    pub moon_longitude_deg: f64,
}

fn to_new_moon(event: ConjunctionEvent) -> Result<NewMoonEvent, SearchError> {
    let utc = jd_to_utc(event.jd_ut).ok_or(SearchError::UnrepresentableInstant(event.jd_ut))?;
    Ok(NewMoonEvent {
        jd_ut: event.jd_ut,
        utc,
        sun_longitude_deg: event.body2_longitude_deg,
        moon_longitude_deg: event.body1_longitude_deg,
    })
}

/// First new moon at or after `jd_ut`.
pub fn next_new_moon<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    config: &ConjunctionConfig,
) -> Result<NewMoonEvent, SearchError> {
    let event = next_conjunction(engine, Body::Moon, Body::Sun, jd_ut, config)?
        .ok_or(SearchError::NoConvergence("could not find next new moon"))?;
    let nm = to_new_moon(event)?;
    debug!(from_jd = jd_ut, utc = %nm.utc, "next new moon");
    Ok(nm)
}

/// Last new moon at or before `jd_ut`.
pub fn prev_new_moon<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    config: &ConjunctionConfig,
) -> Result<NewMoonEvent, SearchError> {
    let event = prev_conjunction(engine, Body::Moon, Body::Sun, jd_ut, config)?
        .ok_or(SearchError::NoConvergence("could not find previous new moon"))?;
    let nm = to_new_moon(event)?;
    debug!(from_jd = jd_ut, utc = %nm.utc, "previous new moon");
    Ok(nm)
}
