//! Time handling for the panchangam engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions and UTC instant bridging
//! - ΔT (TT − UT) for converting civil instants to dynamical time
//! - IANA timezone resolution and local → UTC localization
//! - A catalog of selectable locations

pub mod catalog;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod zone;

pub use catalog::{DEFAULT_ZONE, ZoneEntry, filter_catalog, find_zone, zone_catalog};
pub use delta_t::{decimal_year, delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, jd_to_utc, utc_to_jd,
};
pub use zone::{localize, localize_in, resolve_zone};

pub use chrono_tz::Tz;
