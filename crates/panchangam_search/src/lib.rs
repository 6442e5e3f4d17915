//! New-moon search and the panchangam calendrical converter.
//!
//! This crate provides:
//! - A conjunction search over any [`Ephemeris`](panchangam_core::Ephemeris)
//! - Next/previous new-moon lookup
//! - The converter from a localized instant to the seven panchangam elements
//!   (samvatsara, ayana, rutu, masa, paksha, tithi, vaar) and its labeled report

pub mod conjunction;
pub mod conjunction_types;
pub mod error;
pub mod lunar_phase;
pub mod panchang;
pub mod panchang_types;

pub use conjunction::{next_conjunction, prev_conjunction};
pub use conjunction_types::{
    ConjunctionConfig, ConjunctionEvent, DEFAULT_MAX_SCAN_DAYS, MAX_STEP_SIZE_DAYS, SearchDirection,
};
pub use error::{PanchangError, SearchError};
pub use lunar_phase::{NewMoonEvent, next_new_moon, prev_new_moon};
pub use panchang::{
    compute, elongation_deg, lunisolar_year_for, masa_at, panchangam_for, panchangam_in,
    sidereal_longitudes_at, tithi_at, year_boundary_new_moon,
};
pub use panchang_types::{PanchangamInfo, PanchangamReport, ReportEntry};
