//! Calendrical tables and index derivations for the Telugu panchangam.
//!
//! This crate provides:
//! - Bilingual (Telugu / romanized) name tables for every calendrical cycle
//! - Mappings from sidereal longitudes, elongation and weekday to indices
//! - Display modes and report category labels
//! - The ayanamsha model seam and its linear default
//!
//! Everything here is pure arithmetic; no ephemeris access.

pub mod ayana;
pub mod ayanamsha;
pub mod category;
pub mod language;
pub mod masa;
pub mod paksha;
pub mod rutu;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vaar;

pub use ayana::{Ayana, ayana_from_sidereal_longitude};
pub use ayanamsha::{AyanamshaModel, LinearAyanamsha, linear_ayanamsha_deg};
pub use category::{ALL_CATEGORIES, Category};
pub use language::{Bilingual, DisplayMode, Named, ParseDisplayModeError, split_bilingual};
pub use masa::{ALL_MASAS, Masa, masa_from_sun_longitude};
pub use paksha::{Paksha, paksha_from_tithi_index};
pub use rutu::{ALL_RUTUS, Rutu, rutu_from_masa};
pub use samvatsara::{ALL_SAMVATSARAS, SAMVATSARA_EPOCH_YEAR, Samvatsara, samvatsara_from_year};
pub use tithi::{ALL_TITHIS, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_from_weekday};
