//! Ayana (solar half-year).
//!
//! Uttarayana runs from the Sun's entry into sidereal Makara (270°) to its
//! entry into Karka (90°); Dakshinayana covers the other half. The fixed
//! sign boundaries stand in for the solstices.

use crate::language::{Bilingual, Named};
use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ayana {
    /// Northward course, sidereal Sun in [270°, 360°) ∪ [0°, 90°).
    Uttarayana = 0,
    /// Southward course, sidereal Sun in [90°, 270°).
    Dakshinayana = 1,
}

const AYANA_NAMES: [Bilingual; 2] = [
    Bilingual::new("ఉత్తరాయణము", "Uttarayanamu"),
    Bilingual::new("దక్షిణాయణము", "Dakshinayana"),
];

impl Ayana {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Named for Ayana {
    fn names(&self) -> Bilingual {
        AYANA_NAMES[self.index() as usize]
    }
}

/// Ayana from the Sun's sidereal longitude in degrees.
pub fn ayana_from_sidereal_longitude(sun_sidereal_deg: f64) -> Ayana {
    let lon = normalize_360(sun_sidereal_deg);
    if !(90.0..270.0).contains(&lon) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}
