//! Paksha (lunar fortnight).

use crate::language::{Bilingual, Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Paksha {
    /// Waxing half, tithis 0..=14.
    Shukla = 0,
    /// Waning half, tithis 15..=29.
    Krishna = 1,
}

const PAKSHA_NAMES: [Bilingual; 2] = [
    Bilingual::new("శుక్ల పక్షము", "Shukla Paksham"),
    Bilingual::new("కృష్ణ పక్షము", "Krishna Paksham"),
];

impl Paksha {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Named for Paksha {
    fn names(&self) -> Bilingual {
        PAKSHA_NAMES[self.index() as usize]
    }
}

/// Paksha of a tithi index (reduced modulo 30).
pub const fn paksha_from_tithi_index(tithi_index: u32) -> Paksha {
    if tithi_index % 30 < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}
