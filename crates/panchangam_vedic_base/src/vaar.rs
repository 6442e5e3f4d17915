//! Vaar (weekday), Sunday first.

use chrono::Weekday;

use crate::language::{Bilingual, Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Vaar {
    Aadivaram = 0,
    Somavaram = 1,
    Mangalavaram = 2,
    Budhavaram = 3,
    Guruvaram = 4,
    Shukravaram = 5,
    Shanivaram = 6,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Aadivaram,
    Vaar::Somavaram,
    Vaar::Mangalavaram,
    Vaar::Budhavaram,
    Vaar::Guruvaram,
    Vaar::Shukravaram,
    Vaar::Shanivaram,
];

const VAAR_NAMES: [Bilingual; 7] = [
    Bilingual::new("ఆదివారము", "Aadivaramu"),
    Bilingual::new("సోమవారము", "Somavaramu"),
    Bilingual::new("మంగళవారము", "Mangalavaramu"),
    Bilingual::new("బుధవారము", "Budhavaramu"),
    Bilingual::new("గురువారము", "Guruvaramu"),
    Bilingual::new("శుక్రవారము", "Shukravaramu"),
    Bilingual::new("శనివారము", "Shanivaramu"),
];

impl Vaar {
    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vaar at `index`, reduced modulo 7.
    pub const fn from_index(index: u32) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }
}

impl Named for Vaar {
    fn names(&self) -> Bilingual {
        VAAR_NAMES[self.index() as usize]
    }
}

/// Vaar of a civil weekday: index = (Monday-based weekday + 1) mod 7.
pub fn vaar_from_weekday(weekday: Weekday) -> Vaar {
    Vaar::from_index(weekday.num_days_from_monday() + 1)
}
