//! Rutu (season): six seasons of two months each.

use crate::language::{Bilingual, Named};
use crate::masa::Masa;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rutu {
    Vasanta = 0,
    Grishma = 1,
    Varsha = 2,
    Sharad = 3,
    Hemanta = 4,
    Shishira = 5,
}

pub const ALL_RUTUS: [Rutu; 6] = [
    Rutu::Vasanta,
    Rutu::Grishma,
    Rutu::Varsha,
    Rutu::Sharad,
    Rutu::Hemanta,
    Rutu::Shishira,
];

const RUTU_NAMES: [Bilingual; 6] = [
    Bilingual::new("వసంత", "Vasanta"),
    Bilingual::new("గ్రీష్మ", "Grishma"),
    Bilingual::new("వర్ష", "Varsha"),
    Bilingual::new("శరద్", "Sharad"),
    Bilingual::new("హేమంత", "Hemanta"),
    Bilingual::new("శిశిర", "Shishira"),
];

impl Rutu {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u32) -> Self {
        ALL_RUTUS[(index % 6) as usize]
    }
}

impl Named for Rutu {
    fn names(&self) -> Bilingual {
        RUTU_NAMES[self.index() as usize]
    }
}

/// Season of a lunar month: index = masa index / 2.
pub const fn rutu_from_masa(masa: Masa) -> Rutu {
    Rutu::from_index(masa.index() as u32 / 2)
}
