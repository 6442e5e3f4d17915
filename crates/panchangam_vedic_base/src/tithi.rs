//! Tithi (lunar day) enumeration and elongation mapping.
//!
//! A tithi spans 12° of Moon−Sun elongation. Thirty tithis make one synodic
//! month: 15 in the waxing (Shukla) half ending at Pournami, 15 in the waning
//! (Krishna) half ending at Amavasya.

use crate::language::{Bilingual, Named};
use crate::paksha::{Paksha, paksha_from_tithi_index};
use crate::util::{normalize_360, segment_index};

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tithi {
    ShuklaPadyami = 0,
    ShuklaVidiya = 1,
    ShuklaTadiya = 2,
    ShuklaChavithi = 3,
    ShuklaPanchami = 4,
    ShuklaShashti = 5,
    ShuklaSaptami = 6,
    ShuklaAshtami = 7,
    ShuklaNavami = 8,
    ShuklaDashami = 9,
    ShuklaEkadashi = 10,
    ShuklaDvadashi = 11,
    ShuklaTrayodashi = 12,
    ShuklaChaturdashi = 13,
    Pournami = 14,
    KrishnaPadyami = 15,
    KrishnaVidiya = 16,
    KrishnaTadiya = 17,
    KrishnaChavithi = 18,
    KrishnaPanchami = 19,
    KrishnaShashti = 20,
    KrishnaSaptami = 21,
    KrishnaAshtami = 22,
    KrishnaNavami = 23,
    KrishnaDashami = 24,
    KrishnaEkadashi = 25,
    KrishnaDvadashi = 26,
    KrishnaTrayodashi = 27,
    KrishnaChaturdashi = 28,
    Amavasya = 29,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPadyami,
    Tithi::ShuklaVidiya,
    Tithi::ShuklaTadiya,
    Tithi::ShuklaChavithi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashti,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDvadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Pournami,
    Tithi::KrishnaPadyami,
    Tithi::KrishnaVidiya,
    Tithi::KrishnaTadiya,
    Tithi::KrishnaChavithi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashti,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDvadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of tithis 1..=14 of either paksha.
const COMMON_NAMES: [Bilingual; 14] = [
    Bilingual::new("పాడ్యమి", "Padyami"),
    Bilingual::new("విదియ", "Vidiya"),
    Bilingual::new("తదియ", "Tadiya"),
    Bilingual::new("చవితి", "Chavithi"),
    Bilingual::new("పంచమి", "Panchami"),
    Bilingual::new("షష్ఠి", "Shashti"),
    Bilingual::new("సప్తమి", "Saptami"),
    Bilingual::new("అష్టమి", "Ashtami"),
    Bilingual::new("నవమి", "Navami"),
    Bilingual::new("దశమి", "Dashami"),
    Bilingual::new("ఏకాదశి", "Ekadashi"),
    Bilingual::new("ద్వాదశి", "Dvadashi"),
    Bilingual::new("త్రయోదశి", "Trayodashi"),
    Bilingual::new("చతుర్దశి", "Chaturdashi"),
];

const POURNAMI: Bilingual = Bilingual::new("పౌర్ణమి", "Pournami");
const AMAVASYA: Bilingual = Bilingual::new("అమావాస్య", "Amavasya");

impl Tithi {
    /// 0-based index (Shukla Padyami=0 .. Amavasya=29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi at `index`, reduced modulo 30.
    pub const fn from_index(index: u32) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }

    pub const fn paksha(self) -> Paksha {
        paksha_from_tithi_index(self.index() as u32)
    }

    /// 1-based day within its paksha (1..=15).
    pub const fn day_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }
}

impl Named for Tithi {
    /// Paksha-neutral name; the paksha is reported separately.
    fn names(&self) -> Bilingual {
        match self {
            Self::Pournami => POURNAMI,
            Self::Amavasya => AMAVASYA,
            t => COMMON_NAMES[(t.index() % 15) as usize],
        }
    }
}

/// Position of an elongation within the tithi cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0..=29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Degrees elapsed within the current tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Tithi for a Moon−Sun elongation in degrees.
///
/// Index = floor(elongation / 12). An elongation of exactly 12.000° is the
/// first instant of the second tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, 30);
    let tithi = Tithi::from_index(idx);
    let degrees_in_tithi = (elong - idx as f64 * TITHI_SEGMENT_DEG).clamp(0.0, TITHI_SEGMENT_DEG);
    TithiPosition {
        tithi,
        tithi_index: tithi.index(),
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        degrees_in_tithi,
    }
}
