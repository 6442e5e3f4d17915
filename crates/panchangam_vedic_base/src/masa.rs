//! Lunar months (masa), amanta reckoning.
//!
//! A month is named from the sidereal sign the Sun occupies at the new moon
//! that opens it: Sun in Mina (sign 11) at that new moon opens Chaitra.

use crate::language::{Bilingual, Named};
use crate::util::segment_index;

/// The 12 lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Masa {
    Chaitra = 0,
    Vaishakha = 1,
    Jyeshtha = 2,
    Ashadha = 3,
    Shravana = 4,
    Bhadrapada = 5,
    Ashwayuja = 6,
    Kartika = 7,
    Margashira = 8,
    Pushya = 9,
    Magha = 10,
    Phalguna = 11,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwayuja,
    Masa::Kartika,
    Masa::Margashira,
    Masa::Pushya,
    Masa::Magha,
    Masa::Phalguna,
];

const MASA_NAMES: [Bilingual; 12] = [
    Bilingual::new("చైత్రము", "Chaitramu"),
    Bilingual::new("వైశాఖము", "Vaishakhamu"),
    Bilingual::new("జ్యేష్ఠము", "Jyeshthamu"),
    Bilingual::new("ఆషాఢము", "Ashadhamu"),
    Bilingual::new("శ్రావణము", "Shravanamu"),
    Bilingual::new("భాద్రపదము", "Bhadrapadamu"),
    Bilingual::new("ఆశ్వయుజము", "Ashwayujamu"),
    Bilingual::new("కార్తీకము", "Kartikamu"),
    Bilingual::new("మార్గశిరము", "Margashiramu"),
    Bilingual::new("పుష్యము", "Pushyamu"),
    Bilingual::new("మాఘము", "Maghamu"),
    Bilingual::new("ఫాల్గుణము", "Phalgunamu"),
];

impl Masa {
    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Masa at `index`, reduced modulo 12.
    pub const fn from_index(index: u32) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }
}

impl Named for Masa {
    fn names(&self) -> Bilingual {
        MASA_NAMES[self.index() as usize]
    }
}

/// Masa opened by a new moon at which the Sun's sidereal longitude is `sun_sidereal_deg`.
///
/// Index = (sign + 1) mod 12, where sign = floor(longitude / 30).
pub fn masa_from_sun_longitude(sun_sidereal_deg: f64) -> Masa {
    let sign = segment_index(sun_sidereal_deg, 30.0, 12);
    Masa::from_index(sign + 1)
}
