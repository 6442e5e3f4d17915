//! Samvatsara (60-year cycle) enumeration.
//!
//! The 60 samvatsaras cycle continuously. The epoch is CE 1987 = Prabhava (order 1).

use crate::language::{Bilingual, Named};

/// The 60 samvatsaras (years) of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava = 0,
    Vibhava = 1,
    Shukla = 2,
    Pramodoota = 3,
    Prajotpatti = 4,
    Angirasa = 5,
    Srimukha = 6,
    Bhava = 7,
    Yuva = 8,
    Dhata = 9,
    Eswara = 10,
    Bahudhanya = 11,
    Pramadi = 12,
    Vikrama = 13,
    Vrisha = 14,
    Chitrabhanu = 15,
    Swabhanu = 16,
    Tarana = 17,
    Parthiva = 18,
    Vyaya = 19,
    Sarvajittu = 20,
    Sarvadhari = 21,
    Virodhi = 22,
    Vikruti = 23,
    Khara = 24,
    Nandana = 25,
    Vijaya = 26,
    Jaya = 27,
    Manmatha = 28,
    Durmukhi = 29,
    Hevilambi = 30,
    Vilambi = 31,
    Vikari = 32,
    Sharvari = 33,
    Plava = 34,
    Shubhakrutu = 35,
    Sobhakrutu = 36,
    Krodhi = 37,
    Vishwavasu = 38,
    Parabhava = 39,
    Plavanga = 40,
    Keelaka = 41,
    Saumya = 42,
    Sadharana = 43,
    Virodhikrutu = 44,
    Paridhavi = 45,
    Pramadicha = 46,
    Ananda = 47,
    Rakshasa = 48,
    Nala = 49,
    Pingala = 50,
    Kalayukti = 51,
    Siddharthi = 52,
    Raudri = 53,
    Durmati = 54,
    Dundubhi = 55,
    Rudhirodgari = 56,
    Raktakshi = 57,
    Krodhana = 58,
    Akshaya = 59,
}

/// All 60 samvatsaras in order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramodoota,
    Samvatsara::Prajotpatti,
    Samvatsara::Angirasa,
    Samvatsara::Srimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhata,
    Samvatsara::Eswara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramadi,
    Samvatsara::Vikrama,
    Samvatsara::Vrisha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Swabhanu,
    Samvatsara::Tarana,
    Samvatsara::Parthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajittu,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruti,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukhi,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrutu,
    Samvatsara::Sobhakrutu,
    Samvatsara::Krodhi,
    Samvatsara::Vishwavasu,
    Samvatsara::Parabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrutu,
    Samvatsara::Paridhavi,
    Samvatsara::Pramadicha,
    Samvatsara::Ananda,
    Samvatsara::Rakshasa,
    Samvatsara::Nala,
    Samvatsara::Pingala,
    Samvatsara::Kalayukti,
    Samvatsara::Siddharthi,
    Samvatsara::Raudri,
    Samvatsara::Durmati,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgari,
    Samvatsara::Raktakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

const SAMVATSARA_NAMES: [Bilingual; 60] = [
    Bilingual::new("ప్రభవ", "Prabhava"),
    Bilingual::new("విభవ", "Vibhava"),
    Bilingual::new("శుక్ల", "Shukla"),
    Bilingual::new("ప్రమోదూత", "Pramodoota"),
    Bilingual::new("ప్రజోత్పత్తి", "Prajotpatti"),
    Bilingual::new("అంగీరస", "Angirasa"),
    Bilingual::new("శ్రీముఖ", "Srimukha"),
    Bilingual::new("భావ", "Bhava"),
    Bilingual::new("యువ", "Yuva"),
    Bilingual::new("ధాత", "Dhata"),
    Bilingual::new("ఈశ్వర", "Eswara"),
    Bilingual::new("బహుధాన్య", "Bahudhanya"),
    Bilingual::new("ప్రమాది", "Pramadi"),
    Bilingual::new("విక్రమ", "Vikrama"),
    Bilingual::new("వృష", "Vrisha"),
    Bilingual::new("చిత్రభాను", "Chitrabhanu"),
    Bilingual::new("స్వభాను", "Swabhanu"),
    Bilingual::new("తారణ", "Tarana"),
    Bilingual::new("పార్థివ", "Parthiva"),
    Bilingual::new("వ్యయ", "Vyaya"),
    Bilingual::new("సర్వజిత్తు", "Sarvajittu"),
    Bilingual::new("సర్వధారి", "Sarvadhari"),
    Bilingual::new("విరోధి", "Virodhi"),
    Bilingual::new("వికృతి", "Vikruti"),
    Bilingual::new("ఖర", "Khara"),
    Bilingual::new("నందన", "Nandana"),
    Bilingual::new("విజయ", "Vijaya"),
    Bilingual::new("జయ", "Jaya"),
    Bilingual::new("మన్మథ", "Manmatha"),
    Bilingual::new("దుర్ముఖి", "Durmukhi"),
    Bilingual::new("హేవిలంబి", "Hevilambi"),
    Bilingual::new("విలంబి", "Vilambi"),
    Bilingual::new("వికారి", "Vikari"),
    Bilingual::new("శార్వరి", "Sharvari"),
    Bilingual::new("ప్లవ", "Plava"),
    Bilingual::new("శుభకృతు", "Shubhakrutu"),
    Bilingual::new("శోభకృతు", "Sobhakrutu"),
    Bilingual::new("క్రోధి", "Krodhi"),
    Bilingual::new("విశ్వావసు", "Vishwavasu"),
    Bilingual::new("పరాభవ", "Parabhava"),
    Bilingual::new("ప్లవంగ", "Plavanga"),
    Bilingual::new("కీలక", "Keelaka"),
    Bilingual::new("సౌమ్య", "Saumya"),
    Bilingual::new("సాధారణ", "Sadharana"),
    Bilingual::new("విరోధికృతు", "Virodhikrutu"),
    Bilingual::new("పరీధావి", "Paridhavi"),
    Bilingual::new("ప్రమాదీచ", "Pramadicha"),
    Bilingual::new("ఆనంద", "Ananda"),
    Bilingual::new("రాక్షస", "Rakshasa"),
    Bilingual::new("నల", "Nala"),
    Bilingual::new("పింగళ", "Pingala"),
    Bilingual::new("కాళయుక్తి", "Kalayukti"),
    Bilingual::new("సిద్ధార్థి", "Siddharthi"),
    Bilingual::new("రౌద్రి", "Raudri"),
    Bilingual::new("దుర్మతి", "Durmati"),
    Bilingual::new("దుందుభి", "Dundubhi"),
    Bilingual::new("రుధిరోద్గారి", "Rudhirodgari"),
    Bilingual::new("రక్తాక్షి", "Raktakshi"),
    Bilingual::new("క్రోధన", "Krodhana"),
    Bilingual::new("అక్షయ", "Akshaya"),
];

/// CE year whose samvatsara is Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

impl Samvatsara {
    /// 0-based index (Prabhava=0 .. Akshaya=59).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Samvatsara at `index`, reduced modulo 60.
    pub const fn from_index(index: u32) -> Self {
        ALL_SAMVATSARAS[(index % 60) as usize]
    }

    /// 1-based position in the cycle (Prabhava=1 .. Akshaya=60).
    pub const fn order(self) -> u8 {
        self.index() + 1
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        self.names().romanized
    }
}

impl Named for Samvatsara {
    fn names(&self) -> Bilingual {
        SAMVATSARA_NAMES[self.index() as usize]
    }
}

/// Samvatsara for a lunisolar year, identified by the CE year in which it begins.
///
/// Returns `(samvatsara, order)` with order 1..=60.
pub fn samvatsara_from_year(ce_year: i32) -> (Samvatsara, u8) {
    let idx = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u32;
    let s = Samvatsara::from_index(idx);
    (s, s.order())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_prabhava() {
        assert_eq!(samvatsara_from_year(1987), (Samvatsara::Prabhava, 1));
    }

    #[test]
    fn year_2024_is_krodhi() {
        assert_eq!(samvatsara_from_year(2024).0, Samvatsara::Krodhi);
    }

    #[test]
    fn year_2023_is_sobhakrutu() {
        let (s, order) = samvatsara_from_year(2023);
        assert_eq!(s, Samvatsara::Sobhakrutu);
        assert_eq!(order, 37);
    }

    #[test]
    fn before_epoch_wraps() {
        assert_eq!(samvatsara_from_year(1986).0, Samvatsara::Akshaya);
        assert_eq!(samvatsara_from_year(1927).0, Samvatsara::Prabhava);
        assert_eq!(samvatsara_from_year(1926).0, Samvatsara::Akshaya);
    }

    #[test]
    fn cycle_repeats_every_60() {
        for y in 1900..2100 {
            assert_eq!(samvatsara_from_year(y), samvatsara_from_year(y + 60));
        }
    }

    #[test]
    fn index_matches_position() {
        for (i, s) in ALL_SAMVATSARAS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Samvatsara::from_index(i as u32), *s);
        }
    }

    #[test]
    fn from_index_reduces() {
        assert_eq!(Samvatsara::from_index(60), Samvatsara::Prabhava);
        assert_eq!(Samvatsara::from_index(97), Samvatsara::Krodhi);
    }

    #[test]
    fn names_bilingual() {
        let n = Samvatsara::Krodhi.names();
        assert_eq!(n.native, "క్రోధి");
        assert_eq!(n.romanized, "Krodhi");
        assert_eq!(Samvatsara::Akshaya.name(), "Akshaya");
    }
}
