//! Result types for the calendrical converter.

use chrono::{DateTime, NaiveDateTime, Utc};
use panchangam_vedic_base::{
    ALL_CATEGORIES, Ayana, Bilingual, Category, DisplayMode, Masa, Named, Paksha, Rutu, Samvatsara,
    TithiPosition, Vaar,
};
use serde::Serialize;

use crate::lunar_phase::NewMoonEvent;

/// Everything derived for one localized instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangamInfo {
    /// Wall-clock input.
    pub local: NaiveDateTime,
    /// IANA zone the input was read in.
    pub zone_id: &'static str,
    /// Resolved instant.
    pub utc: DateTime<Utc>,
    pub jd_ut: f64,
    /// Ayanamsha applied to every longitude, degrees.
    pub ayanamsha_deg: f64,
    pub sun_sidereal_deg: f64,
    pub moon_sidereal_deg: f64,
    /// Moon − Sun, [0, 360).
    pub elongation_deg: f64,
    /// CE year in which the current lunisolar year began.
    pub lunisolar_year: i32,
    pub samvatsara: Samvatsara,
    pub ayana: Ayana,
    pub rutu: Rutu,
    pub masa: Masa,
    pub paksha: Paksha,
    pub tithi: TithiPosition,
    pub vaar: Vaar,
    /// First new moon on or after March 1 (UTC) of the local civil year.
    pub year_boundary: NewMoonEvent,
    /// New moon that opened the current month.
    pub month_start: NewMoonEvent,
}

impl PanchangamInfo {
    /// Bilingual name of the value reported under `category`.
    pub fn value_names(&self, category: Category) -> Bilingual {
        match category {
            Category::Year => self.samvatsara.names(),
            Category::Aayanam => self.ayana.names(),
            Category::Rutu => self.rutu.names(),
            Category::Month => self.masa.names(),
            Category::Paksham => self.paksha.names(),
            Category::Tithi => self.tithi.tithi.names(),
            Category::Varam => self.vaar.names(),
        }
    }

    /// Ordered, labeled report rendered in `mode`.
    pub fn report(&self, mode: DisplayMode) -> PanchangamReport {
        let entries = ALL_CATEGORIES
            .iter()
            .map(|&category| ReportEntry {
                category,
                label: category.render(mode),
                value: self.value_names(category).render(mode),
            })
            .collect();
        PanchangamReport { mode, entries }
    }
}

/// One labeled line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub category: Category,
    pub label: String,
    pub value: String,
}

/// The seven report entries, in the order Year, Aayanam, Rutu, Month,
/// Paksham, Tithi, Varam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanchangamReport {
    pub mode: DisplayMode,
    pub entries: Vec<ReportEntry>,
}

impl PanchangamReport {
    pub fn get(&self, category: Category) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Value shown for `category`.
    pub fn value(&self, category: Category) -> Option<&str> {
        self.get(category).map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.label.as_str(), e.value.as_str()))
    }
}
