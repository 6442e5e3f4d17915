//! Catalog of selectable locations, one per country timezone.
//!
//! Built from the tz database's `zone.tab` and `iso3166.tab`. A country
//! with a single zone is listed under its name alone; otherwise each zone is
//! labelled `"Country (City)"`.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono_tz::Tz;
use tracing::debug;

/// Zone preselected when no location is chosen.
pub const DEFAULT_ZONE: &str = "Asia/Singapore";

const ZONE_TAB: &str = include_str!("../data/zone.tab");
const ISO3166_TAB: &str = include_str!("../data/iso3166.tab");

static CATALOG: LazyLock<Vec<ZoneEntry>> = LazyLock::new(build_catalog);

/// A human-readable location backed by a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    /// Display label, e.g. `"India"` or `"United States (New York)"`.
    pub label: String,
    /// English country name from ISO 3166.
    pub country: &'static str,
    pub zone: Tz,
}

impl ZoneEntry {
    /// IANA identifier of the zone.
    pub fn id(&self) -> &'static str {
        self.zone.name()
    }

    /// Last component of the zone id, underscores as spaces.
    pub fn city(&self) -> String {
        city_of(self.id())
    }
}

fn city_of(id: &str) -> String {
    id.rsplit_once('/').map_or(id, |(_, city)| city).replace('_', " ")
}

/// Non-comment, non-blank lines of a tz table.
fn data_lines(text: &'static str) -> impl Iterator<Item = &'static str> {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
}

fn build_catalog() -> Vec<ZoneEntry> {
    let countries: HashMap<&str, &str> = data_lines(ISO3166_TAB)
        .filter_map(|line| line.split_once('\t'))
        .collect();

    // zone.tab columns: code, coordinates, zone id, optional comment
    let zones: Vec<(&str, Tz)> = data_lines(ZONE_TAB)
        .filter_map(|line| {
            let mut cols = line.split('\t');
            let code = cols.next()?;
            let id = cols.nth(1)?;
            match id.parse::<Tz>() {
                Ok(tz) => Some((code, tz)),
                Err(_) => {
                    debug!(id, "zone missing from tz database, skipped");
                    None
                }
            }
        })
        .collect();

    let mut zones_per_country: HashMap<&str, usize> = HashMap::new();
    for &(code, _) in &zones {
        *zones_per_country.entry(code).or_default() += 1;
    }

    let mut entries: Vec<ZoneEntry> = zones
        .into_iter()
        .filter_map(|(code, zone)| {
            let country = *countries.get(code)?;
            let label = if zones_per_country.get(code).copied().unwrap_or(0) > 1 {
                format!("{country} ({})", city_of(zone.name()))
            } else {
                country.to_string()
            };
            Some(ZoneEntry {
                label,
                country,
                zone,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.label.cmp(&b.label));
    debug!(entries = entries.len(), "zone catalog built");
    entries
}

/// All catalog entries, sorted by label.
pub fn zone_catalog() -> &'static [ZoneEntry] {
    &CATALOG
}

/// Find a zone by IANA id, full label or city (case-insensitive).
///
/// Single-zone countries are labelled by their name, so `"India"` resolves.
pub fn find_zone(query: &str) -> Option<Tz> {
    let q = query.trim();
    if let Ok(tz) = q.parse::<Tz>() {
        return Some(tz);
    }
    let q = q.to_lowercase().replace('_', " ");
    let catalog = zone_catalog();
    catalog
        .iter()
        .find(|e| e.label.to_lowercase() == q)
        .or_else(|| catalog.iter().find(|e| e.city().to_lowercase() == q))
        .map(|e| e.zone)
}

/// Entries whose label or id contains `needle` (case-insensitive).
pub fn filter_catalog(needle: &str) -> Vec<&'static ZoneEntry> {
    let needle = needle.trim().to_lowercase();
    zone_catalog()
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.label.to_lowercase().contains(&needle)
                || e.id().to_lowercase().contains(&needle)
        })
        .collect()
}
