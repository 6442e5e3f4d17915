//! Ayanamsha: offset between the tropical and sidereal zodiacs.
//!
//! As the equinox precesses westward the ayanamsha grows by roughly
//! 50″ per year. The shipped model is a straight line through the Lahiri
//! value at 1950, evaluated on a civil calendar date.

use chrono::{Datelike, NaiveDate};

/// Lahiri ayanamsha at the start of 1950, degrees.
pub const LINEAR_BASE_DEG: f64 = 23.85;

/// Reference year of [`LINEAR_BASE_DEG`].
pub const LINEAR_EPOCH_YEAR: f64 = 1950.0;

/// Precession rate used by the linear model, degrees per year.
pub const LINEAR_RATE_DEG_PER_YEAR: f64 = 0.01397;

/// A model of the ayanamsha as a function of the civil (UTC) date.
pub trait AyanamshaModel {
    fn ayanamsha_deg(&self, date: NaiveDate) -> f64;
}

impl<F> AyanamshaModel for F
where
    F: Fn(NaiveDate) -> f64,
{
    fn ayanamsha_deg(&self, date: NaiveDate) -> f64 {
        self(date)
    }
}

/// Linear ayanamsha: `base + (fractional_year - epoch) * rate`.
///
/// The fractional year is `year + (month - 1) / 12 + day / 365`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAyanamsha {
    pub base_deg: f64,
    pub epoch_year: f64,
    pub rate_deg_per_year: f64,
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self {
            base_deg: LINEAR_BASE_DEG,
            epoch_year: LINEAR_EPOCH_YEAR,
            rate_deg_per_year: LINEAR_RATE_DEG_PER_YEAR,
        }
    }
}

impl AyanamshaModel for LinearAyanamsha {
    fn ayanamsha_deg(&self, date: NaiveDate) -> f64 {
        let year = fractional_year(date.year(), date.month(), date.day());
        self.base_deg + (year - self.epoch_year) * self.rate_deg_per_year
    }
}

fn fractional_year(year: i32, month: u32, day: u32) -> f64 {
    year as f64 + (month as f64 - 1.0) / 12.0 + day as f64 / 365.0
}

/// Default linear ayanamsha for a calendar date.
pub fn linear_ayanamsha_deg(year: i32, month: u32, day: u32) -> f64 {
    LINEAR_BASE_DEG + (fractional_year(year, month, day) - LINEAR_EPOCH_YEAR) * LINEAR_RATE_DEG_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn near_base_at_epoch() {
        // Day term makes 1950-01-01 sit 1/365 year past the epoch
        let v = LinearAyanamsha::default().ayanamsha_deg(date(1950, 1, 1));
        assert!((v - (23.85 + 0.01397 / 365.0)).abs() < 1e-12);
    }

    #[test]
    fn mid_january_2024() {
        let v = LinearAyanamsha::default().ayanamsha_deg(date(2024, 1, 15));
        let expected = 23.85 + (2024.0 + 15.0 / 365.0 - 1950.0) * 0.01397;
        assert!((v - expected).abs() < 1e-12, "{v} vs {expected}");
        assert!((v - 24.884).abs() < 0.001);
    }

    #[test]
    fn free_function_matches_model() {
        let d = date(2031, 7, 9);
        assert_eq!(
            linear_ayanamsha_deg(2031, 7, 9),
            LinearAyanamsha::default().ayanamsha_deg(d)
        );
    }

    #[test]
    fn increases_monotonically_within_year() {
        let model = LinearAyanamsha::default();
        let mut prev = model.ayanamsha_deg(date(2024, 1, 1));
        for m in 2..=12 {
            let v = model.ayanamsha_deg(date(2024, m, 1));
            assert!(v > prev, "month {m}: {v} <= {prev}");
            prev = v;
        }
    }

    #[test]
    fn closure_is_a_model() {
        let fixed = |_: NaiveDate| 24.0;
        assert_eq!(fixed.ayanamsha_deg(date(2024, 1, 1)), 24.0);
    }
}
