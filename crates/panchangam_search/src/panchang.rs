//! The calendrical converter: localized instant → panchangam.
//!
//! Tithi, vaar and ayana are taken at the queried instant itself, not at
//! local sunrise, so results can differ from printed almanacs close to a
//! day boundary.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use panchangam_core::{Body, Engine, Ephemeris};
use panchangam_time::{Tz, localize, resolve_zone, utc_to_jd};
use panchangam_vedic_base::{
    AyanamshaModel, DisplayMode, LinearAyanamsha, Masa, TithiPosition,
    ayana_from_sidereal_longitude, masa_from_sun_longitude, normalize_360, rutu_from_masa,
    samvatsara_from_year, tithi_from_elongation, vaar_from_weekday,
};
use tracing::debug;

use crate::conjunction_types::ConjunctionConfig;
use crate::error::{PanchangError, SearchError};
use crate::lunar_phase::{NewMoonEvent, next_new_moon, prev_new_moon};
use crate::panchang_types::{PanchangamInfo, PanchangamReport};

/// Sidereal `(sun, moon)` longitudes at `jd_ut` for a given ayanamsha.
pub fn sidereal_longitudes_at<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    ayanamsha_deg: f64,
) -> Result<(f64, f64), SearchError> {
    let sun = engine.tropical_longitude_deg(Body::Sun, jd_ut)?;
    let moon = engine.tropical_longitude_deg(Body::Moon, jd_ut)?;
    Ok((
        normalize_360(sun - ayanamsha_deg),
        normalize_360(moon - ayanamsha_deg),
    ))
}

/// Moon − Sun elongation in [0, 360).
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_360(moon_deg - sun_deg)
}

/// Tithi in progress at `jd_ut`.
pub fn tithi_at<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    ayanamsha_deg: f64,
) -> Result<TithiPosition, SearchError> {
    let (sun, moon) = sidereal_longitudes_at(engine, jd_ut, ayanamsha_deg)?;
    Ok(tithi_from_elongation(elongation_deg(sun, moon)))
}

/// First new moon on or after March 1 00:00 UTC of `civil_year`.
///
/// The lunisolar year that begins in `civil_year` starts at this new moon.
pub fn year_boundary_new_moon<E: Ephemeris + ?Sized>(
    engine: &E,
    civil_year: i32,
    config: &ConjunctionConfig,
) -> Result<NewMoonEvent, SearchError> {
    let march_first = Utc
        .with_ymd_and_hms(civil_year, 3, 1, 0, 0, 0)
        .single()
        .ok_or(SearchError::YearOutOfRange(civil_year))?;
    next_new_moon(engine, utc_to_jd(&march_first), config)
}

/// CE year in which the lunisolar year containing `utc` began.
///
/// `civil_year` is the year of the local civil date; instants before that
/// year's boundary new moon belong to the previous lunisolar year.
pub fn lunisolar_year_for<E: Ephemeris + ?Sized>(
    engine: &E,
    utc: &DateTime<Utc>,
    civil_year: i32,
    config: &ConjunctionConfig,
) -> Result<(i32, NewMoonEvent), SearchError> {
    let boundary = year_boundary_new_moon(engine, civil_year, config)?;
    let year = if *utc < boundary.utc {
        civil_year - 1
    } else {
        civil_year
    };
    Ok((year, boundary))
}

/// Masa in force at `jd_ut`, from the Sun's sidereal sign at the previous new moon.
///
/// `ayanamsha_deg` is the value for the queried instant and is reused at the
/// new moon.
pub fn masa_at<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    ayanamsha_deg: f64,
    config: &ConjunctionConfig,
) -> Result<(Masa, NewMoonEvent), SearchError> {
    let start = prev_new_moon(engine, jd_ut, config)?;
    let sun_sid = normalize_360(start.sun_longitude_deg - ayanamsha_deg);
    Ok((masa_from_sun_longitude(sun_sid), start))
}

fn ensure_finite(values: &[(&'static str, f64)]) -> Result<(), PanchangError> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(PanchangError::InvariantViolation(format!("{name} = {v}"))),
        None => Ok(()),
    }
}

/// Compute the panchangam for a local wall-clock time in `tz`.
pub fn panchangam_for<E, A>(
    engine: &E,
    ayanamsha: &A,
    local: NaiveDateTime,
    tz: &Tz,
    config: &ConjunctionConfig,
) -> Result<PanchangamInfo, PanchangError>
where
    E: Ephemeris + ?Sized,
    A: AyanamshaModel + ?Sized,
{
    let utc = localize(local, tz)?;
    let jd_ut = utc_to_jd(&utc);
    let aya = ayanamsha.ayanamsha_deg(utc.date_naive());
    debug!(%local, zone = tz.name(), %utc, jd_ut, ayanamsha = aya, "resolved instant");

    let (sun_sid, moon_sid) = sidereal_longitudes_at(engine, jd_ut, aya)?;
    let elong = elongation_deg(sun_sid, moon_sid);
    ensure_finite(&[
        ("ayanamsha", aya),
        ("sun", sun_sid),
        ("moon", moon_sid),
        ("elongation", elong),
    ])?;

    let tithi = tithi_from_elongation(elong);
    let vaar = vaar_from_weekday(local.weekday());
    let (lunisolar_year, year_boundary) = lunisolar_year_for(engine, &utc, local.year(), config)?;
    let (samvatsara, _) = samvatsara_from_year(lunisolar_year);
    let (masa, month_start) = masa_at(engine, jd_ut, aya, config)?;

    Ok(PanchangamInfo {
        local,
        zone_id: tz.name(),
        utc,
        jd_ut,
        ayanamsha_deg: aya,
        sun_sidereal_deg: sun_sid,
        moon_sidereal_deg: moon_sid,
        elongation_deg: elong,
        lunisolar_year,
        samvatsara,
        ayana: ayana_from_sidereal_longitude(sun_sid),
        rutu: rutu_from_masa(masa),
        masa,
        paksha: tithi.paksha,
        tithi,
        vaar,
        year_boundary,
        month_start,
    })
}

/// [`panchangam_for`] with the zone given as an IANA identifier.
pub fn panchangam_in<E, A>(
    engine: &E,
    ayanamsha: &A,
    local: NaiveDateTime,
    zone_id: &str,
    config: &ConjunctionConfig,
) -> Result<PanchangamInfo, PanchangError>
where
    E: Ephemeris + ?Sized,
    A: AyanamshaModel + ?Sized,
{
    let tz = resolve_zone(zone_id)?;
    panchangam_for(engine, ayanamsha, local, &tz, config)
}

/// Compute the labeled panchangam report for a local date-time and zone.
///
/// Uses the built-in analytic ephemeris and the linear ayanamsha.
pub fn compute(
    local: NaiveDateTime,
    zone_id: &str,
    mode: DisplayMode,
) -> Result<PanchangamReport, PanchangError> {
    let info = panchangam_in(
        &Engine::default(),
        &LinearAyanamsha::default(),
        local,
        zone_id,
        &ConjunctionConfig::new_moon(),
    )?;
    Ok(info.report(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use panchangam_core::EngineError;
    use panchangam_vedic_base::{Category, Tithi};

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    struct Broken;

    impl Ephemeris for Broken {
        fn tropical_longitude_deg(&self, _: Body, jd_ut: f64) -> Result<f64, EngineError> {
            Err(EngineError::EpochOutOfRange { jd_ut })
        }
    }

    #[test]
    fn elongation_wraps() {
        assert!((elongation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((elongation_deg(10.0, 350.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn unrepresentable_civil_year() {
        let err = year_boundary_new_moon(&Engine::default(), i32::MAX, &ConjunctionConfig::new_moon())
            .unwrap_err();
        assert_eq!(err, SearchError::YearOutOfRange(i32::MAX));
    }

    #[test]
    fn tithi_at_full_moon() {
        // 2024-01-25 17:54 UTC full moon
        let t = tithi_at(&Engine::default(), 2_460_335.246, 24.19).unwrap();
        assert!(t.tithi_index == 14 || t.tithi_index == 15, "{t:?}");
    }

    #[test]
    fn sidereal_subtracts_ayanamsha() {
        let (s, m) = sidereal_longitudes_at(&Engine::default(), 2_460_324.6875, 24.0).unwrap();
        let (ts, tm) = Engine::default().sun_moon_longitudes(2_460_324.6875).unwrap();
        assert!((normalize_360(ts - s) - 24.0).abs() < 1e-9);
        assert!((normalize_360(tm - m) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn engine_failure_is_ephemeris_unavailable() {
        let err = panchangam_in(
            &Broken,
            &LinearAyanamsha::default(),
            naive(2024, 1, 15, 10, 0),
            "Asia/Kolkata",
            &ConjunctionConfig::new_moon(),
        )
        .unwrap_err();
        assert!(matches!(err, PanchangError::EphemerisUnavailable(_)));
    }

    #[test]
    fn non_finite_ayanamsha_is_defect() {
        let nan_model = |_: NaiveDate| f64::NAN;
        let err = panchangam_in(
            &Engine::default(),
            &nan_model,
            naive(2024, 1, 15, 10, 0),
            "Asia/Kolkata",
            &ConjunctionConfig::new_moon(),
        )
        .unwrap_err();
        assert!(matches!(err, PanchangError::InvariantViolation(_)), "{err:?}");
    }

    #[test]
    fn bad_zone_checked_before_ephemeris() {
        let err = panchangam_in(
            &Broken,
            &LinearAyanamsha::default(),
            naive(2024, 1, 15, 10, 0),
            "Nowhere/Special",
            &ConjunctionConfig::new_moon(),
        )
        .unwrap_err();
        assert_eq!(err, PanchangError::InvalidTimezone("Nowhere/Special".into()));
    }

    #[test]
    fn compute_kolkata_mid_january() {
        let report = compute(naive(2024, 1, 15, 10, 0), "Asia/Kolkata", DisplayMode::Romanized).unwrap();
        assert_eq!(report.value(Category::Varam), Some("Somavaramu"));
        assert_eq!(report.value(Category::Tithi), Some("Panchami"));
        assert_eq!(report.value(Category::Aayanam), Some("Dakshinayana"));
    }

    #[test]
    fn info_tithi_consistent_with_elongation() {
        let info = panchangam_in(
            &Engine::default(),
            &LinearAyanamsha::default(),
            naive(2024, 1, 15, 10, 0),
            "Asia/Kolkata",
            &ConjunctionConfig::new_moon(),
        )
        .unwrap();
        assert_eq!(info.tithi.tithi, Tithi::ShuklaPanchami);
        assert!((info.elongation_deg - 50.84).abs() < 0.1, "{}", info.elongation_deg);
        assert!(info.month_start.utc < info.utc);
    }
}
