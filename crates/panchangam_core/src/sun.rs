//! Geocentric solar longitude.
//!
//! Low-precision solar theory of Meeus, *Astronomical Algorithms* ch. 25:
//! mean longitude plus the equation of the centre. Good to about 0.01°.

use crate::nutation::nutation_longitude_deg;

/// Sun's true geometric longitude referred to the mean equinox of date, degrees
/// (not normalized).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t2).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    l0 + c
}

/// Annual aberration in longitude, degrees.
const ABERRATION_DEG: f64 = -0.00569;

/// Sun's apparent longitude referred to the true equinox of date, degrees
/// (not normalized).
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    sun_true_longitude_deg(t) + ABERRATION_DEG + nutation_longitude_deg(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: apparent λ = 199.90895°
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let lon = sun_apparent_longitude_deg(t).rem_euclid(360.0);
        assert!((lon - 199.90895).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn true_longitude_example_25a() {
        // Same epoch, true longitude ☉ = 199.90988°
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let lon = sun_true_longitude_deg(t).rem_euclid(360.0);
        assert!((lon - 199.90988).abs() < 0.0005, "☉ = {lon}");
    }

    #[test]
    fn near_equinox_in_march() {
        // 2024 March equinox: 2024-03-20 03:06 UT
        let t = (2_460_389.629 - 2_451_545.0) / 36_525.0;
        let lon = sun_apparent_longitude_deg(t).rem_euclid(360.0);
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "λ = {lon}");
    }
}
