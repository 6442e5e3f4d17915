//! Nutation in longitude (Δψ), short series.
//!
//! Four dominant terms of the IAU 1980 theory, as abridged in Meeus,
//! *Astronomical Algorithms* ch. 22. Accurate to about 0.5″, well below
//! what the truncated solar and lunar theories resolve.

/// Arcseconds to degrees.
const AS2DEG: f64 = 1.0 / 3600.0;

/// Longitude of the Moon's mean ascending node, degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_node_longitude_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0
}

/// Nutation in longitude in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let om = moon_node_longitude_deg(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_as = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    dpsi_as * AS2DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788″
        let t = -0.127_296_372_348;
        let dpsi = nutation_longitude_deg(t) * 3600.0;
        assert!((dpsi - (-3.788)).abs() < 0.5, "Δψ = {dpsi}″");
    }

    #[test]
    fn bounded_by_amplitude_sum() {
        for i in 0..200 {
            let t = -10.0 + i as f64 * 0.1;
            let dpsi = nutation_longitude_deg(t) * 3600.0;
            assert!(dpsi.abs() <= 17.20 + 1.32 + 0.23 + 0.21 + 1e-9);
        }
    }
}
