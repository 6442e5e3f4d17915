//! General precession in ecliptic longitude.
//!
//! Lieske et al. (1977) expression for p_A, the westward drift of the
//! equinox along the ecliptic since J2000.0. Subtracting it from a
//! longitude of date refers that longitude back to the J2000 equinox.

/// General precession in longitude, arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0. Positive after J2000.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    5029.0966 * t + 1.11113 * t * t
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishes_at_j2000() {
        assert_eq!(general_precession_longitude_deg(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.01, "p_A = {p}");
    }

    #[test]
    fn quadratic_term_breaks_symmetry() {
        // p(T) + p(-T) = 2·1.11113·T²
        let sum = general_precession_longitude_arcsec(2.0) + general_precession_longitude_arcsec(-2.0);
        assert!((sum - 8.88904).abs() < 1e-9, "sum = {sum}");
    }

    #[test]
    fn mid_2024_offset() {
        // 2024-01-15 is ~0.2404 centuries after J2000: about 0.336°
        let t = (2_460_324.69 - 2_451_545.0) / 36_525.0;
        let p = general_precession_longitude_deg(t);
        assert!((p - 0.3358).abs() < 0.0005, "p = {p}");
    }
}
