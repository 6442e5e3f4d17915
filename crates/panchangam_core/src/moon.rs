//! Geocentric lunar longitude.
//!
//! Truncated ELP-2000/82 series as tabulated in Meeus, *Astronomical
//! Algorithms* ch. 47 (Table 47.A longitude terms, plus the Venus, Jupiter
//! and flattening corrections). Good to about 10″.

use crate::nutation::nutation_longitude_deg;

/// Lunar fundamental arguments in degrees (not normalized).
///
/// Returns `[L', D, M, M', F]`:
/// - `L'` = Moon's mean longitude
/// - `D`  = mean elongation of the Moon
/// - `M`  = Sun's mean anomaly
/// - `M'` = Moon's mean anomaly
/// - `F`  = Moon's argument of latitude
pub fn lunar_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    [lp, d, m, mp, f]
}

/// Periodic longitude terms.
///
/// Each row: `[D, M, M', F, Σl coefficient in 1e-6 degree]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 59] = [
    //  D   M   M'  F       Σl
    [   0,  0,  1,  0,  6_288_774],
    [   2,  0, -1,  0,  1_274_027],
    [   2,  0,  0,  0,    658_314],
    [   0,  0,  2,  0,    213_618],
    [   0,  1,  0,  0,   -185_116],
    [   0,  0,  0,  2,   -114_332],
    [   2,  0, -2,  0,     58_793],
    [   2, -1, -1,  0,     57_066],
    [   2,  0,  1,  0,     53_322],
    [   2, -1,  0,  0,     45_758],
    [   0,  1, -1,  0,    -40_923],
    [   1,  0,  0,  0,    -34_720],
    [   0,  1,  1,  0,    -30_383],
    [   2,  0,  0, -2,     15_327],
    [   0,  0,  1,  2,    -12_528],
    [   0,  0,  1, -2,     10_980],
    [   4,  0, -1,  0,     10_675],
    [   0,  0,  3,  0,     10_034],
    [   4,  0, -2,  0,      8_548],
    [   2,  1, -1,  0,     -7_888],
    [   2,  1,  0,  0,     -6_766],
    [   1,  0, -1,  0,     -5_163],
    [   1,  1,  0,  0,      4_987],
    [   2, -1,  1,  0,      4_036],
    [   2,  0,  2,  0,      3_994],
    [   4,  0,  0,  0,      3_861],
    [   2,  0, -3,  0,      3_665],
    [   0,  1, -2,  0,     -2_689],
    [   2,  0, -1,  2,     -2_602],
    [   2, -1, -2,  0,      2_390],
    [   1,  0,  1,  0,     -2_348],
    [   2, -2,  0,  0,      2_236],
    [   0,  1,  2,  0,     -2_120],
    [   0,  2,  0,  0,     -2_069],
    [   2, -2, -1,  0,      2_048],
    [   2,  0,  1, -2,     -1_773],
    [   2,  0,  0,  2,     -1_595],
    [   4, -1, -1,  0,      1_215],
    [   0,  0,  2,  2,     -1_110],
    [   3,  0, -1,  0,       -892],
    [   2,  1,  1,  0,       -810],
    [   4, -1, -2,  0,        759],
    [   0,  2, -1,  0,       -713],
    [   2,  2, -1,  0,       -700],
    [   2,  1, -2,  0,        691],
    [   2, -1,  0, -2,        596],
    [   4,  0,  1,  0,        549],
    [   0,  0,  4,  0,        537],
    [   4, -1,  0,  0,        520],
    [   1,  0, -2,  0,       -487],
    [   2,  1,  0, -2,       -399],
    [   0,  0,  2, -2,       -381],
    [   1,  1,  1,  0,        351],
    [   3,  0, -2,  0,       -340],
    [   4,  0, -3,  0,        330],
    [   2, -1,  2,  0,        327],
    [   0,  2,  1,  0,       -323],
    [   1,  1, -1,  0,        299],
    [   2,  0,  3,  0,        294],
];

/// Moon's geometric longitude referred to the mean equinox of date, degrees
/// (not normalized).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_true_longitude_deg(t: f64) -> f64 {
    let [lp, d, m, mp, f] = lunar_arguments_deg(t);
    // Terms in M are scaled by the decreasing eccentricity of Earth's orbit
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum_l: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&[cd, cm, cmp, cf, coeff]| {
            let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f).to_radians();
            coeff as f64 * e.powi(cm.abs()) * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    lp + sum_l / 1e6
}

/// Moon's apparent longitude referred to the true equinox of date, degrees
/// (not normalized).
///
/// Light-time is below the precision of the series and is ignored.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    moon_true_longitude_deg(t) + nutation_longitude_deg(t)
}
