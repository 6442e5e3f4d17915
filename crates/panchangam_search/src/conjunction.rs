//! Conjunction search engine.
//!
//! Finds when two bodies share an ecliptic longitude. Uses coarse scan +
//! bisection on the angular difference function.
//!
//! f(t) = lon1(t) - lon2(t), wrapped to (-180, +180], so zero-crossings are
//! conjunctions. The wrap also makes f jump between +180 and -180 at each
//! opposition. Large jumps are rejected outright; a jump that slips past
//! that test is caught after refinement, because bisection converges on
//! the discontinuity with f still near ±180.

use panchangam_core::{Body, Ephemeris};
use tracing::debug;

use crate::conjunction_types::{ConjunctionConfig, ConjunctionEvent, SearchDirection};
use crate::error::SearchError;

/// Largest `|f|` accepted at a refined root, degrees.
const ROOT_TOLERANCE_DEG: f64 = 1.0;

/// Normalize an angle to (-180, +180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Separation function sample: `(f, lon1, lon2)`.
fn separation_function<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    jd_ut: f64,
) -> Result<(f64, f64, f64), SearchError> {
    let lon1 = engine.tropical_longitude_deg(body1, jd_ut)?;
    let lon2 = engine.tropical_longitude_deg(body2, jd_ut)?;
    Ok((normalize_to_pm180(lon1 - lon2), lon1, lon2))
}

/// Sign change that is not an obvious jump across the ±180° wrap.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

fn event_at<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    jd_ut: f64,
) -> Result<ConjunctionEvent, SearchError> {
    let (f, lon1, lon2) = separation_function(engine, body1, body2, jd_ut)?;
    Ok(ConjunctionEvent {
        jd_ut,
        actual_separation_deg: f,
        body1_longitude_deg: lon1,
        body2_longitude_deg: lon2,
        body1,
        body2,
    })
}

/// Bisect to refine the sign change in `[t_a, t_b]`, `t_a < t_b`.
fn bisect_refinement<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    (mut t_a, mut f_a): (f64, f64),
    mut t_b: f64,
    config: &ConjunctionConfig,
) -> Result<ConjunctionEvent, SearchError> {
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let (f_mid, _, _) = separation_function(engine, body1, body2, t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
    }

    event_at(engine, body1, body2, 0.5 * (t_a + t_b))
}

/// Find the next or previous event, including one exactly at `jd_start`.
fn find_event<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    jd_start: f64,
    direction: SearchDirection,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let step = match direction {
        SearchDirection::Forward => config.step_size_days,
        SearchDirection::Backward => -config.step_size_days,
    };
    let max_steps = (config.max_scan_days / config.step_size_days).ceil() as usize;

    let (mut f_prev, _, _) = separation_function(engine, body1, body2, jd_start)?;
    if f_prev == 0.0 {
        return event_at(engine, body1, body2, jd_start).map(Some);
    }
    let mut t_prev = jd_start;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let (f_curr, _, _) = separation_function(engine, body1, body2, t_curr)?;

        if f_curr == 0.0 {
            return event_at(engine, body1, body2, t_curr).map(Some);
        }

        if is_genuine_crossing(f_prev, f_curr) {
            let (lo, t_b) = if t_prev < t_curr {
                ((t_prev, f_prev), t_curr)
            } else {
                ((t_curr, f_curr), t_prev)
            };
            let event = bisect_refinement(engine, body1, body2, lo, t_b, config)?;
            if event.actual_separation_deg.abs() <= ROOT_TOLERANCE_DEG {
                return Ok(Some(event));
            }
            debug!(
                jd = event.jd_ut,
                separation = event.actual_separation_deg,
                "sign change was the opposition wrap, scanning on"
            );
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

/// Find the first conjunction at or after `jd_ut`.
pub fn next_conjunction<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    jd_ut: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError> {
    find_event(engine, body1, body2, jd_ut, SearchDirection::Forward, config)
}

/// Find the last conjunction at or before `jd_ut`.
pub fn prev_conjunction<E: Ephemeris + ?Sized>(
    engine: &E,
    body1: Body,
    body2: Body,
    jd_ut: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError> {
    find_event(engine, body1, body2, jd_ut, SearchDirection::Backward, config)
}
