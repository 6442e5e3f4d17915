//! Local civil time → UTC instant, via the bundled IANA tz database.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::TimeError;

/// Resolve an IANA timezone identifier such as `"Asia/Kolkata"`.
pub fn resolve_zone(id: &str) -> Result<Tz, TimeError> {
    id.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone(id.to_string()))
}

/// Convert a naive local date-time in `tz` to a UTC instant.
///
/// The offset applied is the one in force at that instant. A local time that
/// occurs twice (clocks set back) resolves to the later, standard-time
/// reading. A local time skipped by a forward transition is read with the
/// offset that was in force just before the gap.
pub fn localize(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, TimeError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, later) => {
            debug!(%local, zone = tz.name(), %earlier, %later, "ambiguous local time, using later instant");
            Ok(later.with_timezone(&Utc))
        }
        LocalResult::None => {
            let day_before = local
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(|| TimeError::OutOfRange(local.to_string()))?;
            let offset_secs = tz.offset_from_utc_datetime(&day_before).fix().local_minus_utc();
            let utc = local
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset_secs)))
                .ok_or_else(|| TimeError::OutOfRange(local.to_string()))?;
            debug!(%local, zone = tz.name(), offset_secs, "nonexistent local time, using pre-transition offset");
            Ok(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Resolve `zone_id` and localize `local` in it.
pub fn localize_in(local: NaiveDateTime, zone_id: &str) -> Result<DateTime<Utc>, TimeError> {
    let tz = resolve_zone(zone_id)?;
    localize(local, &tz)
}
