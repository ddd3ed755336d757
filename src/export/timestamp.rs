use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current UTC time as ISO-8601 `YYYY-MM-DDTHH:MM:SSZ`.
///
/// A system clock reading earlier than the Unix epoch clamps to the
/// epoch.
#[must_use]
pub fn utc_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    format_utc(secs)
}

/// Formats seconds since the Unix epoch as ISO-8601 UTC.
#[must_use]
pub fn format_utc(secs_since_epoch: u64) -> String {
    let days = secs_since_epoch / 86_400;
    let rem = secs_since_epoch % 86_400;
    let (year, month, day) = civil_from_days(days);
    let (hour, minute, second) = (rem / 3600, (rem % 3600) / 60, rem % 60);
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z")
}

/// Proleptic Gregorian date for a day count since 1970-01-01, using
/// Hinnant's `civil_from_days` restricted to non-negative input.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let year = yoe + era * 400;
    if mp < 10 {
        (year, mp + 3, day)
    } else {
        (year + 1, mp - 9, day)
    }
}
