use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a completion instant typed by the user.
///
/// Accepted forms:
/// - RFC 3339 (`2025-06-18T07:30:00Z`, `2025-06-18T09:30:00+02:00`)
/// - `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM` in local time
/// - `YYYY-MM-DD` → local noon of that day
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(12, 0, 0))
        })
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidTimestamp(format!("{s} does not exist in local time")))
}

/// Local rendering used in tables: "2025-06-18 09:30".
pub fn format_local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Local midnight of today, as a UTC instant (lower bound for "done today").
pub fn start_of_today_utc() -> Option<DateTime<Utc>> {
    today()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}
