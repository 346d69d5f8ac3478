use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse `--at` values.
///
/// Accepts RFC 3339 (converted to local time), or a local date-time written
/// as `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`.
pub fn parse_instant(text: &str) -> Result<DateTime<Local>> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Local));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    let Some(naive) = naive else {
        bail!(
            "Invalid time '{}': expected RFC 3339 or 'YYYY-MM-DD HH:MM:SS'",
            text
        );
    };

    match Local.from_local_datetime(&naive).single() {
        Some(instant) => Ok(instant),
        None => bail!("Local time '{}' is ambiguous or does not exist", text),
    }
}
