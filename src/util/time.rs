use chrono::{Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Accepted deadline formats, local time
const DEADLINE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Current time in milliseconds since the epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a local `YYYY-MM-DD HH:MM` (or `T`-separated) deadline into epoch ms
pub fn parse_deadline(input: &str) -> Result<i64, String> {
    let input = input.trim();
    let naive = DEADLINE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| format!("invalid deadline '{}' (expected YYYY-MM-DD HH:MM)", input))?;
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(format!("deadline '{}' does not exist in local time", input)),
    }
}

/// Format epoch ms as a local `YYYY-MM-DD HH:MM`
pub fn format_deadline(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d %H:%M").to_string()
        }
        LocalResult::None => ms.to_string(),
    }
}
