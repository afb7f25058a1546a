//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Render an RFC 3339 timestamp as `YYYY-MM-DD`.
///
/// Unparseable input falls back to its leading date-like prefix so a
/// surprising backend format still shows something; `None` renders as `—`.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "—".to_owned();
    };
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => raw.chars().take(10).collect(),
    }
}
