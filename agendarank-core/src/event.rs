//! Calendar event records.

use chrono::{NaiveDate, NaiveDateTime};

/// One calendar entry read from a VEVENT block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub location: String,
}

impl Event {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Parse an ICS timestamp.
///
/// Only the leading `YYYYMMDDTHHMM` is read; seconds, a trailing `Z` or anything
/// else after it are ignored. A bare `YYYYMMDD` date is taken as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Some(head) = value.get(..13) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(head, "%Y%m%dT%H%M") {
            return Some(dt);
        }
    }

    let date = value.get(..8)?;
    if value.len() > 8 && value.as_bytes()[8] == b'T' {
        // Has a time part that did not parse
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y%m%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
