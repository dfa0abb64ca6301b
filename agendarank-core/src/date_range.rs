//! Date range for filtering events.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AgendaRankError, AgendaRankResult};

/// Inclusive date range for filtering events.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Parse `--start` / `--end` values (YYYY/MM/DD) into a DateRange.
    /// A missing value leaves that side unbounded.
    pub fn from_args(start: Option<&str>, end: Option<&str>) -> AgendaRankResult<Self> {
        Ok(DateRange {
            from: start.map(parse_date).transpose()?,
            to: end.map(parse_date).transpose()?,
        })
    }

    /// An event passes when it starts on or after `from` and ends on or before `to`.
    /// Only the calendar date of each timestamp takes part in the comparison.
    pub fn contains_event(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let starts_in = self.from.is_none_or(|from| from <= start.date());
        let ends_in = self.to.is_none_or(|to| end.date() <= to);
        starts_in && ends_in
    }
}

/// Parse YYYY/MM/DD
fn parse_date(s: &str) -> AgendaRankResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y/%m/%d")
        .map_err(|_| AgendaRankError::InvalidDate(s.to_string()))
}
