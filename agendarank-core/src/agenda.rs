//! Day-grouped agenda output.
//!
//! ```text
//! January 15, 2023
//! ----------------
//! 10:00 AM to 11:30 AM: Standup {{Room 1}}
//!  2:00 PM to  3:00 PM: Review {{Room 2}}
//!
//! January 16, 2023
//! ----------------
//!  9:00 AM to  9:30 AM: Dentist {{Downtown}}
//! ```

use std::io::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Writes events as an agenda, printing a date header whenever the start day changes.
pub struct AgendaWriter<W> {
    out: W,
    current_day: Option<NaiveDate>,
    written: usize,
}

impl<W: Write> AgendaWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_day: None,
            written: 0,
        }
    }

    pub fn write_event(&mut self, event: &Event) -> io::Result<()> {
        let day = event.start_date();

        if self.current_day != Some(day) {
            if self.current_day.is_some() {
                writeln!(self.out)?;
            }
            let header = format_date_header(day);
            writeln!(self.out, "{}", header)?;
            writeln!(self.out, "{}", "-".repeat(header.len()))?;
            self.current_day = Some(day);
        }

        writeln!(
            self.out,
            "{} to {}: {} {{{{{}}}}}",
            format_time(event.start),
            format_time(event.end),
            event.summary,
            event.location
        )?;
        self.written += 1;
        Ok(())
    }

    /// Number of event lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format a date as a header label (e.g. "January 05, 2023")
pub fn format_date_header(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Format a time on the 12-hour clock with a space-padded hour (e.g. " 9:05 AM")
pub fn format_time(time: NaiveDateTime) -> String {
    time.format("%l:%M %p").to_string()
}
