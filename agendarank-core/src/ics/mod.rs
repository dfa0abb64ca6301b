//! ICS text scanning.
//!
//! Calendar files are read line by line; each VEVENT block is parsed with
//! `icalendar` as soon as its END marker is seen.

mod scan;

pub use scan::EventScanner;
