//! Streaming VEVENT scanner.

use std::io::{BufRead, Lines};

use icalendar::parser::{read_calendar, unfold};
use log::{debug, warn};

use crate::error::AgendaRankResult;
use crate::event::{Event, parse_timestamp};

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// Raw lines of one VEVENT block, as read.
#[derive(Debug, Default)]
struct Block {
    text: String,
    /// Depth of nested components such as VALARM
    nested: usize,
}

impl Block {
    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push_str("\r\n");
    }
}

/// Turn one raw VEVENT block into an event, or say why it was skipped.
fn parse_block(block: &str) -> Result<Event, String> {
    let unfolded = unfold(block);
    let calendar = read_calendar(&unfolded).map_err(|_| "could not be parsed".to_string())?;
    // Either top level or inside a VCALENDAR
    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .or_else(|| {
            calendar
                .components
                .iter()
                .flat_map(|c| c.components.iter())
                .find(|c| c.name == "VEVENT")
        })
        .ok_or("has no VEVENT component")?;
    let prop = |name: &str| vevent.find_prop(name).map(|p| p.val.to_string());

    let raw_start = prop("DTSTART").ok_or("has no DTSTART")?;
    let raw_end = prop("DTEND").ok_or("has no DTEND")?;
    let start = parse_timestamp(&raw_start).ok_or_else(|| format!("has invalid DTSTART '{}'", raw_start))?;
    let end = parse_timestamp(&raw_end).ok_or_else(|| format!("has invalid DTEND '{}'", raw_end))?;

    Ok(Event {
        start,
        end,
        summary: prop("SUMMARY").unwrap_or_default(),
        location: prop("LOCATION").unwrap_or_default(),
    })
}

/// Iterator over the events of an ICS stream, in file order.
///
/// Blocks are found line by line and only one is held in memory at a time.
/// Each finished block goes through the icalendar parser, which handles
/// folded lines, property parameters and nested components.
pub struct EventScanner<R> {
    lines: Lines<R>,
    block: Option<Block>,
    line_no: usize,
    /// Line of the last END:VEVENT seen
    block_end: usize,
}

impl<R: BufRead> EventScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            block: None,
            line_no: 0,
            block_end: 0,
        }
    }
}

impl<R: BufRead> Iterator for EventScanner<R> {
    type Item = AgendaRankResult<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            let line = line.trim_end_matches('\r');

            match self.block.as_mut() {
                None => {
                    if line.starts_with(BEGIN_EVENT) {
                        let mut block = Block::default();
                        block.push(line);
                        self.block = Some(block);
                    }
                }
                Some(block) if block.nested == 0 && line.starts_with(END_EVENT) => {
                    block.push(line);
                    self.block_end = self.line_no;
                    let Some(block) = self.block.take() else {
                        continue;
                    };
                    match parse_block(&block.text) {
                        Ok(event) => {
                            debug!("Scanned event '{}' starting {}", event.summary, event.start);
                            return Some(Ok(event));
                        }
                        Err(reason) => {
                            warn!("Event ending at line {} {}, skipping", self.block_end, reason);
                        }
                    }
                }
                Some(block) => {
                    if block.nested == 0 && line.starts_with(BEGIN_EVENT) {
                        warn!("BEGIN:VEVENT at line {} inside an open event, restarting block", self.line_no);
                        *block = Block::default();
                    } else if line.starts_with("BEGIN:") {
                        block.nested += 1;
                    } else if line.starts_with("END:") {
                        block.nested = block.nested.saturating_sub(1);
                    }
                    block.push(line);
                }
            }
        }
    }
}
