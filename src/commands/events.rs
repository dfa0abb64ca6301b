use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use agendarank_core::AgendaRankError;
use agendarank_core::agenda::AgendaWriter;
use agendarank_core::date_range::DateRange;
use agendarank_core::ics::EventScanner;
use anyhow::{Context, Result};
use log::{debug, info};

/// Print every event of `path` inside `range` as a day-grouped agenda. Returns the number printed.
pub fn run<W: Write>(path: &Path, range: DateRange, out: W) -> Result<usize> {
    let file = File::open(path).map_err(|source| AgendaRankError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut agenda = AgendaWriter::new(out);
    let mut scanned = 0;

    for event in EventScanner::new(BufReader::new(file)) {
        let event = event.with_context(|| format!("Failed while reading {}", path.display()))?;
        scanned += 1;

        if range.contains_event(event.start, event.end) {
            agenda.write_event(&event).context("Failed to write agenda")?;
        } else {
            debug!("Skipping '{}' ({} to {}): outside range", event.summary, event.start, event.end);
        }
    }

    let written = agenda.written();
    info!("{} of {} events in range", written, scanned);
    agenda.into_inner().flush()?;
    Ok(written)
}
