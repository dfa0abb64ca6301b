//! Song CSV ingestion.
//!
//! Rows are split with the `csv` crate, so quoted fields may contain commas.
//! Empty fields are then dropped before numbering, which means `a,,b` has two
//! fields. The layout after that is:
//!
//! | field | meaning      |
//! |-------|--------------|
//! | 0     | artist       |
//! | 1     | title        |
//! | 4     | year         |
//! | 5     | popularity   |
//! | 6     | danceability |
//! | 7     | energy       |
//!
//! A bad row never stops the import: missing or unparsable values fall back
//! to zero and a warning is logged.
//!
//! A `"` opening a field starts a quoted section, so `"Weird Al" Yankovic`
//! reads as `Weird Al Yankovic`. A quote later in a field is kept as written.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info, warn};

use crate::error::{AgendaRankError, AgendaRankResult};
use crate::ranked_list::RankedList;
use crate::song::{SortKey, Song};

const ARTIST: usize = 0;
const TITLE: usize = 1;
const YEAR: usize = 4;

/// Build a song from the fields of one row.
///
/// `key` picks the field that becomes `rank`; with no key every rank is 0.0.
/// `row` is used for log messages only.
pub fn parse_row<'a, I>(fields: I, key: Option<SortKey>, row: u64) -> Song
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = fields.into_iter().filter(|f| !f.is_empty()).collect();
    let field = |i: usize| fields.get(i).copied();

    let year = match field(YEAR) {
        Some(raw) => raw.trim().parse::<i32>().unwrap_or_else(|_| {
            warn!("Row {}: invalid year '{}', using 0", row, raw);
            0
        }),
        None => {
            warn!("Row {}: no year field, using 0", row);
            0
        }
    };

    let rank = match key {
        None => 0.0,
        Some(key) => match field(key.column()) {
            Some(raw) => parse_rank(raw).unwrap_or_else(|| {
                warn!("Row {}: invalid {} '{}', using 0", row, key, raw);
                0.0
            }),
            None => {
                warn!("Row {}: no {} field, using 0", row, key);
                0.0
            }
        },
    };

    Song {
        artist: field(ARTIST).unwrap_or_default().to_string(),
        title: field(TITLE).unwrap_or_default().to_string(),
        year,
        rank,
    }
}

fn parse_rank(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Reads songs from one CSV source, skipping its header row.
pub struct SongReader<R> {
    reader: csv::Reader<R>,
    key: Option<SortKey>,
    record: ByteRecord,
}

impl<R: Read> SongReader<R> {
    pub fn new(source: R, key: Option<SortKey>) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            key,
            record: ByteRecord::new(),
        }
    }
}

impl<R: Read> Iterator for SongReader<R> {
    type Item = AgendaRankResult<Song>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let row = self.record.position().map(|p| p.line()).unwrap_or_default();
                let fields: Vec<String> = self
                    .record
                    .iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect();
                Some(Ok(parse_row(fields.iter().map(String::as_str), self.key, row)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Counts from one ingestion run.
#[derive(Debug, Default)]
pub struct IngestSummary {
    pub files_read: usize,
    pub rows: usize,
    /// Files that could not be opened or were abandoned part-way
    pub skipped: Vec<AgendaRankError>,
}

/// Read every file into `list`. Unreadable files are recorded in the summary and skipped.
pub fn ingest_files<P: AsRef<Path>>(
    paths: &[P],
    key: Option<SortKey>,
    list: &mut RankedList<Song>,
) -> IngestSummary {
    let mut summary = IngestSummary::default();

    for path in paths {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => ingest_source(path, file, key, list, &mut summary),
            Err(source) => {
                debug!("Open of {} failed: {}", path.display(), source);
                summary.skipped.push(AgendaRankError::OpenInput {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    summary
}

/// Insert every row of one source. A read error abandons the rest of the
/// source; rows inserted before it stay in `list`.
fn ingest_source<R: Read>(
    path: &Path,
    source: R,
    key: Option<SortKey>,
    list: &mut RankedList<Song>,
    summary: &mut IngestSummary,
) {
    info!("Reading {}", path.display());
    let mut rows = 0;
    for song in SongReader::new(source, key) {
        match song {
            Ok(song) => {
                list.insert(song);
                rows += 1;
            }
            Err(e) => {
                debug!("Abandoning {} after {} rows: {}", path.display(), rows, e);
                summary.rows += rows;
                summary.skipped.push(abandoned(path.to_path_buf(), e));
                return;
            }
        }
    }

    debug!("{} rows from {}", rows, path.display());
    summary.rows += rows;
    summary.files_read += 1;
}

fn abandoned(path: PathBuf, e: AgendaRankError) -> AgendaRankError {
    match e {
        AgendaRankError::Csv(source) => AgendaRankError::ReadInput { path, source },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "artist,song,duration_ms,explicit,year,popularity,danceability,energy,key\n";

    fn read(csv: &str, key: Option<SortKey>) -> Vec<Song> {
        SongReader::new(Cursor::new(csv.to_string()), key)
            .collect::<AgendaRankResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn maps_fields_by_position() {
        let song = parse_row(
            "Britney Spears,Oops!...I Did It Again,211160,False,2000,77,0.751,0.834,1".split(','),
            Some(SortKey::Popularity),
            2,
        );
        assert_eq!(song.artist, "Britney Spears");
        assert_eq!(song.title, "Oops!...I Did It Again");
        assert_eq!(song.year, 2000);
        assert_eq!(song.rank, 77.0);
    }

    #[test]
    fn rank_comes_from_the_selected_field_only() {
        let row = "Adele,Hello,...,...,,2015,0.8,0.5,0.9";
        let energy = parse_row(row.split(','), Some(SortKey::Energy), 2);
        assert_eq!(energy.rank, 0.9);
        assert_eq!(energy.year, 2015);

        let popularity = parse_row(row.split(','), Some(SortKey::Popularity), 2);
        assert_eq!(popularity.rank, 0.8);
        let danceability = parse_row(row.split(','), Some(SortKey::Danceability), 2);
        assert_eq!(danceability.rank, 0.5);
    }

    #[test]
    fn no_sort_key_means_zero_rank() {
        let song = parse_row("A,B,1,False,1999,50,0.5,0.5".split(','), None, 2);
        assert_eq!(song.rank, 0.0);
        assert_eq!(song.year, 1999);
    }

    #[test]
    fn short_row_keeps_defaults() {
        let song = parse_row("Solo Artist,Only Title".split(','), Some(SortKey::Energy), 3);
        assert_eq!(song.artist, "Solo Artist");
        assert_eq!(song.title, "Only Title");
        assert_eq!(song.year, 0);
        assert_eq!(song.rank, 0.0);
    }

    #[test]
    fn unparsable_numbers_become_zero() {
        let song = parse_row(
            "A,B,1,False,nineteen,50,lots,NaN".split(','),
            Some(SortKey::Energy),
            4,
        );
        assert_eq!(song.year, 0);
        assert_eq!(song.rank, 0.0);

        let song = parse_row("A,B,1,False,1999,50,lots,0.3".split(','), Some(SortKey::Danceability), 4);
        assert_eq!(song.rank, 0.0);
    }

    #[test]
    fn reader_skips_header() {
        let csv = format!("{}A,B,1,False,2001,10,0.1,0.2,0\nC,D,1,False,2002,20,0.3,0.4,0\n", HEADER);
        let songs = read(&csv, Some(SortKey::Popularity));
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].artist, "A");
        assert_eq!(songs[1].rank, 20.0);
    }

    #[test]
    fn reader_keeps_quoted_commas_in_one_field() {
        let csv = format!("{}\"Tyler, The Creator\",EARFQUAKE,190066,True,2019,75,0.554,0.498,9\n", HEADER);
        let songs = read(&csv, Some(SortKey::Energy));
        assert_eq!(songs[0].artist, "Tyler, The Creator");
        assert_eq!(songs[0].year, 2019);
        assert_eq!(songs[0].rank, 0.498);
    }

    #[test]
    fn reader_tolerates_ragged_rows() {
        let csv = format!("{}A,B\nC,D,1,False,2002,20,0.3,0.4,0,extra,fields\n", HEADER);
        let songs = read(&csv, Some(SortKey::Energy));
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].rank, 0.0);
        assert_eq!(songs[1].rank, 0.4);
    }

    #[test]
    fn header_only_file_has_no_songs() {
        assert!(read(HEADER, Some(SortKey::Energy)).is_empty());
    }

    #[test]
    fn ingest_skips_missing_files() {
        let mut list = RankedList::new();
        let summary = ingest_files(
            &["/nonexistent/agendarank/songs.csv"],
            Some(SortKey::Energy),
            &mut list,
        );
        assert!(list.is_empty());
        assert_eq!(summary.files_read, 0);
        assert_eq!(summary.skipped.len(), 1);
        assert!(matches!(summary.skipped[0], AgendaRankError::OpenInput { .. }));
        assert_eq!(
            summary.skipped[0].to_string(),
            "Failed to open file /nonexistent/agendarank/songs.csv for reading."
        );
    }

    #[test]
    fn ingest_source_sorts_rows() {
        let csv = format!(
            "{}A,a,1,False,2000,1,0.1,0.9,0\nB,b,1,False,2000,1,0.1,0.2,0\nC,c,1,False,2000,1,0.1,0.5,0\n",
            HEADER
        );
        let mut list = RankedList::new();
        let mut summary = IngestSummary::default();
        ingest_source(Path::new("songs.csv"), Cursor::new(csv), Some(SortKey::Energy), &mut list, &mut summary);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.files_read, 1);
        let artists: Vec<_> = list.iter().map(|s| s.artist.as_str()).collect();
        assert_eq!(artists, vec!["B", "C", "A"]);
    }

    /// Serves `data`, then fails every read after it.
    struct FailsAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailsAfter {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(std::io::Error::other("device went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_error_abandons_file_but_keeps_earlier_rows() {
        let data = format!("{}A,a,1,False,2000,1,0.1,0.9,0\nB,b,1,False,2000,1,0.1,0.2,0\n", HEADER);
        let source = FailsAfter {
            data: Cursor::new(data.into_bytes()),
        };
        let mut list = RankedList::new();
        let mut summary = IngestSummary::default();
        ingest_source(Path::new("flaky.csv"), source, Some(SortKey::Energy), &mut list, &mut summary);

        assert_eq!(list.len(), 2);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.files_read, 0);
        assert_eq!(summary.skipped.len(), 1);
        match &summary.skipped[0] {
            AgendaRankError::ReadInput { path, .. } => assert_eq!(path, Path::new("flaky.csv")),
            other => panic!("expected ReadInput, got {other:?}"),
        }
    }

    #[test]
    fn leading_quote_opens_a_quoted_section() {
        let csv = format!(
            "{}\"Weird Al\" Yankovic,White & Nerdy,170000,False,2006,60,0.9,0.6,1\nGuns N' \"Roses\",Patience,356000,False,1988,70,0.5,0.3,1\n",
            HEADER
        );
        let songs = read(&csv, Some(SortKey::Energy));
        assert_eq!(songs[0].artist, "Weird Al Yankovic");
        assert_eq!(songs[0].year, 2006);
        assert_eq!(songs[1].artist, "Guns N' \"Roses\"");
    }
}
