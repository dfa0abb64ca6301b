use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use agendarank_core::AgendaRankError;
use agendarank_core::config::ImporterConfig;
use agendarank_core::ingest::ingest_files;
use agendarank_core::output::write_ranked_csv;
use agendarank_core::ranked_list::RankedList;
use agendarank_core::song::{SortKey, Song};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use owo_colors::OwoColorize;

use crate::cli::MusicManagerCli;

/// Header used for the rank column when no --sortBy was given
const UNNAMED_RANK_COLUMN: &str = "rank";

/// Everything one import run needs, after flags and config are merged.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub sort_by: Option<String>,
    pub display: i64,
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
    pub preview: bool,
}

impl ImportOptions {
    /// Flags win; anything not given comes from the config.
    pub fn resolve(cli: MusicManagerCli, config: &ImporterConfig) -> Self {
        if let Some(energy) = cli.energy {
            debug!("--energy={} recorded, not used for ranking", energy);
        }
        if let Some(danceability) = cli.danceability {
            debug!("--danceability={} recorded, not used for ranking", danceability);
        }

        Self {
            sort_by: cli.sort_by,
            display: cli.display.unwrap_or(config.display),
            files: cli.files,
            output: cli.output.unwrap_or_else(|| config.output.clone()),
            preview: cli.preview,
        }
    }

    fn sort_key(&self) -> Option<SortKey> {
        match self.sort_by.as_deref() {
            Some(name) => match name.parse() {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!("{}; every song will rank 0", e);
                    None
                }
            },
            None => {
                warn!("No --sortBy given; every song will rank 0");
                None
            }
        }
    }

    fn row_limit(&self) -> usize {
        usize::try_from(self.display).unwrap_or(0)
    }
}

/// What one import run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub rows_read: usize,
    pub rows_written: usize,
    pub files_skipped: usize,
}

/// Rank every row of every input file and write the first `display` songs.
///
/// Unreadable input files are reported on stderr and skipped; failing to
/// write the output file is fatal. With `preview`, the written rows are also
/// printed to `console`.
pub fn run<W: Write>(options: &ImportOptions, mut console: W) -> Result<ImportReport> {
    let key = options.sort_key();
    let column = options.sort_by.as_deref().unwrap_or(UNNAMED_RANK_COLUMN);

    let mut songs: RankedList<Song> = RankedList::new();
    let summary = ingest_files(&options.files, key, &mut songs);

    for skipped in &summary.skipped {
        eprintln!("{}", skipped.to_string().red());
    }
    info!(
        "Ranked {} songs from {} files ({} skipped)",
        summary.rows,
        summary.files_read,
        summary.skipped.len()
    );

    let limit = options.row_limit();
    let rows_written = write_output(&options.output, column, &songs, limit)?;
    info!("Wrote {} rows to {}", rows_written, options.output.display());

    if options.preview {
        write_ranked_csv(&mut console, column, songs.take(limit)).context("Failed to print preview")?;
    }

    Ok(ImportReport {
        rows_read: summary.rows,
        rows_written,
        files_skipped: summary.skipped.len(),
    })
}

fn write_output(path: &Path, column: &str, songs: &RankedList<Song>, limit: usize) -> Result<usize> {
    let file = File::create(path).map_err(|source| AgendaRankError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    write_ranked_csv(BufWriter::new(file), column, songs.take(limit))
        .with_context(|| format!("Failed to write {}", path.display()))
}
