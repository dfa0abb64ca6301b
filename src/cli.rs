use clap::Parser;
use std::path::PathBuf;

/// Print the events of a calendar file that fall inside a date range
#[derive(Debug, Parser)]
#[command(name = "event_manager")]
#[command(about = "Print the events of a calendar file that fall inside a date range", long_about = None)]
#[command(version)]
pub struct EventManagerCli {
    /// First day to include (YYYY/MM/DD); unbounded if omitted
    #[arg(long)]
    pub start: Option<String>,

    /// Last day to include (YYYY/MM/DD); unbounded if omitted
    #[arg(long)]
    pub end: Option<String>,

    /// Calendar file to read
    #[arg(long)]
    pub file: PathBuf,
}

/// Rank songs from CSV files by one metric and write the top rows to a CSV file
#[derive(Debug, Parser)]
#[command(name = "music_manager")]
#[command(about = "Rank songs from CSV files by one metric and write the top rows to a CSV file", long_about = None)]
#[command(version)]
pub struct MusicManagerCli {
    /// Metric to sort by (popularity, danceability, energy)
    #[arg(long = "sortBy")]
    pub sort_by: Option<String>,

    /// Number of rows to write
    #[arg(long, allow_hyphen_values = true)]
    pub display: Option<i64>,

    /// Input CSV files, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Energy threshold (recorded, not used for ranking)
    #[arg(long, allow_hyphen_values = true)]
    pub energy: Option<f64>,

    /// Danceability threshold (recorded, not used for ranking)
    #[arg(long, allow_hyphen_values = true)]
    pub danceability: Option<f64>,

    /// Output CSV path (defaults to the configured path, normally output.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also print the written rows to stdout
    #[arg(long)]
    pub preview: bool,
}
