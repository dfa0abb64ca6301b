//! Song records and the metric they are ranked by.

use std::fmt;
use std::str::FromStr;

/// Numeric column a song list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popularity,
    Danceability,
    Energy,
}

impl SortKey {
    /// Zero-based CSV field holding this metric
    pub fn column(self) -> usize {
        match self {
            SortKey::Popularity => 5,
            SortKey::Danceability => 6,
            SortKey::Energy => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Danceability => "danceability",
            SortKey::Energy => "energy",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(SortKey::Popularity),
            "danceability" => Ok(SortKey::Danceability),
            "energy" => Ok(SortKey::Energy),
            other => Err(format!(
                "Unknown sort key '{}'. Expected popularity, danceability or energy",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be kept in a `RankedList`.
pub trait Ranked {
    fn rank(&self) -> f64;
}

/// A song as imported: only the selected metric survives, as `rank`.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub artist: String,
    pub title: String,
    pub year: i32,
    pub rank: f64,
}

impl Ranked for Song {
    fn rank(&self) -> f64 {
        self.rank
    }
}
