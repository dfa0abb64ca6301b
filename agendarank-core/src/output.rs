//! Ranked CSV output.

use std::io::Write;

use crate::error::AgendaRankResult;
use crate::song::Song;

/// Significant digits used for the rank column
const RANK_PRECISION: i32 = 6;

/// Write `artist,song,year,<column>` followed by one row per song. Returns the row count.
pub fn write_ranked_csv<'a, W, I>(out: W, column: &str, songs: I) -> AgendaRankResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Song>,
{
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["artist", "song", "year", column])?;

    let mut rows = 0;
    for song in songs {
        let year = song.year.to_string();
        let rank = format_rank(song.rank);
        writer.write_record([
            song.artist.as_str(),
            song.title.as_str(),
            year.as_str(),
            rank.as_str(),
        ])?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Shortest form of a rank with six significant digits (`77`, `0.834`, `1.5e+07`).
pub fn format_rank(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Exponent after rounding to the target precision
    let sci = format!("{:.*e}", (RANK_PRECISION - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..RANK_PRECISION).contains(&exp) {
        let decimals = (RANK_PRECISION - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
