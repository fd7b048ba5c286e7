use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::parser::{RawRow, lenient_float, lenient_int};

/// Tag the ratings export uses for feature films.
pub const MOVIE_TYPE: &str = "Movie";

/// Release years outside this window are treated as unparsed.
pub const PLAUSIBLE_YEARS: RangeInclusive<i32> = 1800..=2200;

fn plausible_year(year: i32) -> i32 {
    if PLAUSIBLE_YEARS.contains(&year) {
        year
    } else {
        0
    }
}

/// One watched title reconstructed from a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingItem {
    pub id: String,
    pub my_rating: i32,
    pub date_rated: String,
    pub title: String,
    pub url: String,
    pub title_type: String,
    pub imdb_rating: f64,
    pub runtime_mins: i32,
    pub year: i32,
    pub genres: Vec<String>,
    pub release_date: String,
    pub director: String,
    pub poster_url: String,
}

impl RatingItem {
    #[must_use]
    pub fn is_movie(&self) -> bool {
        self.title_type == MOVIE_TYPE
    }

    /// Release year for timeline purposes: the leading year of the release
    /// date when present, otherwise the year column. 0 when neither holds a
    /// plausible year.
    #[must_use]
    pub fn release_year(&self) -> i32 {
        crate::parser::leading_year(&self.release_date)
            .filter(|year| PLAUSIBLE_YEARS.contains(year))
            .unwrap_or_else(|| plausible_year(self.year))
    }
}

/// Column offsets of one export layout. Optional columns are absent from
/// older layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOffsets {
    pub id: usize,
    pub my_rating: usize,
    pub date_rated: usize,
    pub title: usize,
    pub url: usize,
    pub title_type: usize,
    pub imdb_rating: usize,
    pub year: usize,
    pub genres: usize,
    pub runtime_mins: Option<usize>,
    pub release_date: Option<usize>,
    pub director: Option<usize>,
    pub poster_url: Option<usize>,
}

impl ColumnOffsets {
    /// Highest column index a header must reach for this layout. Trailing
    /// director and poster columns are optional and default when absent.
    #[must_use]
    pub fn required_index(&self) -> usize {
        [
            self.id,
            self.my_rating,
            self.date_rated,
            self.title,
            self.url,
            self.title_type,
            self.imdb_rating,
            self.year,
            self.genres,
        ]
        .into_iter()
        .chain(self.runtime_mins)
        .chain(self.release_date)
        .max()
        .unwrap_or(0)
    }
}

const LEGACY_OFFSETS: ColumnOffsets = ColumnOffsets {
    id: 0,
    my_rating: 1,
    date_rated: 2,
    title: 3,
    url: 5,
    title_type: 6,
    imdb_rating: 7,
    year: 9,
    genres: 10,
    runtime_mins: Some(8),
    release_date: None,
    director: None,
    poster_url: None,
};

const EXTENDED_OFFSETS: ColumnOffsets = ColumnOffsets {
    release_date: Some(12),
    director: Some(13),
    poster_url: Some(14),
    ..LEGACY_OFFSETS
};

const RELEASE_DATE_HEADER: &str = "Release Date";

/// Versioned column contract between the export producer and this consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnLayout {
    /// Earliest export: id through genres, runtime included.
    #[default]
    Legacy,
    /// Adds release date, director and poster columns.
    Extended,
}

impl ColumnLayout {
    #[must_use]
    pub const fn offsets(self) -> ColumnOffsets {
        match self {
            Self::Legacy => LEGACY_OFFSETS,
            Self::Extended => EXTENDED_OFFSETS,
        }
    }

    /// Picks the layout from the header row. A "Release Date" header in its
    /// column selects the extended layout however many trailing columns
    /// follow it.
    #[must_use]
    pub fn detect(header: &[String]) -> Self {
        let has_release_date = EXTENDED_OFFSETS
            .release_date
            .and_then(|idx| header.get(idx))
            .is_some_and(|name| name.trim() == RELEASE_DATE_HEADER);

        if has_release_date {
            Self::Extended
        } else {
            Self::Legacy
        }
    }

    /// Checks the header width once. Narrow headers are not fatal: short
    /// rows map missing columns to defaults.
    pub fn validate(self, header: &[String]) -> bool {
        let required = self.offsets().required_index() + 1;
        if header.len() < required {
            warn!(
                layout = %self,
                header_columns = header.len(),
                required_columns = required,
                "Ratings header is narrower than the column layout"
            );
            return false;
        }
        true
    }
}

impl fmt::Display for ColumnLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for ColumnLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "extended" => Ok(Self::Extended),
            other => Err(format!("Unknown column layout: {other}")),
        }
    }
}

fn column<'a>(row: &'a RawRow, idx: usize) -> &'a str {
    row.get(idx).map_or("", String::as_str)
}

fn optional_column(row: &RawRow, idx: Option<usize>) -> &str {
    idx.map_or("", |i| column(row, i))
}

/// Splits the genre list on commas. Empty entries between commas are kept;
/// only an empty field yields no genres.
fn split_genres(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value.split(',').map(|g| g.trim().to_string()).collect()
}

/// Maps one row through the layout. Returns `None` for rows without a title.
#[must_use]
pub fn map_row(row: &RawRow, offsets: &ColumnOffsets) -> Option<RatingItem> {
    let title = column(row, offsets.title);
    if title.is_empty() {
        return None;
    }

    Some(RatingItem {
        id: column(row, offsets.id).to_string(),
        my_rating: lenient_int(column(row, offsets.my_rating)),
        date_rated: column(row, offsets.date_rated).to_string(),
        title: title.to_string(),
        url: column(row, offsets.url).to_string(),
        title_type: column(row, offsets.title_type).to_string(),
        imdb_rating: lenient_float(column(row, offsets.imdb_rating)),
        runtime_mins: lenient_int(optional_column(row, offsets.runtime_mins)),
        year: plausible_year(lenient_int(column(row, offsets.year))),
        genres: split_genres(column(row, offsets.genres)),
        release_date: optional_column(row, offsets.release_date).to_string(),
        director: optional_column(row, offsets.director).to_string(),
        poster_url: optional_column(row, offsets.poster_url).to_string(),
    })
}

/// Turns decoded rows (header first) into items.
///
/// `layout` overrides header detection when given.
#[must_use]
pub fn map_rows(rows: &[RawRow], layout: Option<ColumnLayout>) -> (ColumnLayout, Vec<RatingItem>) {
    let Some((header, body)) = rows.split_first() else {
        return (layout.unwrap_or_default(), Vec::new());
    };

    let layout = layout.unwrap_or_else(|| ColumnLayout::detect(header));
    layout.validate(header);

    let offsets = layout.offsets();
    let items: Vec<RatingItem> = body.iter().filter_map(|r| map_row(r, &offsets)).collect();

    debug!(
        layout = %layout,
        rows = body.len(),
        items = items.len(),
        "Mapped ratings rows"
    );

    (layout, items)
}
