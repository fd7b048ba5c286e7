//! Pure derivation of the ratings view from the base collection.
//!
//! The view is a function of `(items, ViewState)`: text filter, then type
//! filter, then sort. Nothing here mutates the base collection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::RatingItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFilter {
    #[default]
    All,
    Movie,
    /// Everything that is not tagged as a movie.
    Series,
}

impl MediaFilter {
    #[must_use]
    pub fn matches(self, item: &RatingItem) -> bool {
        match self {
            Self::All => true,
            Self::Movie => item.is_movie(),
            Self::Series => !item.is_movie(),
        }
    }
}

impl FromStr for MediaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "movie" | "movies" => Ok(Self::Movie),
            "series" | "tv" | "show" | "shows" => Ok(Self::Series),
            other => Err(format!("Unknown type filter: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateRated,
    MyRating,
    ImdbRating,
    Year,
    Title,
    Runtime,
}

impl SortKey {
    /// Natural order of the key's field: lexicographic for strings, numeric
    /// for numbers. Incomparable floats compare equal.
    #[must_use]
    pub fn compare(self, a: &RatingItem, b: &RatingItem) -> Ordering {
        match self {
            Self::DateRated => a.date_rated.cmp(&b.date_rated),
            Self::MyRating => a.my_rating.cmp(&b.my_rating),
            Self::ImdbRating => a
                .imdb_rating
                .partial_cmp(&b.imdb_rating)
                .unwrap_or(Ordering::Equal),
            Self::Year => a.year.cmp(&b.year),
            Self::Title => a.title.cmp(&b.title),
            Self::Runtime => a.runtime_mins.cmp(&b.runtime_mins),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateRated => "date_rated",
            Self::MyRating => "my_rating",
            Self::ImdbRating => "imdb_rating",
            Self::Year => "year",
            Self::Title => "title",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date_rated" | "date" => Ok(Self::DateRated),
            "my_rating" | "rating" => Ok(Self::MyRating),
            "imdb_rating" | "imdb" => Ok(Self::ImdbRating),
            "year" => Ok(Self::Year),
            "title" => Ok(Self::Title),
            "runtime" => Ok(Self::Runtime),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("Unknown sort direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click behaviour: the active key flips from descending to
    /// ascending, any other click selects that key descending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }

    #[must_use]
    pub fn compare(self, a: &RatingItem, b: &RatingItem) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// User-controlled inputs of the ratings view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub media: MediaFilter,
    pub sort: SortSpec,
}

impl ViewState {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub const fn with_media(mut self, media: MediaFilter) -> Self {
        self.media = media;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }
}

/// Case-insensitive substring match on the title or any genre.
/// `needle` must already be lowercase.
fn matches_search(item: &RatingItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.genres.iter().any(|g| g.to_lowercase().contains(needle))
}

/// Filters and sorts `items` according to `state`.
#[must_use]
pub fn derive_view(items: &[RatingItem], state: &ViewState) -> Vec<RatingItem> {
    let needle = state.search.to_lowercase();

    let mut view: Vec<RatingItem> = items
        .iter()
        .filter(|item| needle.is_empty() || matches_search(item, &needle))
        .filter(|item| state.media.matches(item))
        .cloned()
        .collect();

    view.sort_by(|a, b| state.sort.compare(a, b));
    view
}
