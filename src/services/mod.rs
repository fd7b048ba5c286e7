pub mod catalog;
pub use catalog::{CatalogError, CatalogStatus, LoadReport, LoadState, RatingsCatalog};

pub mod source;
pub use source::{FileSource, HttpSource, RatingsSource, SourceError, source_from_config};

pub mod spotlight;
pub use spotlight::select_spotlight;

pub mod stats;
pub use stats::{RatingsSummary, ScoreHistogram, YearTimeline, average_score};

pub mod view;
pub use view::{MediaFilter, SortDirection, SortKey, SortSpec, ViewState, derive_view};
