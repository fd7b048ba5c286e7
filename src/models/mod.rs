pub mod rating;

pub use rating::{
    ColumnLayout, ColumnOffsets, MOVIE_TYPE, PLAUSIBLE_YEARS, RatingItem, map_row, map_rows,
};
