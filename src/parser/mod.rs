pub mod csv;
pub mod numeric;

pub use csv::{RawRow, decode, decode_records};
pub use numeric::{leading_year, lenient_float, lenient_int};
