//! Quote-aware CSV decoding.
//!
//! The decoder is lenient and never fails. Quoted fields may
//! contain commas, line breaks and doubled quotes. An unterminated quote
//! swallows the remainder of the input into the current field.

use std::iter::Peekable;
use std::str::Chars;

/// One decoded record as an ordered list of fields.
pub type RawRow = Vec<String>;

const BOM: char = '\u{feff}';

/// Decodes the whole document into rows.
#[must_use]
pub fn decode(text: &str) -> Vec<RawRow> {
    decode_records(text).collect()
}

/// Returns an iterator yielding one row at a time.
#[must_use]
pub fn decode_records(text: &str) -> Decoder<'_> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    Decoder {
        chars: text.chars().peekable(),
        finished: false,
    }
}

pub struct Decoder<'a> {
    chars: Peekable<Chars<'a>>,
    finished: bool,
}

impl Iterator for Decoder<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut row: RawRow = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        while let Some(c) = self.chars.next() {
            match c {
                '"' => {
                    if in_quotes && self.chars.peek() == Some(&'"') {
                        field.push('"');
                        self.chars.next();
                    } else {
                        in_quotes = !in_quotes;
                    }
                }
                ',' if !in_quotes => {
                    row.push(std::mem::take(&mut field));
                }
                '\n' | '\r' if !in_quotes => {
                    if c == '\r' && self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                    // Blank lines produce nothing; keep scanning.
                    if !field.is_empty() || !row.is_empty() {
                        row.push(field);
                        return Some(row);
                    }
                }
                _ => field.push(c),
            }
        }

        self.finished = true;
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            return Some(row);
        }
        None
    }
}
