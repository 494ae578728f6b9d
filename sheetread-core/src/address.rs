//! A1-style address parsing and formatting

use crate::error::{ReadError, Result};
use crate::range::CellRange;
use regex::Regex;
use std::sync::OnceLock;

/// Last column in a worksheet (`XFD`), 0-based
pub const MAX_COL: u32 = 16_383;
/// Last row in a worksheet, 0-based
pub const MAX_ROW: u32 = 1_048_575;

/// Matches `A1`, `$A$1:$C$5` and `Sheet1!A1:C5` / `'My Sheet'!A1:C5`
fn range_pattern() -> &'static Regex {
    static RANGE_RE: OnceLock<Regex> = OnceLock::new();
    RANGE_RE.get_or_init(|| {
        Regex::new(
            r"^(?:(?:'(?:[^']|'')+'|[^'!:,]+)!)?\$?(?P<c1>[A-Za-z]{1,3})\$?(?P<r1>[0-9]+)(?::\$?(?P<c2>[A-Za-z]{1,3})\$?(?P<r2>[0-9]+))?$",
        )
        .unwrap()
    })
}

/// Convert column letters to a 0-based index (A -> 0, AA -> 26)
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut col = 0u32;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        col = col
            .checked_mul(26)?
            .checked_add(ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1)?;
    }
    Some(col - 1)
}

/// Convert a 0-based column index to letters (0 -> A, 26 -> AA)
pub fn column_letters(mut col: u32) -> String {
    let mut result = String::new();
    loop {
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result
}

/// Render a 0-based (row, col) position as `A1`
pub fn cell_name(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), u64::from(row) + 1)
}

fn cell_position(col: &str, row: &str) -> Option<(u32, u32)> {
    let col = column_index(col)?;
    let row = row.parse::<u32>().ok()?.checked_sub(1)?;
    (row <= MAX_ROW && col <= MAX_COL).then_some((row, col))
}

/// Whether `address` is a single rectangular A1-style range
pub fn is_valid_address(address: &str) -> bool {
    parse_range(address).is_ok()
}

/// Parse a rectangular address such as `A1:C5` into a [`CellRange`].
///
/// Absolute markers and a leading sheet qualifier are accepted and ignored.
/// Corners may be given in any order; the range is normalised to start at
/// the top-left cell.
pub fn parse_range(address: &str) -> Result<CellRange> {
    let invalid = || ReadError::InvalidRangeFormat(address.to_string());
    let caps = range_pattern()
        .captures(address.trim())
        .ok_or_else(invalid)?;

    let (r1, c1) = cell_position(&caps["c1"], &caps["r1"]).ok_or_else(invalid)?;
    let (r2, c2) = match (caps.name("c2"), caps.name("r2")) {
        (Some(c), Some(r)) => cell_position(c.as_str(), r.as_str()).ok_or_else(invalid)?,
        _ => (r1, c1),
    };

    Ok(CellRange::from_corners((r1, c1), (r2, c2)))
}

/// Split a compound address on top-level commas, ignoring commas inside
/// quoted sheet names.
pub fn split_compound(address: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, ch) in address.char_indices() {
        match ch {
            '\'' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(address[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(address[start..].trim());
    parts
}

/// Strip the sheet qualifier and absolute markers from a single address
/// (`Sheet1!$A$1:$B$2` -> `A1:B2`).
pub fn format_address(address: &str) -> String {
    let local = match address.rfind('!') {
        Some(pos) => &address[pos + 1..],
        None => address,
    };
    local.replace('$', "")
}
