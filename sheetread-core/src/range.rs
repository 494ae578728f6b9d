//! Cell range extraction

use crate::address::{self, parse_range};
use crate::error::Result;
use crate::reader::CellValue;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangle of cells anchored at a 0-based (row, col) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRange {
    pub row_start: u32,
    pub col_start: u32,
    pub row_count: u32,
    pub col_count: u32,
}

impl CellRange {
    pub fn new(row_start: u32, col_start: u32, row_count: u32, col_count: u32) -> Self {
        Self {
            row_start,
            col_start,
            row_count,
            col_count,
        }
    }

    /// Build the rectangle spanned by two inclusive corners, in any order
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        let (top, bottom) = (a.0.min(b.0), a.0.max(b.0));
        let (left, right) = (a.1.min(b.1), a.1.max(b.1));
        Self::new(top, left, bottom - top + 1, right - left + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.col_count == 0
    }

    /// Inclusive bottom-right corner, `None` for an empty range or one
    /// running past `u32::MAX`
    pub fn end(&self) -> Option<(u32, u32)> {
        if self.is_empty() {
            return None;
        }
        Some((
            self.row_start.checked_add(self.row_count - 1)?,
            self.col_start.checked_add(self.col_count - 1)?,
        ))
    }
}

/// `A1:C5`, `B2` for a single cell, and `B2[0x3]` (rows x columns) when
/// the range has no cells
impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = address::cell_name(self.row_start, self.col_start);
        if self.is_empty() {
            return write!(f, "{}[{}x{}]", start, self.row_count, self.col_count);
        }
        match self.end() {
            Some(end) if end == (self.row_start, self.col_start) => write!(f, "{}", start),
            Some((row, col)) => write!(f, "{}:{}", start, address::cell_name(row, col)),
            None => write!(f, "{}[{}x{}]", start, self.row_count, self.col_count),
        }
    }
}

/// Traversal order of the extracted data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// One inner sequence per column
    #[default]
    ByColumn,
    /// One inner sequence per row
    ByRow,
}

/// Read access to a worksheet held by a spreadsheet backend
pub trait SheetSource {
    /// Minimal rectangle bounding the sheet's cells, `None` if the sheet is empty
    fn used_range(&self) -> Option<CellRange>;

    /// Value at an absolute 0-based position; `Empty` outside the stored data
    fn cell(&self, row: u32, col: u32) -> CellValue;
}

/// Extract the cells of `sheet` as a two-dimensional array.
///
/// Without an address the sheet's used range is read. An address must be a
/// rectangular A1-style range and fails with `InvalidRangeFormat` otherwise.
/// A sheet with no used range yields a single empty sequence.
pub fn extract<S: SheetSource + ?Sized>(
    sheet: &S,
    orientation: Orientation,
    address: Option<&str>,
) -> Result<Vec<Vec<CellValue>>> {
    let requested = match address.map(str::trim).filter(|a| !a.is_empty()) {
        Some(a) => Some(parse_range(a)?),
        None => None,
    };

    let Some(used) = sheet.used_range() else {
        debug!("Sheet has no used range, returning a single empty sequence");
        return Ok(vec![Vec::new()]);
    };

    let bounds = requested.unwrap_or(used);
    trace!("Extracting {} {:?}", bounds, orientation);
    Ok(collect(sheet, bounds, orientation))
}

/// Walk `bounds` in the requested order. Positions past `u32::MAX` read
/// as `Empty` so the output keeps the shape of `bounds`.
fn collect<S: SheetSource + ?Sized>(
    sheet: &S,
    bounds: CellRange,
    orientation: Orientation,
) -> Vec<Vec<CellValue>> {
    let CellRange {
        row_start,
        col_start,
        row_count,
        col_count,
    } = bounds;

    let at = |row_offset: u32, col_offset: u32| {
        match (
            row_start.checked_add(row_offset),
            col_start.checked_add(col_offset),
        ) {
            (Some(row), Some(col)) => sheet.cell(row, col),
            _ => CellValue::Empty,
        }
    };

    match orientation {
        Orientation::ByColumn => (0..col_count)
            .map(|i| (0..row_count).map(|j| at(j, i)).collect())
            .collect(),
        Orientation::ByRow => (0..row_count)
            .map(|i| (0..col_count).map(|j| at(i, j)).collect())
            .collect(),
    }
}
