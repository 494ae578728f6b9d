//! Workbook data structures

use crate::address::{format_address, split_compound};
use crate::range::{CellRange, SheetSource};
use calamine::{Data, ExcelDateTime, Range};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Cell value as stored by the backend.
///
/// Serialises untagged so a host sees plain numbers, strings, booleans and
/// `null` for empty cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Int(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Date-time resolved against the workbook's 1900 or 1904 epoch
    DateTime(NaiveDateTime),
    /// Elapsed time in days, from cells formatted as `[h]:mm` and the like
    Duration(f64),
    /// ISO 8601 date-time, as stored by ODS files
    DateTimeIso(String),
    /// ISO 8601 duration, as stored by ODS files
    DurationIso(String),
    /// Cached error such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::Empty => CellValue::Empty,
            Data::DateTime(dt) => date_time_value(dt),
            Data::DateTimeIso(s) => CellValue::DateTimeIso(s.clone()),
            Data::DurationIso(s) => CellValue::DurationIso(s.clone()),
        }
    }
}

fn date_time_value(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        return CellValue::Duration(dt.as_f64());
    }
    // Serials outside chrono's range stay numeric
    dt.as_datetime()
        .map(CellValue::DateTime)
        .unwrap_or_else(|| CellValue::Number(dt.as_f64()))
}

impl SheetSource for Range<Data> {
    fn used_range(&self) -> Option<CellRange> {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) if !self.is_empty() => Some(CellRange::from_corners(start, end)),
            _ => None,
        }
    }

    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.get_value((row, col))
            .map(CellValue::from)
            .unwrap_or_default()
    }
}

/// A decoded worksheet borrowed out of a [`super::Workbook`]
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub name: String,
    /// Position in the workbook's sheet order
    pub index: usize,
    pub range: Range<Data>,
}

impl SheetSource for Worksheet {
    fn used_range(&self) -> Option<CellRange> {
        self.range.used_range()
    }

    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.range.cell(row, col)
    }
}

/// A label bound to one or more cell addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRange {
    pub name: String,
    /// Address as stored in the workbook, e.g. `Sheet1!$A$1:$B$4`
    pub address: String,
}

impl NamedRange {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Display form of each area of the address, without sheet qualifiers
    /// or absolute markers (`Sheet1!$A$1,Sheet1!$B$2` -> `["A1", "B2"]`)
    pub fn range_addresses(&self) -> Vec<String> {
        split_compound(&self.address)
            .into_iter()
            .map(format_address)
            .collect()
    }
}

impl fmt::Display for NamedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
