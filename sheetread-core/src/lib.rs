//! sheetread-core: read cell ranges, sheet names and named ranges from
//! Excel/ODS workbooks.
//!
//! Decoding is delegated to calamine. Each entry point opens its own
//! workbook handle and releases it before returning.

pub mod address;
pub mod config;
pub mod error;
pub mod range;
pub mod reader;

use log::debug;
use std::path::Path;

pub use config::ReadOptions;
pub use error::{ReadError, Result};
pub use range::{CellRange, Orientation, SheetSource, extract};
pub use reader::{CellValue, NamedRange, Workbook, Worksheet};

/// Read the content of a worksheet.
///
/// `address` limits the read to a rectangular range such as `A1:C5`; with
/// `None` or an empty string the sheet's used range is read. A sheet with
/// no data yields a single empty sequence.
pub fn read<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    orientation: Orientation,
    address: Option<&str>,
) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook = Workbook::open(path)?;
    let sheet = workbook.worksheet(sheet_name)?;
    debug!("Reading '{}' {:?}, address {:?}", sheet.name, orientation, address);
    extract(&sheet, orientation, address)
}

/// [`read`] with orientation and address taken from `options`
pub fn read_with_options<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    options: &ReadOptions,
) -> Result<Vec<Vec<CellValue>>> {
    read(path, sheet_name, options.orientation, options.address())
}

/// Sheet names in workbook order
pub fn sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(Workbook::open(path)?.sheet_names())
}

/// Named ranges of a workbook.
///
/// With no sheet name only workbook-scoped names are returned; otherwise
/// only the names scoped to that worksheet.
pub fn named_ranges<P: AsRef<Path>>(path: P, sheet_name: Option<&str>) -> Result<Vec<NamedRange>> {
    Workbook::open(path)?.named_ranges(sheet_name)
}
