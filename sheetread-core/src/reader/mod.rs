//! Excel/ODS workbook access using calamine

use crate::error::{ReadError, Result};
use calamine::{Reader, Sheets, open_workbook_auto};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

pub mod workbook;
pub mod xml_parser;

pub use workbook::{CellValue, NamedRange, Worksheet};
use xml_parser::DefinedName;

/// Open handle on a workbook file.
///
/// The file is decoded by the backend on open and released when the handle
/// is dropped.
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook, detecting the format from the file extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened workbook {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Position of `name` in the sheet order
    pub fn sheet_index(&self, name: &str) -> Result<usize> {
        self.sheets
            .sheet_names()
            .iter()
            .position(|s| s == name)
            .ok_or_else(|| ReadError::SheetNotFound(name.to_string()))
    }

    /// Decode the worksheet called `name`
    pub fn worksheet(&mut self, name: &str) -> Result<Worksheet> {
        let index = self.sheet_index(name)?;
        let range = self.sheets.worksheet_range(name)?;
        debug!(
            "Read sheet '{}' (index {}), size {:?}",
            name,
            index,
            range.get_size()
        );

        Ok(Worksheet {
            name: name.to_string(),
            index,
            range,
        })
    }

    /// Named ranges scoped to the workbook (`None`) or to one worksheet
    pub fn named_ranges(&mut self, sheet_name: Option<&str>) -> Result<Vec<NamedRange>> {
        let scope = match sheet_name.filter(|s| !s.is_empty()) {
            Some(name) => Some(self.sheet_index(name)?),
            None => None,
        };

        let names = self.defined_names()?;
        debug!(
            "Found {} defined names, filtering for scope {:?}",
            names.len(),
            scope
        );

        Ok(names
            .into_iter()
            .filter(|d| !d.is_builtin() && d.local_sheet_id == scope)
            .map(|d| NamedRange::new(d.name, d.formula))
            .collect())
    }

    /// All defined names with their scope.
    ///
    /// Only the XLSX family records scope in a form we can read; names from
    /// other formats are reported as workbook-scoped.
    fn defined_names(&self) -> Result<Vec<DefinedName>> {
        if is_xlsx(&self.path) {
            let file = File::open(&self.path)?;
            let mut archive = ZipArchive::new(BufReader::new(file))?;
            return xml_parser::extract_defined_names_from_xlsx(&mut archive);
        }

        Ok(self
            .sheets
            .defined_names()
            .iter()
            .map(|(name, formula)| DefinedName {
                name: name.clone(),
                formula: formula.clone(),
                local_sheet_id: None,
            })
            .collect())
    }
}

fn is_xlsx(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| {
            s.eq_ignore_ascii_case("xlsx")
                || s.eq_ignore_ascii_case("xlsm")
                || s.eq_ignore_ascii_case("xlam")
        })
        .unwrap_or(false)
}
