//! XML parsing utilities for extracting metadata from XLSX files

use crate::error::Result;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufReader;
use zip::ZipArchive;

/// A `<definedName>` entry of `xl/workbook.xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedName {
    pub name: String,
    pub formula: String,
    /// Index of the owning sheet for sheet-scoped names
    pub local_sheet_id: Option<usize>,
}

impl DefinedName {
    /// Excel-internal names such as `_xlnm.Print_Area`
    pub fn is_builtin(&self) -> bool {
        self.name.starts_with("_xlnm.")
    }
}

/// Extract defined names (named ranges) from XLSX file, in document order
pub fn extract_defined_names_from_xlsx(
    archive: &mut ZipArchive<impl std::io::Read + std::io::Seek>,
) -> Result<Vec<DefinedName>> {
    let mut defined_names = Vec::new();

    let workbook_xml = match archive.by_name("xl/workbook.xml") {
        Ok(file) => file,
        Err(_) => return Ok(defined_names),
    };

    let buf_reader = BufReader::new(workbook_xml);
    let mut reader = Reader::from_reader(buf_reader);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut in_defined_names = false;
    let mut current: Option<DefinedName> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"definedNames" => in_defined_names = true,
                b"definedName" if in_defined_names => {
                    let mut entry = DefinedName {
                        name: String::new(),
                        formula: String::new(),
                        local_sheet_id: None,
                    };
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => {
                                entry.name = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"localSheetId" => {
                                entry.local_sheet_id =
                                    String::from_utf8_lossy(&attr.value).trim().parse().ok();
                            }
                            _ => {}
                        }
                    }
                    current = Some(entry);
                }
                _ => {}
            },
            Event::Text(e) => {
                if let Some(entry) = current.as_mut() {
                    entry.formula.push_str(e.unescape()?.as_ref());
                }
            }
            Event::CData(e) => {
                if let Some(entry) = current.as_mut() {
                    entry.formula.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"definedName" => {
                    if let Some(entry) = current.take() {
                        if !entry.name.is_empty() {
                            defined_names.push(entry);
                        }
                    }
                }
                b"definedNames" => in_defined_names = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(defined_names)
}
