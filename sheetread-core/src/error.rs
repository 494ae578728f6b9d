//! Error types for sheetread-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ReadError`]
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading a workbook
#[derive(Debug, Error)]
pub enum ReadError {
    /// Requested worksheet does not exist in the workbook
    #[error("No sheet found with name '{0}'")]
    SheetNotFound(String),

    /// Address is not a rectangular A1-style range
    #[error("'{0}' is not a valid range address, try a range like A1:C5")]
    InvalidRangeFormat(String),

    /// The backend could not open the file
    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The backend failed while decoding a worksheet
    #[error("Failed to read worksheet: {0}")]
    Backend(#[from] calamine::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to open zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Read options file is not valid TOML
    #[error("Invalid read options: {0}")]
    Config(#[from] toml::de::Error),
}
