//! Read options loaded from TOML

use crate::error::Result;
use crate::range::Orientation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults applied by [`crate::read_with_options`]
///
/// ```toml
/// orientation = "by_row"
/// address = "A1:C5"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadOptions {
    #[serde(default)]
    pub orientation: Orientation,
    /// Restrict reads to this address; the whole used range when unset
    #[serde(default)]
    pub address: Option<String>,
}

impl ReadOptions {
    /// Load options from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Address to read, treating an empty string as unset
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadError;

    #[test]
    fn test_defaults() {
        let options = ReadOptions::from_toml("").unwrap();
        assert_eq!(options.orientation, Orientation::ByColumn);
        assert_eq!(options.address(), None);
    }

    #[test]
    fn test_parse_options() {
        let options = ReadOptions::from_toml(
            r#"
orientation = "by_row"
address = "B2:D4"
"#,
        )
        .unwrap();
        assert_eq!(options.orientation, Orientation::ByRow);
        assert_eq!(options.address(), Some("B2:D4"));

        let blank = ReadOptions::from_toml(r#"address = "  ""#).unwrap();
        assert_eq!(blank.address(), None);
    }

    #[test]
    fn test_invalid_options() {
        let err = ReadOptions::from_toml(r#"orientation = "diagonal""#).unwrap_err();
        assert!(matches!(err, ReadError::Config(_)));

        let err = ReadOptions::from_toml(r#"sheet = "Data""#).unwrap_err();
        assert!(matches!(err, ReadError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheetread.toml");
        fs::write(&path, "orientation = \"by_row\"\n").unwrap();
        assert_eq!(
            ReadOptions::from_file(&path).unwrap().orientation,
            Orientation::ByRow
        );

        let err = ReadOptions::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }
}
