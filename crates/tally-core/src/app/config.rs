//! Report configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ReportError;

/// Where the report goes and how the built-in header looks.
///
/// Every field has a default, so a config file only needs the keys it changes:
/// ```json
/// { "output_path": "build/status.html" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rendered document, rewritten on every state change.
    pub output_path: PathBuf,

    /// Optional header template, used verbatim in place of the built-in one.
    pub header_path: PathBuf,

    /// Title of the built-in header.
    pub title: String,

    /// Stylesheet linked from the built-in header.
    pub stylesheet: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("dodo-report.html"),
            header_path: PathBuf::from("dodo-report-header.html"),
            title: "DoIt Status Report".to_string(),
            stylesheet: "doit-report.css".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject configs that cannot work.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig("output_path is empty".into()));
        }
        if self.output_path == self.header_path {
            return Err(ReportError::InvalidConfig(format!(
                "output_path and header_path are the same file: {}",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}
