use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::HeaderSource;

/// Reads a user-supplied header template from disk on every render.
///
/// A missing file is the normal case and falls back silently. Any other
/// read failure is logged and also falls back to the built-in header.
#[derive(Debug, Clone)]
pub struct FileHeaderSource {
    path: PathBuf,
}

impl FileHeaderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HeaderSource for FileHeaderSource {
    fn header(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(header) => Some(header),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "cannot read report header, using built-in header"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_template_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileHeaderSource::new(dir.path().join("header.html"));
        assert_eq!(source.header(), None);
    }

    #[test]
    fn template_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.html");
        fs::write(&path, "<html><body><h1>Mine</h1>\n").unwrap();

        let source = FileHeaderSource::new(&path);
        assert_eq!(source.header().as_deref(), Some("<html><body><h1>Mine</h1>\n"));
    }

    #[test]
    fn unreadable_template_falls_back() {
        // ディレクトリは read_to_string できない
        let dir = tempfile::tempdir().unwrap();
        let source = FileHeaderSource::new(dir.path());
        assert_eq!(source.header(), None);
    }
}
