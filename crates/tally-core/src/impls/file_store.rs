//! Atomic file replacement for the rendered report.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ReportError;
use crate::ports::ArtifactStore;

/// Writes the report to a fixed path.
///
/// The document goes into a temporary file in the destination directory,
/// which is flushed to disk and then renamed over the target. Readers see
/// either the previous file or the new one, never a partial write.
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    path: PathBuf,
}

impl FileArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ArtifactStore for FileArtifactStore {
    fn publish(&self, document: &str) -> Result<(), ReportError> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        // rename がアトミックになるよう、同じディレクトリに作る
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(document.as_bytes())?;
        tmp.as_file().sync_all()?;

        // NamedTempFile is created 0600; the report is meant to be shared.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        let store = FileArtifactStore::new(&path);

        store.publish("first").unwrap();
        store.publish("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn publish_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/report.html");
        let store = FileArtifactStore::new(&path);

        store.publish("<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn publish_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileArtifactStore::new(dir.path().join("report.html"));

        for i in 0..5 {
            store.publish(&format!("render {i}")).unwrap();
        }

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn publish_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let store = FileArtifactStore::new(blocker.join("report.html"));
        let err = store.publish("x").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
