//! ReporterBuilder - StatusReporter の構築とワイヤリング
//!
//! 既定では config のパスからファイル実装（FileArtifactStore /
//! FileHeaderSource）と SystemClock を組み立てる。テストや埋め込み用途では
//! store / header_source / clock を差し替える。

use crate::domain::ReportError;
use crate::impls::{FileArtifactStore, FileHeaderSource};
use crate::ports::{ArtifactStore, Clock, HeaderSource, SystemClock};

use super::config::ReportConfig;
use super::reporter::StatusReporter;

/// Builds a `StatusReporter`.
///
/// # 使用例
/// ```ignore
/// let reporter = ReporterBuilder::new(ReportConfig::default())
///     .clock(FixedClock::new(t0))
///     .build()?;
/// ```
///
/// `build()` validates the config before anything is written (fail-fast).
pub struct ReporterBuilder<S, H, C> {
    config: ReportConfig,
    store: S,
    header: H,
    clock: C,
}

impl ReporterBuilder<FileArtifactStore, FileHeaderSource, SystemClock> {
    /// File-backed reporter using the paths in `config`.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            store: FileArtifactStore::new(&config.output_path),
            header: FileHeaderSource::new(&config.header_path),
            clock: SystemClock,
            config,
        }
    }
}

impl Default for ReporterBuilder<FileArtifactStore, FileHeaderSource, SystemClock> {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl<S, H, C> ReporterBuilder<S, H, C> {
    /// Replace the document destination.
    pub fn store<S2: ArtifactStore>(self, store: S2) -> ReporterBuilder<S2, H, C> {
        ReporterBuilder {
            config: self.config,
            store,
            header: self.header,
            clock: self.clock,
        }
    }

    /// Replace the header template source.
    pub fn header_source<H2: HeaderSource>(self, header: H2) -> ReporterBuilder<S, H2, C> {
        ReporterBuilder {
            config: self.config,
            store: self.store,
            header,
            clock: self.clock,
        }
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> ReporterBuilder<S, H, C2> {
        ReporterBuilder {
            config: self.config,
            store: self.store,
            header: self.header,
            clock,
        }
    }
}

impl<S: ArtifactStore, H: HeaderSource, C: Clock> ReporterBuilder<S, H, C> {
    pub fn build(self) -> Result<StatusReporter<S, H, C>, ReportError> {
        self.config.validate()?;
        Ok(StatusReporter::new(
            self.store,
            self.header,
            self.clock,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::MemoryArtifactStore;
    use crate::ports::{EventSink, NoHeader};
    use crate::domain::Task;
    use std::path::PathBuf;

    #[test]
    fn default_builder_targets_configured_paths() {
        let reporter = ReporterBuilder::default().build().unwrap();
        assert_eq!(
            reporter.store().path(),
            PathBuf::from("dodo-report.html").as_path()
        );
    }

    #[test]
    fn invalid_config_fails_at_build() {
        let config = ReportConfig {
            output_path: PathBuf::new(),
            ..ReportConfig::default()
        };
        let result = ReporterBuilder::new(config).build();
        assert!(matches!(result, Err(ReportError::InvalidConfig(_))));
    }

    #[test]
    fn swapped_store_receives_renders() {
        let store = MemoryArtifactStore::new();
        let mut reporter = ReporterBuilder::default()
            .store(store.clone())
            .header_source(NoHeader)
            .build()
            .unwrap();

        reporter.initialize(&[Task::new("a")]).unwrap();
        reporter.complete_run().unwrap();
        assert_eq!(store.publish_count(), 1);
    }

    #[test]
    fn file_backed_reporter_writes_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            output_path: dir.path().join("report.html"),
            header_path: dir.path().join("header.html"),
            ..ReportConfig::default()
        };
        let mut reporter = ReporterBuilder::new(config).build().unwrap();

        reporter.initialize(&[Task::new("a")]).unwrap();
        reporter.complete_run().unwrap();

        let doc = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
        assert!(doc.contains("<title>DoIt Status Report</title>"));
    }
}
