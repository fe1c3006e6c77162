use std::sync::{Arc, Mutex};

use crate::domain::ReportError;
use crate::ports::ArtifactStore;

/// Keeps every published document in memory.
///
/// Clones share the same history, so a test can hand one clone to the
/// reporter and inspect the renders through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    documents: Arc<Mutex<Vec<String>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published document.
    pub fn latest(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Number of documents published so far.
    pub fn publish_count(&self) -> usize {
        self.lock().len()
    }

    pub fn documents(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.documents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn publish(&self, document: &str) -> Result<(), ReportError> {
        self.lock().push(document.to_owned());
        Ok(())
    }
}
