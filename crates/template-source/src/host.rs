use crate::SourceFile;
use dashmap::DashMap;
use std::sync::Arc;

/// Access to the host's current syntax snapshots.
///
/// The host owns parsing and invalidation. Callers take a snapshot per
/// request and never hold on to it across requests.
pub trait ScriptSourceHelper {
    /// Current snapshot of `file_name`, if the host knows the file
    fn source_file(&self, file_name: &str) -> Option<Arc<SourceFile>>;
}

impl<T: ScriptSourceHelper + ?Sized> ScriptSourceHelper for Arc<T> {
    fn source_file(&self, file_name: &str) -> Option<Arc<SourceFile>> {
        (**self).source_file(file_name)
    }
}

/// In-memory snapshot store keyed by file name.
///
/// Every update replaces the file's snapshot wholesale, so contexts built
/// from an older snapshot keep seeing the text they were created from.
#[derive(Debug, Default)]
pub struct MemorySourceHost {
    files: DashMap<String, Arc<SourceFile>>,
}

impl MemorySourceHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and store `text` as the current content of `file_name`
    pub fn open(&self, file_name: impl Into<String>, text: impl Into<String>) -> Arc<SourceFile> {
        let file_name = file_name.into();
        let file = Arc::new(SourceFile::parse(file_name.clone(), text));
        self.files.insert(file_name, Arc::clone(&file));
        file
    }

    /// Replace the content of an open file; opens it if unknown
    pub fn update(&self, file_name: impl Into<String>, text: impl Into<String>) -> Arc<SourceFile> {
        let file_name = file_name.into();
        tracing::debug!("Replacing snapshot for {}", file_name);
        self.open(file_name, text)
    }

    pub fn close(&self, file_name: &str) -> bool {
        self.files.remove(file_name).is_some()
    }
}

impl ScriptSourceHelper for MemorySourceHost {
    fn source_file(&self, file_name: &str) -> Option<Arc<SourceFile>> {
        self.files.get(file_name).map(|entry| Arc::clone(entry.value()))
    }
}
