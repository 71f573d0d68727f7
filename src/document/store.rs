use crate::document::Document;
use dashmap::DashMap;
use std::sync::Arc;

/// The central store for all loaded source buffers.
///
/// Documents are immutable snapshots behind `Arc`: a request clones the snapshot
/// and releases the map shard at once, so an update never disturbs a request that
/// is already running against the previous text.
pub struct DocumentStore {
    documents: DashMap<String, Arc<Document>>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the buffer for `file_name`.
    pub fn insert(&self, file_name: impl Into<String>, text: String, version: Option<i32>) {
        let file_name = file_name.into();
        let document = match version {
            Some(version) => Document::with_version(file_name.clone(), text, version),
            None => Document::new(file_name.clone(), text),
        };
        log::debug!(
            target: "semantic_highlight::documents",
            "Loaded {} ({} bytes, version {:?})",
            file_name,
            document.text().len(),
            version
        );
        self.documents.insert(file_name, Arc::new(document));
    }

    pub fn get(&self, file_name: &str) -> Option<Arc<Document>> {
        self.documents.get(file_name).map(|doc| Arc::clone(&doc))
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.documents.contains_key(file_name)
    }

    pub fn remove(&self, file_name: &str) -> Option<Arc<Document>> {
        self.documents.remove(file_name).map(|(_, doc)| doc)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
