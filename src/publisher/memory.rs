use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::Publisher;
use crate::marsclock_errors::MarsClockError;
use crate::patch::{replace_between_markers, Markers};

/// Publisher keeping its documents in memory.
///
/// It can be switched into a failing mode to exercise the error path of the
/// updater.
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    documents: Mutex<HashMap<String, String>>,
    published: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under `destination`
    pub fn with_document(self, destination: &str, document: &str) -> Self {
        self.lock_documents()
            .insert(destination.to_string(), document.to_string());
        self
    }

    /// Current content of a document
    pub fn document(&self, destination: &str) -> Option<String> {
        self.lock_documents().get(destination).cloned()
    }

    /// Number of successful publications
    pub fn publish_count(&self) -> usize {
        self.published.load(Ordering::SeqCst)
    }

    /// Make every following publication fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn lock_documents(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds complete documents: every write is a single insert
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn publish(
        &self,
        destination: &str,
        text: &str,
        markers: &Markers,
    ) -> Result<(), MarsClockError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MarsClockError::UnexpectedResponse(format!(
                "publication to {destination} rejected"
            )));
        }

        let mut documents = self.lock_documents();
        let current = documents.get(destination).ok_or_else(|| {
            MarsClockError::UnexpectedResponse(format!("no document named {destination}"))
        })?;
        let updated = replace_between_markers(current, markers, text)?;
        documents.insert(destination.to_string(), updated);
        self.published.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod memory_test {
    use super::*;

    #[tokio::test]
    async fn test_publish_patches_document() {
        let publisher =
            InMemoryPublisher::new().with_document("mars", "intro [](#edit_start)[](#edit_stop)");
        publisher
            .publish("mars", "sol 1", &Markers::default())
            .await
            .unwrap();
        assert_eq!(
            publisher.document("mars").unwrap(),
            "intro [](#edit_start)sol 1[](#edit_stop)"
        );
        assert_eq!(publisher.publish_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_destination() {
        let publisher = InMemoryPublisher::new();
        let res = publisher.publish("nowhere", "x", &Markers::default()).await;
        assert!(matches!(res, Err(MarsClockError::UnexpectedResponse(_))));
        assert_eq!(publisher.publish_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_leaves_document() {
        let doc = "[](#edit_start)old[](#edit_stop)";
        let publisher = InMemoryPublisher::new().with_document("mars", doc);
        publisher.set_failing(true);
        assert!(publisher
            .publish("mars", "new", &Markers::default())
            .await
            .is_err());
        assert_eq!(publisher.document("mars").unwrap(), doc);
    }

    #[tokio::test]
    async fn test_missing_markers_leaves_document() {
        let publisher = InMemoryPublisher::new().with_document("mars", "no markers here");
        let res = publisher.publish("mars", "new", &Markers::default()).await;
        assert!(matches!(res, Err(MarsClockError::MarkersNotFound { .. })));
        assert_eq!(publisher.document("mars").unwrap(), "no markers here");
    }
}
