//! In-memory store for uploaded documents and the current-document reference.
//!
//! Every uploaded document (filename → full text) is kept for the process
//! lifetime; nothing is persisted. Only one document at a time is "current":
//! the one whose content is injected into the next chat prompt.

use std::collections::HashMap;
use std::sync::RwLock;

struct Inner {
    documents: HashMap<String, String>,
    current: Option<String>,
}

/// Shared document context for a server instance.
///
/// Both the mapping and the current-document reference live behind a single
/// `RwLock`, so a set reference always names a key present in the mapping:
/// uploads mutate both under one write lock, and reset clears the reference
/// without touching the mapping.
pub struct ContextStore {
    inner: RwLock<Inner>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                documents: HashMap::new(),
                current: None,
            }),
        }
    }

    /// Insert or overwrite a document and make it the current one.
    ///
    /// Empty names and contents are accepted. Content previously stored under
    /// the same name is silently replaced; other documents are retained, so
    /// uploads accumulate across calls.
    pub fn set_current_doc(&self, name: &str, content: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.documents.insert(name.to_string(), content.to_string());
        inner.current = Some(name.to_string());
    }

    /// Clear the current-document reference. The mapping is untouched.
    pub fn reset(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.current = None;
    }

    /// The current document's name and content, if one is set.
    pub fn current_document(&self) -> Option<(String, String)> {
        let inner = self.inner.read().unwrap();
        let name = inner.current.as_ref()?;
        let content = inner.documents.get(name)?;
        Some((name.clone(), content.clone()))
    }

    /// Name of the current document, if any.
    pub fn current_name(&self) -> Option<String> {
        self.inner.read().unwrap().current.clone()
    }

    /// Look up a stored document's content by name.
    pub fn document(&self, name: &str) -> Option<String> {
        self.inner.read().unwrap().documents.get(name).cloned()
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_current_doc_stores_and_points() {
        let store = ContextStore::new();
        store.set_current_doc("notes.txt", "some notes");

        assert_eq!(store.current_name().as_deref(), Some("notes.txt"));
        assert_eq!(
            store.current_document(),
            Some(("notes.txt".to_string(), "some notes".to_string()))
        );
        assert_eq!(store.document("notes.txt").as_deref(), Some("some notes"));
    }

    #[test]
    fn test_upload_overwrites_same_name() {
        let store = ContextStore::new();
        store.set_current_doc("a.txt", "old");
        store.set_current_doc("a.txt", "new");

        assert_eq!(store.document("a.txt").as_deref(), Some("new"));
        assert_eq!(
            store.current_document(),
            Some(("a.txt".to_string(), "new".to_string()))
        );
    }

    #[test]
    fn test_uploads_accumulate_but_one_is_current() {
        let store = ContextStore::new();
        store.set_current_doc("a.txt", "alpha");
        store.set_current_doc("b.txt", "beta");

        assert_eq!(store.current_name().as_deref(), Some("b.txt"));
        assert_eq!(store.document("a.txt").as_deref(), Some("alpha"));
        assert_eq!(store.document("b.txt").as_deref(), Some("beta"));
    }

    #[test]
    fn test_reset_clears_reference_only() {
        let store = ContextStore::new();
        store.set_current_doc("a.txt", "alpha");
        store.reset();

        assert_eq!(store.current_name(), None);
        assert_eq!(store.current_document(), None);
        // reset never removes mapping entries
        assert_eq!(store.document("a.txt").as_deref(), Some("alpha"));
    }

    #[test]
    fn test_reset_on_empty_store() {
        let store = ContextStore::new();
        store.reset();
        assert_eq!(store.current_document(), None);
    }

    #[test]
    fn test_empty_name_and_content_accepted() {
        let store = ContextStore::new();
        store.set_current_doc("", "");
        assert_eq!(
            store.current_document(),
            Some((String::new(), String::new()))
        );
    }
}
