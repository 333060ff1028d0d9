use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use wk_core::documents::{DocumentHandle, DocumentIndex, DocumentOpener};
use wk_core::{Error, Result};

/// Filename-keyed in-process document index. Handles are produced by the
/// injected opener, which is the seam to the external PDF engine.
pub struct MemoryDocumentIndex {
    documents: RwLock<HashMap<String, Arc<dyn DocumentHandle>>>,
    opener: Arc<dyn DocumentOpener>,
}

impl MemoryDocumentIndex {
    pub fn new(opener: Arc<dyn DocumentOpener>) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            opener,
        }
    }
}

#[async_trait]
impl DocumentIndex for MemoryDocumentIndex {
    async fn get_document_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<Arc<dyn DocumentHandle>>> {
        Ok(self.documents.read().await.get(filename).cloned())
    }

    async fn add_document(&self, path: &Path) -> Result<()> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::MalformedInput(format!("document path has no filename: {}", path.display()))
            })?;

        let handle = self.opener.open(path).await?;
        self.documents
            .write()
            .await
            .insert(filename.to_string(), handle);
        debug!("🗂️ indexed document {}", filename);
        Ok(())
    }
}

/// Stand-in opener for running without the external document engine: its
/// handles report no hyperlink at any position.
pub struct UnlinkedDocumentOpener;

struct UnlinkedDocument;

#[async_trait]
impl DocumentHandle for UnlinkedDocument {
    async fn url_at_position(
        &self,
        _x: f64,
        _y: f64,
        _normalized_coordinates: bool,
        _page_index: usize,
    ) -> Result<Option<String>> {
        Ok(None)
    }
}

#[async_trait]
impl DocumentOpener for UnlinkedDocumentOpener {
    async fn open(&self, _path: &Path) -> Result<Arc<dyn DocumentHandle>> {
        Ok(Arc::new(UnlinkedDocument))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn documents_are_found_by_filename_after_registration() {
        let index = MemoryDocumentIndex::new(Arc::new(UnlinkedDocumentOpener));

        assert!(index
            .get_document_by_filename("Some_Page.pdf")
            .await
            .unwrap()
            .is_none());

        index
            .add_document(Path::new("pdf_storage/Some_Page.pdf"))
            .await
            .unwrap();

        let handle = index
            .get_document_by_filename("Some_Page.pdf")
            .await
            .unwrap()
            .expect("document should be indexed");
        assert!(handle
            .url_at_position(0.5, 0.5, true, 0)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn re_adding_a_document_replaces_the_handle() {
        let index = MemoryDocumentIndex::new(Arc::new(UnlinkedDocumentOpener));
        index.add_document(Path::new("a/X.pdf")).await.unwrap();
        index.add_document(Path::new("b/X.pdf")).await.unwrap();

        assert!(index
            .get_document_by_filename("X.pdf")
            .await
            .unwrap()
            .is_some());
    }
}
