use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// An indexed PDF document. The geometry work behind `url_at_position`
/// belongs to the external document engine; this crate only defines the
/// seam.
#[async_trait]
pub trait DocumentHandle: Send + Sync {
    /// Hyperlink target embedded at `(x, y)` on `page_index`, if any.
    /// With `normalized_coordinates` the point is expressed as fractions
    /// in [0, 1] of the page width and height.
    async fn url_at_position(
        &self,
        x: f64,
        y: f64,
        normalized_coordinates: bool,
        page_index: usize,
    ) -> Result<Option<String>>;
}

/// Filename-keyed lookup of indexed documents.
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    async fn get_document_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<Arc<dyn DocumentHandle>>>;

    /// Register a document that has been persisted at `path`.
    async fn add_document(&self, path: &Path) -> Result<()>;
}

/// Produces a `DocumentHandle` for a persisted file.
#[async_trait]
pub trait DocumentOpener: Send + Sync {
    async fn open(&self, path: &Path) -> Result<Arc<dyn DocumentHandle>>;
}

/// Fetches the PDF rendition of an article, persists it and registers it
/// with the document index.
#[async_trait]
pub trait PdfDownloader: Send + Sync {
    async fn download(&self, title_url_safe: &str) -> Result<()>;
}
