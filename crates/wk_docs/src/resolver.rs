use std::sync::Arc;

use tracing::{debug, info};

use wk_core::documents::{DocumentIndex, PdfDownloader};
use wk_core::types::pdf_url_for;
use wk_core::{Error, Result};

/// Maps a click on a rendered PDF page back to a followable URL: look the
/// document up, download it once if absent, then ask the document engine
/// what sits under the point.
pub struct LinkResolver {
    index: Arc<dyn DocumentIndex>,
    downloader: Arc<dyn PdfDownloader>,
}

impl LinkResolver {
    pub fn new(index: Arc<dyn DocumentIndex>, downloader: Arc<dyn PdfDownloader>) -> Self {
        Self { index, downloader }
    }

    /// The PDF rendition URL for the article linked at normalized
    /// `(x, y)` on `page_index`, or an empty string when nothing is
    /// embedded there. A click resolves to this system's own rendition
    /// URL, never to the raw URL inside the PDF annotation.
    pub async fn resolve_link_at_point(
        &self,
        title_url_safe: &str,
        page_index: usize,
        x: f64,
        y: f64,
    ) -> Result<String> {
        let filename = format!("{}.pdf", title_url_safe);

        let document = match self.index.get_document_by_filename(&filename).await? {
            Some(document) => document,
            None => {
                info!("📥 {} not indexed yet, downloading", filename);
                self.downloader.download(title_url_safe).await?;
                self.index
                    .get_document_by_filename(&filename)
                    .await?
                    .ok_or_else(|| {
                        Error::Resolution(format!("{} still missing after download", filename))
                    })?
            }
        };

        match document.url_at_position(x, y, true, page_index).await? {
            Some(target) => {
                debug!(
                    "🔗 click on {} page {} resolved to {}",
                    filename, page_index, target
                );
                Ok(pdf_url_for(title_url_safe))
            }
            None => Ok(String::new()),
        }
    }
}
