use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use wk_core::documents::{DocumentIndex, PdfDownloader};
use wk_core::types::REST_BASE_URL;
use wk_core::{Error, Result};

/// Downloads article PDF renditions from the REST API, persists them under
/// `pdf_dir` and registers each with the document index.
pub struct RestPdfDownloader {
    http: reqwest::Client,
    rest_base: String,
    pdf_dir: PathBuf,
    index: Arc<dyn DocumentIndex>,
}

impl RestPdfDownloader {
    pub fn new(pdf_dir: impl Into<PathBuf>, index: Arc<dyn DocumentIndex>) -> Self {
        Self {
            http: reqwest::Client::new(),
            rest_base: REST_BASE_URL.to_string(),
            pdf_dir: pdf_dir.into(),
            index,
        }
    }

    pub fn with_rest_base(mut self, rest_base: &str) -> Self {
        self.rest_base = rest_base.to_string();
        self
    }
}

#[async_trait]
impl PdfDownloader for RestPdfDownloader {
    async fn download(&self, title_url_safe: &str) -> Result<()> {
        let url = format!("{}/pdf/{}", self.rest_base, title_url_safe);
        info!("📄 Downloading PDF for {}", title_url_safe);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "{} returned status {}",
                url, status
            )));
        }
        let body = response.bytes().await?;

        tokio::fs::create_dir_all(&self.pdf_dir).await?;
        let path = self.pdf_dir.join(format!("{}.pdf", title_url_safe));
        tokio::fs::write(&path, &body).await?;
        info!("💾 Saved {} ({} bytes)", path.display(), body.len());

        self.index.add_document(&path).await
    }
}
