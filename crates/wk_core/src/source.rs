use async_trait::async_trait;

use crate::types::{self, Article};
use crate::Result;

/// A remote source of encyclopedia articles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch `count` random main-namespace articles, each carrying its
    /// intro extract and full outbound-link list.
    async fn fetch_random_batch(&self, count: usize) -> Result<Vec<Article>>;

    /// Exact-title lookup. `None` when the remote reports no such page.
    async fn fetch_by_title(&self, title: &str) -> Result<Option<Article>>;

    /// Resolve a page URL back into an article by deriving its title.
    async fn fetch_by_url(&self, url: &str) -> Result<Option<Article>> {
        let title = types::title_from_url(url)?;
        self.fetch_by_title(&title).await
    }
}
