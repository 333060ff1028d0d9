use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use wk_core::source::ArticleSource;
use wk_core::{Article, Error, Result};

pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_ROUNDS: u32 = 50;

#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Pause between fetch rounds, skipped before the first one.
    pub backoff: Duration,
    /// Fetch-round budget. `None` keeps looping until the quota is met.
    pub max_rounds: Option<u32>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            backoff: DEFAULT_BACKOFF,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl SamplerConfig {
    /// No round budget: a source that never yields enough qualifying
    /// articles keeps the loop running indefinitely.
    pub fn unlimited() -> Self {
        Self {
            max_rounds: None,
            ..Self::default()
        }
    }
}

/// Collects random articles until a quota of link-rich, title-unique ones
/// is met. Transport failures from the source propagate immediately; the
/// only retry behavior here is the fetch-again-after-backoff loop.
pub struct ArticleSampler {
    source: Arc<dyn ArticleSource>,
    config: SamplerConfig,
}

impl ArticleSampler {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self::with_config(source, SamplerConfig::default())
    }

    pub fn with_config(source: Arc<dyn ArticleSource>, config: SamplerConfig) -> Self {
        Self { source, config }
    }

    /// Returns exactly `target_count` articles, each with at least
    /// `min_links` outbound links and all titles distinct.
    pub async fn sample(
        &self,
        target_count: usize,
        min_links: usize,
        batch_size: usize,
    ) -> Result<Vec<Article>> {
        let mut accepted: Vec<Article> = Vec::with_capacity(target_count);
        let mut seen_titles: HashSet<String> = HashSet::new();
        let mut rounds: u32 = 0;

        while accepted.len() < target_count {
            if let Some(max) = self.config.max_rounds {
                if rounds >= max {
                    return Err(Error::QuotaUnreachable {
                        accepted: accepted.len(),
                        target: target_count,
                        rounds,
                    });
                }
            }
            if rounds > 0 {
                info!(
                    "⏳ {}/{} articles after round {}, backing off {:?}",
                    accepted.len(),
                    target_count,
                    rounds,
                    self.config.backoff
                );
                sleep(self.config.backoff).await;
            }

            let batch = self.source.fetch_random_batch(batch_size).await?;
            rounds += 1;
            info!("📚 round {}: {} candidates", rounds, batch.len());

            for article in batch {
                if article.links.len() < min_links {
                    continue;
                }
                if !seen_titles.insert(article.title.clone()) {
                    continue;
                }
                accepted.push(article);
                if accepted.len() == target_count {
                    break;
                }
            }
        }

        info!("✨ quota met: {} articles in {} rounds", accepted.len(), rounds);
        Ok(accepted)
    }
}
