use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use wk_core::source::ArticleSource;
use wk_core::types::{self, Article};
use wk_core::{Error, Result};

pub const API_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Client for the MediaWiki action API. One `action=query` call per batch,
/// requesting the intro extract and the full main-namespace link list
/// (`pllimit=max`) alongside each page.
pub struct WikipediaClient {
    http: reqwest::Client,
    api_base: String,
}

impl WikipediaClient {
    pub fn new() -> Self {
        Self::with_api_base(API_BASE_URL)
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.to_string(),
        }
    }

    async fn query(&self, extra: &[(&str, String)]) -> Result<QueryResponse> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("formatversion", "2".to_string()),
            ("action", "query".to_string()),
            ("prop", "extracts|links".to_string()),
            ("exintro", "1".to_string()),
            ("explaintext", "1".to_string()),
            ("plnamespace", "0".to_string()),
            ("pllimit", "max".to_string()),
            ("origin", "*".to_string()),
        ];
        params.extend_from_slice(extra);

        let response = self.http.get(&self.api_base).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "{} returned status {}",
                self.api_base, status
            )));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| Error::Transport(format!("unparseable API response: {}", e)))
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn fetch_random_batch(&self, count: usize) -> Result<Vec<Article>> {
        let response = self
            .query(&[
                ("generator", "random".to_string()),
                ("grnlimit", count.to_string()),
                ("grnnamespace", "0".to_string()),
            ])
            .await?;

        let articles = articles_from_response(response)?;
        debug!("fetched {} random candidates", articles.len());
        Ok(articles)
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Option<Article>> {
        let response = self.query(&[("titles", title.to_string())]).await?;
        Ok(articles_from_response(response)?.into_iter().next())
    }
}

fn articles_from_response(response: QueryResponse) -> Result<Vec<Article>> {
    let pages = response.query.map(|q| q.pages).unwrap_or_default();

    let mut articles = Vec::with_capacity(pages.len());
    for page in pages {
        if page.missing {
            continue;
        }
        let links = page
            .links
            .unwrap_or_default()
            .into_iter()
            .map(|link| types::article_url_for_title(&link.title))
            .collect();
        articles.push(Article::from_title(
            &page.title,
            page.extract.unwrap_or_default(),
            links,
        )?);
    }

    Ok(articles)
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize, Default)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<PageBody>,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    links: Option<Vec<LinkBody>>,
}

#[derive(Debug, Deserialize)]
struct LinkBody {
    title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Article> {
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        articles_from_response(response).unwrap()
    }

    #[test]
    fn parses_a_random_batch_response() {
        let articles = parse(
            r#"{
                "batchcomplete": true,
                "query": {
                    "pages": [
                        {
                            "pageid": 1,
                            "ns": 0,
                            "title": "Paper clip",
                            "extract": "A paper clip is a tool.",
                            "links": [
                                {"ns": 0, "title": "Office supply"},
                                {"ns": 0, "title": "Steel wire"}
                            ]
                        },
                        {
                            "pageid": 2,
                            "ns": 0,
                            "title": "Bare stub"
                        }
                    ]
                }
            }"#,
        );

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Paper clip");
        assert_eq!(articles[0].summary, "A paper clip is a tool.");
        assert_eq!(
            articles[0].links,
            vec![
                "https://en.wikipedia.org/wiki/Office_supply".to_string(),
                "https://en.wikipedia.org/wiki/Steel_wire".to_string(),
            ]
        );
        assert_eq!(articles[1].summary, "");
        assert!(articles[1].links.is_empty());
    }

    #[test]
    fn missing_pages_are_absent_not_errors() {
        let articles = parse(
            r#"{
                "query": {
                    "pages": [
                        {"ns": 0, "title": "No such page", "missing": true}
                    ]
                }
            }"#,
        );
        assert!(articles.is_empty());
    }

    #[test]
    fn empty_query_section_yields_no_articles() {
        let articles = parse(r#"{"batchcomplete": true}"#);
        assert!(articles.is_empty());
    }
}
