use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

pub const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";
pub const REST_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page";

const WIKI_PATH_MARKER: &str = "/wiki/";

/// A Wikipedia article as handed between the sampler, the codec and the
/// PDF resolver. Derived fields are computed once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub canonical_url: String,
    pub title_url_safe: String,
    pub pdf_url: String,
    pub content_hash: String,
    pub summary: String,
    pub links: Vec<String>,
}

impl Article {
    /// Build an article from its page URL, deriving the URL-safe title,
    /// the PDF rendition URL and the content fingerprint.
    pub fn new(
        title: String,
        canonical_url: String,
        summary: String,
        links: Vec<String>,
    ) -> Result<Self> {
        let title_url_safe = title_url_safe_of(&canonical_url)?;
        let pdf_url = pdf_url_for(&title_url_safe);
        let content_hash = hex::encode(Sha256::digest(canonical_url.as_bytes()));

        Ok(Self {
            title,
            canonical_url,
            title_url_safe,
            pdf_url,
            content_hash,
            summary,
            links,
        })
    }

    /// Build an article from a plain title, constructing the canonical
    /// page URL first.
    pub fn from_title(title: &str, summary: String, links: Vec<String>) -> Result<Self> {
        let canonical_url = article_url_for_title(title);
        Self::new(title.to_string(), canonical_url, summary, links)
    }
}

pub fn article_url_for_title(title: &str) -> String {
    format!("{}{}", ARTICLE_BASE_URL, title.replace(' ', "_"))
}

/// The path segment after the `/wiki/` marker of a page URL.
pub fn title_url_safe_of(url: &str) -> Result<String> {
    let segment = url
        .split_once(WIKI_PATH_MARKER)
        .map(|(_, rest)| rest)
        .ok_or_else(|| Error::InvalidUrl(format!("no {} segment in {}", WIKI_PATH_MARKER, url)))?;

    if segment.is_empty() {
        return Err(Error::InvalidUrl(format!("empty article segment in {}", url)));
    }

    Ok(segment.to_string())
}

/// Plain title encoded in a page URL, with underscores mapped back to spaces.
pub fn title_from_url(url: &str) -> Result<String> {
    Ok(title_url_safe_of(url)?.replace('_', " "))
}

pub fn pdf_url_for(title_url_safe: &str) -> String {
    format!("{}/pdf/{}", REST_BASE_URL, title_url_safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_url_safe_title_and_pdf_url() {
        let article = Article::from_title(
            "Rust (programming language)",
            "A systems language.".to_string(),
            vec![],
        )
        .unwrap();

        assert_eq!(
            article.canonical_url,
            "https://en.wikipedia.org/wiki/Rust_(programming_language)"
        );
        assert_eq!(article.title_url_safe, "Rust_(programming_language)");
        assert_eq!(
            article.pdf_url,
            "https://en.wikipedia.org/api/rest_v1/page/pdf/Rust_(programming_language)"
        );
    }

    #[test]
    fn pdf_url_is_a_pure_function_of_the_url_safe_title() {
        let a = Article::from_title("Some Page", String::new(), vec![]).unwrap();
        let b = Article::new(
            "some page".to_string(),
            "https://en.wikipedia.org/wiki/Some_Page".to_string(),
            "different summary".to_string(),
            vec!["https://en.wikipedia.org/wiki/Other".to_string()],
        )
        .unwrap();

        assert_eq!(a.title_url_safe, b.title_url_safe);
        assert_eq!(a.pdf_url, b.pdf_url);
    }

    #[test]
    fn content_hash_is_stable_per_canonical_url() {
        let a = Article::from_title("Alpha", String::new(), vec![]).unwrap();
        let b = Article::from_title("Alpha", "other".to_string(), vec![]).unwrap();
        let c = Article::from_title("Beta", String::new(), vec![]).unwrap();

        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
        assert_eq!(a.content_hash.len(), 64);
    }

    #[test]
    fn rejects_urls_without_the_wiki_marker() {
        let err = Article::new(
            "Nowhere".to_string(),
            "https://example.com/page/Nowhere".to_string(),
            String::new(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = title_url_safe_of("https://en.wikipedia.org/wiki/").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn recovers_the_plain_title_from_a_url() {
        let title = title_from_url("https://en.wikipedia.org/wiki/Rust_(programming_language)").unwrap();
        assert_eq!(title, "Rust (programming language)");
    }
}
