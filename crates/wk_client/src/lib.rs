pub mod client;
pub mod sampler;

pub use client::WikipediaClient;
pub use sampler::{ArticleSampler, SamplerConfig};

pub mod prelude {
    pub use crate::{ArticleSampler, SamplerConfig, WikipediaClient};
    pub use wk_core::source::ArticleSource;
    pub use wk_core::{Article, Error, Result};
}
