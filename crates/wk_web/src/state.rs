use wk_client::ArticleSampler;
use wk_docs::LinkResolver;

pub struct AppState {
    pub sampler: ArticleSampler,
    pub resolver: LinkResolver,
}
