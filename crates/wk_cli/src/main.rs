use std::sync::Arc;

use clap::Parser;
use tracing::info;

use wk_client::{ArticleSampler, SamplerConfig, WikipediaClient};
use wk_core::documents::DocumentIndex;
use wk_core::source::ArticleSource;
use wk_core::Result;
use wk_docs::{LinkResolver, MemoryDocumentIndex, RestPdfDownloader, UnlinkedDocumentOpener};
use wk_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the article sampling and click-resolution HTTP API
    Serve {
        #[arg(long, default_value_t = 5737)]
        port: u16,
        /// Directory downloaded PDF renditions are stored in
        #[arg(long, default_value = "pdf_storage")]
        pdf_dir: String,
    },
    /// Sample random articles that meet the link threshold
    Sample {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 5)]
        min_links: usize,
        #[arg(long, default_value_t = 100)]
        batch_size: usize,
        /// Keep fetching without a round budget until the quota is met
        #[arg(long)]
        unlimited: bool,
    },
    /// Look up a single article by its page URL
    Lookup { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, pdf_dir } => serve(port, &pdf_dir).await?,
        Commands::Sample {
            count,
            min_links,
            batch_size,
            unlimited,
        } => {
            let config = if unlimited {
                SamplerConfig::unlimited()
            } else {
                SamplerConfig::default()
            };
            let sampler = ArticleSampler::with_config(Arc::new(WikipediaClient::new()), config);

            let articles = sampler.sample(count, min_links, batch_size).await?;
            for article in &articles {
                println!(
                    "{} ({} links) - {}",
                    article.title,
                    article.links.len(),
                    article.canonical_url
                );
            }
        }
        Commands::Lookup { url } => {
            let client = WikipediaClient::new();
            match client.fetch_by_url(&url).await? {
                Some(article) => println!(
                    "{} ({} links) - {}",
                    article.title,
                    article.links.len(),
                    article.pdf_url
                ),
                None => println!("No article found for {}", url),
            }
        }
    }

    Ok(())
}

async fn serve(port: u16, pdf_dir: &str) -> Result<()> {
    let index: Arc<dyn DocumentIndex> =
        Arc::new(MemoryDocumentIndex::new(Arc::new(UnlinkedDocumentOpener)));
    let downloader = Arc::new(RestPdfDownloader::new(pdf_dir, index.clone()));
    let resolver = LinkResolver::new(index, downloader);
    let sampler = ArticleSampler::new(Arc::new(WikipediaClient::new()));
    info!("🌐 Wikipedia client ready");

    let app = wk_web::create_app(AppState { sampler, resolver }).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("🚀 Listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
