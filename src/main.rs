use news_aggregator::{FetchConfig, NewsAggregator, NewsFilters, ProviderCredentials};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting news aggregator");

    let credentials = ProviderCredentials::from_env();
    if !credentials.any_configured() {
        warn!("No provider keys configured; set NEWS_API_KEY, GUARDIAN_API_KEY or GNEWS_API_KEY");
    }

    let aggregator = NewsAggregator::new(credentials, FetchConfig::default());
    let articles = aggregator.get_news(1, &NewsFilters::default()).await?;

    for article in &articles {
        info!(
            "[{}] {} ({})",
            article.source,
            article.title,
            article
                .published_at
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| "just now".to_string())
        );
    }
    info!("Fetched {} articles", articles.len());

    Ok(())
}
