use crate::config::ProviderCredentials;
use crate::fetcher::Fetcher;
use crate::providers::{GNewsProvider, GuardianProvider, NewsApiProvider};
use crate::traits::NewsProvider;
use crate::types::{AggregatorError, Article, FetchConfig, NewsFilters, Result};
use futures::future::join_all;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fans out one fetch to every provider adapter, merges whatever succeeded,
/// then applies cross-provider filtering and ordering.
pub struct NewsAggregator {
    providers: Vec<Box<dyn NewsProvider>>,
}

impl NewsAggregator {
    /// Build the aggregator with the three real provider adapters sharing one
    /// HTTP client. Provider order is fixed, so merged results are stable
    /// across calls.
    pub fn new(credentials: ProviderCredentials, fetch_config: FetchConfig) -> Self {
        let fetcher = Arc::new(Fetcher::new(fetch_config));
        let providers: Vec<Box<dyn NewsProvider>> = vec![
            Box::new(NewsApiProvider::new(credentials.news_api_key, fetcher.clone())),
            Box::new(GuardianProvider::new(credentials.guardian_api_key, fetcher.clone())),
            Box::new(GNewsProvider::new(credentials.gnews_api_key, fetcher)),
        ];
        Self { providers }
    }

    /// Aggregator over an arbitrary provider set, for callers wiring custom
    /// sources and for tests.
    pub fn from_providers(providers: Vec<Box<dyn NewsProvider>>) -> Self {
        Self { providers }
    }

    /// Fetch one aggregated page.
    ///
    /// Per-provider failures are absorbed except in one case: on the first
    /// page, when every provider fails, the aggregation as a whole fails.
    /// Past the first page the caller already has a baseline of results, so
    /// failures are tolerated silently.
    pub async fn get_news(&self, page: u32, filters: &NewsFilters) -> Result<Vec<Article>> {
        let page = page.max(1);

        // Launch every provider fetch before awaiting any of them, then wait
        // for the whole set to settle.
        let fetches = self.providers.iter().map(|p| p.fetch_page(page, filters));
        let outcomes = join_all(fetches).await;

        let mut articles = Vec::new();
        let mut errors = Vec::new();

        for (provider, outcome) in self.providers.iter().zip(outcomes) {
            match outcome {
                Ok(mut page_articles) => {
                    debug!("{} contributed {} articles", provider.name(), page_articles.len());
                    articles.append(&mut page_articles);
                }
                Err(e) => {
                    if page == 1 {
                        errors.push(e.to_string());
                    } else {
                        debug!("{} failed on page {}: {}", provider.name(), page, e);
                    }
                }
            }
        }

        if page == 1 && !self.providers.is_empty() && errors.len() == self.providers.len() {
            return Err(AggregatorError::AllProvidersFailed { errors });
        }
        if page == 1 && !errors.is_empty() {
            warn!("Partially failed to fetch news: {}", errors.join("; "));
        }

        if !filters.sources.is_empty() {
            articles.retain(|article| filters.sources.contains(&article.source));
        }
        if !filters.categories.is_empty() {
            articles.retain(|article| filters.categories.contains(&article.category));
        }

        // Most recent first. Undated articles compare equal to everything, so
        // the stable sort leaves their relative order untouched. The
        // comparator is not a total order, but it answers every pair
        // consistently (Equal whenever either side is undated), which is
        // what `sort_by`'s ordering checks require.
        articles.sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            _ => Ordering::Equal,
        });

        info!("Aggregated {} articles for page {}", articles.len(), page);
        Ok(articles)
    }
}
