use crate::types::{Article, NewsFilters, Result};
use async_trait::async_trait;

/// Trait for fetching one page of articles from a single news provider.
///
/// Implementations are the compatibility boundary between a provider's wire
/// format and the common `Article` model.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Human-readable provider name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch one page of articles matching `filters`.
    ///
    /// Ordinary provider-side failures (bad HTTP status, malformed body)
    /// yield an empty page. A missing credential is the only error an
    /// adapter raises on its own behalf.
    async fn fetch_page(&self, page: u32, filters: &NewsFilters) -> Result<Vec<Article>>;
}
