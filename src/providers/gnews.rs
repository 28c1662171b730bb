use crate::fetcher::Fetcher;
use crate::providers::{image_hint, parse_timestamp, NO_DESCRIPTION};
use crate::traits::NewsProvider;
use crate::types::{AggregatorError, Article, Category, NewsFilters, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

const ENDPOINT: &str = "https://gnews.io/api/v4/search";
const PROVIDER: &str = "GNews";
const PAGE_SIZE: &str = "10";

/// GNews `/v4/search` adapter.
///
/// Same overall shape as NewsAPI but with its own parameter names, a smaller
/// page size, and full-timestamp date bounds instead of plain dates.
pub struct GNewsProvider {
    api_key: Option<String>,
    fetcher: Arc<Fetcher>,
}

#[derive(Debug, Deserialize)]
pub struct GNewsResponse {
    #[serde(default)]
    pub articles: Vec<GNewsArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GNewsArticle {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub source: GNewsSource,
}

#[derive(Debug, Deserialize)]
pub struct GNewsSource {
    pub name: String,
}

impl GNewsProvider {
    pub fn new(api_key: Option<String>, fetcher: Arc<Fetcher>) -> Self {
        Self { api_key, fetcher }
    }

    pub fn build_url(api_key: &str, page: u32, filters: &NewsFilters) -> Result<Url> {
        let mut url = Url::parse(ENDPOINT)?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("apikey", api_key);
            params.append_pair("lang", "en");
            params.append_pair("max", PAGE_SIZE);
            params.append_pair("page", &page.to_string());

            let query = filters.search_query.as_deref().filter(|q| !q.is_empty());
            params.append_pair("q", query.unwrap_or("world news"));

            // GNews wants full timestamps; bounds are midnight UTC of the day.
            if let Some(range) = &filters.date_range {
                if let Some(from) = range.from {
                    params.append_pair("from", &format!("{}T00:00:00Z", from.format("%Y-%m-%d")));
                }
                if let Some(to) = range.to {
                    params.append_pair("to", &format!("{}T00:00:00Z", to.format("%Y-%m-%d")));
                }
            }
        }
        Ok(url)
    }

    /// Map the wire response into articles, dropping items without an image.
    /// GNews article URLs are stable enough to serve as ids directly.
    pub fn map_response(response: GNewsResponse) -> Vec<Article> {
        response
            .articles
            .into_iter()
            .filter_map(|item| {
                let image_url = item.image.filter(|u| !u.is_empty())?;

                Some(Article {
                    id: item.url.clone(),
                    image_hint: image_hint(&item.title),
                    title: item.title,
                    source: item.source.name,
                    category: Category::General,
                    published_at: parse_timestamp(item.published_at.as_deref()),
                    url: item.url,
                    image_url,
                    description: item
                        .description
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                })
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for GNewsProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_page(&self, page: u32, filters: &NewsFilters) -> Result<Vec<Article>> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => return Err(AggregatorError::Configuration { provider: PROVIDER }),
        };

        let url = Self::build_url(api_key, page, filters)?;
        let response = match self.fetcher.get_json::<GNewsResponse>(PROVIDER, url).await? {
            Some(response) => response,
            None => return Ok(Vec::new()),
        };

        Ok(Self::map_response(response))
    }
}
