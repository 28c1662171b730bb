use crate::fetcher::Fetcher;
use crate::providers::{image_hint, parse_timestamp, NO_DESCRIPTION};
use crate::traits::NewsProvider;
use crate::types::{AggregatorError, Article, Category, NewsFilters, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

const ENDPOINT: &str = "https://newsapi.org/v2/everything";
const PROVIDER: &str = "NewsAPI";
// Sentinel title NewsAPI emits for withdrawn articles.
const REMOVED_TITLE: &str = "[Removed]";

/// NewsAPI `/v2/everything` adapter.
///
/// The endpoint rejects an empty query, so an unfiltered fetch falls back to
/// a broad `"world news"` search. No category data is available here; every
/// article lands in `General`.
pub struct NewsApiProvider {
    api_key: Option<String>,
    fetcher: Arc<Fetcher>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub source: NewsApiSource,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl NewsApiProvider {
    pub fn new(api_key: Option<String>, fetcher: Arc<Fetcher>) -> Self {
        Self { api_key, fetcher }
    }

    pub fn build_url(api_key: &str, page: u32, filters: &NewsFilters) -> Result<Url> {
        let mut url = Url::parse(ENDPOINT)?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("apiKey", api_key);
            params.append_pair("page", &page.to_string());
            params.append_pair("language", "en");

            // The quoted fallback keeps the endpoint happy on an empty query.
            let query = filters.search_query.as_deref().filter(|q| !q.is_empty());
            params.append_pair("q", query.unwrap_or("\"world news\""));

            if let Some(range) = &filters.date_range {
                if let Some(from) = range.from {
                    params.append_pair("from", &from.format("%Y-%m-%d").to_string());
                }
                if let Some(to) = range.to {
                    params.append_pair("to", &to.format("%Y-%m-%d").to_string());
                }
            }
        }
        Ok(url)
    }

    /// Map the wire response into articles, dropping withdrawn sentinels and
    /// items without an image. NewsAPI has no stable item ids, so ids are
    /// derived from URL, item index and page.
    pub fn map_response(response: NewsApiResponse, page: u32) -> Vec<Article> {
        response
            .articles
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let title = item.title.unwrap_or_default();
                if title == REMOVED_TITLE {
                    return None;
                }
                let image_url = item.url_to_image.filter(|u| !u.is_empty())?;

                Some(Article {
                    id: format!("{}{}{}", item.url, index, page),
                    image_hint: image_hint(&title),
                    title,
                    source: item.source.name.unwrap_or_else(|| "Unknown".to_string()),
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
impl NewsProvider for NewsApiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_page(&self, page: u32, filters: &NewsFilters) -> Result<Vec<Article>> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => return Err(AggregatorError::Configuration { provider: PROVIDER }),
        };

        let url = Self::build_url(api_key, page, filters)?;
        let response = match self.fetcher.get_json::<NewsApiResponse>(PROVIDER, url).await? {
            Some(response) => response,
            None => return Ok(Vec::new()),
        };

        Ok(Self::map_response(response, page))
    }
}
