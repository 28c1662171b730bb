use crate::fetcher::Fetcher;
use crate::providers::{image_hint, parse_timestamp, NO_DESCRIPTION};
use crate::traits::NewsProvider;
use crate::types::{AggregatorError, Article, Category, NewsFilters, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

const ENDPOINT: &str = "https://content.guardianapis.com/search";
const PROVIDER: &str = "The Guardian";
const PAGE_SIZE: &str = "20";

/// Guardian content-search adapter.
///
/// The only provider with a section taxonomy; section ids are mapped through
/// a fixed lookup into the shared category vocabulary.
pub struct GuardianProvider {
    api_key: Option<String>,
    fetcher: Arc<Fetcher>,
}

#[derive(Debug, Deserialize)]
pub struct GuardianResponse {
    pub response: GuardianResults,
}

#[derive(Debug, Deserialize)]
pub struct GuardianResults {
    #[serde(default)]
    pub results: Vec<GuardianItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianItem {
    pub id: String,
    pub web_title: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub web_publication_date: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub fields: Option<GuardianFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianFields {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub trail_text: Option<String>,
}

/// Fixed section-id lookup into the shared category vocabulary.
pub fn category_for_section(section_id: &str) -> Category {
    match section_id {
        "technology" => Category::Technology,
        "business" => Category::Business,
        "sport" => Category::Sports,
        "politics" => Category::Politics,
        "entertainment" => Category::Entertainment,
        "world" => Category::World,
        "science" => Category::Science,
        _ => Category::General,
    }
}

impl GuardianProvider {
    pub fn new(api_key: Option<String>, fetcher: Arc<Fetcher>) -> Self {
        Self { api_key, fetcher }
    }

    pub fn build_url(api_key: &str, page: u32, filters: &NewsFilters) -> Result<Url> {
        let mut url = Url::parse(ENDPOINT)?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("api-key", api_key);
            params.append_pair("show-fields", "thumbnail,trailText");
            params.append_pair("page", &page.to_string());
            params.append_pair("page-size", PAGE_SIZE);

            // Unlike NewsAPI, this endpoint accepts an absent query.
            if let Some(query) = filters.search_query.as_deref().filter(|q| !q.is_empty()) {
                params.append_pair("q", query);
            }

            if let Some(range) = &filters.date_range {
                if let Some(from) = range.from {
                    params.append_pair("from-date", &from.format("%Y-%m-%d").to_string());
                }
                if let Some(to) = range.to {
                    params.append_pair("to-date", &to.format("%Y-%m-%d").to_string());
                }
            }
        }
        Ok(url)
    }

    /// Map the wire response into articles, dropping items without a
    /// thumbnail. Guardian item ids are stable, so they are used as-is.
    pub fn map_response(response: GuardianResponse) -> Vec<Article> {
        response
            .response
            .results
            .into_iter()
            .filter_map(|item| {
                let fields = item.fields.unwrap_or_default();
                let image_url = fields.thumbnail.filter(|u| !u.is_empty())?;

                Some(Article {
                    id: item.id,
                    image_hint: image_hint(&item.web_title),
                    title: item.web_title,
                    source: PROVIDER.to_string(),
                    category: item
                        .section_id
                        .as_deref()
                        .map(category_for_section)
                        .unwrap_or(Category::General),
                    published_at: parse_timestamp(item.web_publication_date.as_deref()),
                    url: item.web_url,
                    image_url,
                    description: fields
                        .trail_text
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                })
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for GuardianProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_page(&self, page: u32, filters: &NewsFilters) -> Result<Vec<Article>> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => return Err(AggregatorError::Configuration { provider: PROVIDER }),
        };

        let url = Self::build_url(api_key, page, filters)?;
        let response = match self.fetcher.get_json::<GuardianResponse>(PROVIDER, url).await? {
            Some(response) => response,
            None => return Ok(Vec::new()),
        };

        Ok(Self::map_response(response))
    }
}
