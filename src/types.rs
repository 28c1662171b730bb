use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed category vocabulary shared by every provider adapter.
///
/// Providers that expose their own section taxonomy map into this set and
/// fall back to `General` when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Sports,
    Politics,
    Entertainment,
    World,
    Science,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::Politics => "Politics",
            Category::Entertainment => "Entertainment",
            Category::World => "World",
            Category::Science => "Science",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

/// A single normalized news article, the common shape every provider adapter
/// maps into.
///
/// Items without a usable image never become `Article`s (they are dropped
/// during mapping), so `image_url` is always present here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique within one aggregated response. Providers without stable ids
    /// derive it from the article URL plus page and item index.
    pub id: String,
    pub title: String,
    /// Human-readable publisher name.
    pub source: String,
    pub category: Category,
    /// Absent when the provider supplied no usable timestamp; such articles
    /// do not participate in ordering.
    pub published_at: Option<DateTime<Utc>>,
    /// Canonical link to the full article.
    pub url: String,
    pub image_url: String,
    /// First two words of the title; a non-authoritative hint for downstream
    /// tooling.
    pub image_hint: String,
    pub description: String,
}

/// Inclusive publication-date bounds. Each adapter renders these in its own
/// provider's date format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Client-selected filters for one aggregated fetch.
///
/// The search query is forwarded to each provider as a request parameter;
/// category and source restrictions are applied after the merge. Empty sets
/// mean no restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsFilters {
    pub search_query: Option<String>,
    pub date_range: Option<DateRange>,
    pub categories: Vec<Category>,
    pub sources: Vec<String>,
}

/// HTTP client construction knobs shared by all provider adapters.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Sent as a `Cache-Control: max-age` revalidation hint on every provider
    /// request. A performance hint only.
    pub cache_ttl_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Aggregator/0.1".to_string(),
            timeout_seconds: 30,
            cache_ttl_seconds: 3600,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    /// A required credential is missing. The only error an adapter raises on
    /// its own behalf; everything provider-side degrades to an empty page.
    #[error("{provider} key is not configured")]
    Configuration { provider: &'static str },

    /// Every adapter failed on the first page. The only error the aggregator
    /// surfaces to its caller.
    #[error("Failed to fetch news from all sources")]
    AllProvidersFailed { errors: Vec<String> },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
