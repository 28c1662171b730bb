pub mod aggregator;
pub mod config;
pub mod fetcher;
pub mod providers;
pub mod traits;
pub mod types;

pub use aggregator::NewsAggregator;
pub use config::ProviderCredentials;
pub use fetcher::Fetcher;
pub use providers::{GNewsProvider, GuardianProvider, NewsApiProvider};
pub use traits::NewsProvider;
pub use types::*;
