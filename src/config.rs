use std::env;

// Baked-in fallback table, the equivalent of a deploy-time config file.
// Left empty so a missing environment variable disables that provider.
const DEFAULT_NEWS_API_KEY: Option<&str> = None;
const DEFAULT_GUARDIAN_API_KEY: Option<&str> = None;
const DEFAULT_GNEWS_API_KEY: Option<&str> = None;

/// API credentials for the three news providers.
///
/// Credentials are read once and injected into each adapter's constructor, so
/// adapters never touch ambient process state and can be built with fake keys
/// in tests. An absent credential disables that provider: its adapter raises
/// a configuration error when invoked, which the aggregator absorbs like any
/// other per-provider failure.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub news_api_key: Option<String>,
    pub guardian_api_key: Option<String>,
    pub gnews_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Read credentials from the environment, falling back to the static
    /// defaults for any variable that is unset or empty.
    pub fn from_env() -> Self {
        Self {
            news_api_key: read_key("NEWS_API_KEY", DEFAULT_NEWS_API_KEY),
            guardian_api_key: read_key("GUARDIAN_API_KEY", DEFAULT_GUARDIAN_API_KEY),
            gnews_api_key: read_key("GNEWS_API_KEY", DEFAULT_GNEWS_API_KEY),
        }
    }

    pub fn any_configured(&self) -> bool {
        self.news_api_key.is_some() || self.guardian_api_key.is_some() || self.gnews_api_key.is_some()
    }
}

fn read_key(var: &str, fallback: Option<&str>) -> Option<String> {
    env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.map(|value| value.to_string()))
}
