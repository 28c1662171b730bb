pub mod gnews;
pub mod guardian;
pub mod newsapi;

pub use gnews::GNewsProvider;
pub use guardian::GuardianProvider;
pub use newsapi::NewsApiProvider;

use chrono::{DateTime, Utc};

/// Placeholder substituted when a provider supplies no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// First two words of the title, used as a non-authoritative image hint.
pub fn image_hint(title: &str) -> String {
    let hint = title.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    if hint.is_empty() {
        "news article".to_string()
    } else {
        hint
    }
}

/// Providers deliver ISO-8601 timestamps with minor dialect differences.
/// Parse leniently: an absent or unusable timestamp yields `None` and the
/// article is kept, it just does not participate in ordering.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
