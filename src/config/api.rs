//! Remote endpoint configuration.

use serde::{de, Deserialize, Deserializer};
use url::Url;

/// Placeholder replaced by the numeric item id in [`ApiConfig::item_url`].
pub const ID_PLACEHOLDER: &str = "@id";

pub const DEFAULT_NEWS_URL: &str = "https://api.hnpwa.com/v0/news/1.json";
pub const DEFAULT_ITEM_URL: &str = "https://api.hnpwa.com/v0/item/@id.json";

/// Endpoints and HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listing endpoint returning an array of feed items.
    #[serde(deserialize_with = "deserialize_url")]
    pub news_url: Url,

    /// Item endpoint template; must contain `@id`.
    #[serde(deserialize_with = "deserialize_item_template")]
    pub item_url: String,

    pub user_agent: String,

    /// Request timeout in seconds. Requests never time out when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            news_url: Url::parse(DEFAULT_NEWS_URL).expect("default news URL is valid"),
            item_url: DEFAULT_ITEM_URL.to_string(),
            user_agent: concat!("hnfeed/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn news_url(&self) -> &str {
        self.news_url.as_str()
    }

    /// Expand the item endpoint template for `id`.
    pub fn item_url(&self, id: u64) -> String {
        self.item_url.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

fn deserialize_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Url::parse(s.trim()).map_err(de::Error::custom)
}

fn deserialize_item_template<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_item_template(&s).map_err(de::Error::custom)
}

/// Validate an item endpoint template.
///
/// The template must contain the `@id` placeholder and be a valid URL once
/// the placeholder is expanded.
pub fn parse_item_template(s: &str) -> Result<String, String> {
    let s = s.trim();
    if !s.contains(ID_PLACEHOLDER) {
        return Err(format!("item_url must contain {}: {}", ID_PLACEHOLDER, s));
    }
    Url::parse(&s.replace(ID_PLACEHOLDER, "1")).map_err(|e| format!("{}: {}", e, s))?;
    Ok(s.to_string())
}
