use serde::{Deserialize, Deserializer};

use super::comment::CommentNode;

/// Fields shared by every entry the API returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct News {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_ago: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    /// Raw HTML body as sent by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// An entry of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub news: News,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    /// Session-only marker, set once the detail view has been opened.
    #[serde(skip)]
    pub read: bool,
}

impl FeedItem {
    pub fn id(&self) -> u64 {
        self.news.id
    }
}

/// A single entry with its full comment tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailItem {
    #[serde(flatten)]
    pub news: News,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<CommentNode>,
}

/// Deserialize `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
