//! Rendering settings.

use serde::{de, Deserialize, Deserializer};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_COMMENT_INDENT_PX: u32 = 40;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Feed items per list page.
    #[serde(deserialize_with = "deserialize_page_size")]
    pub page_size: usize,
    /// Left padding per comment nesting level, in pixels.
    pub comment_indent_px: u32,
    pub site_title: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            comment_indent_px: DEFAULT_COMMENT_INDENT_PX,
            site_title: "Hacker News".to_string(),
        }
    }
}

fn deserialize_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let n = usize::deserialize(deserializer)?;
    if n == 0 {
        return Err(de::Error::custom("page_size must be at least 1"));
    }
    Ok(n)
}
