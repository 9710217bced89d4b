use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::app::Result;
use crate::domain::FeedItem;
use crate::fetcher::{fetch_json, Fetcher};

/// Navigation state for one reading session.
///
/// The listing is fetched at most once and then kept for the lifetime of the
/// session. Detail views opened before the listing is loaded are remembered
/// and marked read when it arrives.
#[derive(Debug)]
pub struct Session {
    current_page: u32,
    feeds: Vec<FeedItem>,
    loaded_at: Option<DateTime<Utc>>,
    pending_reads: BTreeSet<u64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            feeds: Vec::new(),
            loaded_at: None,
            pending_reads: BTreeSet::new(),
        }
    }

    /// Load the listing from `news_url` unless it is already loaded.
    pub async fn ensure_feeds_loaded(
        &mut self,
        fetcher: &(dyn Fetcher + Send + Sync),
        news_url: &str,
    ) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        let feeds: Vec<FeedItem> = fetch_json(fetcher, news_url).await?;
        self.load_feeds(feeds);
        tracing::info!("Loaded {} feed items from {}", self.feeds.len(), news_url);
        Ok(())
    }

    /// Install a freshly fetched listing, resetting every read flag and then
    /// applying reads recorded before the listing was available.
    pub fn load_feeds(&mut self, mut feeds: Vec<FeedItem>) {
        for feed in &mut feeds {
            feed.read = false;
        }
        self.feeds = feeds;
        self.loaded_at = Some(Utc::now());

        let pending = std::mem::take(&mut self.pending_reads);
        for id in pending {
            if !self.mark_read(id) {
                tracing::debug!("Opened item {} is not in the listing", id);
            }
        }
    }

    /// Mark the feed item `id` as read.
    ///
    /// Returns whether a matching item was found. Before the listing is
    /// loaded, the id is kept and applied on load.
    pub fn mark_read(&mut self, id: u64) -> bool {
        if !self.is_loaded() {
            self.pending_reads.insert(id);
            return false;
        }

        match self.feeds.iter_mut().find(|f| f.id() == id) {
            Some(feed) => {
                feed.read = true;
                true
            }
            None => false,
        }
    }

    /// Set the current page. Pages start at 1.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn feeds(&self) -> &[FeedItem] {
        &self.feeds
    }

    /// Whether a listing was loaded this session, even an empty one.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn find(&self, id: u64) -> Option<&FeedItem> {
        self.feeds.iter().find(|f| f.id() == id)
    }

    pub fn is_pending_read(&self, id: u64) -> bool {
        self.pending_reads.contains(&id)
    }

    /// Number of pages needed to show every item, rounded up.
    pub fn total_pages(&self, page_size: usize) -> u32 {
        self.feeds.len().div_ceil(page_size.max(1)) as u32
    }

    /// Items on the current page, clamped to the end of the listing.
    pub fn page_items(&self, page_size: usize) -> &[FeedItem] {
        page_window(&self.feeds, self.current_page, page_size)
    }
}

/// The `page_size` window of `items` for 1-based `page`, clamped to the end.
pub fn page_window<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let start = (page.max(1) as usize - 1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
