//! URL-hash routing.

use std::fmt;

use crate::app::{AppContext, HnError, Result};
use crate::document::Document;
use crate::render::{render_detail, render_feed_list};
use crate::store::Session;

/// A parsed URL hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Empty hash: the list at the current page.
    List,
    /// `#/page/{n}`
    Page(u32),
    /// `#/show/{id}`
    Show(u64),
}

impl Route {
    /// Parse a URL hash.
    ///
    /// The leading `#` is optional. Any hash that is neither empty nor a
    /// page route is taken as a detail route, with the id in the third
    /// `/`-separated segment.
    pub fn parse(hash: &str) -> Result<Self> {
        let hash = hash.trim();
        let path = hash.strip_prefix('#').unwrap_or(hash);
        if path.is_empty() {
            return Ok(Route::List);
        }

        let mut segments = path.split('/');
        let kind = segments.nth(1);
        let value = segments.next().unwrap_or("");

        if kind == Some("page") {
            match value.parse::<u32>() {
                Ok(page) if page >= 1 => Ok(Route::Page(page)),
                _ => Err(HnError::InvalidRoute(hash.to_string())),
            }
        } else {
            value
                .parse::<u64>()
                .map(Route::Show)
                .map_err(|_| HnError::InvalidRoute(hash.to_string()))
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => Ok(()),
            Route::Page(page) => write!(f, "#/page/{}", page),
            Route::Show(id) => write!(f, "#/show/{}", id),
        }
    }
}

/// Handle one hash change: parse `hash` and run the matching renderer.
pub async fn route(
    ctx: &AppContext,
    session: &mut Session,
    document: &mut dyn Document,
    hash: &str,
) -> Result<()> {
    let route = Route::parse(hash)?;
    tracing::debug!("Routing {:?} as {:?}", hash, route);

    match route {
        Route::List => render_feed_list(ctx, session, document).await,
        Route::Page(page) => {
            session.set_page(page);
            render_feed_list(ctx, session, document).await
        }
        Route::Show(id) => render_detail(ctx, session, document, id).await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::config::Config;
    use crate::document::MemoryDocument;
    use crate::fetcher::stub::StubFetcher;

    const NEWS_URL: &str = "https://api.hnpwa.com/v0/news/1.json";

    fn listing(count: u64) -> String {
        let entries: Vec<String> = (1..=count)
            .map(|id| {
                format!(
                    r#"{{"id": {id}, "title": "Story {id}", "points": {id}, "user": "u{id}", "time_ago": "1 hour ago", "comments_count": 2}}"#
                )
            })
            .collect();
        format!("[{}]", entries.join(","))
    }

    fn detail(id: u64) -> String {
        format!(
            r#"{{"id": {id}, "title": "Story {id}", "content": "", "comments": [
                {{"id": 900, "user": "a", "time_ago": "now", "content": "A", "level": 0, "comments": [
                    {{"id": 901, "user": "b", "time_ago": "now", "content": "B", "level": 1, "comments": [
                        {{"id": 902, "user": "c", "time_ago": "now", "content": "C", "level": 2, "comments": []}}
                    ]}}
                ]}},
                {{"id": 903, "user": "d", "time_ago": "now", "content": "D", "level": 0, "comments": []}}
            ]}}"#
        )
    }

    fn item_url(id: u64) -> String {
        format!("https://api.hnpwa.com/v0/item/{}.json", id)
    }

    fn setup(count: u64) -> (Arc<StubFetcher>, AppContext) {
        let fetcher = Arc::new(StubFetcher::new().with_body(NEWS_URL, &listing(count)));
        let ctx = AppContext::with_fetcher(Config::default(), fetcher.clone());
        (fetcher, ctx)
    }

    fn has_control(doc: &MemoryDocument, class: &str) -> bool {
        doc.html().unwrap().contains(&format!("class=\"{} ", class))
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("").unwrap(), Route::List);
        assert_eq!(Route::parse("#").unwrap(), Route::List);
        assert_eq!(Route::parse("#/page/3").unwrap(), Route::Page(3));
        assert_eq!(Route::parse("#/show/42").unwrap(), Route::Show(42));
        assert_eq!(Route::parse("/show/42").unwrap(), Route::Show(42));
        assert_eq!(Route::parse("  #/page/2 \n").unwrap(), Route::Page(2));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_err!(Route::parse("#/page/0"));
        assert_err!(Route::parse("#/page/abc"));
        assert_err!(Route::parse("#/page/"));
        assert_err!(Route::parse("#/show/abc"));
        assert_err!(Route::parse("#/show"));
        assert_err!(Route::parse("#about"));
    }

    #[test]
    fn test_display_round_trips() {
        for route in [Route::Page(4), Route::Show(17)] {
            assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
        }
        assert_eq!(Route::List.to_string(), "");
    }

    #[tokio::test]
    async fn test_listing_fetched_once_across_navigations() {
        let (fetcher, ctx) = setup(30);
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        for hash in ["", "#/page/2", "#/page/3", "#/page/1", ""] {
            assert_ok!(route(&ctx, &mut session, &mut doc, hash).await);
        }

        assert_eq!(fetcher.calls(NEWS_URL), 1);
        assert_eq!(doc.root_ref().unwrap().writes(), 5);
    }

    #[tokio::test]
    async fn test_prev_next_while_paging_back() {
        let (_, ctx) = setup(25);
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        route(&ctx, &mut session, &mut doc, "#/page/3").await.unwrap();
        assert!(has_control(&doc, "prev"));
        assert!(!has_control(&doc, "next"));

        route(&ctx, &mut session, &mut doc, "#/page/2").await.unwrap();
        assert!(has_control(&doc, "prev"));
        assert!(has_control(&doc, "next"));

        route(&ctx, &mut session, &mut doc, "#/page/1").await.unwrap();
        assert!(!has_control(&doc, "prev"));
        assert!(has_control(&doc, "next"));
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn test_empty_hash_keeps_current_page() {
        let (_, ctx) = setup(25);
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        route(&ctx, &mut session, &mut doc, "#/page/2").await.unwrap();
        route(&ctx, &mut session, &mut doc, "").await.unwrap();

        assert_eq!(session.current_page(), 2);
        assert!(doc.html().unwrap().contains("href=\"#/show/11\""));
    }

    #[tokio::test]
    async fn test_detail_marks_read_and_renders_comments() {
        let (fetcher, ctx) = setup(12);
        fetcher.set_body(&item_url(3), &detail(3));
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        route(&ctx, &mut session, &mut doc, "").await.unwrap();
        route(&ctx, &mut session, &mut doc, "#/show/3").await.unwrap();
        route(&ctx, &mut session, &mut doc, "#/show/3").await.unwrap();

        // Detail data is never cached
        assert_eq!(fetcher.calls(&item_url(3)), 2);

        let read: Vec<u64> = session.feeds().iter().filter(|f| f.read).map(|f| f.id()).collect();
        assert_eq!(read, vec![3]);

        let html = doc.html().unwrap();
        let order: Vec<usize> = ["data-id=\"900\"", "data-id=\"901\"", "data-id=\"902\"", "data-id=\"903\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("href=\"#/page/1\""));
    }

    #[tokio::test]
    async fn test_detail_before_listing_marks_read_on_load() {
        let (fetcher, ctx) = setup(50);
        fetcher.set_body(&item_url(42), &detail(42));
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        route(&ctx, &mut session, &mut doc, "#/show/42").await.unwrap();
        assert_eq!(fetcher.calls(NEWS_URL), 0);
        assert!(session.is_pending_read(42));

        route(&ctx, &mut session, &mut doc, "#/page/5").await.unwrap();
        assert!(session.find(42).unwrap().read);
        assert_eq!(session.feeds().iter().filter(|f| f.read).count(), 1);
        assert!(doc.html().unwrap().contains("read bg-red-500"));
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_content() {
        let (_, ctx) = setup(5);
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        route(&ctx, &mut session, &mut doc, "").await.unwrap();
        let before = doc.html().unwrap().to_string();

        // No stub for this item
        assert_err!(route(&ctx, &mut session, &mut doc, "#/show/77").await);
        assert_eq!(doc.html().unwrap(), before);
        assert_eq!(doc.root_ref().unwrap().writes(), 1);
    }

    #[tokio::test]
    async fn test_null_item_is_not_found() {
        let (fetcher, ctx) = setup(5);
        fetcher.set_body(&item_url(8), "null");
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        let result = route(&ctx, &mut session, &mut doc, "#/show/8").await;
        assert!(matches!(result, Err(HnError::ItemNotFound(8))));
    }

    #[tokio::test]
    async fn test_invalid_route_renders_nothing() {
        let (fetcher, ctx) = setup(5);
        let mut session = Session::new();
        let mut doc = MemoryDocument::new();

        let result = route(&ctx, &mut session, &mut doc, "#/page/zero").await;
        assert!(matches!(result, Err(HnError::InvalidRoute(_))));
        assert_eq!(fetcher.calls(NEWS_URL), 0);
        assert_eq!(doc.root_ref().unwrap().writes(), 0);
    }

    #[tokio::test]
    async fn test_missing_root_is_skipped() {
        let (fetcher, ctx) = setup(5);
        let mut session = Session::new();
        let mut doc = MemoryDocument::without_root();

        assert_ok!(route(&ctx, &mut session, &mut doc, "").await);
        assert_eq!(fetcher.calls(NEWS_URL), 1);
        assert!(session.is_loaded());
    }
}
