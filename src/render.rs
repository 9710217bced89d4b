//! List and detail renderers.
//!
//! Each renderer fetches what it needs, builds its view and replaces the
//! root container content. A fetch error aborts the render before the root
//! is touched, so the previous content stays in place.

use crate::app::{AppContext, HnError, Result};
use crate::document::Document;
use crate::domain::DetailItem;
use crate::fetcher::fetch_json;
use crate::store::Session;
use crate::view::html::to_html;
use crate::view::{detail_view, feed_list_view};

/// Render the list view for the session's current page.
pub async fn render_feed_list(
    ctx: &AppContext,
    session: &mut Session,
    document: &mut dyn Document,
) -> Result<()> {
    session
        .ensure_feeds_loaded(ctx.fetcher.as_ref(), ctx.api.news_url())
        .await?;

    let html = to_html(&feed_list_view(session, &ctx.view));
    mount(document, html)
}

/// Fetch item `id` and render its detail view, marking it read.
pub async fn render_detail(
    ctx: &AppContext,
    session: &mut Session,
    document: &mut dyn Document,
    id: u64,
) -> Result<()> {
    let url = ctx.api.item_url(id);
    let detail: Option<DetailItem> = fetch_json(ctx.fetcher.as_ref(), &url).await?;
    let detail = detail.ok_or(HnError::ItemNotFound(id))?;

    session.mark_read(id);

    let html = to_html(&detail_view(&detail, session.current_page(), &ctx.view));
    mount(document, html)
}

fn mount(document: &mut dyn Document, html: String) -> Result<()> {
    match document.root() {
        Some(root) => root.set_inner_html(html),
        None => {
            tracing::error!("Root container is missing; render skipped");
            Ok(())
        }
    }
}
