use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{AppContext, Result};
use crate::document::{Document, FileDocument, MemoryDocument};
use crate::router;
use crate::store::Session;

/// Visit `routes` in order within one session.
///
/// With `out`, the page is written to that file; otherwise the final root
/// content is printed. The first failing navigation aborts the run.
pub async fn render_routes(ctx: &AppContext, routes: &[String], out: Option<&Path>) -> Result<()> {
    let mut session = Session::new();

    match out {
        Some(path) => {
            let mut document = FileDocument::new(path, &ctx.view.site_title);
            visit_all(ctx, &mut session, &mut document, routes).await?;
            println!("Wrote {}", path.display());
        }
        None => {
            let mut document = MemoryDocument::new();
            visit_all(ctx, &mut session, &mut document, routes).await?;
            if let Some(html) = document.html() {
                println!("{}", html);
            }
        }
    }

    Ok(())
}

async fn visit_all(
    ctx: &AppContext,
    session: &mut Session,
    document: &mut dyn Document,
    routes: &[String],
) -> Result<()> {
    if routes.is_empty() {
        return router::route(ctx, session, document, "").await;
    }

    for hash in routes {
        router::route(ctx, session, document, hash).await?;
    }
    Ok(())
}

/// Render `start`, then one navigation per line of `input` until EOF.
///
/// Failed navigations are reported and leave the page as it was.
pub async fn browse<R>(ctx: &AppContext, out: &Path, start: &str, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut session = Session::new();
    let mut document = FileDocument::new(out, &ctx.view.site_title);

    println!("Rendering to {}; enter a hash per line (e.g. #/page/2, #/show/42)", out.display());
    navigate(ctx, &mut session, &mut document, start).await;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        navigate(ctx, &mut session, &mut document, line.trim()).await;
    }

    if let Some(loaded_at) = session.loaded_at() {
        tracing::info!(
            "Session ended; {} items loaded at {}, {} read",
            session.feeds().len(),
            loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
            session.feeds().iter().filter(|f| f.read).count()
        );
    }

    Ok(())
}

async fn navigate(ctx: &AppContext, session: &mut Session, document: &mut dyn Document, hash: &str) {
    match router::route(ctx, session, document, hash).await {
        Ok(()) => tracing::info!("Rendered {:?}", hash),
        Err(e) => {
            tracing::error!("Navigation to {:?} failed: {}", hash, e);
            eprintln!("Error: {}", e);
        }
    }
}
