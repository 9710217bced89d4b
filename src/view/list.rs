use crate::config::ViewConfig;
use crate::domain::FeedItem;
use crate::store::Session;

use super::node::{Element, Node};
use super::{header_bar, icon};

/// Prev/next targets for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

impl Pagination {
    /// Prev exists past page 1, next exists while pages remain.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            prev: (current_page > 1).then(|| current_page - 1),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }
}

/// Build the list view for the session's current page.
pub fn feed_list_view(session: &Session, view: &ViewConfig) -> Node {
    let pagination = Pagination::new(
        session.current_page(),
        session.total_pages(view.page_size),
    );
    let cards = session.page_items(view.page_size).iter().map(feed_card);

    Element::new("div")
        .class("bg-gray-600 min-h-screen")
        .child(header_bar(&view.site_title, pagination_controls(pagination)))
        .child(
            Element::new("div")
                .class("p-4 text-2xl text-gray-700")
                .children(cards),
        )
        .into()
}

fn pagination_controls(pagination: Pagination) -> Element {
    let mut controls = Element::new("div").class("pagination items-center justify-end");

    if let Some(page) = pagination.prev {
        controls = controls.child(
            Element::new("a")
                .class("prev text-gray-500")
                .attr("href", format!("#/page/{}", page))
                .text("Prev"),
        );
    }
    if let Some(page) = pagination.next {
        controls = controls.child(
            Element::new("a")
                .class("next text-gray-500 ml-4")
                .attr("href", format!("#/page/{}", page))
                .text("Next"),
        );
    }

    controls
}

fn feed_card(feed: &FeedItem) -> Element {
    let background = if feed.read { "read bg-red-500" } else { "bg-white" };

    Element::new("div")
        .class(format!(
            "card p-6 {} mt-6 rounded-lg shadow-md transition-colors duration-500 hover:bg-green-100",
            background
        ))
        .attr("data-id", feed.id().to_string())
        .child(
            Element::new("div")
                .class("flex")
                .child(
                    Element::new("div").class("flex-auto").child(
                        Element::new("a")
                            .class("title")
                            .attr("href", format!("#/show/{}", feed.id()))
                            .text(feed.news.title.as_str()),
                    ),
                )
                .child(
                    Element::new("div").class("text-center text-sm").child(
                        Element::new("div")
                            .class("comments w-10 text-white bg-green-300 rounded-lg px-0 py-2")
                            .text(feed.comments_count.to_string()),
                    ),
                ),
        )
        .child(
            Element::new("div").class("flex mt-3").child(
                Element::new("div")
                    .class("grid grid-cols-3 text-sm text-gray-500")
                    .child(
                        Element::new("div")
                            .class("user")
                            .child(icon("fas fa-user mr-1"))
                            .text(feed.news.user.as_str()),
                    )
                    .child(
                        Element::new("div")
                            .class("points")
                            .child(icon("fas fa-heart mr-1"))
                            .text(feed.points.to_string()),
                    )
                    .child(
                        Element::new("div")
                            .class("time-ago")
                            .child(icon("far fa-clock mr-1"))
                            .text(feed.news.time_ago.as_str()),
                    ),
            ),
        )
}
