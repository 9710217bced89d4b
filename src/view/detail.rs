use crate::config::ViewConfig;
use crate::domain::{flatten_comments, DetailItem, FlatComment};

use super::content::paragraphs;
use super::node::{Element, Node};
use super::{header_bar, icon};

/// Build the detail view for `detail`.
///
/// `back_page` is the list page the close control returns to.
pub fn detail_view(detail: &DetailItem, back_page: u32, view: &ViewConfig) -> Node {
    let close = Element::new("div").class("items-center justify-end").child(
        Element::new("a")
            .class("close text-gray-500")
            .attr("href", format!("#/page/{}", back_page))
            .child(icon("fa fa-times")),
    );

    let comments = flatten_comments(&detail.comments)
        .into_iter()
        .map(|c| comment_block(c, view.comment_indent_px));

    Element::new("div")
        .class("bg-gray-600 min-h-screen pb-8")
        .child(header_bar(&view.site_title, close))
        .child(
            Element::new("div")
                .class("h-full border rounded-xl bg-white m-6 p-4")
                .child(Element::new("h2").class("title").text(detail.news.title.as_str()))
                .child(
                    Element::new("div")
                        .class("body text-gray-400 h-20")
                        .children(paragraph_nodes(&detail.news.content)),
                )
                .child(Element::new("div").class("comments").children(comments)),
        )
        .into()
}

fn comment_block(comment: FlatComment<'_>, indent_px: u32) -> Element {
    let news = &comment.node.news;

    Element::new("div")
        .class("comment mt-4")
        .attr("style", format!("padding-left: {}px;", comment.level * indent_px))
        .attr("data-id", news.id.to_string())
        .attr("data-level", comment.level.to_string())
        .child(
            Element::new("div")
                .class("text-gray-400")
                .child(icon("fa fa-sort-up mr-2"))
                .child(Element::new("strong").text(news.user.as_str()))
                .text(format!(" {}", news.time_ago)),
        )
        .child(
            Element::new("div")
                .class("text-gray-700")
                .children(paragraph_nodes(&news.content)),
        )
}

fn paragraph_nodes(html: &str) -> Vec<Element> {
    paragraphs(html)
        .into_iter()
        .map(|p| Element::new("p").text(p))
        .collect()
}
