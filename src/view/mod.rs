//! Views as typed render trees.
//!
//! Views are pure functions from session and API data to a [`Node`] tree;
//! [`html::to_html`] turns the tree into the markup mounted in the root
//! container.

pub mod content;
pub mod detail;
pub mod html;
pub mod list;
pub mod node;

pub use detail::detail_view;
pub use list::{feed_list_view, Pagination};
pub use node::{Element, Node};

/// Top bar with the site title on the left and `controls` on the right.
fn header_bar(site_title: &str, controls: Element) -> Element {
    Element::new("div").class("bg-white text-xl").child(
        Element::new("div").class("mx-auto px-4").child(
            Element::new("div")
                .class("flex justify-between items-center py-6")
                .child(
                    Element::new("div").class("flex justify-start").child(
                        Element::new("h1")
                            .class("font-extrabold")
                            .child(Element::new("a").attr("href", "#").text(site_title)),
                    ),
                )
                .child(controls),
        ),
    )
}

fn icon(class: &str) -> Element {
    Element::new("i").class(class)
}
