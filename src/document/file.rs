use std::fs;
use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::view::html::to_html;
use crate::view::{Element, Node};

use super::{Document, RootElement};

const TAILWIND_CSS: &str = "https://unpkg.com/tailwindcss@^2/dist/tailwind.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";

/// A page on disk whose `<div id="root">` is rewritten on every render.
#[derive(Debug)]
pub struct FileDocument {
    root: FileRoot,
}

#[derive(Debug)]
pub struct FileRoot {
    path: PathBuf,
    head: String,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>, title: &str) -> Self {
        let head: Node = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text(title))
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", TAILWIND_CSS),
            )
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", FONT_AWESOME_CSS),
            )
            .into();

        Self {
            root: FileRoot {
                path: path.into(),
                head: to_html(&head),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.root.path
    }
}

impl RootElement for FileRoot {
    fn set_inner_html(&mut self, html: String) -> Result<()> {
        let page = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">{}<body><div id=\"root\">{}</div></body></html>\n",
            self.head, html
        );
        fs::write(&self.path, page)?;
        tracing::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

impl Document for FileDocument {
    fn root(&mut self) -> Option<&mut dyn RootElement> {
        Some(&mut self.root as &mut dyn RootElement)
    }
}
