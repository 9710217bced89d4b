//! Root container capability.
//!
//! Renderers never touch a document directly: they ask for the root
//! container and replace its content wholesale.

pub mod file;

pub use file::FileDocument;

use crate::app::Result;

/// The single element every navigation renders into.
pub trait RootElement {
    /// Replace the element's content with `html`.
    fn set_inner_html(&mut self, html: String) -> Result<()>;
}

pub trait Document {
    /// The root container, or `None` if the document has none.
    fn root(&mut self) -> Option<&mut dyn RootElement>;
}

/// Root container kept in memory.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    html: String,
    writes: usize,
}

impl MemoryRoot {
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of times the content was replaced.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RootElement for MemoryRoot {
    fn set_inner_html(&mut self, html: String) -> Result<()> {
        self.html = html;
        self.writes += 1;
        Ok(())
    }
}

/// In-memory document, optionally missing its root container.
#[derive(Debug)]
pub struct MemoryDocument {
    root: Option<MemoryRoot>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            root: Some(MemoryRoot::default()),
        }
    }

    pub fn without_root() -> Self {
        Self { root: None }
    }

    pub fn root_ref(&self) -> Option<&MemoryRoot> {
        self.root.as_ref()
    }

    /// Current root content, if there is a root.
    pub fn html(&self) -> Option<&str> {
        self.root.as_ref().map(MemoryRoot::html)
    }
}

impl Document for MemoryDocument {
    fn root(&mut self) -> Option<&mut dyn RootElement> {
        self.root.as_mut().map(|r| r as &mut dyn RootElement)
    }
}
