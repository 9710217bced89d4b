//! # hnfeed
//!
//! A hash-routed Hacker News reader that renders HTML into a single root
//! container.
//!
//! ## Architecture
//!
//! ```text
//! hash change → Router → Renderer → Fetcher → View → Document
//!                  ↕
//!               Session
//! ```
//!
//! - [`router`]: parses the URL hash and picks a renderer
//! - [`render`]: list and detail renderers
//! - [`store`]: the session, holding the cached listing and current page
//! - [`view`]: typed render tree and HTML serializer
//! - [`document`]: the root container capability
//!
//! ## Quick Start
//!
//! ```bash
//! # Print page 2 of the list
//! hnfeed render '#/page/2'
//!
//! # Keep index.html in sync with hashes typed on stdin
//! hnfeed browse --out index.html
//! ```

/// Application context and error handling.
pub mod app;

/// Command-line interface using clap.
///
/// - `render [ROUTE]...` - visit routes and print or write the result
/// - `browse --out FILE` - re-render a page file for each hash read from stdin
pub mod cli;

/// Configuration loaded from `~/.config/hnfeed/config.toml`.
pub mod config;

/// Root container abstraction with in-memory and file-backed documents.
pub mod document;

/// API data model: feed items, detail items and comment trees.
pub mod domain;

/// HTTP fetching and JSON decoding.
///
/// - [`Fetcher`](fetcher::Fetcher): async transport trait
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// List and detail renderers writing into the root container.
pub mod render;

/// URL-hash parsing and dispatch.
pub mod router;

/// Per-session state.
pub mod store;

/// Typed views and serialization.
pub mod view;
