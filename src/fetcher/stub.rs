//! Canned-response fetcher for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{HnError, Result};
use crate::fetcher::Fetcher;

#[derive(Default)]
pub(crate) struct StubFetcher {
    bodies: Mutex<HashMap<String, String>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(self, url: &str, body: &str) -> Self {
        self.set_body(url, body);
        self
    }

    pub(crate) fn set_body(&self, url: &str, body: &str) {
        self.bodies
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    /// Number of requests made for `url`, including failed ones.
    pub(crate) fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;

        self.bodies
            .lock()
            .unwrap()
            .get(url)
            .map(|b| b.clone().into_bytes())
            .ok_or_else(|| {
                HnError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no stub for {}", url),
                ))
            })
    }
}
