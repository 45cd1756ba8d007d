use crate::error::ExtractError;
use crate::fetchers::PageFetcher;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves a canned response and counts calls
pub struct StubFetcher {
    response: Result<String, ExtractError>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(ExtractError::Fetch(message.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
