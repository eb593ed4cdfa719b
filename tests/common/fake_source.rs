//! In-process keyword sources standing in for the remote model.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use wordz::{DocumentText, ExtractError, Keyword, KeywordSource};

/// Returns the same keywords for every document and counts calls.
pub struct StaticSource {
    keywords: Vec<Keyword>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(keywords: Vec<Keyword>) -> Self {
        Self {
            keywords,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeywordSource for StaticSource {
    async fn extract(&self, _document: &DocumentText) -> Result<Vec<Keyword>, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.keywords.clone())
    }
}

/// Always fails with an API error carrying `status`.
pub struct FailingSource {
    pub status: u16,
}

#[async_trait]
impl KeywordSource for FailingSource {
    async fn extract(&self, _document: &DocumentText) -> Result<Vec<Keyword>, ExtractError> {
        Err(ExtractError::Api {
            status: self.status,
            message: "quota exceeded".to_string(),
        })
    }
}
