//! wordz-extract: keyword/synonym sources for wordz.
//!
//! A source takes the text of a patent and returns the technical keywords it
//! found, each with synonyms useful for a prior-art search. The compaction of
//! those lists into search queries happens in `wordz-core`; this crate only
//! deals with getting the lists.

pub mod document;
pub mod error;
pub mod gemini;
pub mod response;

pub use document::DocumentText;
pub use error::ExtractError;
pub use gemini::GeminiSource;
pub use response::parse_keywords;

use async_trait::async_trait;
use wordz_core::Keyword;

/// Trait implemented by each keyword/synonym source.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Extract keywords and synonyms from `document`, in the order the source
    /// ranks them.
    async fn extract(&self, document: &DocumentText) -> Result<Vec<Keyword>, ExtractError>;
}
