//! wordz: Patent Wordz
//!
//! Turns patent text into technical keywords with synonyms, and each keyword
//! group into compact boolean queries for Orbit (`+` truncation) and Google
//! Patents (`*` truncation). This crate re-exports the workspace layers so
//! that integration tests and the binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! DocumentText ──► KeywordSource ──► build_results ──► render
//!   (extract)        (extract)          (core)
//! ```
//!
//! The query compaction itself is pure and synchronous; only the keyword
//! source runs on the `tokio` runtime.

pub mod analyze;
pub mod render;

pub use analyze::analyze;
pub use render::render;

pub use wordz_core::{
    build_results, compact_query, config, plan_query, query, Keyword, KeywordResult, QueryMarkers,
    SearchPlatform, TruncationMarker, View,
};
pub use wordz_extract::{parse_keywords, DocumentText, ExtractError, GeminiSource, KeywordSource};
