//! wordz-core: Patent Wordz core library.
//!
//! This crate holds the query compaction pipeline and the types shared by the
//! keyword sources and the CLI.
//!
//! # Architecture
//!
//! ```text
//! Document ──► KeywordSource ──► [Keyword] ──► compact_query ──► KeywordResult
//!                (wordz-extract)                 (query)
//! ```
//!
//! Everything in this crate is synchronous and free of I/O except
//! [`config::Config::load`].

pub mod config;
pub mod query;
pub mod types;

pub use query::{compact_query, plan_query, Group, QueryPlan};
pub use types::{
    build_results, Keyword, KeywordResult, QueryMarkers, SearchPlatform, TruncationMarker, View,
};
