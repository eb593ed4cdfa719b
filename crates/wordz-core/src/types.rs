//! Core types for wordz-core: Patent Wordz.
//!
//! This module defines the data structures shared across the workspace: the
//! [`Keyword`] records produced by a keyword source, the [`KeywordResult`]
//! rows carrying both compacted queries, and the [`TruncationMarker`] /
//! [`SearchPlatform`] discriminants that decide how stems are rendered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::query::compact_query;

/// One keyword detected in a patent, together with its synonyms.
///
/// This is the exact shape a keyword source returns for each entry of its
/// `keywords` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Primary technical keyword or concept.
    pub keyword: String,
    /// Synonyms and related terms useful for a prior-art search.
    pub synonyms: Vec<String>,
}

impl Keyword {
    pub fn new<S: Into<String>>(keyword: impl Into<String>, synonyms: impl IntoIterator<Item = S>) -> Self {
        Self {
            keyword: keyword.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    /// The keyword followed by its synonyms, the input to [`compact_query`].
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.keyword.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// A [`Keyword`] with its compacted query for each supported platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub synonyms: Vec<String>,
    /// Query for Orbit (default marker `+`).
    pub orbit_query: String,
    /// Query for Google Patents (default marker `*`).
    pub google_query: String,
}

impl KeywordResult {
    /// Build both platform queries for `keyword` using `markers`.
    pub fn from_keyword(keyword: Keyword, markers: QueryMarkers) -> Self {
        let orbit_query = compact_query(keyword.terms(), markers.orbit);
        let google_query = compact_query(keyword.terms(), markers.google);
        Self {
            keyword: keyword.keyword,
            synonyms: keyword.synonyms,
            orbit_query,
            google_query,
        }
    }

    /// Query for `platform`.
    pub fn query_for(&self, platform: SearchPlatform) -> &str {
        match platform {
            SearchPlatform::Orbit => &self.orbit_query,
            SearchPlatform::GooglePatents => &self.google_query,
        }
    }
}

/// Build one [`KeywordResult`] per keyword, preserving order.
pub fn build_results(keywords: impl IntoIterator<Item = Keyword>, markers: QueryMarkers) -> Vec<KeywordResult> {
    keywords
        .into_iter()
        .map(|keyword| KeywordResult::from_keyword(keyword, markers))
        .collect()
}

/// Wildcard character appended to a stem to signal truncated matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruncationMarker {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "*")]
    Star,
}

impl TruncationMarker {
    pub fn as_char(self) -> char {
        match self {
            TruncationMarker::Plus => '+',
            TruncationMarker::Star => '*',
        }
    }
}

impl std::fmt::Display for TruncationMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Returned when text names neither supported truncation marker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported truncation marker {0:?} (expected `+` or `*`)")]
pub struct ParseMarkerError(pub String);

impl FromStr for TruncationMarker {
    type Err = ParseMarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "plus" => Ok(TruncationMarker::Plus),
            "*" | "star" => Ok(TruncationMarker::Star),
            other => Err(ParseMarkerError(other.to_string())),
        }
    }
}

/// Search engines the generated queries target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPlatform {
    Orbit,
    GooglePatents,
}

impl SearchPlatform {
    /// The marker each platform uses out of the box.
    pub fn default_marker(self) -> TruncationMarker {
        match self {
            SearchPlatform::Orbit => TruncationMarker::Plus,
            SearchPlatform::GooglePatents => TruncationMarker::Star,
        }
    }
}

impl std::fmt::Display for SearchPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPlatform::Orbit => write!(f, "Orbit"),
            SearchPlatform::GooglePatents => write!(f, "Google Patents"),
        }
    }
}

/// The marker pair used when building a [`KeywordResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryMarkers {
    pub orbit: TruncationMarker,
    pub google: TruncationMarker,
}

impl Default for QueryMarkers {
    fn default() -> Self {
        Self {
            orbit: SearchPlatform::Orbit.default_marker(),
            google: SearchPlatform::GooglePatents.default_marker(),
        }
    }
}

/// How a list of [`KeywordResult`]s is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Keyword headings with their synonym lists.
    #[default]
    Cards,
    /// Orbit query per keyword.
    Orbit,
    /// Google Patents query per keyword.
    Google,
    /// Pretty-printed JSON array of results.
    Json,
}

/// Returned when text names no known [`View`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view {0:?} (expected cards, orbit, google or json)")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(View::Cards),
            "orbit" => Ok(View::Orbit),
            "google" => Ok(View::Google),
            "json" => Ok(View::Json),
            _ => Err(ParseViewError(s.to_string())),
        }
    }
}
