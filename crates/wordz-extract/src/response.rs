//! Parsing of keyword responses.
//!
//! A response is a JSON object with a `keywords` array whose items each carry
//! a `keyword` string and a `synonyms` string array. Anything else is an
//! invalid response.

use serde::Deserialize;
use wordz_core::Keyword;

use crate::error::ExtractError;

#[derive(Debug, Deserialize)]
struct KeywordResponse {
    keywords: Vec<Keyword>,
}

/// Parse a keyword response, keeping the keywords in the order given.
pub fn parse_keywords(json: &str) -> Result<Vec<Keyword>, ExtractError> {
    let response: KeywordResponse =
        serde_json::from_str(json).map_err(|e| ExtractError::InvalidResponse(Some(e)))?;

    let empty = response
        .keywords
        .iter()
        .filter(|k| k.keyword.trim().is_empty() && k.synonyms.iter().all(|s| s.trim().is_empty()))
        .count();
    if empty > 0 {
        tracing::warn!(empty, "response contains keywords with no usable terms");
    }

    tracing::debug!(count = response.keywords.len(), "parsed keyword response");
    Ok(response.keywords)
}
